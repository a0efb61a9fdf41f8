//! Template report formatting.

use owo_colors::OwoColorize;

use crate::log;
use crate::utils::{plural_count, plural_s};
use crate::validate::TemplateReport;

/// Untranslated text candidates listed before eliding the rest.
const SHOW_UNTRANSLATED: usize = 5;
/// Warnings listed before eliding the rest.
const SHOW_WARNINGS: usize = 10;

/// Print the full report: informational output first, then problems.
pub fn print(report: &TemplateReport) {
    print_translations(report);
    print_stats(report);

    let structure = &report.structure;
    let mut errors: Vec<String> = structure.errors.iter().map(ToString::to_string).collect();
    if !structure.unclosed.is_empty() {
        errors.push(format!("Unclosed tags: {}", structure.unclosed.join(", ")));
    }
    let missing: Vec<String> = report.missing.iter().map(ToString::to_string).collect();
    let warnings: Vec<String> = structure.warnings.iter().map(ToString::to_string).collect();

    print_section("missing required elements", &missing, usize::MAX);
    print_section("errors", &errors, usize::MAX);
    print_section("warnings", &warnings, SHOW_WARNINGS);
}

fn print_translations(report: &TemplateReport) {
    let t = &report.translations;
    log!(
        "validate";
        "{} ({} unique)",
        plural_count(t.keys, "translation key"),
        t.unique_keys
    );

    if t.untranslated.is_empty() {
        return;
    }
    log!(
        "validate";
        "{} possibly untranslated:",
        plural_count(t.untranslated.len(), "text")
    );
    for text in t.untranslated.iter().take(SHOW_UNTRANSLATED) {
        eprintln!("- {text}");
    }
    if t.untranslated.len() > SHOW_UNTRANSLATED {
        eprintln!("... and {} more", t.untranslated.len() - SHOW_UNTRANSLATED);
    }
}

fn print_stats(report: &TemplateReport) {
    let s = &report.stats;
    log!(
        "validate";
        "{} bytes, {}, {} ({} unique)",
        s.bytes,
        plural_count(s.lines, "line"),
        plural_count(s.tags, "tag"),
        s.unique_tags
    );
    log!(
        "validate";
        "<div>: {}, <button>: {}, <span>: {}",
        s.divs,
        s.buttons,
        s.spans
    );
    if s.inline_handlers > 0 {
        log!(
            "validate";
            "{} found",
            plural_count(s.inline_handlers, "inline event handler")
        );
    }
}

/// Print a titled list of problems, eliding entries past `limit`.
fn print_section(name: &str, items: &[String], limit: usize) {
    if items.is_empty() {
        return;
    }
    eprintln!();
    eprintln!("{} {}", name.red().bold(), format!("({})", items.len()).dimmed());
    for item in items.iter().take(limit) {
        eprintln!("{} {}", "→".red(), item);
    }
    if items.len() > limit {
        eprintln!("... and {} more", items.len() - limit);
    }
}

/// One-line count of the problems that fail validation.
pub fn summary(report: &TemplateReport) -> String {
    let errors = report.structure.errors.len();
    let unclosed = report.structure.unclosed.len();
    let missing = report.missing.len();
    format!(
        "{errors} error{}, {unclosed} unclosed tag{}, {missing} missing element{}",
        plural_s(errors),
        plural_s(unclosed),
        plural_s(missing)
    )
}
