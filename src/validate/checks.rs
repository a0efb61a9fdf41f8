//! Pattern-based checks that run alongside the structural scan.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;

/// Markers every template must contain, matched case-insensitively.
static REQUIRED: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("DOCTYPE", r"(?i)<!DOCTYPE\s+html>"),
        ("html tag", r"(?i)<html[^>]*>"),
        ("head tag", r"(?i)<head[^>]*>"),
        ("body tag", r"(?i)<body[^>]*>"),
        ("meta charset", r#"(?i)<meta\s+charset=["']UTF-8["']"#),
        ("meta viewport", r#"(?i)<meta\s+name=["']viewport["']"#),
        ("title", r"(?i)<title>"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).unwrap()))
    .collect()
});

static RE_I18N_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-i18n=["']([^"']+)["']"#).unwrap());

/// Capitalized words directly between two tags, e.g. `>Save Settings<`.
static RE_CAPITALIZED_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)<").unwrap());

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<(\w+)").unwrap());

static RE_INLINE_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\son\w+\s*=").unwrap());

/// Names of required markers absent from `html`.
pub fn missing_required(html: &str) -> Vec<&'static str> {
    REQUIRED
        .iter()
        .filter(|(_, re)| !re.is_match(html))
        .map(|(name, _)| *name)
        .collect()
}

/// Translation attribute coverage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    /// Number of `data-i18n` attributes.
    pub keys: usize,
    pub unique_keys: usize,
    /// Capitalized text nodes that may lack a translation key, in document order.
    pub untranslated: Vec<String>,
}

pub fn check_translations(html: &str) -> Translations {
    let keys: Vec<&str> = RE_I18N_KEY
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();
    let unique_keys = keys.iter().collect::<FxHashSet<_>>().len();

    let untranslated = RE_CAPITALIZED_TEXT
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|text| text.chars().count() > 3)
        .map(str::to_string)
        .collect();

    Translations {
        keys: keys.len(),
        unique_keys,
        untranslated,
    }
}

/// Size and element counts of a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlStats {
    pub bytes: usize,
    pub lines: usize,
    pub tags: usize,
    pub unique_tags: usize,
    pub divs: usize,
    pub buttons: usize,
    pub spans: usize,
    /// `onclick=` style attributes.
    pub inline_handlers: usize,
}

pub fn html_stats(html: &str) -> HtmlStats {
    let tags: Vec<&str> = RE_TAG
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();

    HtmlStats {
        bytes: html.len(),
        lines: html.matches('\n').count() + 1,
        tags: tags.len(),
        unique_tags: tags.iter().collect::<FxHashSet<_>>().len(),
        divs: html.matches("<div").count(),
        buttons: html.matches("<button").count(),
        spans: html.matches("<span").count(),
        inline_handlers: RE_INLINE_HANDLER.find_iter(html).count(),
    }
}
