//! HTML template validation.
//!
//! Read-only analysis of the reference template:
//!
//! - [`token`]: tokenizer
//! - [`machine`]: tag-stack state machine (nesting, duplicate IDs)
//! - [`checks`]: required markers, translation coverage, statistics
//!
//! Only the structural scan and required markers decide validity;
//! translation and statistics output is informational.

mod checks;
mod machine;
mod token;

pub use checks::{HtmlStats, Translations};
pub use machine::Structure;

use checks::{check_translations, html_stats, missing_required};
use machine::check_structure;

/// Everything learned about one template.
#[derive(Debug, Clone)]
pub struct TemplateReport {
    pub structure: Structure,
    pub missing: Vec<&'static str>,
    pub translations: Translations,
    pub stats: HtmlStats,
}

impl TemplateReport {
    pub fn analyze(html: &str) -> Self {
        Self {
            structure: check_structure(html),
            missing: missing_required(html),
            translations: check_translations(html),
            stats: html_stats(html),
        }
    }

    /// No structural errors, no unclosed tags, no missing markers.
    pub fn is_valid(&self) -> bool {
        self.structure.is_ok() && self.missing.is_empty()
    }
}
