//! `[inject]`, `[beautify]` and `[minify]` section configuration.
//!
//! ```toml
//! [inject]
//! chunk_width = 200           # Soft width of each `html += "...";` line
//!
//! [beautify]
//! indent_size = 4             # Spaces per level in extracted sources
//! max_preserve_newlines = 2   # Longest run of blank lines kept
//!
//! [minify]
//! compress = false            # Run the JS compressor (names are never mangled)
//! ```

use serde::{Deserialize, Serialize};

use crate::asset::BeautifyStyle;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Header layout used when re-injecting the stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectConfig {
    /// Minimum characters per literal before it may be cut at `;` or `}`.
    pub chunk_width: usize,
}

impl InjectConfig {
    pub const CHUNK_WIDTH: FieldPath = FieldPath::new("inject.chunk_width");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.chunk_width == 0 {
            diag.error(Self::CHUNK_WIDTH, "must be greater than zero");
        }
    }
}

impl Default for InjectConfig {
    fn default() -> Self {
        Self { chunk_width: 200 }
    }
}

/// Style of extracted, human-editable sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BeautifyConfig {
    pub indent_size: usize,
    pub max_preserve_newlines: usize,
}

impl BeautifyConfig {
    pub const INDENT_SIZE: FieldPath = FieldPath::new("beautify.indent_size");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(1..=16).contains(&self.indent_size) {
            diag.error(
                Self::INDENT_SIZE,
                format!("{} is outside 1..=16", self.indent_size),
            );
        }
    }

    pub const fn style(&self) -> BeautifyStyle {
        BeautifyStyle {
            indent_size: self.indent_size,
            max_preserve_newlines: self.max_preserve_newlines,
        }
    }
}

impl Default for BeautifyConfig {
    fn default() -> Self {
        let style = BeautifyStyle::default();
        Self {
            indent_size: style.indent_size,
            max_preserve_newlines: style.max_preserve_newlines,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyConfig {
    pub compress: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_tuning_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.inject.chunk_width, 200);
        assert_eq!(config.beautify.style(), BeautifyStyle::default());
        assert!(!config.minify.compress);
    }

    #[test]
    fn test_tuning_override() {
        let config = test_parse_config(
            "[inject]\nchunk_width = 80\n[beautify]\nindent_size = 2\n[minify]\ncompress = true",
        );
        assert_eq!(config.inject.chunk_width, 80);
        assert_eq!(config.beautify.style().indent_size, 2);
        assert_eq!(config.beautify.style().max_preserve_newlines, 2);
        assert!(config.minify.compress);
    }

    #[test]
    fn test_tuning_validation() {
        let config = test_parse_config("[inject]\nchunk_width = 0\n[beautify]\nindent_size = 40");
        let mut diag = ConfigDiagnostics::new();
        config.inject.validate(&mut diag);
        config.beautify.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, [InjectConfig::CHUNK_WIDTH, BeautifyConfig::INDENT_SIZE]);
    }
}
