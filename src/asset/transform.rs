//! The beautify/minify capability behind extraction and injection.

use std::fmt::Display;

use thiserror::Error;

use super::beautify::{BeautifyStyle, beautify_css, beautify_js};
use super::minify::{minify_css, minify_js};
use super::AssetKind;

/// Failure of a beautify or minify pass.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to parse {kind}: {message}")]
    Parse { kind: AssetKind, message: String },

    #[error("failed to print {kind}: {message}")]
    Print { kind: AssetKind, message: String },
}

impl TransformError {
    pub fn parse(kind: AssetKind, error: impl Display) -> Self {
        Self::Parse {
            kind,
            message: error.to_string(),
        }
    }

    pub fn print(kind: AssetKind, error: impl Display) -> Self {
        Self::Print {
            kind,
            message: error.to_string(),
        }
    }
}

/// Opposing text transforms applied to asset bodies.
///
/// Extraction beautifies, injection minifies. Implementations should be
/// deterministic and `beautify` should be idempotent.
pub trait TextTransformer {
    fn beautify(&self, kind: AssetKind, source: &str) -> Result<String, TransformError>;
    fn minify(&self, kind: AssetKind, source: &str) -> Result<String, TransformError>;
}

/// oxc + lightningcss implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTransformer {
    pub style: BeautifyStyle,
    /// Run the oxc compressor on JavaScript in addition to whitespace removal.
    pub compress_js: bool,
}

impl NativeTransformer {
    pub const fn new(style: BeautifyStyle, compress_js: bool) -> Self {
        Self { style, compress_js }
    }
}

impl TextTransformer for NativeTransformer {
    fn beautify(&self, kind: AssetKind, source: &str) -> Result<String, TransformError> {
        match kind {
            AssetKind::Css => beautify_css(source, self.style),
            AssetKind::Js => beautify_js(source, self.style),
        }
    }

    fn minify(&self, kind: AssetKind, source: &str) -> Result<String, TransformError> {
        match kind {
            AssetKind::Css => minify_css(source),
            AssetKind::Js => minify_js(source, self.compress_js),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_round_trip_css() {
        let t = NativeTransformer::default();
        let source = "body {\n    margin: 0;\n}\n\n.card {\n    padding: 4px;\n}\n";
        let min = t.minify(AssetKind::Css, source).unwrap();
        let pretty = t.beautify(AssetKind::Css, &min).unwrap();
        assert_eq!(t.minify(AssetKind::Css, &pretty).unwrap(), min);
    }

    #[test]
    fn test_native_round_trip_js() {
        let t = NativeTransformer::default();
        let source = "function showTab(name) {\n    document.title = name;\n}\n";
        let min = t.minify(AssetKind::Js, source).unwrap();
        let pretty = t.beautify(AssetKind::Js, &min).unwrap();
        assert_eq!(t.minify(AssetKind::Js, &pretty).unwrap(), min);
    }

    #[test]
    fn test_error_display() {
        let err = TransformError::parse(AssetKind::Css, "unexpected token");
        assert_eq!(err.to_string(), "failed to parse CSS: unexpected token");
    }
}
