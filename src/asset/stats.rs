//! Size statistics for a minify pass.

use std::fmt;

/// Byte sizes before and after minification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifyStats {
    pub original: usize,
    pub minified: usize,
}

impl MinifyStats {
    pub fn new(original: &str, minified: &str) -> Self {
        Self {
            original: original.len(),
            minified: minified.len(),
        }
    }

    /// Bytes saved; zero if minification grew the text.
    pub const fn saved(&self) -> usize {
        self.original.saturating_sub(self.minified)
    }

    /// `(1 - minified / original) * 100`, or 0 for empty input.
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.original == 0 {
            return 0.0;
        }
        (1.0 - self.minified as f64 / self.original as f64) * 100.0
    }
}

impl fmt::Display for MinifyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} bytes, saved {} bytes ({:.1}%)",
            self.original,
            self.minified,
            self.saved(),
            self.percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        let stats = MinifyStats {
            original: 200,
            minified: 150,
        };
        assert_eq!(stats.saved(), 50);
        assert_eq!(format!("{:.1}", stats.percent()), "25.0");
    }

    #[test]
    fn test_percent_one_decimal() {
        let stats = MinifyStats {
            original: 3,
            minified: 2,
        };
        assert_eq!(format!("{:.1}", stats.percent()), "33.3");
    }

    #[test]
    fn test_empty_input() {
        let stats = MinifyStats::new("", "");
        assert_eq!(stats.percent(), 0.0);
        assert_eq!(stats.saved(), 0);
    }

    #[test]
    fn test_display() {
        let stats = MinifyStats {
            original: 1000,
            minified: 640,
        };
        assert_eq!(stats.to_string(), "1000 -> 640 bytes, saved 360 bytes (36.0%)");
    }

    #[test]
    fn test_real_css_reduction() {
        let source = "body  {\n    color :  red ;\n\n}\n";
        let minified = crate::asset::minify::minify_css(source).unwrap();
        let stats = MinifyStats::new(source, &minified);
        assert!(stats.minified <= stats.original);
        let expected = (1.0 - minified.len() as f64 / source.len() as f64) * 100.0;
        assert_eq!(format!("{:.1}", stats.percent()), format!("{expected:.1}"));
    }
}
