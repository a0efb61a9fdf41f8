//! Asset kind definitions.

use std::fmt;
use std::path::Path;

/// Language of an embedded web asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Stylesheet.
    Css,
    /// JavaScript.
    Js,
}

impl AssetKind {
    /// Detect kind from a file extension (`.css`, `.js`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "css" => Some(Self::Css),
            "js" | "mjs" | "cjs" => Some(Self::Js),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "CSS",
            Self::Js => "JavaScript",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
