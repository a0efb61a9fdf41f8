//! Region descriptors and anchor matching.

use std::fmt;

use super::EmbedError;
use crate::asset::AssetKind;

// ============================================================================
// Asset roles
// ============================================================================

/// Which embedded asset a region holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetRole {
    /// The `<style>` block appended inside the page generator.
    Stylesheet,
    /// Full-feature script constant.
    Script,
    /// Reduced-feature script constant for memory-constrained boards.
    ScriptLite,
}

impl AssetRole {
    /// All roles, in processing order.
    pub const ALL: [Self; 3] = [Self::Stylesheet, Self::Script, Self::ScriptLite];

    pub const fn kind(self) -> AssetKind {
        match self {
            Self::Stylesheet => AssetKind::Css,
            Self::Script | Self::ScriptLite => AssetKind::Js,
        }
    }

    /// Short label used in console output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stylesheet => "CSS",
            Self::Script => "JavaScript (Full)",
            Self::ScriptLite => "JavaScript (Lite)",
        }
    }

    /// Title line of the provenance comment.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Stylesheet => "Main Stylesheet",
            Self::Script => "Main Application JavaScript",
            Self::ScriptLite => "Lite Application JavaScript",
        }
    }

    /// Description line of the provenance comment.
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Stylesheet => {
                "This file contains the readable, maintainable CSS for the web interface."
            }
            Self::Script => {
                "This file contains the readable, maintainable JavaScript for the web interface."
            }
            Self::ScriptLite => {
                "This is a simplified version for boards with limited memory."
            }
        }
    }

    /// Whether the injector refuses to run without this source file.
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::Stylesheet)
    }
}

impl fmt::Display for AssetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// How an asset body is stored between its anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoding {
    /// Escaped string fragments appended to `variable`, one statement per line.
    EscapedLiteral { variable: String },
    /// Verbatim text inside a raw string literal.
    RawBlock,
}

/// Declarative description of one embedded region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionDescriptor {
    pub role: AssetRole,
    pub start: String,
    pub end: String,
    pub encoding: Encoding,
}

impl RegionDescriptor {
    /// Stylesheet appended to `variable` between `<style>` and `</style>` statements.
    pub fn stylesheet(variable: &str) -> Self {
        Self {
            role: AssetRole::Stylesheet,
            start: format!(r#"{variable} += "<style>";"#),
            end: format!(r#"{variable} += "</style>";"#),
            encoding: Encoding::EscapedLiteral {
                variable: variable.to_string(),
            },
        }
    }

    /// Script stored in a `PROGMEM` raw string constant.
    pub fn raw_constant(role: AssetRole, constant: &str, delimiter: &str) -> Self {
        Self {
            role,
            start: format!(r#"static const char PROGMEM {constant}[] = R"{delimiter}("#),
            end: format!(r#"){delimiter}";"#),
            encoding: Encoding::RawBlock,
        }
    }

    /// Locate this region in `header`.
    ///
    /// The start anchor must be unique; the end anchor is the first
    /// occurrence after it.
    pub fn locate(&self, header: &str) -> Result<Region, EmbedError> {
        let mut starts = header.match_indices(self.start.as_str()).map(|(i, _)| i);
        let anchor = starts.next().ok_or_else(|| self.not_found(&self.start))?;

        let extra = starts.count();
        if extra > 0 {
            return Err(EmbedError::DuplicateAnchor {
                role: self.role,
                anchor: self.start.clone(),
                count: extra + 1,
            });
        }

        let start = anchor + self.start.len();
        let end = header[start..]
            .find(self.end.as_str())
            .map(|rel| start + rel)
            .ok_or_else(|| self.not_found(&self.end))?;

        Ok(Region { anchor, start, end })
    }

    fn not_found(&self, anchor: &str) -> EmbedError {
        EmbedError::RegionNotFound {
            role: self.role,
            anchor: anchor.to_string(),
        }
    }
}

// ============================================================================
// Located region
// ============================================================================

/// Byte offsets of a located region.
///
/// `start..end` is the interior between the anchors; both anchors stay
/// outside it and are never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Offset of the start anchor.
    pub anchor: usize,
    /// First byte after the start anchor.
    pub start: usize,
    /// First byte of the end anchor.
    pub end: usize,
}

impl Region {
    pub fn interior<'a>(&self, header: &'a str) -> &'a str {
        &header[self.start..self.end]
    }

    /// 1-based line number of the interior's first line.
    pub fn first_line(&self, header: &str) -> usize {
        header[..self.start].matches('\n').count() + 1
    }

    /// Line terminator used by the line holding the start anchor.
    pub fn line_ending(&self, header: &str) -> &'static str {
        let line = &header[self.anchor..];
        match line.find('\n') {
            Some(i) if line[..i].ends_with('\r') => "\r\n",
            _ => "\n",
        }
    }

    /// Leading whitespace of the line holding the start anchor.
    ///
    /// Falls back to two spaces when the anchor does not start its line.
    pub fn indent<'a>(&self, header: &'a str) -> &'a str {
        let line_start = header[..self.anchor].rfind('\n').map_or(0, |i| i + 1);
        let lead = &header[line_start..self.anchor];
        if lead.chars().all(|c| c == ' ' || c == '\t') {
            lead
        } else {
            "  "
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
