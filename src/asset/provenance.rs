//! Provenance comment prepended to extracted source files.

use crate::embed::AssetRole;
use crate::utils::date::DateTimeUtc;

/// Where an extracted file came from and how to push edits back.
#[derive(Debug, Clone)]
pub struct Provenance {
    /// Project name shown in the title line.
    pub project: String,
    /// Semantic version of the firmware the header belongs to.
    pub version: String,
    /// File name of the generated header.
    pub header: String,
    /// Command that re-injects edited sources.
    pub command: String,
    /// Extraction time, if stamped.
    pub extracted_at: Option<DateTimeUtc>,
}

impl Provenance {
    /// Render the comment block for `role`, followed by a blank line.
    pub fn comment(&self, role: AssetRole) -> String {
        let mut lines = vec![
            format!("{} - {}", self.project, role.title()),
            format!("Version: {}", self.version),
        ];
        if let Some(at) = self.extracted_at {
            lines.push(format!("Extracted: {}", at.to_rfc3339()));
        }
        lines.extend([
            String::new(),
            role.summary().to_string(),
            "It is automatically minified during build and embedded into the firmware.".to_string(),
            String::new(),
            format!("DO NOT EDIT {} directly - edit this file instead!", self.header),
            String::new(),
            format!("To rebuild {} after making changes:", self.header),
            format!("  {}", self.command),
        ]);

        let mut out = String::from("/**\n");
        for line in lines {
            if line.is_empty() {
                out.push_str(" *\n");
            } else {
                out.push_str(" * ");
                out.push_str(&line);
                out.push('\n');
            }
        }
        out.push_str(" */\n\n");
        out
    }

    /// Prepend the comment block to a beautified body.
    pub fn wrap(&self, role: AssetRole, body: &str) -> String {
        let mut out = self.comment(role);
        out.push_str(body);
        out
    }
}
