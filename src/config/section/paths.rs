//! `[paths]` section configuration.
//!
//! All paths are relative to the project root.
//!
//! ```toml
//! [paths]
//! sources = "web_src"                     # Editable asset sources
//! header = "include/web_interface.h"      # Generated C++ header
//! template = "web_src/template.html"      # Reference HTML for `validate`
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// File locations used by every command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub sources: PathBuf,
    pub header: PathBuf,
    pub template: PathBuf,
}

impl PathsConfig {
    pub const SOURCES: FieldPath = FieldPath::new("paths.sources");
    pub const HEADER: FieldPath = FieldPath::new("paths.header");
    pub const TEMPLATE: FieldPath = FieldPath::new("paths.template");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [
            (Self::SOURCES, &self.sources),
            (Self::HEADER, &self.header),
            (Self::TEMPLATE, &self.template),
        ] {
            if path.as_os_str().is_empty() {
                diag.error(field, "path must not be empty");
            }
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: "web_src".into(),
            header: "include/web_interface.h".into(),
            template: "web_src/template.html".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_paths_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.paths.sources, PathBuf::from("web_src"));
        assert_eq!(config.paths.header, PathBuf::from("include/web_interface.h"));
        assert_eq!(config.paths.template, PathBuf::from("web_src/template.html"));
    }

    #[test]
    fn test_paths_empty_rejected() {
        let config = test_parse_config("[paths]\nheader = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.paths.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, PathsConfig::HEADER);
    }
}
