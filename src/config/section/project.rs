//! `[project]` section configuration.
//!
//! ```toml
//! [project]
//! name = "ESP32 Diagnostic"   # Title line of extracted files
//! version = "3.31.0"          # Firmware version shown next to it
//! ```

use serde::{Deserialize, Serialize};

/// Project metadata written into provenance comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
    pub version: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "ESP32 Diagnostic".into(),
            version: "3.31.0".into(),
        }
    }
}
