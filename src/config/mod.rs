//! Tool configuration management for `webembed.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── assets     # [assets.stylesheet], [assets.script], [assets.script_lite]
//! │   ├── paths      # [paths]
//! │   ├── project    # [project]
//! │   └── tuning     # [inject], [beautify], [minify]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ToolConfig (this file)
//! ```
//!
//! The config file is optional: every field defaults to the layout of the
//! reference firmware project, so a bare checkout works without one.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    AssetsConfig, BeautifyConfig, InjectConfig, MinifyConfig, PathsConfig, ProjectConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::asset::{BeautifyStyle, Provenance};
use crate::cli::Cli;
use crate::embed::{AssetRole, RegionDescriptor};
use crate::log;
use crate::utils::date::DateTimeUtc;
use crate::utils::path::{normalize_path, relative_display};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// File searched for when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "webembed.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing webembed.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Path of the loaded config file, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root all configured paths are relative to (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub inject: InjectConfig,

    #[serde(default)]
    pub beautify: BeautifyConfig,

    #[serde(default)]
    pub minify: MinifyConfig,
}

impl ToolConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Without `--config`, searches upward from cwd for `webembed.toml`.
    /// The project root is `--root`, else the config file's directory,
    /// else cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::resolve(&cwd, cli.config.as_deref(), cli.root.as_deref())
    }

    /// Resolve, parse and validate configuration relative to `cwd`.
    fn resolve(cwd: &Path, config: Option<&Path>, root: Option<&Path>) -> Result<Self> {
        let config_path = match config {
            // An explicit path must exist: reading it reports the IO error
            Some(path) => Some(cwd.join(path)),
            None => find_config_file(cwd, Path::new(CONFIG_FILE_NAME)),
        };

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        let root = match (root, &config_path) {
            (Some(root), _) => cwd.join(root),
            (None, Some(path)) => path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf),
            (None, None) => cwd.to_path_buf(),
        };
        config.root = normalize_path(&root);
        config.config_path = config_path.map(|p| normalize_path(&p));

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // resolved paths
    // ========================================================================

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Render `path` relative to the root for console output.
    pub fn display(&self, path: &Path) -> String {
        relative_display(path, &self.root)
    }

    pub fn header_path(&self) -> PathBuf {
        self.root_join(&self.paths.header)
    }

    pub fn sources_dir(&self) -> PathBuf {
        self.root_join(&self.paths.sources)
    }

    pub fn template_path(&self) -> PathBuf {
        self.root_join(&self.paths.template)
    }

    /// Editable source file of `role`.
    pub fn asset_path(&self, role: AssetRole) -> PathBuf {
        self.sources_dir().join(self.assets.file(role))
    }

    /// File name of the header, as shown in provenance comments.
    pub fn header_name(&self) -> String {
        self.paths
            .header
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.paths.header.to_string_lossy().into_owned())
    }

    // ========================================================================
    // derived settings
    // ========================================================================

    /// Region descriptor table, in processing order.
    pub fn descriptors(&self) -> Vec<RegionDescriptor> {
        AssetRole::ALL
            .into_iter()
            .map(|role| self.assets.descriptor(role))
            .collect()
    }

    pub const fn beautify_style(&self) -> BeautifyStyle {
        self.beautify.style()
    }

    /// Provenance for files extracted at `extracted_at`.
    pub fn provenance(&self, extracted_at: Option<DateTimeUtc>) -> Provenance {
        Provenance {
            project: self.project.name.clone(),
            version: self.project.version.clone(),
            header: self.header_name(),
            command: format!("{} minify", env!("CARGO_PKG_NAME")),
            extracted_at,
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.paths.validate(&mut diag);
        self.assets.validate(&mut diag);
        self.inject.validate(&mut diag);
        self.beautify.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ToolConfig {
    let (parsed, ignored) = ToolConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Default config rooted at `root`.
#[cfg(test)]
pub fn test_config_at(root: &Path) -> ToolConfig {
    ToolConfig {
        root: root.to_path_buf(),
        ..ToolConfig::default()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_toml() {
        let result = ToolConfig::parse_with_ignored("[paths\nheader = \"x.h\"");
        let err = result.unwrap_err();
        assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::Toml(_))));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[paths]\nheader = \"a.h\"\nheadr = \"typo\"\n[unknown_section]\nfield = 1";
        let (config, ignored) = ToolConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.paths.header, PathBuf::from("a.h"));
        assert!(ignored.iter().any(|f| f.contains("headr")));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = ToolConfig::parse_with_ignored("[project]\nname = \"X\"").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_resolved_paths() {
        let config = test_config_at(Path::new("/fw"));
        assert_eq!(config.header_path(), PathBuf::from("/fw/include/web_interface.h"));
        assert_eq!(
            config.asset_path(AssetRole::ScriptLite),
            PathBuf::from("/fw/web_src/app-lite.js")
        );
        assert_eq!(config.template_path(), PathBuf::from("/fw/web_src/template.html"));
        assert_eq!(config.header_name(), "web_interface.h");
        assert_eq!(config.display(&config.header_path()), "include/web_interface.h");
    }

    #[test]
    fn test_descriptor_table_order() {
        let roles: Vec<_> = ToolConfig::default()
            .descriptors()
            .into_iter()
            .map(|d| d.role)
            .collect();
        assert_eq!(roles, AssetRole::ALL);
    }

    #[test]
    fn test_provenance_from_config() {
        let config = test_parse_config("[project]\nname = \"Board\"\nversion = \"1.2.3\"");
        let provenance = config.provenance(None);
        assert_eq!(provenance.project, "Board");
        assert_eq!(provenance.version, "1.2.3");
        assert_eq!(provenance.header, "web_interface.h");
        assert_eq!(provenance.command, "webembed minify");
    }

    #[test]
    fn test_resolve_without_config_uses_cwd() {
        let dir = TempDir::new().unwrap();
        let config = ToolConfig::resolve(dir.path(), None, None).unwrap();
        assert!(config.config_path.is_none());
        assert_eq!(config.root, normalize_path(dir.path()));
    }

    #[test]
    fn test_resolve_config_sets_root() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("web_src");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[inject]\nchunk_width = 64\n").unwrap();

        let config = ToolConfig::resolve(&nested, None, None).unwrap();
        assert_eq!(config.root, normalize_path(dir.path()));
        assert_eq!(config.inject.chunk_width, 64);
    }

    #[test]
    fn test_resolve_root_override() {
        let dir = TempDir::new().unwrap();
        let other = dir.path().join("other");
        fs::create_dir_all(&other).unwrap();
        let config = ToolConfig::resolve(dir.path(), None, Some(Path::new("other"))).unwrap();
        assert_eq!(config.root, normalize_path(&other));
    }

    #[test]
    fn test_resolve_missing_explicit_config() {
        let dir = TempDir::new().unwrap();
        let err = ToolConfig::resolve(dir.path(), Some(Path::new("missing.toml")), None)
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::Io(..))));
        assert!(err.to_string().contains("cannot read config file"));
    }

    #[test]
    fn test_resolve_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[inject]\nchunk_width = 0\n").unwrap();

        let err = ToolConfig::resolve(dir.path(), None, None).unwrap_err();
        let diag = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(diag, ConfigError::Diagnostics(d) if d.len() == 1));
    }
}
