//! `[assets.*]` section configuration.
//!
//! Describes where each embedded asset lives in the header and which
//! source file it round-trips to. File names are relative to
//! `paths.sources`.
//!
//! # Example
//!
//! ```toml
//! [assets.stylesheet]
//! file = "styles.css"
//! variable = "html"                       # html += "<style>"; ... html += "</style>";
//!
//! [assets.script]
//! file = "app.js"
//! constant = "DIAGNOSTIC_JS_STATIC"       # static const char PROGMEM NAME[] = R"JS(...)JS";
//! delimiter = "JS"
//!
//! [assets.script_lite]
//! file = "app-lite.js"
//! constant = "DIAGNOSTIC_JS_STATIC_LITE"
//! ```
//!
//! Script keys left out fall back to the defaults of their own table, so a
//! partial `[assets.script_lite]` never inherits the full script's constant.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::is_identifier;
use crate::asset::AssetKind;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::embed::{AssetRole, RegionDescriptor};

/// Longest raw string delimiter C++ accepts.
const MAX_DELIMITER_LEN: usize = 16;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub stylesheet: StylesheetAsset,
    pub script: ScriptAsset,
    pub script_lite: ScriptAsset,
}

/// Stylesheet appended to a `String` inside the page generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesheetAsset {
    pub file: PathBuf,
    /// Name of the `String` the `<style>` block is appended to.
    pub variable: String,
}

impl Default for StylesheetAsset {
    fn default() -> Self {
        Self {
            file: "styles.css".into(),
            variable: "html".into(),
        }
    }
}

/// Script stored as a `PROGMEM` raw string constant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptAsset {
    pub file: Option<PathBuf>,
    pub constant: Option<String>,
    pub delimiter: Option<String>,
}

/// Built-in values for one script table.
struct ScriptDefaults {
    file: &'static str,
    constant: &'static str,
    delimiter: &'static str,
}

const SCRIPT_DEFAULTS: ScriptDefaults = ScriptDefaults {
    file: "app.js",
    constant: "DIAGNOSTIC_JS_STATIC",
    delimiter: "JS",
};

const SCRIPT_LITE_DEFAULTS: ScriptDefaults = ScriptDefaults {
    file: "app-lite.js",
    constant: "DIAGNOSTIC_JS_STATIC_LITE",
    delimiter: "JS",
};

/// Field paths for one script table.
struct ScriptFields {
    file: FieldPath,
    constant: FieldPath,
    delimiter: FieldPath,
}

impl AssetsConfig {
    pub const STYLESHEET_FILE: FieldPath = FieldPath::new("assets.stylesheet.file");
    pub const STYLESHEET_VARIABLE: FieldPath = FieldPath::new("assets.stylesheet.variable");

    const SCRIPT: ScriptFields = ScriptFields {
        file: FieldPath::new("assets.script.file"),
        constant: FieldPath::new("assets.script.constant"),
        delimiter: FieldPath::new("assets.script.delimiter"),
    };

    const SCRIPT_LITE: ScriptFields = ScriptFields {
        file: FieldPath::new("assets.script_lite.file"),
        constant: FieldPath::new("assets.script_lite.constant"),
        delimiter: FieldPath::new("assets.script_lite.delimiter"),
    };

    /// Source file name for `role`, relative to the sources directory.
    pub fn file(&self, role: AssetRole) -> &Path {
        match role {
            AssetRole::Stylesheet => &self.stylesheet.file,
            AssetRole::Script => self.script.file(&SCRIPT_DEFAULTS),
            AssetRole::ScriptLite => self.script_lite.file(&SCRIPT_LITE_DEFAULTS),
        }
    }

    /// Region descriptor for `role`.
    pub fn descriptor(&self, role: AssetRole) -> RegionDescriptor {
        match role {
            AssetRole::Stylesheet => RegionDescriptor::stylesheet(&self.stylesheet.variable),
            AssetRole::Script => self.script.descriptor(role, &SCRIPT_DEFAULTS),
            AssetRole::ScriptLite => self.script_lite.descriptor(role, &SCRIPT_LITE_DEFAULTS),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_file(&self.stylesheet.file, AssetKind::Css, Self::STYLESHEET_FILE, diag);
        if !is_identifier(&self.stylesheet.variable) {
            diag.error_with_hint(
                Self::STYLESHEET_VARIABLE,
                format!("`{}` is not a valid C++ identifier", self.stylesheet.variable),
                "use letters, digits and `_`, not starting with a digit",
            );
        }

        self.script.validate(&SCRIPT_DEFAULTS, &Self::SCRIPT, diag);
        self.script_lite
            .validate(&SCRIPT_LITE_DEFAULTS, &Self::SCRIPT_LITE, diag);

        let full = self.script.constant(&SCRIPT_DEFAULTS);
        if full == self.script_lite.constant(&SCRIPT_LITE_DEFAULTS) {
            diag.error(
                Self::SCRIPT_LITE.constant,
                format!("`{full}` is already used by `assets.script`"),
            );
        }
        if self.script.file(&SCRIPT_DEFAULTS) == self.script_lite.file(&SCRIPT_LITE_DEFAULTS) {
            diag.error(
                Self::SCRIPT_LITE.file,
                "full and lite scripts must use different files",
            );
        }
    }
}

impl ScriptAsset {
    fn file<'a>(&'a self, defaults: &ScriptDefaults) -> &'a Path {
        self.file
            .as_deref()
            .unwrap_or_else(|| Path::new(defaults.file))
    }

    fn constant<'a>(&'a self, defaults: &ScriptDefaults) -> &'a str {
        self.constant.as_deref().unwrap_or(defaults.constant)
    }

    fn delimiter<'a>(&'a self, defaults: &ScriptDefaults) -> &'a str {
        self.delimiter.as_deref().unwrap_or(defaults.delimiter)
    }

    fn descriptor(&self, role: AssetRole, defaults: &ScriptDefaults) -> RegionDescriptor {
        RegionDescriptor::raw_constant(role, self.constant(defaults), self.delimiter(defaults))
    }

    fn validate(&self, defaults: &ScriptDefaults, fields: &ScriptFields, diag: &mut ConfigDiagnostics) {
        check_file(self.file(defaults), AssetKind::Js, fields.file, diag);

        let constant = self.constant(defaults);
        if !is_identifier(constant) {
            diag.error_with_hint(
                fields.constant,
                format!("`{constant}` is not a valid C++ identifier"),
                "use letters, digits and `_`, not starting with a digit",
            );
        }

        let delimiter = self.delimiter(defaults);
        let bad_char = delimiter
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '\\' | '"'));
        if delimiter.len() > MAX_DELIMITER_LEN || bad_char {
            diag.error_with_hint(
                fields.delimiter,
                format!("`{delimiter}` is not a valid raw string delimiter"),
                "at most 16 characters, no spaces, parentheses, quotes or backslashes",
            );
        }
    }
}

/// Require a non-empty file name whose extension matches `kind`.
fn check_file(file: &Path, kind: AssetKind, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if file.as_os_str().is_empty() {
        diag.error(field, "file name must not be empty");
        return;
    }
    if AssetKind::from_path(file) != Some(kind) {
        diag.error(
            field,
            format!("`{}` is not a {kind} file", file.display()),
        );
    }
}
