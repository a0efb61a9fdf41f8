//! Configuration section definitions.
//!
//! Each module corresponds to a section in `webembed.toml`:
//!
//! | Module    | TOML Section                       | Purpose                            |
//! |-----------|------------------------------------|------------------------------------|
//! | `project` | `[project]`                        | Name and version for provenance    |
//! | `paths`   | `[paths]`                          | Source directory, header, template |
//! | `assets`  | `[assets.*]`                       | Per-asset file names and anchors   |
//! | `tuning`  | `[inject]` `[beautify]` `[minify]` | Output layout                      |

mod assets;
mod paths;
mod project;
mod tuning;

pub use assets::{AssetsConfig, ScriptAsset, StylesheetAsset};
pub use paths::PathsConfig;
pub use project::ProjectConfig;
pub use tuning::{BeautifyConfig, InjectConfig, MinifyConfig};

/// Whether `name` is a plain C++ identifier.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
