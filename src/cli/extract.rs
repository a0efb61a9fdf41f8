//! `extract` command: header regions to editable source files.

use std::fs;

use anyhow::{Context, Result, bail};

use crate::asset::TextTransformer;
use crate::config::ToolConfig;
use crate::embed::{AssetRole, extract};
use crate::utils::date::DateTimeUtc;
use crate::utils::path::write_file;
use crate::utils::plural_count;
use crate::{debug, log};

/// Extract every configured asset from the header.
///
/// A region that is missing, ambiguous or fails to beautify is reported and
/// skipped. The command fails when the header is missing or when nothing at
/// all could be extracted. Returns the roles that were written.
pub fn run_extract(
    config: &ToolConfig,
    transformer: &dyn TextTransformer,
    extracted_at: Option<DateTimeUtc>,
) -> Result<Vec<AssetRole>> {
    let header_path = config.header_path();
    let header_display = config.display(&header_path);
    if !header_path.is_file() {
        bail!("{header_display} not found");
    }

    log!("extract"; "reading {}", header_display);
    let header = fs::read_to_string(&header_path)
        .with_context(|| format!("failed to read {header_display}"))?;

    let provenance = config.provenance(extracted_at);
    let mut extracted = Vec::new();

    for descriptor in config.descriptors() {
        let role = descriptor.role;

        let body = match extract(&header, &descriptor) {
            Ok(body) => body,
            Err(e) => {
                log!("warning"; "{}: {}", role, e);
                continue;
            }
        };
        debug!("extract"; "{}: {} embedded bytes", role, body.len());

        let pretty = match transformer.beautify(role.kind(), &body) {
            Ok(pretty) => pretty,
            Err(e) => {
                log!("error"; "{}: {}", role, e);
                continue;
            }
        };

        let path = config.asset_path(role);
        let display = config.display(&path);
        let content = provenance.wrap(role, &pretty);
        write_file(&path, &content).with_context(|| format!("failed to write {display}"))?;

        log!("extract"; "{} -> {} ({} bytes)", role, display, content.len());
        extracted.push(role);
    }

    if extracted.is_empty() {
        bail!("no embedded assets could be extracted from {header_display}");
    }

    log!("extract"; "extracted {}", plural_count(extracted.len(), "asset"));
    log!("extract"; "edit the files in {}, then run `{}`", config.display(&config.sources_dir()), provenance.command);
    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::{HEADER, StubTransformer, write_header};
    use crate::config::test_config_at;
    use tempfile::TempDir;

    #[test]
    fn test_extract_all_assets() {
        let dir = TempDir::new().unwrap();
        write_header(dir.path(), HEADER);
        let config = test_config_at(dir.path());
        let stamp = DateTimeUtc::new(2026, 1, 2, 3, 4, 5);

        let roles = run_extract(&config, &StubTransformer, Some(stamp)).unwrap();
        assert_eq!(roles, AssetRole::ALL);

        let css = fs::read_to_string(dir.path().join("web_src/styles.css")).unwrap();
        assert!(css.starts_with("/**\n * ESP32 Diagnostic - Main Stylesheet\n"));
        assert!(css.contains(" * Extracted: 2026-01-02T03:04:05Z\n"));
        assert!(css.ends_with(" */\n\nbody{margin:0;}.q::before{content:\"\\201C\";}\n"));

        let js = fs::read_to_string(dir.path().join("web_src/app.js")).unwrap();
        assert!(js.ends_with("function full(){}\n"));
        let lite = fs::read_to_string(dir.path().join("web_src/app-lite.js")).unwrap();
        assert!(lite.ends_with("function lite(){}\n"));
    }

    #[test]
    fn test_extract_skips_missing_region() {
        let dir = TempDir::new().unwrap();
        let header = HEADER.replace("DIAGNOSTIC_JS_STATIC_LITE", "OTHER_JS");
        write_header(dir.path(), &header);
        let config = test_config_at(dir.path());

        let roles = run_extract(&config, &StubTransformer, None).unwrap();
        assert_eq!(roles, [AssetRole::Stylesheet, AssetRole::Script]);
        assert!(!dir.path().join("web_src/app-lite.js").exists());
    }

    #[test]
    fn test_extract_skips_beautify_failure() {
        let dir = TempDir::new().unwrap();
        let header = HEADER.replace("function full(){}", "!fail");
        write_header(dir.path(), &header);
        let config = test_config_at(dir.path());

        let roles = run_extract(&config, &StubTransformer, None).unwrap();
        assert!(!roles.contains(&AssetRole::Script));
        assert!(!dir.path().join("web_src/app.js").exists());
    }

    #[test]
    fn test_extract_missing_header() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        let err = run_extract(&config, &StubTransformer, None).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(!dir.path().join("web_src").exists());
    }

    #[test]
    fn test_extract_nothing_found() {
        let dir = TempDir::new().unwrap();
        write_header(dir.path(), "#pragma once\n");
        let config = test_config_at(dir.path());
        assert!(run_extract(&config, &StubTransformer, None).is_err());
    }
}
