//! `minify` command: edited sources back into the header.

use std::fs;

use anyhow::{Context, Result, bail};

use crate::asset::{MinifyStats, TextTransformer};
use crate::config::ToolConfig;
use crate::embed::{AssetRole, inject};
use crate::utils::path::write_file;
use crate::utils::plural_count;
use crate::{debug, log};

/// What a minify run did.
#[derive(Debug, Default)]
pub struct MinifyOutcome {
    /// Assets injected into the header, with their size reduction.
    pub injected: Vec<(AssetRole, MinifyStats)>,
    /// Whether the header content differs from what was on disk.
    pub changed: bool,
    /// Whether the header was rewritten.
    pub written: bool,
}

/// Minify every available source and inject it into the header.
///
/// The stylesheet source and the header are required; script sources are
/// optional. A stylesheet that fails to minify aborts the run before the
/// header is touched. A script that fails to minify, or any source whose
/// region is missing from the header, is reported and its region left as is. The header is only
/// written when its content changes, and never with `dry_run`.
pub fn run_minify(
    config: &ToolConfig,
    transformer: &dyn TextTransformer,
    dry_run: bool,
) -> Result<MinifyOutcome> {
    let header_path = config.header_path();
    let header_display = config.display(&header_path);

    for role in AssetRole::ALL.into_iter().filter(|r| r.is_mandatory()) {
        let path = config.asset_path(role);
        if !path.is_file() {
            bail!(
                "{} not found, run `{} extract` first",
                config.display(&path),
                env!("CARGO_PKG_NAME")
            );
        }
    }
    if !header_path.is_file() {
        bail!("{header_display} not found");
    }

    let header = fs::read_to_string(&header_path)
        .with_context(|| format!("failed to read {header_display}"))?;
    let mut updated = header.clone();
    let mut outcome = MinifyOutcome::default();

    for descriptor in config.descriptors() {
        let role = descriptor.role;
        let path = config.asset_path(role);
        let display = config.display(&path);

        if !path.is_file() {
            log!("minify"; "{} not found, skipping {}", display, role);
            continue;
        }
        let source =
            fs::read_to_string(&path).with_context(|| format!("failed to read {display}"))?;

        let minified = match transformer.minify(role.kind(), &source) {
            Ok(minified) => minified,
            Err(e) if role.is_mandatory() => {
                bail!("{display}: {e}, {header_display} left unchanged");
            }
            Err(e) => {
                log!("error"; "{}: {}", display, e);
                continue;
            }
        };

        let stats = MinifyStats::new(&source, &minified);
        log!("minify"; "{}: {}", role, stats);

        match inject(&updated, &descriptor, &minified, config.inject.chunk_width) {
            Ok(next) => updated = next,
            Err(e) => {
                log!("warning"; "{}: {}", role, e);
                continue;
            }
        }
        debug!("minify"; "{} injected into {}", role, header_display);
        outcome.injected.push((role, stats));
    }

    outcome.changed = updated != header;
    if !outcome.changed {
        log!("minify"; "{} is already up to date", header_display);
    } else if dry_run {
        log!("minify"; "{} would be updated (dry run)", header_display);
    } else {
        write_file(&header_path, &updated)
            .with_context(|| format!("failed to write {header_display}"))?;
        outcome.written = true;
        log!(
            "minify";
            "updated {} with {}",
            header_display,
            plural_count(outcome.injected.len(), "asset")
        );
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::NativeTransformer;
    use crate::cli::extract::run_extract;
    use crate::cli::test_support::{HEADER, StubTransformer, read_header, write_header};
    use crate::config::test_config_at;
    use crate::embed::extract;
    use tempfile::TempDir;

    fn project(header: &str) -> (TempDir, ToolConfig) {
        let dir = TempDir::new().unwrap();
        write_header(dir.path(), header);
        let config = test_config_at(dir.path());
        (dir, config)
    }

    fn write_source(dir: &TempDir, name: &str, content: &str) {
        let path = dir.path().join("web_src").join(name);
        write_file(&path, content).unwrap();
    }

    #[test]
    fn test_minify_injects_sources() {
        let (dir, config) = project(HEADER);
        write_source(&dir, "styles.css", "a {\n  color: \"red\";\n}\n");
        write_source(&dir, "app.js", "function next() {\n  go();\n}\n");

        let outcome = run_minify(&config, &StubTransformer, false).unwrap();
        assert!(outcome.written);
        let roles: Vec<_> = outcome.injected.iter().map(|(r, _)| *r).collect();
        assert_eq!(roles, [AssetRole::Stylesheet, AssetRole::Script]);

        let header = read_header(dir.path());
        assert!(header.contains("  html += \"a {color: \\\"red\\\";}\";\n  html += \"</style>\";"));
        assert!(header.contains("DIAGNOSTIC_JS_STATIC[] = R\"JS(\nfunction next() {go();}\n)JS\";"));
        // Lite source missing: its region is untouched
        assert!(header.contains("function lite(){}"));
        assert!(header.starts_with("#pragma once\n"));
        assert!(header.ends_with("  return html;\n}\n"));
    }

    #[test]
    fn test_extract_then_minify_round_trip() {
        let (dir, config) = project(HEADER);
        run_extract(&config, &StubTransformer, None).unwrap();

        // Drop the provenance comment so the stub minifier sees bare bodies
        for role in AssetRole::ALL {
            let path = config.asset_path(role);
            let content = fs::read_to_string(&path).unwrap();
            let body = content.split_once(" */\n\n").unwrap().1;
            fs::write(&path, body).unwrap();
        }

        let outcome = run_minify(&config, &StubTransformer, false).unwrap();
        assert_eq!(outcome.injected.len(), 3);
        let header = read_header(dir.path());
        for descriptor in config.descriptors() {
            assert_eq!(
                extract(&header, &descriptor).unwrap(),
                extract(HEADER, &descriptor).unwrap()
            );
        }
    }

    #[test]
    fn test_native_round_trip_through_header() {
        let header = HEADER
            .replace(
                "function full(){}",
                "function showTab(n){var s=`tab:\n\t${n}  \n\n\nend`;document.title=s}",
            )
            .replace("function lite(){}", "function lite(a){if(a){return'}'}return\"x\\\"y\"}");
        let (dir, config) = project(&header);
        let transformer = NativeTransformer::new(config.beautify_style(), false);

        run_extract(&config, &transformer, None).unwrap();
        let extracted: Vec<_> = AssetRole::ALL
            .into_iter()
            .map(|role| fs::read_to_string(config.asset_path(role)).unwrap())
            .collect();
        assert!(extracted[1].contains("`tab:\n\t${n}  \n\n\nend`"), "{}", extracted[1]);

        let outcome = run_minify(&config, &transformer, false).unwrap();
        assert_eq!(outcome.injected.len(), 3);
        let injected = read_header(dir.path());
        assert!(injected.contains("`tab:\n\t${n}  \n\n\nend`"));
        assert!(injected.contains("function showTab("));

        run_extract(&config, &transformer, None).unwrap();
        for (role, before) in AssetRole::ALL.into_iter().zip(&extracted) {
            let after = fs::read_to_string(config.asset_path(role)).unwrap();
            assert_eq!(&after, before, "{role} changed across a round trip");
        }
    }

    #[test]
    fn test_minify_twice_writes_once() {
        let (dir, config) = project(HEADER);
        write_source(&dir, "styles.css", "body {\n  margin: 0;\n}\n");
        write_source(&dir, "app.js", "function full(){}");

        let first = run_minify(&config, &StubTransformer, false).unwrap();
        assert!(first.written);
        let after_first = read_header(dir.path());

        let second = run_minify(&config, &StubTransformer, false).unwrap();
        assert!(!second.changed);
        assert!(!second.written);
        assert_eq!(read_header(dir.path()), after_first);
    }

    #[test]
    fn test_minify_dry_run() {
        let (dir, config) = project(HEADER);
        write_source(&dir, "styles.css", "p{x:y}");

        let outcome = run_minify(&config, &StubTransformer, true).unwrap();
        assert!(outcome.changed);
        assert!(!outcome.written);
        assert_eq!(read_header(dir.path()), HEADER);
    }

    #[test]
    fn test_minify_requires_stylesheet() {
        let (dir, config) = project(HEADER);
        write_source(&dir, "app.js", "x()");
        let err = run_minify(&config, &StubTransformer, false).unwrap_err();
        assert!(err.to_string().contains("styles.css not found"));
        assert_eq!(read_header(dir.path()), HEADER);
    }

    #[test]
    fn test_minify_requires_header() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        write_source(&dir, "styles.css", "p{}");
        let err = run_minify(&config, &StubTransformer, false).unwrap_err();
        assert!(err.to_string().contains("web_interface.h not found"));
    }

    #[test]
    fn test_minify_failure_leaves_region() {
        let (dir, config) = project(HEADER);
        write_source(&dir, "styles.css", "p{}");
        write_source(&dir, "app.js", "!fail");

        let outcome = run_minify(&config, &StubTransformer, false).unwrap();
        assert_eq!(outcome.injected.len(), 1);
        let header = read_header(dir.path());
        assert!(header.contains("function full(){}"));
        assert!(header.contains("html += \"p{}\";"));
    }

    #[test]
    fn test_minify_stylesheet_failure_is_fatal() {
        let (dir, config) = project(HEADER);
        write_source(&dir, "styles.css", "!fail");
        write_source(&dir, "app.js", "changed()");

        let err = run_minify(&config, &StubTransformer, false).unwrap_err();
        assert!(err.to_string().contains("styles.css"));
        assert_eq!(read_header(dir.path()), HEADER);
    }

    #[test]
    fn test_minify_missing_region_still_writes_others() {
        let header = HEADER.replace("DIAGNOSTIC_JS_STATIC[]", "RENAMED[]");
        let (dir, config) = project(&header);
        write_source(&dir, "styles.css", "p{}");
        write_source(&dir, "app.js", "x()");

        let outcome = run_minify(&config, &StubTransformer, false).unwrap();
        assert!(outcome.written);
        assert_eq!(outcome.injected.len(), 1);
        assert!(read_header(dir.path()).contains("RENAMED[] = R\"JS(\nfunction full(){}\n)JS\";"));
    }
}
