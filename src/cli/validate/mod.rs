//! `validate` command: check the reference HTML template.

mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::ToolConfig;
use crate::log;
use crate::validate::TemplateReport;

/// Validate `path`, or the configured template when `None`.
///
/// Prints the full report, then fails if the template has structural
/// errors, unclosed tags or missing required elements.
pub fn run_validate(config: &ToolConfig, path: Option<&Path>) -> Result<()> {
    let report = analyze_template(config, path)?;
    report::print(&report);

    if !report.is_valid() {
        bail!("template validation failed: {}", report::summary(&report));
    }
    log!("validate"; "template is valid");
    Ok(())
}

/// Read and analyze the template without printing.
fn analyze_template(config: &ToolConfig, path: Option<&Path>) -> Result<TemplateReport> {
    let path: PathBuf = path.map_or_else(|| config.template_path(), Path::to_path_buf);
    let display = config.display(&path);
    if !path.is_file() {
        bail!("{display} not found");
    }

    log!("validate"; "reading {}", display);
    let html = fs::read_to_string(&path).with_context(|| format!("failed to read {display}"))?;
    Ok(TemplateReport::analyze(&html))
}
