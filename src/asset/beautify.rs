//! Asset pretty-printing for extracted sources.
//!
//! oxc indents JavaScript directly with the configured width and never
//! touches the contents of strings or template literals. lightningcss has
//! a fixed two-space indent, so its output is re-laid out line by line;
//! CSS strings cannot span lines, which keeps that pass lossless.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, IndentChar};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::{AssetKind, TransformError};

/// Indentation unit emitted by the lightningcss printer.
const CSS_PRINTER_INDENT: &str = "  ";

/// Layout applied to beautified output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeautifyStyle {
    /// Spaces per indentation level.
    pub indent_size: usize,
    /// Longest run of blank lines kept.
    pub max_preserve_newlines: usize,
}

impl Default for BeautifyStyle {
    fn default() -> Self {
        Self {
            indent_size: 4,
            max_preserve_newlines: 2,
        }
    }
}

/// Pretty-print CSS, one declaration per line and a blank line between rules.
pub fn beautify_css(source: &str, style: BeautifyStyle) -> Result<String, TransformError> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| TransformError::parse(AssetKind::Css, e))?;
    let result = stylesheet
        .to_css(PrinterOptions::default())
        .map_err(|e| TransformError::print(AssetKind::Css, e))?;
    Ok(relayout_css(&result.code, style))
}

/// Pretty-print JavaScript.
///
/// The code generator emits no blank lines of its own, so only the indent
/// width applies; multi-line literals come out byte for byte.
pub fn beautify_js(source: &str, style: BeautifyStyle) -> Result<String, TransformError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::script()).parse();
    if let Some(error) = ret.errors.first() {
        return Err(TransformError::parse(AssetKind::Js, error));
    }

    let code = Codegen::new()
        .with_options(CodegenOptions {
            indent_char: IndentChar::Space,
            indent_width: style.indent_size,
            ..CodegenOptions::default()
        })
        .build(&ret.program)
        .code;

    let mut out = code.trim_end_matches('\n').to_string();
    out.push('\n');
    Ok(out)
}

/// Re-indent lightningcss output to `style.indent_size` spaces, cap
/// blank-line runs, trim trailing whitespace, and end with a single newline.
fn relayout_css(code: &str, style: BeautifyStyle) -> String {
    let mut out = String::with_capacity(code.len() + code.len() / 4);
    let mut blank_run = 0;

    for line in code.lines() {
        if line.trim().is_empty() {
            blank_run += 1;
            // Leading blank lines are dropped entirely
            if blank_run <= style.max_preserve_newlines && !out.is_empty() {
                out.push('\n');
            }
            continue;
        }
        blank_run = 0;

        let mut rest = line;
        let mut depth = 0;
        while let Some(inner) = rest.strip_prefix(CSS_PRINTER_INDENT) {
            rest = inner;
            depth += 1;
        }

        out.extend(std::iter::repeat_n(' ', depth * style.indent_size));
        out.push_str(rest.trim_end());
        out.push('\n');
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push('\n');
    out
}
