//! Asset minification for JS and CSS sources.
//!
//! Uses oxc for JavaScript and lightningcss for CSS.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::{AssetKind, TransformError};

/// Minify JavaScript source code.
///
/// Sources are parsed as classic scripts: their top-level functions are
/// globals called from inline HTML handlers, so the compressor keeps them
/// even when nothing in the file references them, and names are never
/// mangled. `compress` additionally runs the oxc compressor.
pub fn minify_js(source: &str, compress: bool) -> Result<String, TransformError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::script()).parse();
    if let Some(error) = ret.errors.first() {
        return Err(TransformError::parse(AssetKind::Js, error));
    }

    let mut program = ret.program;
    let scoping = if compress {
        let options = MinifierOptions {
            mangle: None,
            compress: Some(CompressOptions::smallest()),
        };
        Minifier::new(options).minify(&allocator, &mut program).scoping
    } else {
        None
    };

    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(scoping)
        .build(&program)
        .code;
    Ok(code)
}

/// Minify CSS source code.
pub fn minify_css(source: &str) -> Result<String, TransformError> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default())
        .map_err(|e| TransformError::parse(AssetKind::Css, e))?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| TransformError::print(AssetKind::Css, e))?;
    Ok(result.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_css_strips_whitespace_and_comments() {
        let source = "/* header */\nbody {\n    margin: 0;\n    color: red;\n}\n";
        let min = minify_css(source).unwrap();
        assert!(!min.contains("header"));
        assert!(!min.contains('\n'));
        assert!(min.len() < source.len());
        assert!(min.starts_with("body{"));
    }

    #[test]
    fn test_minify_js_keeps_global_names() {
        let source = "// switch language\nfunction changeLang(lang) {\n    currentLang = lang;\n}\n";
        let min = minify_js(source, false).unwrap();
        assert!(min.contains("function changeLang("));
        assert!(!min.contains("switch language"));
        assert!(min.len() < source.len());
    }

    #[test]
    fn test_minify_js_compress_keeps_global_names() {
        let source = "function showTab(name) {\n    document.title = name;\n}\nfunction helper() {\n    return 1;\n}\n";
        let min = minify_js(source, true).unwrap();
        assert!(min.contains("showTab"), "{min:?}");
        assert!(min.contains("helper"), "{min:?}");
    }

    #[test]
    fn test_minify_js_parse_error() {
        let err = minify_js("function (", false).unwrap_err();
        assert!(matches!(err, TransformError::Parse { kind: AssetKind::Js, .. }));
    }
}
