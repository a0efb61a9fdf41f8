//! Decode an embedded region back into its asset body.

use super::escape::{read_literal, unescape};
use super::{EmbedError, Encoding, RegionDescriptor};

/// Extract the asset body described by `descriptor` from `header`.
///
/// - `EscapedLiteral`: every `variable += "...";` line inside the region is
///   unescaped and concatenated in source order. Other lines, including
///   appends of non-literal expressions, are skipped.
/// - `RawBlock`: the region text, trimmed.
pub fn extract(header: &str, descriptor: &RegionDescriptor) -> Result<String, EmbedError> {
    let region = descriptor.locate(header)?;
    let interior = region.interior(header);

    match &descriptor.encoding {
        Encoding::RawBlock => Ok(interior.trim().to_string()),
        Encoding::EscapedLiteral { variable } => {
            let first_line = region.first_line(header);
            let mut body = String::with_capacity(interior.len());

            for (offset, line) in interior.split('\n').enumerate() {
                let Some(rest) = append_payload(line, variable) else {
                    continue;
                };
                let literal = read_literal(rest).ok_or(EmbedError::MalformedLiteral {
                    role: descriptor.role,
                    line: first_line + offset,
                })?;
                body.push_str(&unescape(literal));
            }

            Ok(body)
        }
    }
}

/// If `line` is `<variable> += "...`, return the text after the opening quote.
fn append_payload<'a>(line: &'a str, variable: &str) -> Option<&'a str> {
    let rest = line.trim_start().strip_prefix(variable)?;
    let rest = rest.trim_start().strip_prefix("+=")?;
    rest.trim_start().strip_prefix('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::AssetRole;

    fn stylesheet() -> RegionDescriptor {
        RegionDescriptor::stylesheet("html")
    }

    #[test]
    fn test_extract_concatenates_fragments() {
        let header = concat!(
            "  html += \"<style>\";\n",
            "  html += \"body{margin:0;}\";\n",
            "  html += \".a{content:\\\"x\\\";}\";\n",
            "  html += \"</style>\";\n",
        );
        let css = extract(header, &stylesheet()).unwrap();
        assert_eq!(css, "body{margin:0;}.a{content:\"x\";}");
    }

    #[test]
    fn test_extract_unescapes_newlines_and_backslashes() {
        let header = "html += \"<style>\";\nhtml += \"a{}\\nb{content:\\\"\\\\2022\\\"}\";\nhtml += \"</style>\";";
        let css = extract(header, &stylesheet()).unwrap();
        assert_eq!(css, "a{}\nb{content:\"\\2022\"}");
    }

    #[test]
    fn test_extract_skips_non_literal_lines() {
        let header = concat!(
            "  html += \"<style>\";\n",
            "  // comment\n",
            "  html += VERSION_STR;\n",
            "  html += \"a{b:c}\";\n",
            "  html += \"</style>\";\n",
        );
        assert_eq!(extract(header, &stylesheet()).unwrap(), "a{b:c}");
    }

    #[test]
    fn test_extract_ignores_other_variables() {
        let header = concat!(
            "  html += \"<style>\";\n",
            "  js += \"ignored\";\n",
            "  html += \"a{}\";\n",
            "  html += \"</style>\";\n",
        );
        assert_eq!(extract(header, &stylesheet()).unwrap(), "a{}");
    }

    #[test]
    fn test_extract_malformed_literal() {
        let header = "line one\n  html += \"<style>\";\n  html += \"a{\n  html += \"</style>\";\n";
        let err = extract(header, &stylesheet()).unwrap_err();
        assert_eq!(
            err,
            EmbedError::MalformedLiteral {
                role: AssetRole::Stylesheet,
                line: 3,
            }
        );
    }

    #[test]
    fn test_extract_raw_block_trimmed() {
        let desc = RegionDescriptor::raw_constant(AssetRole::Script, "APP", "JS");
        let header = "x\nstatic const char PROGMEM APP[] = R\"JS(\n  var a = \"\\n\";\n)JS\";\ny\n";
        assert_eq!(extract(header, &desc).unwrap(), "var a = \"\\n\";");
    }

    #[test]
    fn test_extract_missing_region() {
        let desc = RegionDescriptor::raw_constant(AssetRole::ScriptLite, "APP_LITE", "JS");
        let err = extract("no anchors here", &desc).unwrap_err();
        assert!(matches!(err, EmbedError::RegionNotFound { .. }));
    }
}
