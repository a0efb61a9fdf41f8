//! HTML utility functions used by the template validator.
//!
//! - `unescape()` - HTML entity decoding for attribute values
//! - `is_void_element()` - Void elements that never take a closing tag
//! - `is_raw_text_element()` - Raw text elements (script, style)
//! - `parse_attributes()` - HTML attribute string parsing

use std::borrow::Cow;

// =============================================================================
// Entities
// =============================================================================

/// Unescape HTML entities back to characters.
///
/// Handles common named entities and numeric character references.
/// Unknown entities are kept verbatim.
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        // Entities are short; anything longer is literal text
        let Some(semi) = after.find(';').filter(|&i| i > 0 && i <= 10) else {
            result.push('&');
            rest = after;
            continue;
        };

        let entity = &after[..semi];
        match decode_entity(entity) {
            Some(c) => result.push(c),
            None => {
                result.push('&');
                result.push_str(entity);
                result.push(';');
            }
        }
        rest = &after[semi + 1..];
    }
    result.push_str(rest);

    Cow::Owned(result)
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        s if s.starts_with("#x") || s.starts_with("#X") => {
            u32::from_str_radix(&s[2..], 16).ok().and_then(char::from_u32)
        }
        s if s.starts_with('#') => s[1..].parse().ok().and_then(char::from_u32),
        _ => None,
    }
}

// =============================================================================
// Element Classification
// =============================================================================

/// Check if an HTML tag is a void element (self-closing).
///
/// Void elements cannot have children and are never pushed on a tag stack.
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// `script` and `style` bodies are raw text, never markup.
#[inline]
pub fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

// =============================================================================
// Attribute Parsing
// =============================================================================

/// Parse the attribute list of a start tag.
///
/// Names are lowercased and values entity-decoded. Valueless attributes map
/// to an empty string; stray `/` separators are skipped.
///
/// `id="main" Class='foo' data-x=3 disabled` yields
/// `[("id", "main"), ("class", "foo"), ("data-x", "3"), ("disabled", "")]`.
pub fn parse_attributes(s: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut rest = s.trim_start_matches(is_separator);

    while !rest.is_empty() {
        let name_len = rest
            .find(|c: char| c == '=' || c.is_whitespace())
            .unwrap_or(rest.len());
        let name = rest[..name_len].to_ascii_lowercase();
        rest = rest[name_len..].trim_start();

        let value = match rest.strip_prefix('=') {
            Some(after) => {
                let (value, after) = split_value(after.trim_start());
                rest = after;
                unescape(value).into_owned()
            }
            None => String::new(),
        };

        attrs.push((name, value));
        rest = rest.trim_start_matches(is_separator);
    }

    attrs
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '/'
}

/// Split a quoted or bare attribute value from the text after `=`.
fn split_value(s: &str) -> (&str, &str) {
    if let Some(quote) = s.chars().next().filter(|&c| matches!(c, '"' | '\'')) {
        let body = &s[1..];
        return match body.find(quote) {
            Some(end) => (&body[..end], &body[end + 1..]),
            None => (body, ""),
        };
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    (&s[..end], &s[end..])
}

// =============================================================================
// Tests
// =============================================================================
