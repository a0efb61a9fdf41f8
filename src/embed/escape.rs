//! C string literal escaping and statement-safe chunking.

/// Escape text for a double-quoted C++ string literal.
///
/// `\` becomes `\\`, `"` becomes `\"`, newline becomes `\n`, and carriage
/// returns are dropped. Done in one pass so inserted escapes are never
/// re-escaped.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Reverse [`escape`].
///
/// Decodes `\\`, `\"` and `\n` in a single left-to-right pass. Any other
/// backslash pair, and a trailing lone backslash, is kept verbatim.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Split escaped text into chunks of roughly `width` characters.
///
/// A chunk is cut only right after a `;` or `}` once it holds at least
/// `width` characters, so every emitted statement ends on a CSS
/// declaration or block boundary. Whatever remains forms the last chunk.
/// Neither boundary character can end an escape pair, so no chunk splits one.
pub fn chunk(escaped: &str, width: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut begin = 0;
    let mut len = 0;

    for (i, c) in escaped.char_indices() {
        len += 1;
        if len >= width && matches!(c, ';' | '}') {
            let cut = i + c.len_utf8();
            chunks.push(&escaped[begin..cut]);
            begin = cut;
            len = 0;
        }
    }
    if begin < escaped.len() {
        chunks.push(&escaped[begin..]);
    }

    chunks
}

/// Read a double-quoted literal body from `s`, which starts right after
/// the opening quote.
///
/// Returns the raw (still escaped) payload up to the first unescaped `"`,
/// or `None` when the literal is not terminated.
pub(super) fn read_literal(s: &str) -> Option<&str> {
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(&s[..i]),
            _ => {}
        }
    }
    None
}
