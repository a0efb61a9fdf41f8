//! HTML tokenizer for template validation.
//!
//! A position-based scanner that splits markup into tags, text, comments and
//! declarations. It is deliberately lenient about content (entities, stray
//! `<`) and strict only about constructs it cannot skip over: a tag, comment
//! or raw-text element that never ends.

use thiserror::Error;

use crate::utils::html::{is_raw_text_element, parse_attributes};

/// One lexical unit of an HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// `<name attr=value ...>` or `<name ... />`. Names are lowercased.
    Open {
        name: String,
        attrs: Vec<(String, String)>,
        self_closing: bool,
    },
    /// `</name>`.
    Close { name: String },
    Text(&'a str),
    /// Body of `<!-- ... -->`.
    Comment(&'a str),
    /// Body of `<!...>` or `<?...>`, e.g. `DOCTYPE html`.
    Declaration(&'a str),
}

/// The input ended inside a construct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct TokenError {
    pub line: usize,
    pub message: String,
}

/// Iterator over the tokens of `src`.
///
/// Yields at most one error, after which it is exhausted.
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
    /// Set after an open `script`/`style` tag: everything up to its close
    /// tag is text.
    raw_text: Option<String>,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            raw_text: None,
            failed: false,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn error(&mut self, at: usize, message: impl Into<String>) -> TokenError {
        self.failed = true;
        TokenError {
            line: self.src[..at].matches('\n').count() + 1,
            message: message.into(),
        }
    }

    /// Text of a raw-text element, up to (not including) its close tag.
    fn raw_body(&mut self, element: &str) -> Result<Option<Token<'a>>, TokenError> {
        let needle = format!("</{element}");
        let rest = self.rest();
        // ASCII lowercasing keeps byte offsets intact
        let Some(rel) = rest.to_ascii_lowercase().find(&needle) else {
            return Err(self.error(self.pos, format!("unterminated <{element}> element")));
        };
        self.pos += rel;
        Ok((rel > 0).then(|| Token::Text(&rest[..rel])))
    }

    /// Plain text up to the next `<` after the first character.
    fn text(&mut self) -> Token<'a> {
        let rest = self.rest();
        let skip = rest.chars().next().map_or(0, char::len_utf8);
        let len = rest[skip..].find('<').map_or(rest.len(), |i| i + skip);
        self.pos += len;
        Token::Text(&rest[..len])
    }

    fn comment(&mut self) -> Result<Token<'a>, TokenError> {
        let start = self.pos;
        let body = &self.src[start + 4..];
        let Some(end) = body.find("-->") else {
            return Err(self.error(start, "unterminated comment"));
        };
        self.pos = start + 4 + end + 3;
        Ok(Token::Comment(&body[..end]))
    }

    fn declaration(&mut self) -> Result<Token<'a>, TokenError> {
        let start = self.pos;
        let body = &self.src[start + 2..];
        let Some(end) = body.find('>') else {
            return Err(self.error(start, "unterminated declaration"));
        };
        self.pos = start + 2 + end + 1;
        Ok(Token::Declaration(&body[..end]))
    }

    fn close_tag(&mut self) -> Result<Token<'a>, TokenError> {
        let start = self.pos;
        let body = &self.src[start + 2..];
        let Some(end) = body.find('>') else {
            return Err(self.error(start, "unterminated closing tag"));
        };
        self.pos = start + 2 + end + 1;
        let name = tag_name(&body[..end]);
        Ok(Token::Close {
            name: name.to_ascii_lowercase(),
        })
    }

    fn open_tag(&mut self) -> Result<Token<'a>, TokenError> {
        let start = self.pos;
        let body = &self.src[start + 1..];
        let Some(end) = tag_end(body) else {
            return Err(self.error(start, "unterminated tag"));
        };
        self.pos = start + 1 + end + 1;

        let inner = &body[..end];
        let name = tag_name(inner).to_ascii_lowercase();
        let attrs_src = inner[name.len()..].trim_end();
        let (attrs_src, self_closing) = match attrs_src.strip_suffix('/') {
            Some(attrs) => (attrs, true),
            None => (attrs_src, false),
        };

        if is_raw_text_element(&name) && !self_closing {
            self.raw_text = Some(name.clone());
        }

        Ok(Token::Open {
            name,
            attrs: parse_attributes(attrs_src),
            self_closing,
        })
    }

    fn scan(&mut self) -> Result<Option<Token<'a>>, TokenError> {
        if let Some(element) = self.raw_text.take()
            && let Some(text) = self.raw_body(&element)?
        {
            return Ok(Some(text));
        }

        let rest = self.rest();
        if rest.is_empty() {
            return Ok(None);
        }

        let mut chars = rest.chars();
        let token = match (chars.next(), chars.next()) {
            (Some('<'), Some('!')) if rest.starts_with("<!--") => self.comment()?,
            (Some('<'), Some('!' | '?')) => self.declaration()?,
            (Some('<'), Some('/')) if rest[2..].starts_with(|c: char| c.is_ascii_alphabetic()) => {
                self.close_tag()?
            }
            (Some('<'), Some(c)) if c.is_ascii_alphabetic() => self.open_tag()?,
            _ => self.text(),
        };
        Ok(Some(token))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, TokenError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.scan().transpose()
    }
}

/// Leading tag name of a tag body.
fn tag_name(inner: &str) -> &str {
    let len = inner
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(inner.len());
    &inner[..len]
}

/// Offset of the `>` closing a tag.
///
/// A quote only opens a quoted value right after `=` (whitespace allowed
/// in between); elsewhere, as in `value=O'Neil`, it is an ordinary character.
fn tag_end(body: &str) -> Option<usize> {
    let mut quote = None;
    let mut after_eq = false;
    for (i, c) in body.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '>') => return Some(i),
            (None, '=') => after_eq = true,
            (None, '"' | '\'') if after_eq => {
                quote = Some(c);
                after_eq = false;
            }
            (None, _) if c.is_whitespace() => {}
            (None, _) => after_eq = false,
        }
    }
    None
}
