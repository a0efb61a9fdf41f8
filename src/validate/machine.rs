//! Tag-stack state machine over the token stream.

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::token::{Token, TokenError, Tokenizer};
use crate::utils::html::is_void_element;

/// A nesting problem that fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("Unexpected closing tag: </{0}>")]
    UnexpectedClose(String),

    #[error("Tag mismatch: expected </{expected}>, got </{found}>")]
    Mismatch { expected: String, found: String },

    #[error("Parse error: {0}")]
    Parse(TokenError),
}

/// A problem reported without failing validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralWarning {
    #[error("Duplicate ID: {0}")]
    DuplicateId(String),
}

/// Outcome of a structural scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    pub errors: Vec<StructuralError>,
    pub warnings: Vec<StructuralWarning>,
    /// Tags still open at end of input, outermost first.
    pub unclosed: Vec<String>,
}

impl Structure {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty() && self.unclosed.is_empty()
    }
}

/// Tracks open elements and element IDs across a document.
///
/// A close tag that does not match the top of the stack is an error but
/// leaves the stack alone, so one misplaced tag can produce a cascade of
/// later mismatches.
#[derive(Debug, Default)]
pub struct HtmlValidator {
    stack: Vec<String>,
    ids: FxHashSet<String>,
    errors: Vec<StructuralError>,
    warnings: Vec<StructuralWarning>,
}

impl HtmlValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a whole document.
    ///
    /// A tokenizer error is recorded as a single parse error and ends the
    /// scan; everything seen before it is kept.
    pub fn feed(&mut self, html: &str) {
        for token in Tokenizer::new(html) {
            match token {
                Ok(token) => self.handle(&token),
                Err(e) => {
                    self.errors.push(StructuralError::Parse(e));
                    break;
                }
            }
        }
    }

    pub fn handle(&mut self, token: &Token<'_>) {
        match token {
            Token::Open {
                name,
                attrs,
                self_closing,
            } => {
                self.open(name, attrs);
                if *self_closing && !is_void_element(name) {
                    self.close(name);
                }
            }
            Token::Close { name } => self.close(name),
            Token::Text(_) | Token::Comment(_) | Token::Declaration(_) => {}
        }
    }

    fn open(&mut self, name: &str, attrs: &[(String, String)]) {
        if !is_void_element(name) {
            self.stack.push(name.to_string());
        }

        // A repeated attribute keeps its last value
        if let Some((_, id)) = attrs.iter().rev().find(|(key, _)| key == "id")
            && !self.ids.insert(id.clone())
        {
            self.warnings
                .push(StructuralWarning::DuplicateId(id.clone()));
        }
    }

    fn close(&mut self, name: &str) {
        if is_void_element(name) {
            return;
        }

        match self.stack.last() {
            None => self
                .errors
                .push(StructuralError::UnexpectedClose(name.to_string())),
            Some(top) if top != name => self.errors.push(StructuralError::Mismatch {
                expected: top.clone(),
                found: name.to_string(),
            }),
            Some(_) => {
                self.stack.pop();
            }
        }
    }

    pub fn finish(self) -> Structure {
        Structure {
            errors: self.errors,
            warnings: self.warnings,
            unclosed: self.stack,
        }
    }
}

/// Run the state machine over `html`.
pub fn check_structure(html: &str) -> Structure {
    let mut validator = HtmlValidator::new();
    validator.feed(html);
    validator.finish()
}
