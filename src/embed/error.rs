//! Region lookup and decoding errors.

use thiserror::Error;

use super::AssetRole;

/// Errors raised while locating or decoding an embedded region.
///
/// All variants are scoped to one asset; callers report them and carry on
/// with the remaining regions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmbedError {
    #[error("{role} region not found: missing anchor `{anchor}`")]
    RegionNotFound { role: AssetRole, anchor: String },

    #[error("{role} region is ambiguous: anchor `{anchor}` appears {count} times")]
    DuplicateAnchor {
        role: AssetRole,
        anchor: String,
        count: usize,
    },

    #[error("{role} body contains `{terminator}`, which would end its raw string early")]
    TerminatorInBody { role: AssetRole, terminator: String },

    #[error("{role} region has an unterminated string literal on header line {line}")]
    MalformedLiteral { role: AssetRole, line: usize },
}
