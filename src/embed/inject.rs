//! Encode an asset body and replace its region in the header.

use super::escape::{chunk, escape};
use super::{EmbedError, Encoding, RegionDescriptor};

/// Replace the region described by `descriptor` with `body`.
///
/// Only the bytes between the two anchors change. Escaped-literal regions
/// get one append statement per chunk (see [`chunk`]), indented like the
/// start anchor's line; raw blocks get `body` verbatim on its own lines.
/// New lines use the anchor line's terminator, so CRLF headers stay CRLF.
///
/// A raw-block body containing its own terminator (`)JS"` for delimiter
/// `JS`) is rejected.
pub fn inject(
    header: &str,
    descriptor: &RegionDescriptor,
    body: &str,
    chunk_width: usize,
) -> Result<String, EmbedError> {
    let region = descriptor.locate(header)?;
    let eol = region.line_ending(header);

    let interior = match &descriptor.encoding {
        Encoding::RawBlock => {
            let terminator = descriptor.end.trim_end_matches(';');
            if body.contains(terminator) {
                return Err(EmbedError::TerminatorInBody {
                    role: descriptor.role,
                    terminator: terminator.to_string(),
                });
            }
            format!("{eol}{body}{eol}")
        }
        Encoding::EscapedLiteral { variable } => {
            let indent = region.indent(header);
            let escaped = escape(body);

            let mut interior = String::with_capacity(escaped.len() * 11 / 10 + 64);
            interior.push_str(eol);
            for piece in chunk(&escaped, chunk_width) {
                interior.push_str(indent);
                interior.push_str(variable);
                interior.push_str(" += \"");
                interior.push_str(piece);
                interior.push_str("\";");
                interior.push_str(eol);
            }
            interior.push_str(indent);
            interior
        }
    };

    let mut out = String::with_capacity(header.len() - (region.end - region.start) + interior.len());
    out.push_str(&header[..region.start]);
    out.push_str(&interior);
    out.push_str(&header[region.end..]);
    Ok(out)
}
