//! Round-trip protocol for web assets embedded in a generated C++ header.
//!
//! A header holds each asset in an anchor-delimited region. Regions are
//! described declaratively by [`RegionDescriptor`] and handled by one
//! generic pair of routines:
//!
//! - [`extract`] - decode a region back into the asset body
//! - [`inject`] - encode an asset body and replace the region in place
//!
//! Two encodings exist:
//!
//! ```text
//! EscapedLiteral   html += "<style>";          <- start anchor
//!                  html += "a{color:red}...";  <- escaped chunks, in order
//!                  html += "</style>";         <- end anchor
//!
//! RawBlock         static const char PROGMEM NAME[] = R"JS(   <- start anchor
//!                  ...verbatim script...
//!                  )JS";                                      <- end anchor
//! ```
//!
//! For any body `x` without surrounding whitespace or carriage returns,
//! `extract(inject(header, x)) == x`.

mod error;
mod escape;
mod extract;
mod inject;
mod region;

pub use error::EmbedError;
pub use escape::{chunk, escape, unescape};
pub use extract::extract;
pub use inject::inject;
pub use region::{AssetRole, Encoding, Region, RegionDescriptor};
