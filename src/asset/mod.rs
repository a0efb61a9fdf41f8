//! Asset text transforms: minify, beautify, provenance, statistics.

mod beautify;
mod kind;
mod minify;
mod provenance;
mod stats;
mod transform;

pub use beautify::BeautifyStyle;
pub use kind::AssetKind;
pub use provenance::Provenance;
pub use stats::MinifyStats;
pub use transform::{NativeTransformer, TextTransformer, TransformError};
