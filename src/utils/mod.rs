//! Shared helpers: dates, HTML classification, paths and pluralization.

pub mod date;
pub mod html;
pub mod path;
mod plural;

pub use plural::{plural_count, plural_s};
