//! Command-line interface module.

mod args;
pub mod extract;
pub mod minify;
pub mod validate;

pub use args::{Cli, Commands};
