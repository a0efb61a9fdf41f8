//! Console output with colored `[module]` prefixes.
//!
//! ```ignore
//! log!("extract"; "found {} regions", count);
//! debug!("minify"; "chunk width {}", width);
//! ```
//!
//! `debug!` lines only appear with `--verbose`.

use std::io::{Write, stdout};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use owo_colors::{OwoColorize, Style};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print a line prefixed with `[module]`.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like [`log!`], but only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

pub fn log(module: &str, message: &str) {
    let prefix = format!("[{module}]");
    let prefix = prefix.style(prefix_style(module));

    let mut out = stdout().lock();
    // Overwrite whatever a previous partial line left behind
    execute!(out, Clear(ClearType::UntilNewLine)).ok();
    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

/// Prefix color per command, plus the two severity modules.
fn prefix_style(module: &str) -> Style {
    let style = Style::new().bold();
    match module.to_ascii_lowercase().as_str() {
        "extract" => style.bright_blue(),
        "minify" => style.bright_green(),
        "validate" => style.bright_cyan(),
        "error" => style.bright_red(),
        "warning" => style.yellow(),
        _ => style.bright_yellow(),
    }
}
