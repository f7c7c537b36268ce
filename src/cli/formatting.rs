//! Formatting of fatal diagnostics.

use std::io::{self, IsTerminal};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Formats a fatal error for standard error.
///
/// Colors are only used when standard error is a terminal.
pub fn format_error(message: &str) -> String {
    format_error_styled(message, io::stderr().is_terminal())
}

/// Formats a fatal error, with or without ANSI styling.
pub fn format_error_styled(message: &str, styled: bool) -> String {
    if styled {
        format!(
            "{}{}error:{} {}",
            Colors::BOLD,
            Colors::RED,
            Colors::RESET,
            message
        )
    } else {
        format!("error: {message}")
    }
}
