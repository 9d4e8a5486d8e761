// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for list rendering and status banners.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use td_core::Status;

/// ANSI 256-color codes used across the renderer.
pub mod codes {
    /// Todo names and section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Secondary text (descriptions, due dates): medium grey
    pub const CONTEXT: u8 = 245;
    /// Tags: light grey
    pub const LITERAL: u8 = 250;
    /// Completed status and success banners: green
    pub const GREEN: u8 = 71;
    /// In-progress status: amber
    pub const AMBER: u8 = 179;
    /// Error banners: red
    pub const RED: u8 = 167;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    // NO_COLOR=1 disables colors
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }

    // COLOR=1 forces colors even without TTY
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }

    // Default: enable colors only if stdout is a TTY
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (todo names, section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply context color (descriptions, dates, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Apply literal color (tags, ids) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply error color to text.
pub fn error(text: &str) -> String {
    paint(codes::RED, text)
}

/// Apply success color to text.
pub fn success(text: &str) -> String {
    paint(codes::GREEN, text)
}

/// Color for a status badge.
pub fn status_color(status: Status) -> u8 {
    match status {
        Status::NotStarted => codes::CONTEXT,
        Status::InProgress => codes::AMBER,
        Status::Completed => codes::GREEN,
    }
}

/// Render a colored status badge like `[in_progress]`.
pub fn status_badge(status: Status, colorize: bool) -> String {
    let badge = format!("[{}]", status.as_str());
    if colorize {
        paint(status_color(status), &badge)
    } else {
        badge
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
