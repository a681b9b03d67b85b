// Output settings: format selection, color detection and terminal width

use clap::ValueEnum;
use std::io::IsTerminal;
use std::str::FromStr;
use crate::render::text::{MAX_WIDTH, MIN_WIDTH};

/// Widest layout used when sizing from the terminal
pub const MAX_AUTO_WIDTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err("expected one of: auto, always, never".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            _ => Err("expected one of: text, json, html".to_string()),
        }
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// COLUMNS environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    // Fallback to COLUMNS environment variable (set by most shells)
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 { // Sanity check
                return width;
            }
        }
    }

    80
}

/// Decide whether to emit ANSI colors
pub fn resolve_color(mode: ColorMode, is_tty: bool, no_color_set: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && !no_color_set,
    }
}

/// Explicit width wins within MIN_WIDTH..=MAX_WIDTH; otherwise fit the
/// terminal within MIN_WIDTH..=MAX_AUTO_WIDTH
pub fn resolve_width(explicit: Option<usize>, terminal_width: usize) -> usize {
    match explicit {
        Some(width) => width.clamp(MIN_WIDTH, MAX_WIDTH),
        None => terminal_width.clamp(MIN_WIDTH, MAX_AUTO_WIDTH),
    }
}

/// Enable ANSI escape handling on consoles that need it
pub fn enable_ansi() {
    #[cfg(windows)]
    {
        if let Err(code) = enable_ansi_support::enable_ansi_support() {
            log::debug!("Could not enable ANSI support (error {})", code);
        }
    }
}
