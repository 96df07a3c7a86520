//! Logging utilities with colored output and progress display.
//!
//! Everything here writes to **stderr**: stdout carries the generated source
//! and is usually redirected into a build artifact.
//!
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` for lines only shown with `--verbose`
//! - `ProgressLine` for a single in-place counter while encoding
//!
//! # Example
//!
//! ```ignore
//! log!("embed"; "{} assets", count);
//!
//! let mut progress = ProgressLine::new("encode", files.len());
//! progress.inc();
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
    tty::IsTty,
};
use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set when a progress line currently occupies the last stderr line
static PROGRESS_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();

    // Drop an in-flight progress line so the message lands on a clean line
    if PROGRESS_ACTIVE.load(Ordering::SeqCst) {
        execute!(
            stderr,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
    }

    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "embed" | "routes" => prefix.bright_blue().bold().to_string(),
        "zones" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Progress Line (single-line counter)
// ============================================================================

/// Single-line progress display: `[encode] 42/69`
///
/// Only drawn when stderr is a terminal; otherwise every call is a no-op
/// so redirected logs stay free of cursor escapes.
pub struct ProgressLine {
    name: &'static str,
    total: usize,
    current: usize,
    enabled: bool,
}

impl ProgressLine {
    /// Create a new progress display.
    ///
    /// Nothing is drawn for an empty total.
    pub fn new(name: &'static str, total: usize) -> Self {
        let enabled = total > 0 && stderr().is_tty();
        PROGRESS_ACTIVE.store(enabled, Ordering::SeqCst);

        let progress = Self {
            name,
            total,
            current: 0,
            enabled,
        };
        progress.display(false);
        progress
    }

    /// Advance the counter by one.
    #[inline]
    pub fn inc(&mut self) {
        self.current = (self.current + 1).min(self.total);
        self.display(false);
    }

    /// Render the line in place; `keep` terminates it with a newline.
    fn display(&self, keep: bool) {
        if !self.enabled {
            return;
        }

        let prefix = colorize_prefix(self.name, self.name);
        let mut stderr = stderr().lock();
        execute!(
            stderr,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        if keep {
            writeln!(stderr, "{} {}/{}", prefix, self.current, self.total).ok();
        } else {
            write!(stderr, "{} {}/{}", prefix, self.current, self.total).ok();
        }
        stderr.flush().ok();
    }

    /// Finish progress display, preserve line and move to next line.
    pub fn finish(mut self) {
        PROGRESS_ACTIVE.store(false, Ordering::SeqCst);
        self.display(true);
        self.enabled = false;
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        if !self.enabled {
            return;
        }
        PROGRESS_ACTIVE.store(false, Ordering::SeqCst);

        // Clear the line on drop (if not finished properly)
        let mut stderr = stderr().lock();
        execute!(
            stderr,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        stderr.flush().ok();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_counts_saturate() {
        let mut progress = ProgressLine::new("encode", 2);
        progress.inc();
        progress.inc();
        progress.inc();
        assert_eq!(progress.current, 2);
        progress.finish();
    }

    #[test]
    fn test_progress_empty_total_is_disabled() {
        let progress = ProgressLine::new("encode", 0);
        assert!(!progress.enabled);
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
