//! tickdown - terminal countdown timer
//!
//! A two-screen TUI application: a configuration screen that collects a
//! target duration and a countdown screen that ticks it down once per
//! second in the bottom-right corner of the terminal.

use std::fmt;
use std::time::Duration;

// Public re-exports
pub mod app;
pub mod timer;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum TickdownError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for TickdownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickdownError::IoError(err) => write!(f, "I/O error: {}", err),
            TickdownError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for TickdownError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TickdownError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TickdownError {
    fn from(err: std::io::Error) -> Self {
        TickdownError::IoError(err)
    }
}

/// Result type alias for tickdown operations
pub type Result<T> = std::result::Result<T, TickdownError>;

// Common types and constants
pub const APP_NAME: &str = "tickdown";

/// Interval between countdown ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Spinner field bounds
pub const MAX_HOURS: u16 = 23;
pub const MAX_MINUTES: u16 = 59;
pub const MAX_SECONDS: u16 = 59;

/// Spinner defaults: one minute
pub const DEFAULT_HOURS: u16 = 0;
pub const DEFAULT_MINUTES: u16 = 1;
pub const DEFAULT_SECONDS: u16 = 0;
