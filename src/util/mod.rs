//! Utility functions module
//!
//! Contains helper functions for clock-style time formatting.

pub mod format;

// Re-export commonly used functions
pub use format::{format_field, format_hms};
