//! TUI screen components
//!
//! Contains individual screen implementations for different application states.

pub mod config;
pub mod countdown;
pub mod finished;

pub use config::{ConfigAction, ConfigScreen};
pub use countdown::CountdownScreen;
pub use finished::FinishedScreen;
