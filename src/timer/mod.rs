//! Countdown timer module
//!
//! Contains the display-independent countdown state machine driven by the
//! application's per-second tick.

pub mod countdown;

pub use countdown::{Countdown, Phase};
