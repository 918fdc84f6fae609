//! Clock-style time formatting
//!
//! Provides functions for rendering second counts and spinner fields the way
//! a digital clock would.

/// Format a second count as `HH:MM:SS` with zero-padded fields
///
/// Hours widen past two digits for large totals rather than wrapping at 24.
/// Negative inputs are clamped to zero; the countdown never produces one,
/// but the display must not show negative time either way.
///
/// # Examples
/// ```
/// use tickdown::util::format::format_hms;
///
/// assert_eq!(format_hms(0), "00:00:00");
/// assert_eq!(format_hms(3661), "01:01:01");
/// assert_eq!(format_hms(-5), "00:00:00");
/// ```
pub fn format_hms(total_seconds: i64) -> String {
    let total = total_seconds.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a single spinner field zero-padded to two digits
///
/// # Examples
/// ```
/// use tickdown::util::format::format_field;
///
/// assert_eq!(format_field(7), "07");
/// assert_eq!(format_field(23), "23");
/// ```
pub fn format_field(value: u16) -> String {
    format!("{:02}", value)
}
