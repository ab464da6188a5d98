//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::DisplayMode;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Cycle to the next display mode: Off → TimestampOnly → TimestampAndSize → Off
///
/// # Examples
/// ```
/// use arbor::DisplayMode;
/// use arbor::logic::ui::cycle_display_mode;
///
/// assert_eq!(cycle_display_mode(DisplayMode::Off), DisplayMode::TimestampOnly);
/// assert_eq!(cycle_display_mode(DisplayMode::TimestampOnly), DisplayMode::TimestampAndSize);
/// assert_eq!(cycle_display_mode(DisplayMode::TimestampAndSize), DisplayMode::Off);
/// ```
pub fn cycle_display_mode(current: DisplayMode) -> DisplayMode {
    match current {
        DisplayMode::Off => DisplayMode::TimestampOnly,
        DisplayMode::TimestampOnly => DisplayMode::TimestampAndSize,
        DisplayMode::TimestampAndSize => DisplayMode::Off,
    }
}

/// Check whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_display_mode_round_trip() {
        let mut mode = DisplayMode::default();
        for _ in 0..3 {
            mode = cycle_display_mode(mode);
        }
        assert_eq!(mode, DisplayMode::default());
    }

    #[test]
    fn test_toast_dismiss_threshold() {
        assert!(!should_dismiss_toast(1499));
        assert!(should_dismiss_toast(1500));
    }
}
