// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.

use std::time::Duration;

// =============================================================================
// Toast Duration Bounds
// =============================================================================

/// Auto-dismiss bounds in milliseconds (1s to 30s).
pub mod toast_duration_bounds {
    /// Shortest auto-dismiss window.
    pub const MIN_MS: u64 = 1_000;
    /// Longest auto-dismiss window.
    pub const MAX_MS: u64 = 30_000;
    /// Default auto-dismiss window.
    pub const DEFAULT_MS: u64 = 5_000;
}

// =============================================================================
// ToastDuration
// =============================================================================

/// How long a toast stays visible before it is dismissed automatically.
///
/// Always within 1–30 seconds, so a misconfigured value can neither flash a
/// toast invisibly nor pin it on screen.
///
/// # Example
///
/// ```
/// use docliq_toasts::domain::toast::ToastDuration;
///
/// let duration = ToastDuration::from_millis(2_500);
/// assert_eq!(duration.millis(), 2_500);
///
/// // Values outside range are clamped
/// assert_eq!(ToastDuration::from_millis(0).millis(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// Creates a duration from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(
            toast_duration_bounds::MIN_MS,
            toast_duration_bounds::MAX_MS,
        ))
    }

    /// Returns the window in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the window as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(toast_duration_bounds::DEFAULT_MS)
    }
}
