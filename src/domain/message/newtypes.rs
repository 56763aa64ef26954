// SPDX-License-Identifier: MPL-2.0
//! Display duration newtype.

use std::time::Duration;

/// How long a message stays visible before it dismisses itself.
///
/// A zero duration means the message never auto-dismisses: it stays until
/// tapped or cancelled. Construction never fails; negative, `NaN`, infinite
/// and unrepresentably large inputs all collapse to zero.
///
/// # Example
///
/// ```
/// use message_bar::domain::message::DisplayDuration;
/// use std::time::Duration;
///
/// let five = DisplayDuration::from_secs_f64(5.0);
/// assert_eq!(five.auto_dismiss_after(), Some(Duration::from_secs(5)));
///
/// // Negative input is clamped to "no timer"
/// assert!(DisplayDuration::from_secs_f64(-1.0).is_until_dismissed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayDuration(Duration);

impl DisplayDuration {
    /// Three seconds, the duration used when a request omits one.
    pub const DEFAULT: Self = Self(Duration::from_secs(3));

    /// Stays on screen until tapped or cancelled.
    pub const UNTIL_DISMISSED: Self = Self(Duration::ZERO);

    /// Creates a duration from seconds, clamping invalid input to zero.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return Self::UNTIL_DISMISSED;
        }
        Duration::try_from_secs_f64(secs)
            .map(Self)
            .unwrap_or(Self::UNTIL_DISMISSED)
    }

    /// Returns the timer length, or `None` when no timer should be armed.
    #[must_use]
    pub fn auto_dismiss_after(self) -> Option<Duration> {
        (!self.0.is_zero()).then_some(self.0)
    }

    /// Returns true if this duration never triggers an auto-dismiss.
    #[must_use]
    pub fn is_until_dismissed(self) -> bool {
        self.0.is_zero()
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0.as_secs_f64()
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}
