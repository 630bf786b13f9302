#![forbid(unsafe_code)]

//! Parallax slide animation.
//!
//! - [`TimingCurve`]: easing curves for timed runs.
//! - [`TransitionAnimator`]: computes both screens' transforms for a push or
//!   pop at a given progress, scrubbed or driven by `tick`.

pub mod animator;
pub mod curve;

use std::fmt;
use std::time::Duration;

pub use animator::{AnimatorPhase, TransitionAnimator, TransitionFrame};
pub use curve::TimingCurve;

/// Navigation direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum TransitionOperation {
    /// Navigate forward; the incoming screen enters from the trailing edge.
    Push,
    /// Navigate back; the outgoing screen exits toward the trailing edge.
    Pop,
}

impl TransitionOperation {
    /// Sign of a forward drag along the primary axis in left-to-right
    /// layouts: push follows a leftward drag, pop a rightward one.
    #[inline]
    #[must_use]
    pub const fn forward_sign(self) -> f64 {
        match self {
            Self::Push => -1.0,
            Self::Pop => 1.0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pop => "pop",
        }
    }
}

impl fmt::Display for TransitionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole milliseconds in `d`, saturating at `u64::MAX`.
pub(crate) fn saturating_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Whole microseconds in `d`, saturating at `u64::MAX`.
pub(crate) fn saturating_micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

/// How a transition resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Progress reached 1: the navigation change stands.
    Completed,
    /// Progress returned to 0: the navigation change is undone.
    Cancelled,
}

impl TransitionOutcome {
    #[inline]
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}
