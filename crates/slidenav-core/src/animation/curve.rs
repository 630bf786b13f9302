#![forbid(unsafe_code)]

//! Timing curves for timed transition runs.
//!
//! Scrubbing (`set_progress`) is always linear; a curve only shapes the
//! time → progress mapping of a timed run.

/// Easing applied to normalized run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum TimingCurve {
    /// Constant speed.
    Linear,
    /// Decelerating. Used for programmatic pushes and interactive completion.
    #[default]
    EaseOut,
    /// Accelerating.
    EaseIn,
    /// Smooth S-curve.
    EaseInOut,
}

impl TimingCurve {
    /// Map normalized time `t` (clamped to [0, 1]) to normalized progress.
    ///
    /// Every curve maps 0 → 0 and 1 → 1 and never overshoots.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseIn => t * t * t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TimingCurve; 4] = [
        TimingCurve::Linear,
        TimingCurve::EaseOut,
        TimingCurve::EaseIn,
        TimingCurve::EaseInOut,
    ];

    #[test]
    fn endpoints_fixed() {
        for curve in ALL {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} at 0");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-12, "{curve:?} at 1");
        }
    }

    #[test]
    fn clamps_input() {
        for curve in ALL {
            assert_eq!(curve.apply(-0.5), 0.0);
            assert!((curve.apply(1.5) - 1.0).abs() < 1e-12);
            assert_eq!(curve.apply(f64::NAN), 0.0);
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(TimingCurve::EaseOut.apply(0.5) > TimingCurve::Linear.apply(0.5));
        assert!(TimingCurve::EaseIn.apply(0.5) < TimingCurve::Linear.apply(0.5));
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in ALL {
            let mut prev = 0.0_f64;
            for i in 0..=100 {
                let v = curve.apply(f64::from(i) / 100.0);
                assert!(v >= prev - 1e-12, "{curve:?} not monotonic at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn ease_in_out_symmetric_midpoint() {
        assert!((TimingCurve::EaseInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }
}
