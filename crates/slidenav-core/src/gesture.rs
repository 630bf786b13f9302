#![forbid(unsafe_code)]

//! Gesture input model: raw drag samples and the per-gesture policies that
//! read them.
//!
//! A recognizer outside this crate reports [`GestureSample`]s. Everything
//! here is pure: the session feeds samples through a [`GestureProfile`] to
//! get a gate verdict, a progress value and, at the end, a completion
//! decision.
//!
//! # Axis conventions
//!
//! The primary axis is x. Each operation has a forward direction in
//! left-to-right layouts (push: leftward, pop: rightward). Right-to-left
//! layouts negate translation, predicted end and velocity before any
//! comparison, so every policy below works on *forward* distances where
//! positive always means "toward completing the transition".
//!
//! # Defaults
//!
//! | profile    | operation | activation | min distance | gate                 |
//! |------------|-----------|------------|--------------|----------------------|
//! | row swipe  | push      | 25 pt      | 5 pt         | none                 |
//! | edge swipe | pop       | 0 pt       | 0 pt         | horizontal dominance |
//!
//! Completion: forward distance beyond 30% of the container, or forward
//! momentum above 500 pt.

use std::time::Duration;

use crate::animation::TransitionOperation;

/// Fraction of the container width a drag must cover to complete on release.
pub const DEFAULT_DISTANCE_RATIO: f64 = 0.3;

/// Forward momentum (pt) above which a release completes regardless of
/// distance.
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 500.0;

/// Drag distance a list row absorbs before the push transition starts.
pub const ROW_SWIPE_ACTIVATION_OFFSET: f64 = 25.0;

/// Movement below which a row drag is not yet a drag.
pub const ROW_SWIPE_MIN_DISTANCE: f64 = 5.0;

/// 2-D vector in container points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector along the primary axis only.
    #[must_use]
    pub const fn horizontal(x: f64) -> Self {
        Self { x, y: 0.0 }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Recognizer state carried by a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    /// Whether the recognizer will deliver no further samples.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }

    /// Cancelled or failed: the recognizer gave up, forcing a cancel.
    #[inline]
    #[must_use]
    pub const fn is_abort(self) -> bool {
        matches!(self, Self::Cancelled | Self::Failed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Began => "began",
            Self::Changed => "changed",
            Self::Ended => "ended",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }
}

/// One report from a drag recognizer.
///
/// `translation` and `predicted_end_translation` are cumulative since the
/// drag began; `velocity` is instantaneous, in points per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    pub translation: Vector2,
    pub predicted_end_translation: Vector2,
    pub velocity: Vector2,
    /// Time since the recognizer started tracking.
    pub timestamp: Duration,
}

impl GestureSample {
    /// Sample whose predicted end equals its translation (no momentum).
    #[must_use]
    pub fn new(phase: GesturePhase, translation: Vector2) -> Self {
        Self {
            phase,
            translation,
            predicted_end_translation: translation,
            velocity: Vector2::ZERO,
            timestamp: Duration::ZERO,
        }
    }

    /// Horizontal-only sample at `dx`.
    #[must_use]
    pub fn horizontal(phase: GesturePhase, dx: f64) -> Self {
        Self::new(phase, Vector2::horizontal(dx))
    }

    #[must_use]
    pub fn with_predicted_end(mut self, predicted_end_translation: Vector2) -> Self {
        self.predicted_end_translation = predicted_end_translation;
        self
    }

    #[must_use]
    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Duration) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Remaining momentum: predicted end minus current translation.
    #[must_use]
    pub fn momentum(&self) -> Vector2 {
        Vector2::new(
            self.predicted_end_translation.x - self.translation.x,
            self.predicted_end_translation.y - self.translation.y,
        )
    }
}

/// Horizontal layout direction of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    /// `1.0` for left-to-right, `-1.0` for right-to-left.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::LeftToRight => 1.0,
            Self::RightToLeft => -1.0,
        }
    }
}

/// Which sample field a completion decision reads as velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum VelocitySource {
    /// `predicted_end_translation - translation`.
    #[default]
    PredictedMomentum,
    /// The recognizer's instantaneous velocity.
    Instantaneous,
}

/// Release rule: complete when far enough or fast enough.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct CompletionPolicy {
    /// Fraction of the container width that completes on its own.
    pub distance_ratio: f64,
    /// Forward velocity magnitude that completes on its own.
    pub velocity_threshold: f64,
    pub velocity_source: VelocitySource,
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        Self {
            distance_ratio: DEFAULT_DISTANCE_RATIO,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            velocity_source: VelocitySource::PredictedMomentum,
        }
    }
}

impl CompletionPolicy {
    /// Decide from forward distance and forward velocity.
    ///
    /// Distance counts by magnitude, so a drag released on the far side of
    /// its origin still completes when it travelled far enough. Only the
    /// velocity has to point forward.
    #[must_use]
    pub fn should_complete(
        &self,
        forward_distance: f64,
        forward_velocity: f64,
        container_width: f64,
    ) -> bool {
        let far_enough = forward_distance.abs() > container_width * self.distance_ratio;
        let fast_enough =
            forward_velocity.abs() > self.velocity_threshold && forward_velocity > 0.0;
        far_enough || fast_enough
    }
}

/// Why a gesture's first sample was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    /// The drag starts against the operation's forward direction.
    WrongDirection,
    /// Vertical movement dominates; the drag belongs to a scroll view.
    NotHorizontal,
}

/// A sample projected onto an operation's forward direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardReading {
    /// Forward translation (negative = dragged backward).
    pub distance: f64,
    /// Absolute cross-axis translation.
    pub cross: f64,
    /// Forward velocity per the profile's [`VelocitySource`].
    pub velocity: f64,
}

/// Per-gesture tuning: activation, gate, and release rule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct GestureProfile {
    /// Forward distance absorbed before the transition starts tracking.
    pub activation_offset: f64,
    /// Total movement below which samples are ignored.
    pub min_distance: f64,
    /// Refuse drags whose first sample is not forward and mostly horizontal.
    pub require_horizontal_dominance: bool,
    pub completion: CompletionPolicy,
}

impl Default for GestureProfile {
    fn default() -> Self {
        Self::edge_swipe()
    }
}

impl GestureProfile {
    /// List-row swipe that pushes a detail screen.
    #[must_use]
    pub fn row_swipe() -> Self {
        Self {
            activation_offset: ROW_SWIPE_ACTIVATION_OFFSET,
            min_distance: ROW_SWIPE_MIN_DISTANCE,
            require_horizontal_dominance: false,
            completion: CompletionPolicy::default(),
        }
    }

    /// Back-swipe from the leading edge that pops the top screen.
    #[must_use]
    pub fn edge_swipe() -> Self {
        Self {
            activation_offset: 0.0,
            min_distance: 0.0,
            require_horizontal_dominance: true,
            completion: CompletionPolicy::default(),
        }
    }

    /// Project `sample` onto `operation`'s forward direction.
    #[must_use]
    pub fn read(
        &self,
        sample: &GestureSample,
        operation: TransitionOperation,
        layout: LayoutDirection,
    ) -> ForwardReading {
        let sign = layout.sign() * operation.forward_sign();
        let velocity_x = match self.completion.velocity_source {
            VelocitySource::PredictedMomentum => sample.momentum().x,
            VelocitySource::Instantaneous => sample.velocity.x,
        };
        ForwardReading {
            distance: sample.translation.x * sign,
            cross: sample.translation.y.abs(),
            velocity: velocity_x * sign,
        }
    }

    /// Whether the drag has moved enough to count at all.
    #[must_use]
    pub fn is_past_min_distance(&self, sample: &GestureSample) -> bool {
        sample.translation.length() >= self.min_distance
    }

    /// Gate applied to the first sample of a drag.
    pub fn admit(&self, reading: &ForwardReading) -> Result<(), GateRejection> {
        if !self.require_horizontal_dominance {
            return Ok(());
        }
        if reading.distance <= 0.0 {
            return Err(GateRejection::WrongDirection);
        }
        if reading.distance.abs() <= reading.cross {
            return Err(GateRejection::NotHorizontal);
        }
        Ok(())
    }

    /// Whether `forward_distance` has crossed the activation offset.
    ///
    /// A zero offset activates on any forward movement.
    #[must_use]
    pub fn is_activated(&self, forward_distance: f64) -> bool {
        forward_distance > self.activation_offset
    }

    /// Transition progress for a forward distance.
    ///
    /// `clamp((forward - offset) / (width - offset), 0, 1)`.
    #[must_use]
    pub fn progress(&self, forward_distance: f64, container_width: f64) -> f64 {
        let span = container_width - self.activation_offset;
        if span.is_nan() || span <= 0.0 {
            return if forward_distance > self.activation_offset {
                1.0
            } else {
                0.0
            };
        }
        let p = (forward_distance - self.activation_offset) / span;
        if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
    }

    /// Forward rubber-band offset of the dragged element, capped at the
    /// activation offset.
    #[must_use]
    pub fn lead_offset(&self, forward_distance: f64) -> f64 {
        forward_distance.clamp(0.0, self.activation_offset.max(0.0))
    }

    /// Release decision for a final reading.
    #[must_use]
    pub fn should_complete(&self, reading: &ForwardReading, container_width: f64) -> bool {
        self.completion
            .should_complete(reading.distance, reading.velocity, container_width)
    }
}
