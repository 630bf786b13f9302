#![forbid(unsafe_code)]

//! Parallax slide animator for one push or pop.
//!
//! A [`TransitionAnimator`] is created by [`prepare`](TransitionAnimator::prepare)
//! with both screens mounted, then either scrubbed with
//! [`set_progress`](TransitionAnimator::set_progress) (interactive) or handed
//! straight to [`run_to_completion`](TransitionAnimator::run_to_completion)
//! (programmatic). Timed runs advance only through
//! [`tick`](TransitionAnimator::tick).
//!
//! # Geometry
//!
//! With container width `W` and parallax distance `P = W / divisor`:
//!
//! | operation | incoming at `f` | outgoing at `f` |
//! |-----------|-----------------|-----------------|
//! | push      | `W * (1 - f)`   | `-P * f`        |
//! | pop       | `-P * (1 - f)`  | `W * f`         |
//!
//! Right-to-left layouts mirror every translation.
//!
//! # State machine
//!
//! ```text
//! Scrubbing -> Running -> Finished(outcome)
//! ```
//!
//! # Invariants
//!
//! 1. `fraction()` is always in [0.0, 1.0], whatever the input.
//! 2. `set_progress` only updates transforms; it never starts a run.
//! 3. Once `Finished`, the animator ignores every further call.
//! 4. On `Completed` the outgoing screen is unmounted; on `Cancelled` the
//!    incoming screen is unmounted. Either way all transforms end at rest.
//!
//! # Failure Modes
//!
//! - Non-positive container width: clamped to 1.0.
//! - Zero run duration: the run finishes on the next `tick`.
//! - NaN progress: treated as 0.0.

use std::time::Duration;

use super::{TimingCurve, TransitionOperation, TransitionOutcome};
use crate::gesture::LayoutDirection;
use crate::render::RenderSink;
use crate::screen::Screen;

/// Smallest container width accepted by the animator.
const MIN_CONTAINER_WIDTH: f64 = 1.0;

/// Lifecycle of an animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorPhase {
    /// Prepared; progress follows `set_progress`.
    Scrubbing,
    /// A timed run is in progress.
    Running,
    /// The run ended; the animator is inert.
    Finished(TransitionOutcome),
}

/// Translations of both screens at one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub outgoing_x: f64,
    pub incoming_x: f64,
}

/// Container measurements a transition is laid out against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideGeometry {
    container_width: f64,
    parallax_distance: f64,
    layout_direction: LayoutDirection,
}

impl SlideGeometry {
    /// Geometry for a container `container_width` wide, with the parallax
    /// distance `container_width / parallax_divisor`.
    #[must_use]
    pub fn new(
        container_width: f64,
        parallax_divisor: f64,
        layout_direction: LayoutDirection,
    ) -> Self {
        let container_width = if container_width.is_finite() {
            container_width.max(MIN_CONTAINER_WIDTH)
        } else {
            MIN_CONTAINER_WIDTH
        };
        let parallax_distance = if parallax_divisor.is_finite() && parallax_divisor > 0.0 {
            container_width / parallax_divisor
        } else {
            0.0
        };
        Self {
            container_width,
            parallax_distance,
            layout_direction,
        }
    }

    #[inline]
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    #[inline]
    #[must_use]
    pub fn parallax_distance(&self) -> f64 {
        self.parallax_distance
    }

    #[inline]
    #[must_use]
    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    /// Translations for `operation` at `fraction` (clamped).
    #[must_use]
    pub fn frame(&self, operation: TransitionOperation, fraction: f64) -> TransitionFrame {
        let f = clamp_fraction(fraction);
        let w = self.container_width;
        let p = self.parallax_distance;
        let (outgoing_x, incoming_x) = match operation {
            TransitionOperation::Push => (-p * f, w * (1.0 - f)),
            TransitionOperation::Pop => (w * f, -p * (1.0 - f)),
        };
        let sign = self.layout_direction.sign();
        TransitionFrame {
            outgoing_x: outgoing_x * sign,
            incoming_x: incoming_x * sign,
        }
    }
}

/// A timed interpolation toward 0 or 1.
#[derive(Debug, Clone, Copy)]
struct Run {
    from: f64,
    target: TransitionOutcome,
    duration: Duration,
    elapsed: Duration,
    curve: TimingCurve,
}

impl Run {
    fn target_fraction(&self) -> f64 {
        target_fraction(self.target)
    }

    /// Normalized run time in [0, 1].
    fn time(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

/// Animator for a single push or pop between two screens.
pub struct TransitionAnimator<C> {
    operation: TransitionOperation,
    outgoing: Screen<C>,
    incoming: Screen<C>,
    geometry: SlideGeometry,
    fraction: f64,
    phase: AnimatorPhase,
    run: Option<Run>,
}

impl<C> std::fmt::Debug for TransitionAnimator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionAnimator")
            .field("operation", &self.operation)
            .field("outgoing", &self.outgoing.id())
            .field("incoming", &self.incoming.id())
            .field("fraction", &self.fraction)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl<C> TransitionAnimator<C> {
    /// Mount both screens and place them at progress 0.
    ///
    /// For a push the incoming screen starts a full container width off
    /// screen; for a pop it starts one parallax distance behind. The
    /// outgoing screen starts at rest.
    pub fn prepare<S: RenderSink<C> + ?Sized>(
        operation: TransitionOperation,
        outgoing: Screen<C>,
        incoming: Screen<C>,
        geometry: SlideGeometry,
        sink: &mut S,
    ) -> Self {
        tracing::debug!(
            message = "animator.prepare",
            operation = operation.as_str(),
            outgoing = outgoing.id().get(),
            incoming = incoming.id().get(),
            container_width = geometry.container_width(),
        );
        sink.set_visible(&outgoing, true);
        sink.set_visible(&incoming, true);
        let animator = Self {
            operation,
            outgoing,
            incoming,
            geometry,
            fraction: 0.0,
            phase: AnimatorPhase::Scrubbing,
            run: None,
        };
        animator.apply(sink);
        animator
    }

    #[inline]
    #[must_use]
    pub fn operation(&self) -> TransitionOperation {
        self.operation
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> AnimatorPhase {
        self.phase
    }

    /// Current progress in [0, 1].
    #[inline]
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    #[must_use]
    pub fn outgoing(&self) -> &Screen<C> {
        &self.outgoing
    }

    #[must_use]
    pub fn incoming(&self) -> &Screen<C> {
        &self.incoming
    }

    #[must_use]
    pub fn geometry(&self) -> SlideGeometry {
        self.geometry
    }

    /// Whether a timed run is in progress.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, AnimatorPhase::Running)
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, AnimatorPhase::Finished(_))
    }

    /// Current translations.
    #[must_use]
    pub fn frame(&self) -> TransitionFrame {
        self.geometry.frame(self.operation, self.fraction)
    }

    /// Scrub to `fraction` (clamped to [0, 1]).
    ///
    /// Returns `false` and changes nothing once a run has started or
    /// finished.
    pub fn set_progress<S: RenderSink<C> + ?Sized>(&mut self, fraction: f64, sink: &mut S) -> bool {
        if !matches!(self.phase, AnimatorPhase::Scrubbing) {
            return false;
        }
        self.fraction = clamp_fraction(fraction);
        tracing::trace!(
            message = "animator.progress",
            operation = self.operation.as_str(),
            fraction = self.fraction,
        );
        self.apply(sink);
        true
    }

    /// Wall-clock time a run toward `target` takes when the full 0 → 1 run
    /// takes `full`: proportional to the distance still to cover.
    #[must_use]
    pub fn remaining_duration(&self, target: TransitionOutcome, full: Duration) -> Duration {
        let distance = (target_fraction(target) - self.fraction).abs();
        full.mul_f64(distance.clamp(0.0, 1.0))
    }

    /// Start a timed run from the current progress toward `target`.
    ///
    /// Calling this while already running re-targets from the current
    /// progress. Returns `false` once finished.
    pub fn run_to_completion(
        &mut self,
        target: TransitionOutcome,
        duration: Duration,
        curve: TimingCurve,
    ) -> bool {
        if self.is_finished() {
            return false;
        }
        tracing::debug!(
            message = "animator.run",
            operation = self.operation.as_str(),
            from = self.fraction,
            target = target_fraction(target),
            duration_ms = super::saturating_millis(duration),
            curve = ?curve,
        );
        self.run = Some(Run {
            from: self.fraction,
            target,
            duration,
            elapsed: Duration::ZERO,
            curve,
        });
        self.phase = AnimatorPhase::Running;
        true
    }

    /// Advance a run by `dt`. Returns the outcome on the tick that finishes
    /// the run, `None` otherwise.
    pub fn tick<S: RenderSink<C> + ?Sized>(
        &mut self,
        dt: Duration,
        sink: &mut S,
    ) -> Option<TransitionOutcome> {
        let run = self.run.as_mut()?;
        run.elapsed = run.elapsed.saturating_add(dt);
        let t = run.time();
        let eased = run.curve.apply(t);
        let fraction = run.from + (run.target_fraction() - run.from) * eased;
        let target = run.target;
        self.fraction = clamp_fraction(fraction);

        if t < 1.0 {
            self.apply(sink);
            return None;
        }

        self.run = None;
        self.fraction = target_fraction(target);
        self.phase = AnimatorPhase::Finished(target);
        self.settle(target, sink);
        tracing::debug!(
            message = "animator.finished",
            operation = self.operation.as_str(),
            outcome = ?target,
        );
        Some(target)
    }

    fn apply<S: RenderSink<C> + ?Sized>(&self, sink: &mut S) {
        let frame = self.frame();
        sink.set_transform(&self.outgoing, frame.outgoing_x);
        sink.set_transform(&self.incoming, frame.incoming_x);
    }

    /// Reset transforms and unmount whichever screen the outcome discards.
    fn settle<S: RenderSink<C> + ?Sized>(&self, outcome: TransitionOutcome, sink: &mut S) {
        sink.set_transform(&self.outgoing, 0.0);
        sink.set_transform(&self.incoming, 0.0);
        match outcome {
            TransitionOutcome::Completed => sink.set_visible(&self.outgoing, false),
            TransitionOutcome::Cancelled => sink.set_visible(&self.incoming, false),
        }
    }
}

#[inline]
fn target_fraction(target: TransitionOutcome) -> f64 {
    match target {
        TransitionOutcome::Completed => 1.0,
        TransitionOutcome::Cancelled => 0.0,
    }
}

#[inline]
fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}
