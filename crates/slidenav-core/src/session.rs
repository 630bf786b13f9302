#![forbid(unsafe_code)]

//! Interactive transition session: one drag gesture mapped onto one
//! transition.
//!
//! The session is a pure state machine. It never touches the stack or the
//! animator; every [`apply`](InteractiveTransitionSession::apply) returns a
//! [`SessionTransition`] whose [`SessionEffect`] tells the owning controller
//! what to do.
//!
//! ```text
//! Idle -> Armed -> Tracking -> Resolving -> Completed
//!           |                      \-----> Cancelled
//!           \------> Cancelled (rejected or abandoned before activation)
//! ```
//!
//! # Transition table
//!
//! | from      | event                              | to         | effect       |
//! |-----------|------------------------------------|------------|--------------|
//! | Idle      | `Arm`                              | Armed      | `Armed`      |
//! | Armed     | first sample refused by the gate   | Cancelled  | `Rejected`   |
//! | Armed     | sample past activation offset      | Tracking   | `Activated`  |
//! | Armed     | `Drive(f)`                         | Tracking   | `Activated`  |
//! | Armed     | terminal sample, `End`             | Cancelled  | `Abandoned`  |
//! | Tracking  | `Changed` sample, `Drive(f)`       | Tracking   | `Progress`   |
//! | Tracking  | `Ended` sample                     | Resolving  | `Resolve`    |
//! | Tracking  | `Cancelled` / `Failed` sample      | Resolving  | `Resolve` (cancel) |
//! | Tracking  | `End { should_complete }`          | Resolving  | `Resolve`    |
//! | Resolving | `AnimationFinished(outcome)`       | terminal   | `Finished`   |
//!
//! Every other pair is a `Noop` with an explicit reason.
//!
//! # Invariants
//!
//! 1. `progress()` is always in [0.0, 1.0]; it may decrease while tracking.
//! 2. The completion decision is made exactly once, on entering Resolving.
//! 3. A recognizer cancel/fail always resolves to cancel.
//! 4. Terminal states (Completed, Cancelled) accept nothing further.
//! 5. `transition_id` increases by one per applied event, no-ops included.

use crate::animation::{TransitionOperation, TransitionOutcome};
use crate::gesture::{
    ForwardReading, GateRejection, GesturePhase, GestureProfile, GestureSample, LayoutDirection,
};

/// Whether the profile gate has seen the first qualifying sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateCheck {
    Pending,
    Passed,
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, not yet armed.
    Idle,
    /// A qualifying gesture began; no visual or stack change yet.
    Armed,
    /// Past the activation threshold; progress follows the drag.
    Tracking,
    /// Gesture over; the animator is running to 0 or 1.
    Resolving,
    Completed,
    Cancelled,
}

impl SessionState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Armed => "armed",
            Self::Tracking => "tracking",
            Self::Resolving => "resolving",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Completion decision of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionDecision {
    #[default]
    Pending,
    Complete,
    Cancel,
}

/// Input to the session state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A qualifying gesture began.
    Arm,
    /// Raw recognizer sample.
    Sample(GestureSample),
    /// Explicit progress from a host that computes its own percentage.
    Drive(f64),
    /// Explicit end from a host that makes its own decision.
    End { should_complete: bool },
    /// The animator finished the resolving run.
    AnimationFinished(TransitionOutcome),
}

/// Why an event changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionNoopReason {
    /// Event other than `Arm` before arming.
    NotArmed,
    /// `Arm` on a session that is already past Idle.
    AlreadyArmed,
    /// Drag has not moved past the profile's minimum distance.
    BelowMinimumDistance,
    /// Drag points against the operation's forward direction.
    WrongDirection,
    /// Forward drag has not crossed the activation offset yet.
    ThresholdNotReached,
    /// A second `Began` sample while tracking.
    DuplicateBegan,
    /// Gesture input after the decision was made.
    AlreadyResolving,
    /// Animation completion with no resolving run.
    UnexpectedAnimationFinish,
    /// Any event after a terminal state.
    SessionClosed,
    /// Update or end with no session at all (reported by the controller).
    MalformedGestureSequence,
}

/// What the owner of the session must do after one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEffect {
    Armed,
    /// The first sample was refused; nothing to undo.
    Rejected { reason: GateRejection },
    /// Start the visual transition and scrub to `progress`.
    Activated { progress: f64 },
    /// Scrub to `progress`.
    Progress { progress: f64 },
    /// Run the animator to 1 (`should_complete`) or 0.
    Resolve { should_complete: bool, progress: f64 },
    /// Ended before activation; nothing to undo.
    Abandoned,
    /// The resolving run finished; apply or undo the navigation change.
    Finished { outcome: TransitionOutcome },
    Noop { reason: SessionNoopReason },
}

impl SessionEffect {
    #[inline]
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Noop { .. })
    }
}

/// One applied event, with diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionTransition {
    pub transition_id: u64,
    pub from: SessionState,
    pub to: SessionState,
    pub effect: SessionEffect,
}

/// State for one gesture-to-transition mapping.
#[derive(Debug, Clone)]
pub struct InteractiveTransitionSession {
    operation: TransitionOperation,
    profile: GestureProfile,
    container_width: f64,
    layout: LayoutDirection,
    state: SessionState,
    progress: f64,
    decision: CompletionDecision,
    gate: GateCheck,
    activated: bool,
    lead: f64,
    last_reading: Option<ForwardReading>,
    transition_counter: u64,
}

impl InteractiveTransitionSession {
    /// New idle session for `operation`, measured against `container_width`.
    #[must_use]
    pub fn new(
        operation: TransitionOperation,
        profile: GestureProfile,
        container_width: f64,
        layout: LayoutDirection,
    ) -> Self {
        Self {
            operation,
            profile,
            container_width,
            layout,
            state: SessionState::Idle,
            progress: 0.0,
            decision: CompletionDecision::Pending,
            gate: GateCheck::Pending,
            activated: false,
            lead: 0.0,
            last_reading: None,
            transition_counter: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn operation(&self) -> TransitionOperation {
        self.operation
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current progress in [0, 1]; 0 until Tracking.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    #[must_use]
    pub fn decision(&self) -> CompletionDecision {
        self.decision
    }

    #[must_use]
    pub fn profile(&self) -> &GestureProfile {
        &self.profile
    }

    /// Whether the activation threshold has been crossed at some point.
    #[must_use]
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Physical translation of the dragged element (the rubber-banded row),
    /// capped at the activation offset. Zero once the session resolves.
    #[must_use]
    pub fn lead_offset(&self) -> f64 {
        if !matches!(self.state, SessionState::Armed | SessionState::Tracking) {
            return 0.0;
        }
        self.lead * self.operation.forward_sign() * self.layout.sign()
    }

    /// Most recent forward reading of a gesture sample.
    #[must_use]
    pub fn last_reading(&self) -> Option<ForwardReading> {
        self.last_reading
    }

    /// Apply one event.
    pub fn apply(&mut self, event: SessionEvent) -> SessionTransition {
        let from = self.state;
        let effect = match (self.state, event) {
            (SessionState::Idle, SessionEvent::Arm) => {
                self.state = SessionState::Armed;
                SessionEffect::Armed
            }
            (SessionState::Idle, _) => noop(SessionNoopReason::NotArmed),
            (state, SessionEvent::Arm) if !state.is_terminal() => {
                noop(SessionNoopReason::AlreadyArmed)
            }
            (SessionState::Completed | SessionState::Cancelled, _) => {
                noop(SessionNoopReason::SessionClosed)
            }

            (SessionState::Armed, SessionEvent::Sample(sample)) => self.armed_sample(&sample),
            (SessionState::Armed, SessionEvent::Drive(fraction)) => {
                self.state = SessionState::Tracking;
                self.activated = true;
                self.progress = clamp_progress(fraction);
                SessionEffect::Activated {
                    progress: self.progress,
                }
            }
            (SessionState::Armed, SessionEvent::End { .. }) => self.abandon(),

            (SessionState::Tracking, SessionEvent::Sample(sample)) => {
                self.tracking_sample(&sample)
            }
            (SessionState::Tracking, SessionEvent::Drive(fraction)) => {
                self.progress = clamp_progress(fraction);
                SessionEffect::Progress {
                    progress: self.progress,
                }
            }
            (SessionState::Tracking, SessionEvent::End { should_complete }) => {
                self.resolve(should_complete)
            }

            (SessionState::Resolving, SessionEvent::AnimationFinished(outcome)) => {
                self.state = match outcome {
                    TransitionOutcome::Completed => SessionState::Completed,
                    TransitionOutcome::Cancelled => SessionState::Cancelled,
                };
                SessionEffect::Finished { outcome }
            }
            (SessionState::Resolving, _) => noop(SessionNoopReason::AlreadyResolving),
            (_, SessionEvent::AnimationFinished(_)) => {
                noop(SessionNoopReason::UnexpectedAnimationFinish)
            }
            (_, SessionEvent::Arm) => noop(SessionNoopReason::AlreadyArmed),
        };

        self.transition_counter = self.transition_counter.saturating_add(1);
        let transition = SessionTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state,
            effect,
        };
        tracing::debug!(
            message = "session.transition",
            operation = self.operation.as_str(),
            transition_id = transition.transition_id,
            from = from.as_str(),
            to = self.state.as_str(),
            effect = ?transition.effect,
        );
        transition
    }

    fn armed_sample(&mut self, sample: &GestureSample) -> SessionEffect {
        if sample.phase.is_terminal() {
            return self.abandon();
        }
        if !self.profile.is_past_min_distance(sample) {
            return noop(SessionNoopReason::BelowMinimumDistance);
        }

        let reading = self.profile.read(sample, self.operation, self.layout);
        self.last_reading = Some(reading);
        if self.gate == GateCheck::Pending {
            if let Err(reason) = self.profile.admit(&reading) {
                self.state = SessionState::Cancelled;
                self.decision = CompletionDecision::Cancel;
                self.lead = 0.0;
                tracing::debug!(
                    message = "session.rejected",
                    operation = self.operation.as_str(),
                    reason = ?reason,
                );
                return SessionEffect::Rejected { reason };
            }
            self.gate = GateCheck::Passed;
        }

        self.lead = self.profile.lead_offset(reading.distance);
        if reading.distance <= 0.0 {
            return noop(SessionNoopReason::WrongDirection);
        }
        if !self.profile.is_activated(reading.distance) {
            return noop(SessionNoopReason::ThresholdNotReached);
        }

        self.state = SessionState::Tracking;
        self.activated = true;
        self.progress = self.profile.progress(reading.distance, self.container_width);
        SessionEffect::Activated {
            progress: self.progress,
        }
    }

    fn tracking_sample(&mut self, sample: &GestureSample) -> SessionEffect {
        match sample.phase {
            GesturePhase::Began => noop(SessionNoopReason::DuplicateBegan),
            GesturePhase::Cancelled | GesturePhase::Failed => self.resolve(false),
            GesturePhase::Changed | GesturePhase::Ended => {
                let reading = self.profile.read(sample, self.operation, self.layout);
                self.last_reading = Some(reading);
                self.lead = self.profile.lead_offset(reading.distance);
                // Past the origin the drag still counts by its magnitude.
                self.progress = self
                    .profile
                    .progress(reading.distance.abs(), self.container_width);
                if sample.phase == GesturePhase::Ended {
                    let should_complete =
                        self.profile.should_complete(&reading, self.container_width);
                    self.resolve(should_complete)
                } else {
                    SessionEffect::Progress {
                        progress: self.progress,
                    }
                }
            }
        }
    }

    fn resolve(&mut self, should_complete: bool) -> SessionEffect {
        self.state = SessionState::Resolving;
        self.decision = if should_complete {
            CompletionDecision::Complete
        } else {
            CompletionDecision::Cancel
        };
        SessionEffect::Resolve {
            should_complete,
            progress: self.progress,
        }
    }

    fn abandon(&mut self) -> SessionEffect {
        self.state = SessionState::Cancelled;
        self.decision = CompletionDecision::Cancel;
        self.lead = 0.0;
        SessionEffect::Abandoned
    }
}

#[inline]
fn noop(reason: SessionNoopReason) -> SessionEffect {
    SessionEffect::Noop { reason }
}

#[inline]
fn clamp_progress(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Vector2;

    const W: f64 = 400.0;

    fn row_session() -> InteractiveTransitionSession {
        let mut session = InteractiveTransitionSession::new(
            TransitionOperation::Push,
            GestureProfile::row_swipe(),
            W,
            LayoutDirection::LeftToRight,
        );
        session.apply(SessionEvent::Arm);
        session
    }

    fn edge_session(layout: LayoutDirection) -> InteractiveTransitionSession {
        let mut session = InteractiveTransitionSession::new(
            TransitionOperation::Pop,
            GestureProfile::edge_swipe(),
            W,
            layout,
        );
        session.apply(SessionEvent::Arm);
        session
    }

    fn sample(phase: GesturePhase, dx: f64) -> SessionEvent {
        SessionEvent::Sample(GestureSample::horizontal(phase, dx))
    }

    fn fling(dx: f64, momentum: f64) -> SessionEvent {
        SessionEvent::Sample(
            GestureSample::horizontal(GesturePhase::Ended, dx)
                .with_predicted_end(Vector2::horizontal(dx + momentum)),
        )
    }

    // -------------------------------------------------------------------------
    // Arming
    // -------------------------------------------------------------------------

    #[test]
    fn idle_requires_arm() {
        let mut session = InteractiveTransitionSession::new(
            TransitionOperation::Push,
            GestureProfile::row_swipe(),
            W,
            LayoutDirection::LeftToRight,
        );
        let t = session.apply(sample(GesturePhase::Began, -30.0));
        assert_eq!(
            t.effect,
            SessionEffect::Noop {
                reason: SessionNoopReason::NotArmed
            }
        );
        assert_eq!(session.state(), SessionState::Idle);

        let t = session.apply(SessionEvent::Arm);
        assert_eq!(t.effect, SessionEffect::Armed);
        assert_eq!(t.from, SessionState::Idle);
        assert_eq!(t.to, SessionState::Armed);
    }

    #[test]
    fn double_arm_is_noop() {
        let mut session = row_session();
        let t = session.apply(SessionEvent::Arm);
        assert_eq!(
            t.effect,
            SessionEffect::Noop {
                reason: SessionNoopReason::AlreadyArmed
            }
        );
    }

    // -------------------------------------------------------------------------
    // Activation
    // -------------------------------------------------------------------------

    #[test]
    fn row_swipe_activates_past_offset() {
        let mut session = row_session();
        let t = session.apply(sample(GesturePhase::Began, -3.0));
        assert_eq!(
            t.effect,
            SessionEffect::Noop {
                reason: SessionNoopReason::BelowMinimumDistance
            }
        );

        let t = session.apply(sample(GesturePhase::Changed, -20.0));
        assert_eq!(
            t.effect,
            SessionEffect::Noop {
                reason: SessionNoopReason::ThresholdNotReached
            }
        );
        assert_eq!(session.progress(), 0.0);
        assert_eq!(session.lead_offset(), -20.0);

        let t = session.apply(sample(GesturePhase::Changed, -100.0));
        assert_eq!(t.to, SessionState::Tracking);
        match t.effect {
            SessionEffect::Activated { progress } => assert!((progress - 0.2).abs() < 1e-12),
            other => panic!("expected activation, got {other:?}"),
        }
        assert_eq!(session.lead_offset(), -25.0);
    }

    #[test]
    fn row_swipe_ignores_rightward_drag() {
        let mut session = row_session();
        let t = session.apply(sample(GesturePhase::Changed, 60.0));
        assert_eq!(
            t.effect,
            SessionEffect::Noop {
                reason: SessionNoopReason::WrongDirection
            }
        );
        assert_eq!(session.state(), SessionState::Armed);
        assert_eq!(session.lead_offset(), 0.0);
    }

    #[test]
    fn edge_gate_rejects_vertical_drag() {
        let mut session = edge_session(LayoutDirection::LeftToRight);
        let t = session.apply(SessionEvent::Sample(GestureSample::new(
            GesturePhase::Began,
            Vector2::new(3.0, 12.0),
        )));
        assert_eq!(
            t.effect,
            SessionEffect::Rejected {
                reason: GateRejection::NotHorizontal
            }
        );
        assert_eq!(session.state(), SessionState::Cancelled);
        assert!(!session.is_activated());
    }

    #[test]
    fn edge_gate_rejects_leftward_start() {
        let mut session = edge_session(LayoutDirection::LeftToRight);
        let t = session.apply(sample(GesturePhase::Began, -8.0));
        assert_eq!(
            t.effect,
            SessionEffect::Rejected {
                reason: GateRejection::WrongDirection
            }
        );
    }

    #[test]
    fn edge_gate_checked_once() {
        let mut session = edge_session(LayoutDirection::LeftToRight);
        session.apply(sample(GesturePhase::Began, 8.0));
        assert_eq!(session.state(), SessionState::Tracking);
        // Later vertical wobble does not re-run the gate.
        let t = session.apply(SessionEvent::Sample(GestureSample::new(
            GesturePhase::Changed,
            Vector2::new(10.0, 40.0),
        )));
        assert!(matches!(t.effect, SessionEffect::Progress { .. }));
    }

    #[test]
    fn edge_swipe_right_to_left() {
        let mut session = edge_session(LayoutDirection::RightToLeft);
        let t = session.apply(sample(GesturePhase::Began, -40.0));
        match t.effect {
            SessionEffect::Activated { progress } => assert!((progress - 0.1).abs() < 1e-12),
            other => panic!("expected activation, got {other:?}"),
        }
    }

    #[test]
    fn drive_activates_armed_session() {
        let mut session = row_session();
        let t = session.apply(SessionEvent::Drive(1.7));
        assert_eq!(t.effect, SessionEffect::Activated { progress: 1.0 });
        let t = session.apply(SessionEvent::Drive(-0.2));
        assert_eq!(t.effect, SessionEffect::Progress { progress: 0.0 });
    }

    // -------------------------------------------------------------------------
    // Tracking & resolution
    // -------------------------------------------------------------------------

    #[test]
    fn progress_may_decrease() {
        let mut session = edge_session(LayoutDirection::LeftToRight);
        session.apply(sample(GesturePhase::Began, 10.0));
        session.apply(sample(GesturePhase::Changed, 200.0));
        assert_eq!(session.progress(), 0.5);
        session.apply(sample(GesturePhase::Changed, 40.0));
        assert_eq!(session.progress(), 0.1);
        session.apply(sample(GesturePhase::Changed, 0.0));
        assert_eq!(session.progress(), 0.0);
        session.apply(sample(GesturePhase::Changed, -40.0));
        assert_eq!(session.progress(), 0.1);
    }

    #[test]
    fn release_past_origin_completes_by_magnitude() {
        let mut session = row_session();
        session.apply(sample(GesturePhase::Changed, -100.0));
        assert_eq!(session.state(), SessionState::Tracking);

        let t = session.apply(sample(GesturePhase::Changed, 60.0));
        assert!((session.progress() - 35.0 / 375.0).abs() < 1e-12);
        assert_eq!(session.lead_offset(), 0.0);
        assert!(matches!(t.effect, SessionEffect::Progress { .. }));

        let t = session.apply(sample(GesturePhase::Ended, 150.0));
        assert_eq!(t.to, SessionState::Resolving);
        assert!(matches!(
            t.effect,
            SessionEffect::Resolve {
                should_complete: true,
                ..
            }
        ));
        assert!((session.progress() - 125.0 / 375.0).abs() < 1e-12);
    }

    #[test]
    fn ended_far_completes() {
        let mut session = row_session();
        session.apply(sample(GesturePhase::Changed, -60.0));
        let t = session.apply(fling(-130.0, -50.0));
        assert_eq!(t.to, SessionState::Resolving);
        assert!(matches!(
            t.effect,
            SessionEffect::Resolve {
                should_complete: true,
                ..
            }
        ));
        assert_eq!(session.decision(), CompletionDecision::Complete);
    }

    #[test]
    fn ended_fast_completes() {
        let mut session = row_session();
        session.apply(sample(GesturePhase::Changed, -30.0));
        let t = session.apply(fling(-40.0, -600.0));
        assert!(matches!(
            t.effect,
            SessionEffect::Resolve {
                should_complete: true,
                ..
            }
        ));
    }

    #[test]
    fn ended_short_and_slow_cancels() {
        let mut session = row_session();
        session.apply(sample(GesturePhase::Changed, -30.0));
        let t = session.apply(fling(-40.0, -100.0));
        assert!(matches!(
            t.effect,
            SessionEffect::Resolve {
                should_complete: false,
                ..
            }
        ));
        assert_eq!(session.decision(), CompletionDecision::Cancel);
    }

    #[test]
    fn recognizer_failure_forces_cancel() {
        let mut session = row_session();
        session.apply(sample(GesturePhase::Changed, -350.0));
        for phase in [GesturePhase::Cancelled, GesturePhase::Failed] {
            let mut s = session.clone();
            let t = s.apply(sample(phase, -350.0));
            assert!(matches!(
                t.effect,
                SessionEffect::Resolve {
                    should_complete: false,
                    ..
                }
            ));
        }
    }

    #[test]
    fn end_before_activation_abandons() {
        let mut session = row_session();
        session.apply(sample(GesturePhase::Changed, -10.0));
        let t = session.apply(fling(-12.0, -900.0));
        assert_eq!(t.effect, SessionEffect::Abandoned);
        assert_eq!(session.state(), SessionState::Cancelled);
    }

    #[test]
    fn explicit_end_overrides_decision() {
        let mut session = row_session();
        session.apply(SessionEvent::Drive(0.05));
        let t = session.apply(SessionEvent::End {
            should_complete: true,
        });
        assert!(matches!(
            t.effect,
            SessionEffect::Resolve {
                should_complete: true,
                progress,
            } if (progress - 0.05).abs() < 1e-12
        ));
    }

    #[test]
    fn decision_made_once() {
        let mut session = row_session();
        session.apply(SessionEvent::Drive(0.9));
        session.apply(SessionEvent::End {
            should_complete: true,
        });
        let t = session.apply(SessionEvent::End {
            should_complete: false,
        });
        assert_eq!(
            t.effect,
            SessionEffect::Noop {
                reason: SessionNoopReason::AlreadyResolving
            }
        );
        assert_eq!(session.decision(), CompletionDecision::Complete);
        let t = session.apply(sample(GesturePhase::Changed, -10.0));
        assert!(t.effect.is_noop());
    }

    #[test]
    fn animation_finish_closes_session() {
        let mut session = row_session();
        session.apply(SessionEvent::Drive(0.5));
        let early = session.apply(SessionEvent::AnimationFinished(TransitionOutcome::Completed));
        assert_eq!(
            early.effect,
            SessionEffect::Noop {
                reason: SessionNoopReason::UnexpectedAnimationFinish
            }
        );

        session.apply(SessionEvent::End {
            should_complete: false,
        });
        let t = session.apply(SessionEvent::AnimationFinished(TransitionOutcome::Cancelled));
        assert_eq!(
            t.effect,
            SessionEffect::Finished {
                outcome: TransitionOutcome::Cancelled
            }
        );
        assert!(session.state().is_terminal());

        let t = session.apply(SessionEvent::Drive(0.3));
        assert_eq!(
            t.effect,
            SessionEffect::Noop {
                reason: SessionNoopReason::SessionClosed
            }
        );
    }

    #[test]
    fn transition_ids_increase() {
        let mut session = row_session();
        let a = session.apply(sample(GesturePhase::Changed, -1.0));
        let b = session.apply(sample(GesturePhase::Changed, -2.0));
        assert_eq!(a.transition_id + 1, b.transition_id);
        assert_eq!(a.transition_id, 2);
    }

    #[test]
    fn lead_offset_clears_on_resolve() {
        let mut session = row_session();
        session.apply(sample(GesturePhase::Changed, -90.0));
        assert_eq!(session.lead_offset(), -25.0);
        session.apply(sample(GesturePhase::Ended, -90.0));
        assert_eq!(session.lead_offset(), 0.0);
    }
}
