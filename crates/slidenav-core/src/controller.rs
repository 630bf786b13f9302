#![forbid(unsafe_code)]

//! Single-flight navigation controller.
//!
//! [`NavigationController`] owns the [`ScreenStack`], the render sink, and
//! exactly one active-transition slot. Every entry point either fills the
//! empty slot, feeds the transition already in it, or is refused.
//!
//! # Entry points
//!
//! | call                  | slot empty                 | slot occupied              |
//! |-----------------------|----------------------------|----------------------------|
//! | `push` / `pop`        | start a programmatic run   | `TransitionInProgress`     |
//! | `begin_interactive`   | install an armed session   | `TransitionInProgress`     |
//! | `handle_gesture` etc. | `Noop` record              | forwarded to the session   |
//! | `tick`                | nothing                    | advance the running run    |
//!
//! # Stack mutation
//!
//! A push lands on the stack eagerly: a programmatic push at call time, an
//! interactive push when its session starts tracking. A cancelled
//! interactive push takes the screen off again. A pop is always deferred
//! until its run completes, so a cancelled pop never touches the stack.
//!
//! # Invariants
//!
//! 1. At most one session and one animator exist at any time.
//! 2. The stack is never empty.
//! 3. The slot is cleared exactly once per transition, on the tick that
//!    finishes its run or on the event that abandons it.
//! 4. After a transition settles, every screen still mounted is at rest.

use std::time::Duration;

use crate::animation::{TransitionAnimator, TransitionOperation, TransitionOutcome};
use crate::config::NavigationConfig;
use crate::error::NavigationError;
use crate::gesture::GestureSample;
use crate::render::RenderSink;
use crate::screen::Screen;
use crate::session::{
    InteractiveTransitionSession, SessionEffect, SessionEvent, SessionNoopReason, SessionState,
    SessionTransition,
};
use crate::stack::ScreenStack;

/// Interactive navigation to start.
pub enum NavigationRequest<C> {
    /// Push `Screen` once the gesture activates.
    Push(Screen<C>),
    /// Pop the current top.
    Pop,
}

impl<C> NavigationRequest<C> {
    #[must_use]
    pub fn operation(&self) -> TransitionOperation {
        match self {
            Self::Push(_) => TransitionOperation::Push,
            Self::Pop => TransitionOperation::Pop,
        }
    }
}

impl<C> Clone for NavigationRequest<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Push(screen) => Self::Push(screen.clone()),
            Self::Pop => Self::Pop,
        }
    }
}

impl<C> std::fmt::Debug for NavigationRequest<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Push(screen) => f.debug_tuple("Push").field(&screen.id()).finish(),
            Self::Pop => f.write_str("Pop"),
        }
    }
}

/// A settled transition, reported by [`NavigationController::tick`].
pub struct NavigationEvent<C> {
    pub operation: TransitionOperation,
    pub outcome: TransitionOutcome,
    pub interactive: bool,
    /// The screen pushed (push) or popped (pop), whatever the outcome.
    pub screen: Screen<C>,
}

impl<C> NavigationEvent<C> {
    /// Whether the stack changed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.outcome.is_completed()
    }
}

impl<C> Clone for NavigationEvent<C> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation,
            outcome: self.outcome,
            interactive: self.interactive,
            screen: self.screen.clone(),
        }
    }
}

impl<C> std::fmt::Debug for NavigationEvent<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationEvent")
            .field("operation", &self.operation)
            .field("outcome", &self.outcome)
            .field("interactive", &self.interactive)
            .field("screen", &self.screen.id())
            .finish()
    }
}

/// The one transition in flight.
enum ActiveTransition<C> {
    Programmatic {
        animator: TransitionAnimator<C>,
    },
    Interactive {
        session: InteractiveTransitionSession,
        outgoing: Screen<C>,
        incoming: Screen<C>,
        /// Created when the session starts tracking.
        animator: Option<TransitionAnimator<C>>,
    },
}

impl<C> ActiveTransition<C> {
    fn operation(&self) -> TransitionOperation {
        match self {
            Self::Programmatic { animator } => animator.operation(),
            Self::Interactive { session, .. } => session.operation(),
        }
    }

    fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive { .. })
    }

    fn busy_error(&self) -> NavigationError {
        NavigationError::TransitionInProgress {
            operation: self.operation(),
            interactive: self.is_interactive(),
        }
    }

    fn animator(&self) -> Option<&TransitionAnimator<C>> {
        match self {
            Self::Programmatic { animator } => Some(animator),
            Self::Interactive { animator, .. } => animator.as_ref(),
        }
    }
}

/// Owner of the screen stack and the single active transition.
pub struct NavigationController<C, S> {
    stack: ScreenStack<C>,
    sink: S,
    config: NavigationConfig,
    container_width: f64,
    active: Option<ActiveTransition<C>>,
}

impl<C, S: RenderSink<C>> NavigationController<C, S> {
    /// Controller showing `root` at rest.
    pub fn new(root: Screen<C>, config: NavigationConfig, mut sink: S) -> Self {
        sink.set_visible(&root, true);
        sink.set_transform(&root, 0.0);
        let container_width = config.container_width;
        Self {
            stack: ScreenStack::new(root),
            sink,
            config,
            container_width,
            active: None,
        }
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// The screen a host should treat as current.
    #[must_use]
    pub fn current_top(&self) -> &Screen<C> {
        self.stack.top()
    }

    #[must_use]
    pub fn stack(&self) -> &ScreenStack<C> {
        &self.stack
    }

    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Whether the slot is occupied.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// State of the interactive session, if one is active.
    #[must_use]
    pub fn session_state(&self) -> Option<SessionState> {
        match &self.active {
            Some(ActiveTransition::Interactive { session, .. }) => Some(session.state()),
            _ => None,
        }
    }

    /// Operation in flight, if any.
    #[must_use]
    pub fn active_operation(&self) -> Option<TransitionOperation> {
        self.active.as_ref().map(ActiveTransition::operation)
    }

    /// Animator progress of the transition in flight, if it has one.
    #[must_use]
    pub fn transition_fraction(&self) -> Option<f64> {
        self.active
            .as_ref()
            .and_then(ActiveTransition::animator)
            .map(TransitionAnimator::fraction)
    }

    /// Rubber-band offset of the element driving an interactive push.
    #[must_use]
    pub fn lead_offset(&self) -> f64 {
        match &self.active {
            Some(ActiveTransition::Interactive { session, .. }) => session.lead_offset(),
            _ => 0.0,
        }
    }

    /// Width used by the next transition. Transitions already in flight keep
    /// the width they were prepared with.
    pub fn set_container_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.container_width = width;
        } else {
            tracing::warn!(message = "nav.width_rejected", width);
        }
    }

    // -------------------------------------------------------------------------
    // Programmatic navigation
    // -------------------------------------------------------------------------

    /// Push `screen` with a timed, non-interruptible run.
    pub fn push(&mut self, screen: Screen<C>) -> Result<(), NavigationError> {
        self.ensure_idle(TransitionOperation::Push)?;
        let outgoing = self.stack.top().clone();
        self.stack.push(screen.clone());
        tracing::debug!(
            message = "nav.push",
            screen = screen.id().get(),
            depth = self.stack.depth(),
        );
        self.start_programmatic(TransitionOperation::Push, outgoing, screen);
        Ok(())
    }

    /// Pop the top screen with a timed run. The stack changes when the run
    /// finishes.
    pub fn pop(&mut self) -> Result<(), NavigationError> {
        self.ensure_idle(TransitionOperation::Pop)?;
        let (outgoing, incoming) = self.pop_pair()?;
        tracing::debug!(
            message = "nav.pop",
            screen = outgoing.id().get(),
            depth = self.stack.depth(),
        );
        self.start_programmatic(TransitionOperation::Pop, outgoing, incoming);
        Ok(())
    }

    fn start_programmatic(
        &mut self,
        operation: TransitionOperation,
        outgoing: Screen<C>,
        incoming: Screen<C>,
    ) {
        let geometry = self.config.geometry(self.container_width);
        let mut animator =
            TransitionAnimator::prepare(operation, outgoing, incoming, geometry, &mut self.sink);
        animator.run_to_completion(
            TransitionOutcome::Completed,
            self.config.duration_for(operation),
            self.config.curve_for(operation),
        );
        self.active = Some(ActiveTransition::Programmatic { animator });
    }

    // -------------------------------------------------------------------------
    // Interactive navigation
    // -------------------------------------------------------------------------

    /// Install an armed session for `request`.
    ///
    /// Nothing moves and the stack is untouched until the gesture crosses
    /// the activation threshold.
    pub fn begin_interactive(
        &mut self,
        request: NavigationRequest<C>,
    ) -> Result<SessionTransition, NavigationError> {
        let operation = request.operation();
        self.ensure_idle(operation)?;
        let (outgoing, incoming) = match request {
            NavigationRequest::Push(screen) => (self.stack.top().clone(), screen),
            NavigationRequest::Pop => self.pop_pair()?,
        };

        let mut session = InteractiveTransitionSession::new(
            operation,
            self.config.profile_for(operation),
            self.container_width,
            self.config.layout_direction,
        );
        let transition = session.apply(SessionEvent::Arm);
        tracing::debug!(
            message = "nav.begin_interactive",
            operation = operation.as_str(),
            outgoing = outgoing.id().get(),
            incoming = incoming.id().get(),
        );
        self.active = Some(ActiveTransition::Interactive {
            session,
            outgoing,
            incoming,
            animator: None,
        });
        Ok(transition)
    }

    /// Route a raw recognizer sample to the active session.
    pub fn handle_gesture(&mut self, sample: GestureSample) -> SessionTransition {
        self.drive_session(SessionEvent::Sample(sample))
    }

    /// Set interactive progress directly.
    pub fn update_interactive(&mut self, fraction: f64) -> SessionTransition {
        self.drive_session(SessionEvent::Drive(fraction))
    }

    /// End the interactive gesture with the host's own decision.
    ///
    /// Calling it again, or with no session, changes nothing.
    pub fn end_interactive(&mut self, should_complete: bool) -> SessionTransition {
        self.drive_session(SessionEvent::End { should_complete })
    }

    fn drive_session(&mut self, event: SessionEvent) -> SessionTransition {
        let programmatic = self.active.is_some();
        let Some(ActiveTransition::Interactive {
            session,
            outgoing,
            incoming,
            animator,
        }) = &mut self.active
        else {
            tracing::debug!(
                message = "nav.gesture_ignored",
                event = ?event,
                programmatic,
            );
            return SessionTransition {
                transition_id: 0,
                from: SessionState::Idle,
                to: SessionState::Idle,
                effect: SessionEffect::Noop {
                    reason: SessionNoopReason::MalformedGestureSequence,
                },
            };
        };

        let transition = session.apply(event);
        let operation = session.operation();
        match transition.effect {
            SessionEffect::Activated { progress } => {
                let geometry = self.config.geometry(self.container_width);
                let mut prepared = TransitionAnimator::prepare(
                    operation,
                    outgoing.clone(),
                    incoming.clone(),
                    geometry,
                    &mut self.sink,
                );
                prepared.set_progress(progress, &mut self.sink);
                *animator = Some(prepared);
                if operation == TransitionOperation::Push {
                    self.stack.push(incoming.clone());
                }
                tracing::debug!(
                    message = "nav.interactive_activated",
                    operation = operation.as_str(),
                    progress,
                    depth = self.stack.depth(),
                );
            }
            SessionEffect::Progress { progress } => {
                if let Some(animator) = animator.as_mut() {
                    animator.set_progress(progress, &mut self.sink);
                }
            }
            SessionEffect::Resolve {
                should_complete, ..
            } => {
                let target = if should_complete {
                    TransitionOutcome::Completed
                } else {
                    TransitionOutcome::Cancelled
                };
                match animator.as_mut() {
                    Some(animator) => {
                        let duration = animator
                            .remaining_duration(target, self.config.duration_for(operation));
                        animator.run_to_completion(target, duration, self.config.completion_curve);
                    }
                    None => {
                        tracing::warn!(
                            message = "nav.resolve_without_animator",
                            operation = operation.as_str(),
                        );
                        self.active = None;
                    }
                }
            }
            SessionEffect::Rejected { .. } | SessionEffect::Abandoned => {
                tracing::debug!(
                    message = "nav.interactive_dropped",
                    operation = operation.as_str(),
                    effect = ?transition.effect,
                );
                self.active = None;
            }
            SessionEffect::Armed | SessionEffect::Finished { .. } | SessionEffect::Noop { .. } => {}
        }
        transition
    }

    // -------------------------------------------------------------------------
    // Frame clock
    // -------------------------------------------------------------------------

    /// Advance the running animation by `dt`.
    ///
    /// Returns the settled transition on the tick that finishes it. The
    /// stack mutation (if any) has been applied by then and the slot is
    /// free again.
    pub fn tick(&mut self, dt: Duration) -> Option<NavigationEvent<C>> {
        let active = self.active.as_mut()?;
        let _span = tracing::debug_span!(
            "nav.tick",
            operation = active.operation().as_str(),
            dt_us = crate::animation::saturating_micros(dt),
        )
        .entered();

        let outcome = match active {
            ActiveTransition::Programmatic { animator } => animator.tick(dt, &mut self.sink)?,
            ActiveTransition::Interactive {
                session, animator, ..
            } => {
                let outcome = animator.as_mut()?.tick(dt, &mut self.sink)?;
                session.apply(SessionEvent::AnimationFinished(outcome));
                outcome
            }
        };

        let active = self.active.take()?;
        Some(self.settle(active, outcome))
    }

    fn settle(&mut self, active: ActiveTransition<C>, outcome: TransitionOutcome) -> NavigationEvent<C> {
        let interactive = active.is_interactive();
        let operation = active.operation();
        let screen = match active {
            ActiveTransition::Programmatic { animator } => match operation {
                TransitionOperation::Push => animator.incoming().clone(),
                TransitionOperation::Pop => animator.outgoing().clone(),
            },
            ActiveTransition::Interactive {
                outgoing, incoming, ..
            } => match operation {
                TransitionOperation::Push => incoming,
                TransitionOperation::Pop => outgoing,
            },
        };

        let undo_push = operation == TransitionOperation::Push && !outcome.is_completed();
        let apply_pop = operation == TransitionOperation::Pop && outcome.is_completed();
        if (undo_push || apply_pop) && self.stack.top().id() == screen.id() {
            if let Err(err) = self.stack.pop() {
                tracing::warn!(message = "nav.settle_pop_failed", error = %err);
            }
        }

        tracing::debug!(
            message = "nav.settled",
            operation = operation.as_str(),
            outcome = ?outcome,
            interactive,
            screen = screen.id().get(),
            depth = self.stack.depth(),
        );
        NavigationEvent {
            operation,
            outcome,
            interactive,
            screen,
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn ensure_idle(&self, requested: TransitionOperation) -> Result<(), NavigationError> {
        match &self.active {
            None => Ok(()),
            Some(active) => {
                let err = active.busy_error();
                tracing::warn!(
                    message = "nav.rejected",
                    requested = requested.as_str(),
                    error = %err,
                );
                Err(err)
            }
        }
    }

    /// (top, below top) for a pop; refuses at the root.
    fn pop_pair(&self) -> Result<(Screen<C>, Screen<C>), NavigationError> {
        let Some(below) = self.stack.below_top() else {
            tracing::warn!(message = "nav.rejected", requested = "pop", error = "empty stack");
            return Err(NavigationError::EmptyStack);
        };
        Ok((self.stack.top().clone(), below.clone()))
    }
}

impl<C, S> std::fmt::Debug for NavigationController<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("depth", &self.stack.depth())
            .field("top", &self.stack.top().id())
            .field("active", &self.active.as_ref().map(ActiveTransition::operation))
            .field("container_width", &self.container_width)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{GesturePhase, Vector2};
    use crate::render::RecordingSink;

    const W: f64 = 400.0;
    const FRAME: Duration = Duration::from_millis(16);

    type Controller = NavigationController<&'static str, RecordingSink>;

    fn controller() -> (Controller, Screen<&'static str>) {
        let root = Screen::new("list");
        let config = NavigationConfig {
            container_width: W,
            ..NavigationConfig::default()
        };
        (
            NavigationController::new(root.clone(), config, RecordingSink::new()),
            root,
        )
    }

    fn settle(nav: &mut Controller) -> NavigationEvent<&'static str> {
        for _ in 0..1_000 {
            if let Some(event) = nav.tick(FRAME) {
                return event;
            }
        }
        panic!("transition never settled");
    }

    fn labels(nav: &Controller) -> Vec<&'static str> {
        nav.stack().iter().map(|s| *s.content()).collect()
    }

    fn swipe(nav: &mut Controller, phase: GesturePhase, dx: f64) -> SessionTransition {
        nav.handle_gesture(GestureSample::horizontal(phase, dx))
    }

    // -------------------------------------------------------------------------
    // Programmatic
    // -------------------------------------------------------------------------

    #[test]
    fn push_then_pop() {
        let (mut nav, root) = controller();
        let detail = Screen::new("detail");
        nav.push(detail.clone()).unwrap();
        assert_eq!(labels(&nav), ["list", "detail"]);
        assert!(nav.is_transitioning());

        let event = settle(&mut nav);
        assert_eq!(event.operation, TransitionOperation::Push);
        assert!(event.is_completed());
        assert!(!event.interactive);
        assert_eq!(nav.current_top(), &detail);
        assert!(!nav.sink().is_visible(root.id()));
        assert!(nav.sink().is_visible(detail.id()));

        nav.pop().unwrap();
        assert_eq!(labels(&nav), ["list", "detail"], "pop is deferred");
        let event = settle(&mut nav);
        assert_eq!(event.screen, detail);
        assert_eq!(labels(&nav), ["list"]);
        assert_eq!(nav.current_top(), &root);
        assert!(nav.sink().is_visible(root.id()));
        assert!(!nav.sink().is_visible(detail.id()));
        assert_eq!(nav.sink().translation(root.id()), 0.0);
    }

    #[test]
    fn pop_at_root_fails() {
        let (mut nav, _) = controller();
        assert_eq!(nav.pop(), Err(NavigationError::EmptyStack));
        assert_eq!(
            nav.begin_interactive(NavigationRequest::Pop).unwrap_err(),
            NavigationError::EmptyStack
        );
        assert_eq!(nav.stack().depth(), 1);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn second_request_while_running_is_refused() {
        let (mut nav, _) = controller();
        nav.push(Screen::new("detail")).unwrap();
        let busy = NavigationError::TransitionInProgress {
            operation: TransitionOperation::Push,
            interactive: false,
        };
        assert_eq!(nav.push(Screen::new("other")), Err(busy));
        assert_eq!(nav.pop(), Err(busy));
        assert_eq!(
            nav.begin_interactive(NavigationRequest::Pop).unwrap_err(),
            busy
        );
        assert_eq!(labels(&nav), ["list", "detail"]);
    }

    #[test]
    fn push_run_lasts_half_a_second() {
        let (mut nav, _) = controller();
        nav.push(Screen::new("detail")).unwrap();
        assert!(nav.tick(Duration::from_millis(490)).is_none());
        assert!(nav.tick(Duration::from_millis(10)).is_some());
    }

    #[test]
    fn oversized_frame_settles_in_one_tick() {
        let (mut nav, _) = controller();
        nav.push(Screen::new("detail")).unwrap();
        let event = nav.tick(Duration::MAX).expect("run finishes");
        assert!(event.is_completed());
        assert_eq!(labels(&nav), ["list", "detail"]);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn gesture_calls_during_programmatic_run_are_noops() {
        let (mut nav, _) = controller();
        nav.push(Screen::new("detail")).unwrap();
        let t = nav.update_interactive(0.5);
        assert_eq!(
            t.effect,
            SessionEffect::Noop {
                reason: SessionNoopReason::MalformedGestureSequence
            }
        );
        assert_eq!(nav.transition_fraction(), Some(0.0));
    }

    // -------------------------------------------------------------------------
    // Interactive
    // -------------------------------------------------------------------------

    #[test]
    fn interactive_push_completes() {
        let (mut nav, root) = controller();
        let detail = Screen::new("detail");
        nav.begin_interactive(NavigationRequest::Push(detail.clone()))
            .unwrap();
        assert_eq!(nav.session_state(), Some(SessionState::Armed));

        swipe(&mut nav, GesturePhase::Began, -10.0);
        assert_eq!(labels(&nav), ["list"], "not yet activated");
        assert!(!nav.sink().is_visible(detail.id()));

        swipe(&mut nav, GesturePhase::Changed, -100.0);
        assert_eq!(labels(&nav), ["list", "detail"]);
        assert!((nav.sink().translation(detail.id()) - 0.8 * W).abs() < 1e-9);

        let t = swipe(&mut nav, GesturePhase::Ended, -200.0);
        assert!(matches!(
            t.effect,
            SessionEffect::Resolve {
                should_complete: true,
                ..
            }
        ));
        let event = settle(&mut nav);
        assert!(event.is_completed());
        assert!(event.interactive);
        assert_eq!(nav.current_top(), &detail);
        assert!(!nav.sink().is_visible(root.id()));
        assert_eq!(nav.session_state(), None);
    }

    #[test]
    fn interactive_push_cancel_removes_screen() {
        let (mut nav, root) = controller();
        let detail = Screen::new("detail");
        nav.begin_interactive(NavigationRequest::Push(detail.clone()))
            .unwrap();
        swipe(&mut nav, GesturePhase::Changed, -60.0);
        assert_eq!(nav.stack().depth(), 2);
        swipe(&mut nav, GesturePhase::Ended, -60.0);

        let event = settle(&mut nav);
        assert_eq!(event.outcome, TransitionOutcome::Cancelled);
        assert_eq!(labels(&nav), ["list"]);
        assert_eq!(nav.current_top(), &root);
        assert!(!nav.sink().is_visible(detail.id()));
        assert!(nav.sink().is_visible(root.id()));
    }

    #[test]
    fn interactive_pop_half_then_cancel() {
        let (mut nav, root) = controller();
        let detail = Screen::new("detail");
        nav.push(detail.clone()).unwrap();
        settle(&mut nav);

        nav.begin_interactive(NavigationRequest::Pop).unwrap();
        nav.update_interactive(0.5);
        assert_eq!(nav.sink().translation(detail.id()), 0.5 * W);
        nav.end_interactive(false);
        let event = settle(&mut nav);
        assert_eq!(event.outcome, TransitionOutcome::Cancelled);
        assert_eq!(labels(&nav), ["list", "detail"]);
        assert_eq!(nav.current_top(), &detail);
        assert!(!nav.sink().is_visible(root.id()));
        assert_eq!(nav.sink().translation(detail.id()), 0.0);
    }

    #[test]
    fn interactive_pop_completes_on_fling() {
        let (mut nav, root) = controller();
        nav.push(Screen::new("detail")).unwrap();
        settle(&mut nav);

        nav.begin_interactive(NavigationRequest::Pop).unwrap();
        swipe(&mut nav, GesturePhase::Began, 20.0);
        nav.handle_gesture(
            GestureSample::horizontal(GesturePhase::Ended, 40.0)
                .with_predicted_end(Vector2::horizontal(700.0)),
        );
        let event = settle(&mut nav);
        assert!(event.is_completed());
        assert_eq!(nav.current_top(), &root);
    }

    #[test]
    fn end_twice_equals_once() {
        let (mut nav, _) = controller();
        nav.push(Screen::new("detail")).unwrap();
        settle(&mut nav);
        nav.begin_interactive(NavigationRequest::Pop).unwrap();
        nav.update_interactive(0.4);
        nav.end_interactive(true);
        let again = nav.end_interactive(false);
        assert_eq!(
            again.effect,
            SessionEffect::Noop {
                reason: SessionNoopReason::AlreadyResolving
            }
        );
        let event = settle(&mut nav);
        assert!(event.is_completed());
        let after = nav.end_interactive(true);
        assert_eq!(
            after.effect,
            SessionEffect::Noop {
                reason: SessionNoopReason::MalformedGestureSequence
            }
        );
        assert_eq!(nav.stack().depth(), 1);
    }

    #[test]
    fn abandoned_gesture_frees_slot() {
        let (mut nav, _) = controller();
        nav.begin_interactive(NavigationRequest::Push(Screen::new("detail")))
            .unwrap();
        swipe(&mut nav, GesturePhase::Changed, -12.0);
        let t = swipe(&mut nav, GesturePhase::Ended, -12.0);
        assert_eq!(t.effect, SessionEffect::Abandoned);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.stack().depth(), 1);
        assert!(nav.tick(FRAME).is_none());
    }

    #[test]
    fn rejected_back_swipe_frees_slot() {
        let (mut nav, _) = controller();
        nav.push(Screen::new("detail")).unwrap();
        settle(&mut nav);
        nav.begin_interactive(NavigationRequest::Pop).unwrap();
        nav.handle_gesture(GestureSample::new(
            GesturePhase::Began,
            Vector2::new(2.0, 30.0),
        ));
        assert!(!nav.is_transitioning());
        assert_eq!(nav.stack().depth(), 2);
    }

    #[test]
    fn interactive_blocks_programmatic() {
        let (mut nav, _) = controller();
        nav.begin_interactive(NavigationRequest::Push(Screen::new("detail")))
            .unwrap();
        assert_eq!(
            nav.push(Screen::new("other")),
            Err(NavigationError::TransitionInProgress {
                operation: TransitionOperation::Push,
                interactive: true,
            })
        );
    }

    #[test]
    fn finishing_near_end_is_faster() {
        let run_time = |fraction: f64| {
            let (mut nav, _) = controller();
            nav.begin_interactive(NavigationRequest::Push(Screen::new("detail")))
                .unwrap();
            nav.update_interactive(fraction);
            nav.end_interactive(true);
            let mut elapsed = Duration::ZERO;
            loop {
                elapsed += FRAME;
                if nav.tick(FRAME).is_some() {
                    return elapsed;
                }
            }
        };
        assert!(run_time(0.8) < run_time(0.1));
    }

    #[test]
    fn lead_offset_follows_row_drag() {
        let (mut nav, _) = controller();
        nav.begin_interactive(NavigationRequest::Push(Screen::new("detail")))
            .unwrap();
        swipe(&mut nav, GesturePhase::Changed, -15.0);
        assert_eq!(nav.lead_offset(), -15.0);
        swipe(&mut nav, GesturePhase::Changed, -80.0);
        assert_eq!(nav.lead_offset(), -25.0);
    }

    #[test]
    fn container_width_applies_to_next_transition() {
        let (mut nav, _) = controller();
        nav.set_container_width(-5.0);
        assert_eq!(nav.container_width(), W);
        nav.set_container_width(800.0);
        let detail = Screen::new("detail");
        nav.push(detail.clone()).unwrap();
        assert_eq!(nav.sink().translation(detail.id()), 800.0);
    }
}
