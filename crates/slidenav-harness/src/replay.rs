#![forbid(unsafe_code)]

//! Deterministic trace replay.
//!
//! [`replay`] drives a fresh [`NavigationController`] over the message-list
//! fixture with a [`RecordingSink`], step by step, and collects a
//! [`ReplayReport`]. Refused navigation requests are recorded, not fatal;
//! only malformed traces (unknown message ids) abort a replay.

use std::fmt::Write as _;
use std::time::Duration;

use serde::Serialize;
use slidenav_core::{
    NavigationConfig, NavigationController, NavigationEvent, NavigationRequest, RecordingSink,
    Screen, SessionEffect, SessionState, SessionTransition,
};

use crate::error::{HarnessError, Result};
use crate::fixture::{AppScreen, MessageListFixture};
use crate::trace::{MAX_SETTLE_FRAMES, Trace, TraceStep};

type Controller = NavigationController<AppScreen, RecordingSink>;

/// A settled transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub step: usize,
    pub operation: String,
    pub outcome: String,
    pub interactive: bool,
    pub screen: String,
    pub elapsed_ms: u64,
}

/// One session state-machine transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionRecord {
    pub step: usize,
    pub transition_id: u64,
    pub from: String,
    pub to: String,
    pub effect: String,
}

/// A refused request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectionRecord {
    pub step: usize,
    pub reason: String,
}

/// Outcome of one replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub trace: String,
    /// Stack labels bottom-to-top after the last step.
    pub final_stack: Vec<String>,
    pub top: String,
    pub transitioning: bool,
    pub events: Vec<EventRecord>,
    pub transitions: Vec<TransitionRecord>,
    pub rejections: Vec<RejectionRecord>,
    pub render_calls: usize,
    pub transform_calls: usize,
    pub elapsed_ms: u64,
}

impl ReplayReport {
    /// Number of settled transitions that changed the stack.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.events.iter().filter(|e| e.outcome == "completed").count()
    }

    /// Human-readable summary.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "trace: {}", self.trace);
        let _ = writeln!(out, "final stack: [{}]", self.final_stack.join(", "));
        let _ = writeln!(out, "top: {}", self.top);
        if self.transitioning {
            let _ = writeln!(out, "warning: a transition was still in flight");
        }
        let _ = writeln!(out, "events:");
        for event in &self.events {
            let _ = writeln!(
                out,
                "  step {:>3} @ {:>5} ms  {} {} {} ({})",
                event.step,
                event.elapsed_ms,
                if event.interactive { "interactive" } else { "programmatic" },
                event.operation,
                event.screen,
                event.outcome,
            );
        }
        if !self.rejections.is_empty() {
            let _ = writeln!(out, "rejected:");
            for rejection in &self.rejections {
                let _ = writeln!(out, "  step {:>3}  {}", rejection.step, rejection.reason);
            }
        }
        let _ = writeln!(
            out,
            "session transitions: {}, render calls: {} ({} transforms), clock: {} ms",
            self.transitions.len(),
            self.render_calls,
            self.transform_calls,
            self.elapsed_ms,
        );
        out
    }
}

/// Replay `trace` against a fresh controller configured by `config`.
pub fn replay(trace: &Trace, config: &NavigationConfig) -> Result<ReplayReport> {
    trace.validate()?;
    let mut config = config.clone();
    if let Some(width) = trace.container_width {
        config.container_width = width;
    }
    if let Some(direction) = trace.layout_direction {
        config.layout_direction = direction;
    }

    let mut run = Replay {
        nav: NavigationController::new(
            Screen::new(AppScreen::MessageList),
            config,
            RecordingSink::new(),
        ),
        fixture: MessageListFixture::new(),
        clock: Duration::ZERO,
        events: Vec::new(),
        transitions: Vec::new(),
        rejections: Vec::new(),
    };

    let _span = tracing::info_span!("replay", trace = %trace.name, steps = trace.steps.len()).entered();
    for (index, step) in trace.steps.iter().enumerate() {
        run.step(index, step)?;
    }
    Ok(run.finish(&trace.name))
}

struct Replay {
    nav: Controller,
    fixture: MessageListFixture,
    clock: Duration,
    events: Vec<EventRecord>,
    transitions: Vec<TransitionRecord>,
    rejections: Vec<RejectionRecord>,
}

impl Replay {
    fn step(&mut self, index: usize, step: &TraceStep) -> Result<()> {
        tracing::debug!(message = "replay.step", step = index, action = ?step);
        match step {
            TraceStep::Push { message } => {
                let screen = self.detail_screen(*message, index)?;
                if let Err(err) = self.nav.push(screen) {
                    self.reject(index, err.to_string());
                }
            }
            TraceStep::Pop => {
                if let Err(err) = self.nav.pop() {
                    self.reject(index, err.to_string());
                }
            }
            TraceStep::SwipeRow { message } => {
                let screen = self.detail_screen(*message, index)?;
                let AppScreen::MessageDetail(msg) = *screen.content() else {
                    return Err(HarnessError::UnknownMessage {
                        id: *message,
                        step: index,
                    });
                };
                let claimed = self.fixture.active_swipe().is_none();
                if let Err(refusal) = self.fixture.begin_row_swipe(&msg) {
                    self.reject(index, format!("message {message}: {refusal}"));
                    return Ok(());
                }
                match self.nav.begin_interactive(NavigationRequest::Push(screen)) {
                    Ok(transition) => self.record_transition(index, &transition),
                    Err(err) => {
                        // A row that was already swiping keeps its claim.
                        if claimed {
                            self.fixture.end_row_swipe();
                        }
                        self.reject(index, err.to_string());
                    }
                }
            }
            TraceStep::BackSwipe => match self.nav.begin_interactive(NavigationRequest::Pop) {
                Ok(transition) => self.record_transition(index, &transition),
                Err(err) => self.reject(index, err.to_string()),
            },
            TraceStep::Gesture(gesture) => {
                let transition = self.nav.handle_gesture(gesture.to_sample());
                self.record_transition(index, &transition);
            }
            TraceStep::Drive { fraction } => {
                let transition = self.nav.update_interactive(*fraction);
                self.record_transition(index, &transition);
            }
            TraceStep::End { complete } => {
                let transition = self.nav.end_interactive(*complete);
                self.record_transition(index, &transition);
            }
            TraceStep::Tick { ms } => self.tick(index, Duration::from_millis(*ms)),
            TraceStep::Settle { frame_ms } => {
                let frame = Duration::from_millis(*frame_ms);
                let mut frames = 0;
                while self.nav.is_transitioning() && frames < MAX_SETTLE_FRAMES {
                    self.tick(index, frame);
                    frames += 1;
                }
                if self.nav.is_transitioning() {
                    tracing::warn!(
                        message = "replay.settle_incomplete",
                        step = index,
                        session = ?self.nav.session_state(),
                    );
                }
            }
            TraceStep::Resize { width } => self.nav.set_container_width(*width),
        }
        self.release_row_if_idle();
        Ok(())
    }

    fn detail_screen(&self, id: u32, step: usize) -> Result<Screen<AppScreen>> {
        self.fixture
            .message(id)
            .map(|message| Screen::new(AppScreen::MessageDetail(message)))
            .ok_or(HarnessError::UnknownMessage { id, step })
    }

    fn tick(&mut self, index: usize, dt: Duration) {
        self.clock = self.clock.saturating_add(dt);
        if let Some(event) = self.nav.tick(dt) {
            self.record_event(index, &event);
        }
    }

    /// The swipe row is free again once its session stops following the finger.
    fn release_row_if_idle(&mut self) {
        if self.fixture.active_swipe().is_none() {
            return;
        }
        if !matches!(
            self.nav.session_state(),
            Some(SessionState::Armed | SessionState::Tracking)
        ) {
            self.fixture.end_row_swipe();
        }
    }

    fn reject(&mut self, step: usize, reason: String) {
        tracing::info!(message = "replay.rejected", step, reason = %reason);
        self.rejections.push(RejectionRecord { step, reason });
    }

    fn record_transition(&mut self, step: usize, transition: &SessionTransition) {
        self.transitions.push(TransitionRecord {
            step,
            transition_id: transition.transition_id,
            from: transition.from.as_str().to_owned(),
            to: transition.to.as_str().to_owned(),
            effect: describe_effect(&transition.effect),
        });
    }

    fn record_event(&mut self, step: usize, event: &NavigationEvent<AppScreen>) {
        self.events.push(EventRecord {
            step,
            operation: event.operation.to_string(),
            outcome: if event.is_completed() {
                "completed".to_owned()
            } else {
                "cancelled".to_owned()
            },
            interactive: event.interactive,
            screen: event.screen.content().to_string(),
            elapsed_ms: u64::try_from(self.clock.as_millis()).unwrap_or(u64::MAX),
        });
    }

    fn finish(self, trace: &str) -> ReplayReport {
        let sink = self.nav.sink();
        ReplayReport {
            trace: trace.to_owned(),
            final_stack: self
                .nav
                .stack()
                .iter()
                .map(|screen| screen.content().to_string())
                .collect(),
            top: self.nav.current_top().content().to_string(),
            transitioning: self.nav.is_transitioning(),
            events: self.events,
            transitions: self.transitions,
            rejections: self.rejections,
            render_calls: sink.calls().len(),
            transform_calls: sink.transform_count(),
            elapsed_ms: u64::try_from(self.clock.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

fn describe_effect(effect: &SessionEffect) -> String {
    match effect {
        SessionEffect::Armed => "armed".to_owned(),
        SessionEffect::Rejected { reason } => format!("rejected({reason:?})"),
        SessionEffect::Activated { progress } => format!("activated({progress:.3})"),
        SessionEffect::Progress { progress } => format!("progress({progress:.3})"),
        SessionEffect::Resolve {
            should_complete,
            progress,
        } => format!(
            "resolve({} from {progress:.3})",
            if *should_complete { "complete" } else { "cancel" }
        ),
        SessionEffect::Abandoned => "abandoned".to_owned(),
        SessionEffect::Finished { outcome } => format!("finished({outcome:?})"),
        SessionEffect::Noop { reason } => format!("noop({reason:?})"),
    }
}
