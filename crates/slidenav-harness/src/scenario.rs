#![forbid(unsafe_code)]

//! Built-in named traces against the message-list fixture.
//!
//! All scenarios use a 400 pt container so thresholds read directly: a row
//! swipe activates past 25 pt, a release completes past 120 pt or with more
//! than 500 pt of forward momentum.

use slidenav_core::{GesturePhase, LayoutDirection};

use crate::trace::{GestureStep, Trace, TraceStep};

/// Container width of every built-in scenario.
pub const SCENARIO_WIDTH: f64 = 400.0;

/// Name and one-line description of each built-in scenario.
pub const SCENARIOS: &[(&str, &str)] = &[
    ("tap-push-pop", "Tap a message, then press back"),
    ("swipe-push-complete", "Row swipe past 30% pushes the detail screen"),
    ("swipe-push-cancel", "Short, slow row swipe springs back"),
    ("fling-push", "Short row swipe with a fast fling completes"),
    ("back-swipe-cancel", "Edge back-swipe dragged back before release"),
    ("back-swipe-complete", "Edge back-swipe past 30% pops the detail screen"),
    ("rtl-back-swipe", "Edge back-swipe in a right-to-left layout"),
];

/// Look up a built-in scenario by name.
#[must_use]
pub fn builtin(name: &str) -> Option<Trace> {
    let description = SCENARIOS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, d)| (*d).to_owned())?;
    let (layout_direction, steps) = match name {
        "tap-push-pop" => (
            None,
            vec![
                TraceStep::Push { message: 1 },
                settle(),
                TraceStep::Pop,
                settle(),
            ],
        ),
        "swipe-push-complete" => (
            None,
            vec![
                TraceStep::SwipeRow { message: 2 },
                gesture(GesturePhase::Began, -6.0),
                gesture(GesturePhase::Changed, -30.0),
                gesture(GesturePhase::Changed, -120.0),
                gesture(GesturePhase::Changed, -200.0),
                gesture(GesturePhase::Ended, -200.0),
                settle(),
            ],
        ),
        "swipe-push-cancel" => (
            None,
            vec![
                TraceStep::SwipeRow { message: 2 },
                gesture(GesturePhase::Began, -6.0),
                gesture(GesturePhase::Changed, -30.0),
                gesture(GesturePhase::Changed, -60.0),
                gesture(GesturePhase::Ended, -60.0),
                settle(),
            ],
        ),
        "fling-push" => (
            None,
            vec![
                TraceStep::SwipeRow { message: 4 },
                gesture(GesturePhase::Changed, -30.0),
                gesture(GesturePhase::Changed, -50.0),
                TraceStep::Gesture(
                    GestureStep::new(GesturePhase::Ended, -50.0).with_predicted_dx(-650.0),
                ),
                settle(),
            ],
        ),
        "back-swipe-cancel" => (
            None,
            vec![
                TraceStep::Push { message: 2 },
                settle(),
                TraceStep::BackSwipe,
                gesture(GesturePhase::Began, 10.0),
                gesture(GesturePhase::Changed, 200.0),
                gesture(GesturePhase::Changed, 60.0),
                gesture(GesturePhase::Ended, 60.0),
                settle(),
            ],
        ),
        "back-swipe-complete" => (
            None,
            vec![
                TraceStep::Push { message: 2 },
                settle(),
                TraceStep::BackSwipe,
                gesture(GesturePhase::Began, 10.0),
                gesture(GesturePhase::Changed, 200.0),
                gesture(GesturePhase::Ended, 200.0),
                settle(),
            ],
        ),
        "rtl-back-swipe" => (
            Some(LayoutDirection::RightToLeft),
            vec![
                TraceStep::Push { message: 4 },
                settle(),
                TraceStep::BackSwipe,
                gesture(GesturePhase::Began, -10.0),
                gesture(GesturePhase::Changed, -220.0),
                gesture(GesturePhase::Ended, -220.0),
                settle(),
            ],
        ),
        _ => return None,
    };
    Some(Trace {
        name: name.to_owned(),
        description,
        container_width: Some(SCENARIO_WIDTH),
        layout_direction,
        steps,
    })
}

/// Every built-in scenario, in listing order.
#[must_use]
pub fn all() -> Vec<Trace> {
    SCENARIOS
        .iter()
        .filter_map(|(name, _)| builtin(name))
        .collect()
}

fn gesture(phase: GesturePhase, dx: f64) -> TraceStep {
    TraceStep::Gesture(GestureStep::new(phase, dx))
}

fn settle() -> TraceStep {
    TraceStep::Settle {
        frame_ms: crate::trace::DEFAULT_FRAME_MS,
    }
}
