#![forbid(unsafe_code)]

//! Gesture trace format.
//!
//! A trace is a JSON document listing host actions in order:
//!
//! ```json
//! {
//!   "name": "swipe-push-complete",
//!   "container_width": 400.0,
//!   "steps": [
//!     { "op": "swipe_row", "message": 2 },
//!     { "op": "gesture", "phase": "changed", "dx": -120.0 },
//!     { "op": "gesture", "phase": "ended", "dx": -200.0 },
//!     { "op": "settle" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use slidenav_core::{GesturePhase, GestureSample, LayoutDirection, Vector2};

use crate::error::{HarnessError, Result};

/// Frame interval used by `settle` when a trace does not specify one.
pub const DEFAULT_FRAME_MS: u64 = 16;

/// Upper bound on frames a single `settle` step may run.
pub const MAX_SETTLE_FRAMES: usize = 10_000;

/// A scripted session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Overrides the configured container width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_width: Option<f64>,
    /// Overrides the configured layout direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_direction: Option<LayoutDirection>,
    pub steps: Vec<TraceStep>,
}

/// One host action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TraceStep {
    /// Tap a message row: programmatic push of its detail screen.
    Push { message: u32 },
    /// Back button: programmatic pop.
    Pop,
    /// Start a row swipe on a message (interactive push).
    SwipeRow { message: u32 },
    /// Start a back-swipe from the leading edge (interactive pop).
    BackSwipe,
    /// Raw recognizer sample.
    Gesture(GestureStep),
    /// Host-computed progress.
    Drive { fraction: f64 },
    /// Host-decided end of the gesture.
    End { complete: bool },
    /// Advance the frame clock.
    Tick { ms: u64 },
    /// Tick until no transition is in flight.
    Settle {
        #[serde(default = "default_frame_ms")]
        frame_ms: u64,
    },
    /// Change the container width.
    Resize { width: f64 },
}

/// Serialized form of a [`GestureSample`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureStep {
    pub phase: GesturePhase,
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
    /// Predicted end along x; defaults to `dx` (no momentum).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_dx: Option<f64>,
    #[serde(default)]
    pub velocity_x: f64,
    #[serde(default)]
    pub t_ms: u64,
}

impl GestureStep {
    #[must_use]
    pub fn new(phase: GesturePhase, dx: f64) -> Self {
        Self {
            phase,
            dx,
            dy: 0.0,
            predicted_dx: None,
            velocity_x: 0.0,
            t_ms: 0,
        }
    }

    #[must_use]
    pub fn with_predicted_dx(mut self, predicted_dx: f64) -> Self {
        self.predicted_dx = Some(predicted_dx);
        self
    }

    #[must_use]
    pub fn with_dy(mut self, dy: f64) -> Self {
        self.dy = dy;
        self
    }

    #[must_use]
    pub fn to_sample(self) -> GestureSample {
        let predicted_x = self.predicted_dx.unwrap_or(self.dx);
        GestureSample::new(self.phase, Vector2::new(self.dx, self.dy))
            .with_predicted_end(Vector2::new(predicted_x, self.dy))
            .with_velocity(Vector2::horizontal(self.velocity_x))
            .with_timestamp(std::time::Duration::from_millis(self.t_ms))
    }
}

fn default_frame_ms() -> u64 {
    DEFAULT_FRAME_MS
}

impl Trace {
    /// Parse and validate a JSON trace.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let trace: Self = serde_json::from_str(s)?;
        trace.validate()?;
        Ok(trace)
    }

    /// Read, parse and validate a trace file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(HarnessError::MissingTrace {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Structural checks the serde schema cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(HarnessError::invalid_trace(format!(
                "trace '{}' has no steps",
                self.name
            )));
        }
        if let Some(width) = self.container_width
            && !(width.is_finite() && width > 0.0)
        {
            return Err(HarnessError::invalid_trace(format!(
                "container_width must be > 0, got {width}"
            )));
        }
        for (index, step) in self.steps.iter().enumerate() {
            match step {
                TraceStep::Settle { frame_ms: 0 } => {
                    return Err(HarnessError::invalid_trace(format!(
                        "step {index}: settle frame_ms must be > 0"
                    )));
                }
                TraceStep::Resize { width } if !(width.is_finite() && *width > 0.0) => {
                    return Err(HarnessError::invalid_trace(format!(
                        "step {index}: resize width must be > 0, got {width}"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
