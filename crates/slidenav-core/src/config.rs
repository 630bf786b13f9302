#![forbid(unsafe_code)]

//! Navigation tuning as data.
//!
//! Every timing, curve and gesture threshold the controller uses lives in a
//! single [`NavigationConfig`]. With the `config` feature it can be loaded
//! from TOML or JSON at startup:
//!
//! ```toml
//! # slidenav.toml
//! push_duration_ms = 450
//! layout_direction = "right_to_left"
//!
//! [push_gesture]
//! activation_offset = 30.0
//!
//! [pop_gesture.completion]
//! velocity_threshold = 650.0
//! ```
//!
//! ```rust,ignore
//! let config = NavigationConfig::from_toml_file("slidenav.toml")?.validated()?;
//! ```
//!
//! # Defaults
//!
//! `NavigationConfig::default()` is the stock behavior: 0.5 s ease-out
//! pushes, 0.35 s linear pops, ease-out interactive completion, parallax of
//! one fiftieth of the container width, row-swipe pushes and edge-swipe pops.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::animation::animator::SlideGeometry;
use crate::animation::{TimingCurve, TransitionOperation};
use crate::gesture::{GestureProfile, LayoutDirection};

/// Default programmatic push duration.
pub const DEFAULT_PUSH_DURATION_MS: u64 = 500;

/// Default programmatic pop duration.
pub const DEFAULT_POP_DURATION_MS: u64 = 350;

/// Default ratio of container width to parallax distance.
pub const DEFAULT_PARALLAX_DIVISOR: f64 = 50.0;

/// Container width used until the host reports its own.
pub const DEFAULT_CONTAINER_WIDTH: f64 = 390.0;

/// All tunables of a [`NavigationController`](crate::NavigationController).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct NavigationConfig {
    /// Full 0 → 1 duration of a push, in milliseconds.
    pub push_duration_ms: u64,

    /// Full 0 → 1 duration of a pop, in milliseconds.
    pub pop_duration_ms: u64,

    /// Curve of a programmatic push.
    pub push_curve: TimingCurve,

    /// Curve of a programmatic pop.
    pub pop_curve: TimingCurve,

    /// Curve of the run that finishes or cancels an interactive transition.
    pub completion_curve: TimingCurve,

    /// Parallax distance is `container_width / parallax_divisor`.
    pub parallax_divisor: f64,

    /// Initial container width in points.
    pub container_width: f64,

    pub layout_direction: LayoutDirection,

    /// Gesture that drives interactive pushes.
    pub push_gesture: GestureProfile,

    /// Gesture that drives interactive pops.
    pub pop_gesture: GestureProfile,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            push_duration_ms: DEFAULT_PUSH_DURATION_MS,
            pop_duration_ms: DEFAULT_POP_DURATION_MS,
            push_curve: TimingCurve::EaseOut,
            pop_curve: TimingCurve::Linear,
            completion_curve: TimingCurve::EaseOut,
            parallax_divisor: DEFAULT_PARALLAX_DIVISOR,
            container_width: DEFAULT_CONTAINER_WIDTH,
            layout_direction: LayoutDirection::LeftToRight,
            push_gesture: GestureProfile::row_swipe(),
            pop_gesture: GestureProfile::edge_swipe(),
        }
    }
}

impl NavigationConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Serialize to pretty TOML.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::TomlSerialize)
    }

    /// Check every parameter is within range.
    ///
    /// Returns one message per problem; empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.parallax_divisor.is_finite() && self.parallax_divisor > 0.0) {
            errors.push(format!(
                "parallax_divisor must be > 0, got {}",
                self.parallax_divisor
            ));
        }
        if !(self.container_width.is_finite() && self.container_width > 0.0) {
            errors.push(format!(
                "container_width must be > 0, got {}",
                self.container_width
            ));
        }

        for (name, profile) in [
            ("push_gesture", &self.push_gesture),
            ("pop_gesture", &self.pop_gesture),
        ] {
            if !(profile.activation_offset.is_finite() && profile.activation_offset >= 0.0) {
                errors.push(format!(
                    "{name}.activation_offset must be >= 0, got {}",
                    profile.activation_offset
                ));
            }
            if !(profile.min_distance.is_finite() && profile.min_distance >= 0.0) {
                errors.push(format!(
                    "{name}.min_distance must be >= 0, got {}",
                    profile.min_distance
                ));
            }
            let ratio = profile.completion.distance_ratio;
            if !(ratio > 0.0 && ratio <= 1.0) {
                errors.push(format!(
                    "{name}.completion.distance_ratio must be in (0, 1], got {ratio}"
                ));
            }
            let threshold = profile.completion.velocity_threshold;
            if !(threshold.is_finite() && threshold >= 0.0) {
                errors.push(format!(
                    "{name}.completion.velocity_threshold must be >= 0, got {threshold}"
                ));
            }
        }

        errors
    }

    /// `self` if [`validate`](Self::validate) finds nothing.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Full 0 → 1 duration of `operation`.
    #[must_use]
    pub fn duration_for(&self, operation: TransitionOperation) -> Duration {
        Duration::from_millis(match operation {
            TransitionOperation::Push => self.push_duration_ms,
            TransitionOperation::Pop => self.pop_duration_ms,
        })
    }

    /// Curve of a programmatic `operation`.
    #[must_use]
    pub fn curve_for(&self, operation: TransitionOperation) -> TimingCurve {
        match operation {
            TransitionOperation::Push => self.push_curve,
            TransitionOperation::Pop => self.pop_curve,
        }
    }

    /// Gesture profile driving an interactive `operation`.
    #[must_use]
    pub fn profile_for(&self, operation: TransitionOperation) -> GestureProfile {
        match operation {
            TransitionOperation::Push => self.push_gesture,
            TransitionOperation::Pop => self.pop_gesture,
        }
    }

    /// Slide geometry for a container `container_width` wide.
    #[must_use]
    pub fn geometry(&self, container_width: f64) -> SlideGeometry {
        SlideGeometry::new(
            container_width,
            self.parallax_divisor,
            self.layout_direction,
        )
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from loading or validating a [`NavigationConfig`].
///
/// Display and source are written out by hand because the parse variants
/// only exist with the `config` feature.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// TOML serialization error.
    #[cfg(feature = "config")]
    TomlSerialize(toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Out-of-range parameters.
    Validation(Vec<String>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::TomlSerialize(e) => write!(f, "TOML serialize error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => write!(f, "invalid configuration: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::TomlSerialize(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_behavior() {
        let config = NavigationConfig::default();
        assert_eq!(
            config.duration_for(TransitionOperation::Push),
            Duration::from_millis(500)
        );
        assert_eq!(
            config.duration_for(TransitionOperation::Pop),
            Duration::from_millis(350)
        );
        assert_eq!(config.curve_for(TransitionOperation::Push), TimingCurve::EaseOut);
        assert_eq!(config.curve_for(TransitionOperation::Pop), TimingCurve::Linear);
        assert_eq!(config.completion_curve, TimingCurve::EaseOut);
        assert_eq!(
            config.profile_for(TransitionOperation::Push),
            GestureProfile::row_swipe()
        );
        assert_eq!(
            config.profile_for(TransitionOperation::Pop),
            GestureProfile::edge_swipe()
        );
        assert_eq!(config.geometry(400.0).parallax_distance(), 8.0);
    }

    #[test]
    fn default_is_valid() {
        assert!(NavigationConfig::default().validate().is_empty());
        assert!(NavigationConfig::default().validated().is_ok());
    }

    #[test]
    fn validate_catches_bad_values() {
        let mut config = NavigationConfig::default();
        config.parallax_divisor = 0.0;
        config.container_width = f64::NAN;
        config.push_gesture.activation_offset = -1.0;
        config.pop_gesture.completion.distance_ratio = 1.5;
        let errors = config.validate();
        assert_eq!(errors.len(), 4, "{errors:?}");
        assert!(errors.iter().any(|e| e.contains("parallax_divisor")));
        assert!(errors.iter().any(|e| e.contains("push_gesture.activation_offset")));
        assert!(errors.iter().any(|e| e.contains("pop_gesture.completion.distance_ratio")));
    }

    #[test]
    fn validation_error_display() {
        let mut config = NavigationConfig::default();
        config.parallax_divisor = -2.0;
        let err = config.validated().unwrap_err();
        assert!(err.to_string().starts_with("invalid configuration: parallax_divisor"));
    }
}
