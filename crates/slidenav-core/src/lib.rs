#![forbid(unsafe_code)]

//! Core: screen stack, parallax slide transitions, and interactive navigation.
//!
//! # Role in slidenav
//! `slidenav-core` owns everything between a raw drag gesture and the
//! "current top screen" a host renders. Screens are opaque values; the host
//! supplies gesture samples, a frame clock (`tick`), and a [`RenderSink`]
//! that turns transforms into pixels.
//!
//! # Primary responsibilities
//! - **ScreenStack**: ordered, never-empty stack of screens.
//! - **TransitionAnimator**: parallax slide transforms, scrubbable or timed.
//! - **InteractiveTransitionSession**: explicit state table turning gesture
//!   samples into progress and a complete/cancel decision.
//! - **NavigationController**: single-flight coordinator that owns the stack
//!   and the one active-transition slot.
//!
//! # How it fits in the system
//! The harness crate (`slidenav-harness`) replays scripted gesture traces
//! through [`NavigationController`] with a [`RecordingSink`], which is also
//! how the integration tests exercise the whole pipeline.

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod render;
pub mod screen;
pub mod session;
pub mod stack;

pub use animation::{TimingCurve, TransitionAnimator, TransitionOperation, TransitionOutcome};
pub use config::{ConfigError, NavigationConfig};
pub use controller::{NavigationController, NavigationEvent, NavigationRequest};
pub use error::NavigationError;
pub use gesture::{
    CompletionPolicy, GesturePhase, GestureProfile, GestureSample, LayoutDirection, Vector2,
    VelocitySource,
};
pub use render::{NullSink, RecordingSink, RenderSink};
pub use screen::{Screen, ScreenId};
pub use session::{
    InteractiveTransitionSession, SessionEffect, SessionEvent, SessionNoopReason, SessionState,
    SessionTransition,
};
pub use stack::ScreenStack;
