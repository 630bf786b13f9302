#![forbid(unsafe_code)]

//! Rendering boundary.
//!
//! The animator never draws. It reports, per screen, a horizontal
//! translation (in container points, `0.0` = at rest) and a mounted/visible
//! flag through a [`RenderSink`]. Hosts turn those into pixels.

use std::collections::BTreeMap;

use crate::screen::{Screen, ScreenId};

/// Receiver for transform and visibility updates.
pub trait RenderSink<C> {
    /// Place `screen` at `translation_x` relative to its resting position.
    fn set_transform(&mut self, screen: &Screen<C>, translation_x: f64);

    /// Mount (`true`) or unmount (`false`) `screen`.
    fn set_visible(&mut self, screen: &Screen<C>, visible: bool);
}

impl<C, S: RenderSink<C> + ?Sized> RenderSink<C> for &mut S {
    fn set_transform(&mut self, screen: &Screen<C>, translation_x: f64) {
        (**self).set_transform(screen, translation_x);
    }

    fn set_visible(&mut self, screen: &Screen<C>, visible: bool) {
        (**self).set_visible(screen, visible);
    }
}

/// Sink that discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl<C> RenderSink<C> for NullSink {
    fn set_transform(&mut self, _screen: &Screen<C>, _translation_x: f64) {}

    fn set_visible(&mut self, _screen: &Screen<C>, _visible: bool) {}
}

/// One recorded sink call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCall {
    Transform { screen: ScreenId, translation_x: f64 },
    Visible { screen: ScreenId, visible: bool },
}

/// Last known render state of one screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRenderState {
    pub translation_x: f64,
    pub visible: bool,
}

impl Default for ScreenRenderState {
    fn default() -> Self {
        Self {
            translation_x: 0.0,
            visible: false,
        }
    }
}

/// Sink that keeps a call log and the latest state per screen.
///
/// Used by tests and the replay harness to assert on what a host would have
/// drawn.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    calls: Vec<RenderCall>,
    states: BTreeMap<ScreenId, ScreenRenderState>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received, in order.
    #[must_use]
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Latest state of `screen`, if the sink has ever seen it.
    #[must_use]
    pub fn state(&self, screen: ScreenId) -> Option<ScreenRenderState> {
        self.states.get(&screen).copied()
    }

    /// Latest translation of `screen` (`0.0` if never transformed).
    #[must_use]
    pub fn translation(&self, screen: ScreenId) -> f64 {
        self.state(screen).map_or(0.0, |s| s.translation_x)
    }

    #[must_use]
    pub fn is_visible(&self, screen: ScreenId) -> bool {
        self.state(screen).is_some_and(|s| s.visible)
    }

    /// Screens currently mounted, in id order.
    #[must_use]
    pub fn visible_screens(&self) -> Vec<ScreenId> {
        self.states
            .iter()
            .filter(|(_, state)| state.visible)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Number of transform calls received so far.
    #[must_use]
    pub fn transform_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RenderCall::Transform { .. }))
            .count()
    }

    /// Drop the call log, keeping per-screen state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl<C> RenderSink<C> for RecordingSink {
    fn set_transform(&mut self, screen: &Screen<C>, translation_x: f64) {
        self.calls.push(RenderCall::Transform {
            screen: screen.id(),
            translation_x,
        });
        self.states.entry(screen.id()).or_default().translation_x = translation_x;
    }

    fn set_visible(&mut self, screen: &Screen<C>, visible: bool) {
        self.calls.push(RenderCall::Visible {
            screen: screen.id(),
            visible,
        });
        self.states.entry(screen.id()).or_default().visible = visible;
    }
}
