#![forbid(unsafe_code)]

//! Ordered, never-empty screen stack.
//!
//! # Invariants
//!
//! 1. The stack always holds at least the root screen.
//! 2. The root (index 0) is never popped.
//! 3. Order is bottom-to-top; [`top`](ScreenStack::top) is the last entry.
//!
//! # Failure Modes
//!
//! - `pop()` on a root-only stack returns [`NavigationError::EmptyStack`] and
//!   leaves the stack unchanged.
//!
//! The stack has no internal synchronization. Only
//! [`NavigationController`](crate::controller::NavigationController) mutates
//! it, and only from its own `&mut self` methods.

use crate::error::NavigationError;
use crate::screen::{Screen, ScreenId};

/// Bottom-to-top sequence of screens with a permanent root.
#[derive(Debug, Clone)]
pub struct ScreenStack<C> {
    screens: Vec<Screen<C>>,
}

impl<C> ScreenStack<C> {
    /// Create a stack holding exactly `root`.
    #[must_use]
    pub fn new(root: Screen<C>) -> Self {
        let mut screens = Vec::with_capacity(4);
        screens.push(root);
        Self { screens }
    }

    /// Append `screen` as the new top.
    pub fn push(&mut self, screen: Screen<C>) {
        self.screens.push(screen);
    }

    /// Remove and return the top screen.
    pub fn pop(&mut self) -> Result<Screen<C>, NavigationError> {
        if self.screens.len() <= 1 {
            return Err(NavigationError::EmptyStack);
        }
        self.screens.pop().ok_or(NavigationError::EmptyStack)
    }

    /// Current top screen.
    #[must_use]
    pub fn top(&self) -> &Screen<C> {
        // Index 0 always exists: construction pushes the root and `pop`
        // refuses to remove it.
        &self.screens[self.screens.len() - 1]
    }

    /// The screen a pop would reveal, if any.
    #[must_use]
    pub fn below_top(&self) -> Option<&Screen<C>> {
        let len = self.screens.len();
        if len < 2 {
            return None;
        }
        self.screens.get(len - 2)
    }

    #[must_use]
    pub fn root(&self) -> &Screen<C> {
        &self.screens[0]
    }

    /// Number of screens, root included.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    /// Whether only the root remains.
    #[inline]
    #[must_use]
    pub fn is_at_root(&self) -> bool {
        self.screens.len() == 1
    }

    #[must_use]
    pub fn contains(&self, id: ScreenId) -> bool {
        self.screens.iter().any(|screen| screen.id() == id)
    }

    /// Screens bottom-to-top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Screen<C>> + ExactSizeIterator {
        self.screens.iter()
    }

    /// Identities bottom-to-top.
    #[must_use]
    pub fn ids(&self) -> Vec<ScreenId> {
        self.screens.iter().map(Screen::id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(labels: &[&'static str]) -> ScreenStack<&'static str> {
        let mut iter = labels.iter();
        let root = Screen::new(*iter.next().expect("at least one label"));
        let mut stack = ScreenStack::new(root);
        for label in iter {
            stack.push(Screen::new(*label));
        }
        stack
    }

    fn labels(stack: &ScreenStack<&'static str>) -> Vec<&'static str> {
        stack.iter().map(|s| *s.content()).collect()
    }

    #[test]
    fn new_stack_holds_root() {
        let stack = stack_of(&["A"]);
        assert_eq!(stack.depth(), 1);
        assert!(stack.is_at_root());
        assert_eq!(*stack.top().content(), "A");
        assert_eq!(stack.top(), stack.root());
        assert!(stack.below_top().is_none());
    }

    #[test]
    fn push_then_pop() {
        let mut stack = stack_of(&["A"]);
        stack.push(Screen::new("B"));
        assert_eq!(labels(&stack), ["A", "B"]);
        assert_eq!(*stack.top().content(), "B");
        assert_eq!(*stack.below_top().expect("below").content(), "A");

        let popped = stack.pop().expect("pop B");
        assert_eq!(*popped.content(), "B");
        assert_eq!(labels(&stack), ["A"]);
    }

    #[test]
    fn pop_root_fails_without_change() {
        let mut stack = stack_of(&["A"]);
        let before = stack.ids();
        assert_eq!(stack.pop(), Err(NavigationError::EmptyStack));
        assert_eq!(stack.ids(), before);
    }

    #[test]
    fn pop_stops_at_root() {
        let mut stack = stack_of(&["A", "B", "C"]);
        assert!(stack.pop().is_ok());
        assert!(stack.pop().is_ok());
        assert_eq!(stack.pop(), Err(NavigationError::EmptyStack));
        assert_eq!(labels(&stack), ["A"]);
    }

    #[test]
    fn contains_tracks_membership() {
        let mut stack = stack_of(&["A"]);
        let b = Screen::new("B");
        let id = b.id();
        stack.push(b);
        assert!(stack.contains(id));
        stack.pop().expect("pop");
        assert!(!stack.contains(id));
    }
}
