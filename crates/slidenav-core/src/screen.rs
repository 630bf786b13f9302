#![forbid(unsafe_code)]

//! Opaque screen values.
//!
//! A [`Screen`] pairs a process-unique [`ScreenId`] with shared, immutable
//! content. Cloning a screen clones the `Arc`, so the stack, the animator and
//! the render sink can all hold the same screen. The content is dropped once
//! the last holder lets go.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Next identity handed out by [`ScreenId::next`].
static NEXT_SCREEN_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique screen identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScreenId(u64);

impl ScreenId {
    fn next() -> Self {
        Self(NEXT_SCREEN_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen#{}", self.0)
    }
}

/// An immutable screen: identity plus a content reference.
pub struct Screen<C> {
    id: ScreenId,
    content: Arc<C>,
}

impl<C> Screen<C> {
    /// Wrap `content` in a new screen with a fresh identity.
    #[must_use]
    pub fn new(content: C) -> Self {
        Self::from_arc(Arc::new(content))
    }

    /// Create a screen around already-shared content.
    ///
    /// Two screens built from the same `Arc` still have distinct identities.
    #[must_use]
    pub fn from_arc(content: Arc<C>) -> Self {
        Self {
            id: ScreenId::next(),
            content,
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> ScreenId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Shared handle to the content.
    #[must_use]
    pub fn content_arc(&self) -> Arc<C> {
        Arc::clone(&self.content)
    }
}

// Manual impls: `C` itself need not be `Clone`/`Debug`.
impl<C> Clone for Screen<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            content: Arc::clone(&self.content),
        }
    }
}

impl<C> PartialEq for Screen<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for Screen<C> {}

impl<C: fmt::Debug> fmt::Debug for Screen<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("id", &self.id)
            .field("content", &self.content)
            .finish()
    }
}
