#![forbid(unsafe_code)]

//! Navigation request errors.
//!
//! Both kinds are non-fatal: the rejected request leaves the controller
//! exactly as it was. Out-of-order or redundant gesture signals are not
//! errors at all; they surface as
//! [`SessionNoopReason`](crate::session::SessionNoopReason) diagnostics.

use thiserror::Error;

use crate::animation::TransitionOperation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Pop requested while only the root screen remains.
    #[error("cannot pop the root screen")]
    EmptyStack,

    /// A second transition was requested while one is in flight.
    #[error("{kind} {operation} transition already in progress", kind = transition_kind(*.interactive))]
    TransitionInProgress {
        operation: TransitionOperation,
        interactive: bool,
    },
}

fn transition_kind(interactive: bool) -> &'static str {
    if interactive {
        "interactive"
    } else {
        "programmatic"
    }
}
