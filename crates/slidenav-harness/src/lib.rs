#![forbid(unsafe_code)]

//! Replay harness for slidenav.
//!
//! Drives [`slidenav_core::NavigationController`] from scripted gesture
//! traces against a message-list fixture, recording every render call, so
//! transitions can be checked without a display.

pub mod cli;
pub mod error;
pub mod fixture;
pub mod logging;
pub mod replay;
pub mod scenario;
pub mod trace;

pub use cli::run_from_env;
pub use error::{HarnessError, Result};
pub use replay::{ReplayReport, replay};
pub use trace::{Trace, TraceStep};
