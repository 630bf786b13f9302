#![forbid(unsafe_code)]

use std::path::PathBuf;

use slidenav_core::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("trace file not found: {path}")]
    MissingTrace { path: PathBuf },

    #[error("unknown scenario: {name} (see `slidenav-replay list-scenarios`)")]
    UnknownScenario { name: String },

    #[error("unknown message id {id} in trace step {step}")]
    UnknownMessage { id: u32, step: usize },

    #[error("invalid trace: {message}")]
    InvalidTrace { message: String },

    #[error("logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl HarnessError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownScenario { .. } | Self::MissingTrace { .. } => 2,
            Self::InvalidTrace { .. } | Self::UnknownMessage { .. } | Self::Json(_) => 3,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid_trace(message: impl Into<String>) -> Self {
        Self::InvalidTrace {
            message: message.into(),
        }
    }
}
