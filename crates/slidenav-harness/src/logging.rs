#![forbid(unsafe_code)]

//! Stderr log output for `slidenav-replay`.
//!
//! Reports own stdout, so every log line goes to stderr. `SLIDENAV_LOG`
//! directives win over `RUST_LOG`; either one overrides `-v`/`-q`. A
//! variable holding unparseable directives is skipped.

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::error::Result;

/// Directive variable read before `RUST_LOG`.
pub const LOG_ENV: &str = "SLIDENAV_LOG";

/// Shape of each stderr line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    /// One JSON object per event, with the current span attached.
    Json,
}

/// Resolved CLI logging flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

impl LogSettings {
    /// `-v` beats `-q`.
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool, json: bool) -> Self {
        let level = if verbose {
            LevelFilter::DEBUG
        } else if quiet {
            LevelFilter::ERROR
        } else {
            LevelFilter::WARN
        };
        let format = if json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        };
        Self { level, format }
    }

    /// Directives used when neither variable supplies usable ones. Verbose
    /// runs open up the slidenav crates only.
    fn fallback_directives(self) -> String {
        if self.level == LevelFilter::DEBUG {
            "info,slidenav_core=debug,slidenav_harness=debug".to_owned()
        } else if self.level == LevelFilter::ERROR {
            "error".to_owned()
        } else {
            "warn".to_owned()
        }
    }
}

/// Install the global subscriber.
pub fn init_subscriber(settings: LogSettings) -> Result<()> {
    let filter = build_filter(
        settings,
        std::env::var(LOG_ENV).ok(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(output_layer(settings.format))
        .try_init()?;
    Ok(())
}

fn build_filter(
    settings: LogSettings,
    slidenav_log: Option<String>,
    rust_log: Option<String>,
) -> EnvFilter {
    [slidenav_log, rust_log]
        .into_iter()
        .flatten()
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(settings.fallback_directives()))
}

fn output_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    match format {
        LogFormat::Compact => layer.without_time().compact().boxed(),
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
    }
}
