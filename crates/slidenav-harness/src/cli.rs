#![forbid(unsafe_code)]

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use slidenav_core::NavigationConfig;

use crate::error::{HarnessError, Result};
use crate::logging::{LogSettings, init_subscriber};
use crate::replay::{ReplayReport, replay};
use crate::scenario;
use crate::trace::Trace;

#[derive(Debug, Parser)]
#[command(
    name = "slidenav-replay",
    about = "Replay scripted gesture traces through the slidenav controller",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Print the report as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Navigation config (TOML) applied before trace overrides.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug-level logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Errors only on stderr.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Structured JSON logs on stderr.
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay a JSON trace file.
    Replay {
        /// Path to the trace.
        trace: PathBuf,
    },

    /// Replay a built-in scenario.
    Scenario {
        /// Scenario name (see `list-scenarios`).
        name: String,
    },

    /// Print built-in scenario names.
    #[command(name = "list-scenarios")]
    ListScenarios,

    /// Print a built-in scenario as a JSON trace.
    #[command(name = "export-scenario")]
    ExportScenario { name: String },
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_subscriber(LogSettings::from_flags(
        cli.global.verbose,
        cli.global.quiet,
        cli.global.json_logs,
    ))?;
    let mut stdout = std::io::stdout().lock();
    run(cli, &mut stdout)
}

/// Execute `cli`, writing results to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Replay { trace } => {
            let trace = Trace::from_file(&trace)?;
            let config = load_config(&cli.global)?;
            emit(&replay(&trace, &config)?, cli.global.json, out)
        }
        Commands::Scenario { name } => {
            let trace = find_scenario(&name)?;
            let config = load_config(&cli.global)?;
            emit(&replay(&trace, &config)?, cli.global.json, out)
        }
        Commands::ListScenarios => {
            for (name, description) in scenario::SCENARIOS {
                writeln!(out, "{name:<22} {description}")?;
            }
            Ok(())
        }
        Commands::ExportScenario { name } => {
            let trace = find_scenario(&name)?;
            writeln!(out, "{}", trace.to_json_pretty()?)?;
            Ok(())
        }
    }
}

fn find_scenario(name: &str) -> Result<Trace> {
    scenario::builtin(name).ok_or_else(|| HarnessError::UnknownScenario {
        name: name.to_owned(),
    })
}

fn load_config(global: &GlobalArgs) -> Result<NavigationConfig> {
    let config = match &global.config {
        Some(path) => NavigationConfig::from_toml_file(path)?,
        None => NavigationConfig::default(),
    };
    Ok(config.validated()?)
}

fn emit(report: &ReplayReport, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    } else {
        write!(out, "{}", report.to_text())?;
    }
    Ok(())
}
