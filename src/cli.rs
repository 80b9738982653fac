// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

use crate::config::SettingsOverrides;
use crate::sim::DurationPolicy;

/// Command-line arguments for `stepdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stepdag",
    version,
    about = "Order interdependent steps and simulate running them on a worker pool.",
    long_about = None
)]
pub struct CliArgs {
    /// Input file with lines like
    /// `Step C must be finished before step A can begin.`
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Optional TOML settings file (`[scheduler]` section).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Worker-pool size (default 5).
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Duration floor added to every step (default 60).
    #[arg(long, value_name = "N")]
    pub floor: Option<u64>,

    /// Stop the simulation once the clock reaches this tick (default 100000).
    #[arg(long, value_name = "N")]
    pub max_ticks: Option<u64>,

    /// How step ids map to extra duration: `leading-letter` or `flat`.
    #[arg(long, value_name = "POLICY")]
    pub duration_policy: Option<DurationPolicy>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STEPDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print a per-tick worker table to stderr while simulating.
    #[arg(long)]
    pub trace: bool,

    /// Parse the input and print steps with their dependencies; compute nothing.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Scheduler settings given explicitly on the command line.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            workers: self.workers,
            floor: self.floor,
            max_ticks: self.max_ticks,
            duration_policy: self.duration_policy,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Usage text printed when no input file is given.
pub fn usage() -> String {
    CliArgs::command().render_usage().to_string()
}
