// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;
pub mod sim;

use std::io::{self, Write};

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{SchedulerSettings, resolve_settings};
use crate::dag::{StepGraph, compute_order, critical_path};
use crate::errors::{Result, StepdagError};
use crate::input::{ParsedInput, load_steps};
use crate::sim::{DurationModel, Scheduler, SimulationOutcome, TableObserver};

/// What a completed `run` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Concatenated step order; empty for `--dry-run`.
    pub order: String,
    /// Simulation result; `None` for `--dry-run`.
    pub outcome: Option<SimulationOutcome>,
}

impl RunSummary {
    /// Whether the simulation (if any) completed every step.
    pub fn converged(&self) -> bool {
        self.outcome.is_none_or(|o| o.is_finished())
    }
}

/// High-level entry point used by `main.rs`, writing results to stdout.
pub fn run(args: &CliArgs) -> Result<RunSummary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(args, &mut out)
}

/// Same as [`run`] but writes the result lines to `out`.
///
/// This wires together:
/// - settings resolution (defaults, config file, CLI flags)
/// - input parsing
/// - the sequencer (plain order)
/// - the scheduler (makespan under the worker pool)
pub fn run_to<W: Write>(args: &CliArgs, out: &mut W) -> Result<RunSummary> {
    let input = args.input.as_ref().ok_or(StepdagError::MissingInput)?;
    let settings = resolve_settings(args.config.as_deref(), &args.overrides())?;
    debug!(?settings, "resolved scheduler settings");

    let ParsedInput { graph, diagnostics } = load_steps(input)?;
    if graph.is_empty() {
        return Err(StepdagError::NoSteps);
    }
    if !diagnostics.is_empty() {
        info!(skipped = diagnostics.len(), "some input lines were skipped");
    }

    if args.dry_run {
        print_dry_run(&graph, &settings, out)?;
        return Ok(RunSummary {
            order: String::new(),
            outcome: None,
        });
    }

    let order = compute_order(&graph)?.concat();
    writeln!(out, "{order}")?;

    let durations = DurationModel::new(settings.floor, settings.duration_policy);
    if let Some(path) = critical_path(&graph, &durations) {
        info!(
            lower_bound = path.total,
            path = %path.steps.concat(),
            "critical path"
        );
    }

    let scheduler = Scheduler::from_settings(&graph, &settings);
    let report = if args.trace {
        let mut table = TableObserver::new(io::stderr());
        scheduler.proceed_with(settings.max_ticks, &mut table)
    } else {
        scheduler.proceed(settings.max_ticks)
    };

    match report.outcome {
        SimulationOutcome::Finished { makespan } => {
            writeln!(out, "{makespan} seconds to complete all tasks")?;
        }
        SimulationOutcome::GuardExceeded {
            elapsed,
            completed,
            total,
        } => {
            writeln!(
                out,
                "{elapsed} seconds elapsed; did not finish ({completed}/{total} steps completed)"
            )?;
        }
    }

    Ok(RunSummary {
        order,
        outcome: Some(report.outcome),
    })
}

/// Simple dry-run output: print settings, steps and their dependencies.
fn print_dry_run<W: Write>(
    graph: &StepGraph,
    settings: &SchedulerSettings,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "stepdag dry-run")?;
    writeln!(out, "  scheduler.workers = {}", settings.workers)?;
    writeln!(out, "  scheduler.floor = {}", settings.floor)?;
    writeln!(out, "  scheduler.max_ticks = {}", settings.max_ticks)?;
    writeln!(out, "  scheduler.duration_policy = {:?}", settings.duration_policy)?;
    writeln!(out)?;

    let mut steps: Vec<&str> = graph.steps().collect();
    steps.sort_unstable();

    let durations = DurationModel::new(settings.floor, settings.duration_policy);
    writeln!(out, "steps ({}):", steps.len())?;
    for id in steps {
        writeln!(out, "  - {id} (duration {})", durations.duration(id))?;
        let deps = graph.dependencies_of(id);
        if !deps.is_empty() {
            writeln!(out, "      after: {deps:?}")?;
        }
    }

    debug!("dry-run complete (no scheduling)");
    Ok(())
}
