// src/sim/observer.rs

//! Hooks for watching a simulation tick by tick.

use std::io::Write;

use tracing::warn;

use crate::dag::StepId;
use crate::sim::worker::WorkerPool;

/// A step handed to a worker during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub step: StepId,
    pub worker: usize,
    pub start: u64,
    pub duration: u64,
}

/// What changed during a single tick.
///
/// Useful for tests that step the scheduler manually and assert on
/// what finished and what started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Clock value after the tick advanced it.
    pub time: u64,
    /// Steps whose tasks finished this tick, in worker-slot order.
    pub completed: Vec<StepId>,
    /// Steps started this tick, in lexicographic order.
    pub assigned: Vec<Assignment>,
}

/// Receives a callback after every scheduler tick.
pub trait TickObserver {
    fn on_tick(&mut self, report: &TickReport, pool: &WorkerPool);
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TickObserver for NoopObserver {
    fn on_tick(&mut self, _report: &TickReport, _pool: &WorkerPool) {}
}

/// Prints one row per tick: the time, each worker's current step (`.` when
/// idle) and the steps completed so far.
///
/// ```text
/// Second   Worker 1   Worker 2   Done
///    0        C          .
///    3        A          F       C
/// ```
#[derive(Debug)]
pub struct TableObserver<W: Write> {
    out: W,
    done: String,
    header_written: bool,
}

impl<W: Write> TableObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            done: String::new(),
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_row(&mut self, report: &TickReport, pool: &WorkerPool) -> std::io::Result<()> {
        if !self.header_written {
            let mut header = String::from("Second");
            for slot in 1..=pool.len() {
                header.push_str(&format!("   Worker {slot}"));
            }
            header.push_str("   Done");
            writeln!(self.out, "{header}")?;
            self.header_written = true;
        }

        for id in &report.completed {
            self.done.push_str(id);
        }

        let mut row = format!("{:>6}", report.time);
        for id in pool.state() {
            row.push_str(&format!("   {id:^8}"));
        }
        row.push_str("   ");
        row.push_str(&self.done);
        writeln!(self.out, "{}", row.trim_end())
    }
}

impl<W: Write> TickObserver for TableObserver<W> {
    fn on_tick(&mut self, report: &TickReport, pool: &WorkerPool) {
        if let Err(e) = self.write_row(report, pool) {
            warn!(error = %e, time = report.time, "failed to write tick table row");
        }
    }
}
