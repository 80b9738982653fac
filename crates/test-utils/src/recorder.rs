use stepdag::sim::{TickObserver, TickReport, WorkerPool};

/// One observed tick: the report plus each worker's step afterwards.
#[derive(Debug, Clone)]
pub struct RecordedTick {
    pub report: TickReport,
    pub workers: Vec<String>,
}

/// An observer that:
/// - records every tick report
/// - snapshots the worker pool state after each tick.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub ticks: Vec<RecordedTick>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step ids in the order they were handed to workers.
    pub fn assigned_order(&self) -> Vec<String> {
        self.ticks
            .iter()
            .flat_map(|t| t.report.assigned.iter().map(|a| a.step.clone()))
            .collect()
    }

    /// Largest number of simultaneously busy workers seen.
    pub fn peak_busy(&self) -> usize {
        self.ticks
            .iter()
            .map(|t| t.workers.iter().filter(|w| w.as_str() != ".").count())
            .max()
            .unwrap_or(0)
    }
}

impl TickObserver for RecordingObserver {
    fn on_tick(&mut self, report: &TickReport, pool: &WorkerPool) {
        self.ticks.push(RecordedTick {
            report: report.clone(),
            workers: pool.state().into_iter().map(str::to_string).collect(),
        });
    }
}
