// src/sim/scheduler.rs

use tracing::{debug, trace, warn};

use crate::config::SchedulerSettings;
use crate::dag::{StepGraph, StepId, StepIndex, StepSet, ready_steps};
use crate::sim::duration::DurationModel;
use crate::sim::observer::{Assignment, NoopObserver, TickObserver, TickReport};
use crate::sim::worker::{Task, WorkerPool};

/// How a simulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationOutcome {
    /// Every step completed; `makespan` is the tick at which the last one did.
    Finished { makespan: u64 },
    /// The clock reached the tick guard with steps still outstanding.
    GuardExceeded {
        elapsed: u64,
        completed: usize,
        total: usize,
    },
}

impl SimulationOutcome {
    /// Ticks elapsed when the simulation stopped.
    pub fn elapsed(&self) -> u64 {
        match *self {
            SimulationOutcome::Finished { makespan } => makespan,
            SimulationOutcome::GuardExceeded { elapsed, .. } => elapsed,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, SimulationOutcome::Finished { .. })
    }
}

/// Result of a full [`Scheduler::proceed`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub outcome: SimulationOutcome,
    /// Every assignment made, in the order it happened.
    pub assignments: Vec<Assignment>,
    /// Step ids in the order their tasks were observed to complete.
    pub completion_order: Vec<StepId>,
}

/// Discrete-time simulation of a worker pool executing the step graph.
///
/// Each instance owns one run's state (clock, completed set, workers) and is
/// consumed by [`Scheduler::proceed`]; build a fresh one for another run.
/// The graph is only borrowed and may be shared by several schedulers.
#[derive(Debug)]
pub struct Scheduler<'g> {
    graph: &'g StepGraph,
    durations: DurationModel,
    pool: WorkerPool,
    /// `None` until the first tick moves the clock to 0.
    clock: Option<u64>,
    completed: StepSet,
    completion_order: Vec<StepIndex>,
    assignments: Vec<Assignment>,
}

impl<'g> Scheduler<'g> {
    pub fn new(graph: &'g StepGraph, pool: WorkerPool, durations: DurationModel) -> Self {
        Self {
            graph,
            durations,
            pool,
            clock: None,
            completed: StepSet::with_capacity(graph.len()),
            completion_order: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// Construct a scheduler from resolved [`SchedulerSettings`].
    pub fn from_settings(graph: &'g StepGraph, settings: &SchedulerSettings) -> Self {
        Self::new(
            graph,
            WorkerPool::new(settings.workers),
            DurationModel::new(settings.floor, settings.duration_policy),
        )
    }

    /// Current clock value, `None` before the first tick.
    pub fn now(&self) -> Option<u64> {
        self.clock
    }

    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    pub fn is_finished(&self) -> bool {
        self.completed.is_full()
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.graph
            .index_of(id)
            .is_some_and(|idx| self.completed.contains(idx))
    }

    /// Advance the clock by one and update workers.
    ///
    /// In order: free every worker whose task finishes at or before the new
    /// time (marking the step completed), then hand the lexicographically
    /// smallest ready steps to the idle workers, lowest slot first.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.map_or(0, |t| t + 1);
        self.clock = Some(now);

        let mut completed_now = Vec::new();
        let mut in_progress = StepSet::with_capacity(self.graph.len());

        for slot in 0..self.pool.len() {
            let worker = self.pool.worker_mut(slot);
            let finished = worker.task().is_some_and(|t| t.is_completed(now));

            if finished {
                if let Some(task) = worker.clear() {
                    debug!(step = %task.id, worker = slot, time = now, "task completed");
                    self.completed.insert(task.step);
                    self.completion_order.push(task.step);
                    completed_now.push(task.id);
                }
            } else if let Some(task) = worker.task() {
                in_progress.insert(task.step);
            }
        }

        let mut assigned = Vec::new();
        let idle = self.pool.idle_slots();

        if !idle.is_empty() {
            let ready = ready_steps(self.graph, &self.completed, Some(&in_progress));
            for (&step, &slot) in ready.iter().zip(idle.iter()) {
                let id = self.graph.id_of(step);
                let duration = self.durations.duration(id);

                debug!(step = %id, worker = slot, time = now, duration, "assigning step");
                self.pool
                    .worker_mut(slot)
                    .assign(Task::new(step, id, duration, now));

                assigned.push(Assignment {
                    step: id.to_string(),
                    worker: slot,
                    start: now,
                    duration,
                });
            }
        }

        trace!(
            time = now,
            completed = self.completed.len(),
            busy = self.pool.busy_count(),
            "tick finished"
        );

        self.assignments.extend(assigned.iter().cloned());

        TickReport {
            time: now,
            completed: completed_now,
            assigned,
        }
    }

    /// Run until every step has completed or the clock reaches `max_ticks`.
    pub fn proceed(self, max_ticks: u64) -> SimulationReport {
        self.proceed_with(max_ticks, &mut NoopObserver)
    }

    /// Like [`Scheduler::proceed`], reporting every tick to `observer`.
    pub fn proceed_with(
        mut self,
        max_ticks: u64,
        observer: &mut dyn TickObserver,
    ) -> SimulationReport {
        let total = self.graph.len();

        let outcome = loop {
            if self.is_finished() {
                break SimulationOutcome::Finished {
                    makespan: self.clock.unwrap_or(0),
                };
            }

            if let Some(now) = self.clock.filter(|&now| now >= max_ticks) {
                warn!(
                    max_ticks,
                    completed = self.completed.len(),
                    total,
                    "simulation stopped early: tick guard reached before all steps completed"
                );
                break SimulationOutcome::GuardExceeded {
                    elapsed: now,
                    completed: self.completed.len(),
                    total,
                };
            }

            let report = self.tick();
            observer.on_tick(&report, &self.pool);
        };

        let completion_order = self
            .completion_order
            .iter()
            .map(|&idx| self.graph.id_of(idx).to_string())
            .collect();

        SimulationReport {
            outcome,
            assignments: self.assignments,
            completion_order,
        }
    }
}

/// Convenience: run one full simulation of `graph` under `settings`.
pub fn simulate(graph: &StepGraph, settings: &SchedulerSettings) -> SimulationReport {
    Scheduler::from_settings(graph, settings).proceed(settings.max_ticks)
}
