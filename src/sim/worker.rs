// src/sim/worker.rs

//! Worker slots and the tasks they run.

use crate::dag::{StepId, StepIndex};

/// Marker printed for an idle worker in tick tables.
pub const IDLE_MARKER: &str = ".";

/// One step being executed by a worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub step: StepIndex,
    pub id: StepId,
    pub duration: u64,
    pub start: u64,
}

impl Task {
    pub fn new(step: StepIndex, id: impl Into<StepId>, duration: u64, start: u64) -> Self {
        Self {
            step,
            id: id.into(),
            duration,
            start,
        }
    }

    pub fn completion_time(&self) -> u64 {
        self.start.saturating_add(self.duration)
    }

    pub fn is_completed(&self, now: u64) -> bool {
        now >= self.completion_time()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkerState {
    #[default]
    Idle,
    Busy(Task),
}

/// A single execution slot holding at most one task.
#[derive(Debug, Clone, Default)]
pub struct Worker {
    state: WorkerState,
}

impl Worker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, WorkerState::Idle)
    }

    pub fn task(&self) -> Option<&Task> {
        match &self.state {
            WorkerState::Idle => None,
            WorkerState::Busy(task) => Some(task),
        }
    }

    /// Start `task` on this worker.
    ///
    /// # Panics
    ///
    /// Panics if the worker is already busy: handing a second task to an
    /// occupied slot is a scheduler defect, not an input condition.
    pub fn assign(&mut self, task: Task) {
        if let WorkerState::Busy(current) = &self.state {
            panic!(
                "invalid assignment: worker busy with step '{}' cannot take step '{}'",
                current.id, task.id
            );
        }
        self.state = WorkerState::Busy(task);
    }

    /// Drop the current task (if any) and become idle. Returns the task.
    pub fn clear(&mut self) -> Option<Task> {
        match std::mem::take(&mut self.state) {
            WorkerState::Idle => None,
            WorkerState::Busy(task) => Some(task),
        }
    }

    /// Id of the task being run, or [`IDLE_MARKER`].
    pub fn current_task_id(&self) -> &str {
        self.task().map(|t| t.id.as_str()).unwrap_or(IDLE_MARKER)
    }
}

/// Fixed-size collection of workers, created once per simulation.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    workers: Vec<Worker>,
}

impl WorkerPool {
    pub fn new(size: usize) -> Self {
        Self {
            workers: (0..size).map(|_| Worker::new()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn worker_mut(&mut self, slot: usize) -> &mut Worker {
        &mut self.workers[slot]
    }

    /// Slots of idle workers in ascending order.
    pub fn idle_slots(&self) -> Vec<usize> {
        self.workers
            .iter()
            .enumerate()
            .filter_map(|(slot, w)| w.is_idle().then_some(slot))
            .collect()
    }

    pub fn busy_count(&self) -> usize {
        self.workers.iter().filter(|w| !w.is_idle()).count()
    }

    /// Current task id per worker, `.` for idle ones.
    pub fn state(&self) -> Vec<&str> {
        self.workers.iter().map(Worker::current_task_id).collect()
    }
}
