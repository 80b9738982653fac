// src/sim/mod.rs

//! Resource-constrained execution simulation.
//!
//! The core is a synchronous, deterministic tick loop: no threads, no async.
//! [`scheduler`] drives it, [`worker`] models the bounded pool,
//! [`duration`] maps step ids to costs and [`observer`] lets callers watch
//! each tick.

pub mod duration;
pub mod observer;
pub mod scheduler;
pub mod worker;

pub use duration::{DurationModel, DurationPolicy, MAX_LETTER_OFFSET};
pub use observer::{Assignment, NoopObserver, TableObserver, TickObserver, TickReport};
pub use scheduler::{Scheduler, SimulationOutcome, SimulationReport, simulate};
pub use worker::{IDLE_MARKER, Task, Worker, WorkerPool, WorkerState};
