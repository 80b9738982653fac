// src/dag/mod.rs

//! Dependency graph and ordering.
//!
//! - [`graph`] holds the arena of steps and their precedence edges.
//! - [`step_set`] is the dense membership set used for selected / completed steps.
//! - [`ready`] is the readiness predicate shared by ordering and simulation.
//! - [`sequencer`] produces the canonical topological order.
//! - [`analysis`] offers cycle and critical-path diagnostics.

/// Canonical step identifier type used throughout the crate.
pub type StepId = String;

pub mod analysis;
pub mod graph;
pub mod ready;
pub mod sequencer;
pub mod step_set;

pub use analysis::{CriticalPath, critical_path, find_cycles};
pub use graph::{StepGraph, StepIndex};
pub use ready::ready_steps;
pub use sequencer::{CycleDetected, compute_order};
pub use step_set::StepSet;
