// src/dag/ready.rs

//! Readiness predicate shared by the sequencer and the scheduler.

use crate::dag::StepSet;
use crate::dag::graph::{StepGraph, StepIndex};

/// Collect the steps that may start now, sorted by id.
///
/// A step is ready when it is not in `completed`, not in `excluded`
/// (e.g. already running), and every one of its dependencies is in
/// `completed`. Ties are always broken by lexicographic id order, which is
/// what makes both the plain ordering and the simulated schedule
/// reproducible.
pub fn ready_steps(
    graph: &StepGraph,
    completed: &StepSet,
    excluded: Option<&StepSet>,
) -> Vec<StepIndex> {
    let mut ready: Vec<StepIndex> = graph
        .indices()
        .filter(|&idx| !completed.contains(idx))
        .filter(|&idx| excluded.is_none_or(|set| !set.contains(idx)))
        .filter(|&idx| graph.is_doable(idx, completed))
        .collect();

    ready.sort_by(|&a, &b| graph.id_of(a).cmp(graph.id_of(b)));
    ready
}
