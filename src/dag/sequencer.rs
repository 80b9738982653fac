// src/dag/sequencer.rs

use thiserror::Error;
use tracing::{debug, info};

use crate::dag::analysis::find_cycles;
use crate::dag::graph::StepGraph;
use crate::dag::ready::ready_steps;
use crate::dag::{StepId, StepSet};

/// Ordering stalled: no step is ready although some are still unselected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cycle detected in step graph; cannot order: {}", .remaining.join(", "))]
pub struct CycleDetected {
    /// Steps that could not be ordered, sorted by id.
    pub remaining: Vec<StepId>,
    /// Strongly connected groups among the remaining steps (each sorted).
    pub cycles: Vec<Vec<StepId>>,
}

/// Compute the canonical execution order of every step.
///
/// Greedy topological sort: at each round pick the lexicographically smallest
/// step whose dependencies are all already selected. The result depends only
/// on the graph's edges, never on the order they were added in.
pub fn compute_order(graph: &StepGraph) -> Result<Vec<StepId>, CycleDetected> {
    let mut selected = StepSet::with_capacity(graph.len());
    let mut order = Vec::with_capacity(graph.len());

    while !selected.is_full() {
        let ready = ready_steps(graph, &selected, None);
        let Some(&next) = ready.first() else {
            let mut remaining: Vec<StepId> = graph
                .indices()
                .filter(|&idx| !selected.contains(idx))
                .map(|idx| graph.id_of(idx).to_string())
                .collect();
            remaining.sort();

            let cycles = find_cycles(graph);
            info!(
                ordered = order.len(),
                remaining = remaining.len(),
                ?cycles,
                "sequencer: no ready step left; graph is not acyclic"
            );
            return Err(CycleDetected { remaining, cycles });
        };

        debug!(step = %graph.id_of(next), candidates = ready.len(), "sequencer: selected step");
        selected.insert(next);
        order.push(graph.id_of(next).to_string());
    }

    Ok(order)
}
