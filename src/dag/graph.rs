// src/dag/graph.rs

use std::collections::HashMap;

use crate::dag::StepId;

/// Position of a step inside the graph arena.
pub type StepIndex = usize;

/// Internal node record: the step id plus its immediate dependencies.
#[derive(Debug, Clone)]
struct StepNode {
    id: StepId,
    /// Direct dependencies: steps that must complete before this one can start.
    deps: Vec<StepIndex>,
}

/// Arena of steps addressed by integer index, with a side id -> index lookup.
///
/// The lookup map is only ever used for point queries; nothing iterates it,
/// so no choice made by the core depends on hash order. Acyclicity is not
/// checked here; the sequencer reports cycles when ordering.
#[derive(Debug, Clone, Default)]
pub struct StepGraph {
    nodes: Vec<StepNode>,
    index: HashMap<StepId, StepIndex>,
}

impl StepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index of `id`, creating a placeholder node on first sight.
    pub fn ensure_step(&mut self, id: &str) -> StepIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(StepNode {
            id: id.to_string(),
            deps: Vec::new(),
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Record that `step` cannot start before `depends_on` has completed.
    ///
    /// Idempotent; both ids are materialised if they were not seen before.
    pub fn add_dependency(&mut self, step: &str, depends_on: &str) {
        let step_idx = self.ensure_step(step);
        let dep_idx = self.ensure_step(depends_on);

        if self.nodes[step_idx].deps.contains(&dep_idx) {
            return;
        }
        self.nodes[step_idx].deps.push(dep_idx);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<StepIndex> {
        self.index.get(id).copied()
    }

    /// Id of the step stored at `idx`.
    ///
    /// Panics if `idx` did not come from this graph.
    pub fn id_of(&self, idx: StepIndex) -> &str {
        &self.nodes[idx].id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All step ids in arena (first-seen) order.
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// All arena indices.
    pub fn indices(&self) -> std::ops::Range<StepIndex> {
        0..self.nodes.len()
    }

    /// Immediate dependencies of the step at `idx`.
    pub fn deps_of(&self, idx: StepIndex) -> &[StepIndex] {
        &self.nodes[idx].deps
    }

    /// Immediate dependency ids of a step, sorted. Empty for unknown ids.
    pub fn dependencies_of(&self, id: &str) -> Vec<&str> {
        let mut deps: Vec<&str> = self
            .index_of(id)
            .map(|idx| self.deps_of(idx).iter().map(|&d| self.id_of(d)).collect())
            .unwrap_or_default();
        deps.sort_unstable();
        deps
    }

    /// Number of dependency edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.deps.len()).sum()
    }

    /// `true` iff every dependency of the step at `idx` is in `completed`.
    pub fn is_doable(&self, idx: StepIndex, completed: &crate::dag::StepSet) -> bool {
        self.nodes[idx].deps.iter().all(|&d| completed.contains(d))
    }
}
