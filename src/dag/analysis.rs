// src/dag/analysis.rs

//! Whole-graph diagnostics built on `petgraph`.
//!
//! The arena is mirrored into a `DiGraph` whose node indices equal the arena
//! indices. Edge direction is dep -> step, so for
//! `Step A must be finished before step B can begin.` we add edge A -> B.

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::dag::StepId;
use crate::dag::graph::StepGraph;
use crate::sim::DurationModel;

/// Longest chain of dependent steps, weighted by step duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalPath {
    /// Steps along the chain, first to last.
    pub steps: Vec<StepId>,
    /// Sum of the durations of `steps`; a lower bound on any makespan.
    pub total: u64,
}

fn to_petgraph(graph: &StepGraph) -> DiGraph<(), ()> {
    let mut g = DiGraph::with_capacity(graph.len(), graph.edge_count());
    for _ in graph.indices() {
        g.add_node(());
    }
    for idx in graph.indices() {
        for &dep in graph.deps_of(idx) {
            g.add_edge(NodeIndex::new(dep), NodeIndex::new(idx), ());
        }
    }
    g
}

/// Groups of steps that depend on each other circularly.
///
/// Each group is sorted by id and the groups are sorted by their first id.
/// Self-dependencies show up as single-element groups.
pub fn find_cycles(graph: &StepGraph) -> Vec<Vec<StepId>> {
    let g = to_petgraph(graph);

    let mut cycles: Vec<Vec<StepId>> = tarjan_scc(&g)
        .into_iter()
        .filter(|scc| scc.len() > 1 || g.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut ids: Vec<StepId> = scc
                .into_iter()
                .map(|n| graph.id_of(n.index()).to_string())
                .collect();
            ids.sort();
            ids
        })
        .collect();

    cycles.sort();
    cycles
}

/// Compute the critical path, or `None` if the graph has a cycle.
pub fn critical_path(graph: &StepGraph, durations: &DurationModel) -> Option<CriticalPath> {
    let g = to_petgraph(graph);
    let topo = toposort(&g, None).ok()?;

    // best[i] = heaviest chain ending at i (inclusive); prev[i] = its predecessor.
    let mut best = vec![0u64; graph.len()];
    let mut prev: Vec<Option<usize>> = vec![None; graph.len()];

    for node in topo {
        let idx = node.index();
        let mut chosen: Option<usize> = None;
        for &dep in graph.deps_of(idx) {
            chosen = match chosen {
                Some(c) if heavier(graph, &best, c, dep) => Some(c),
                _ => Some(dep),
            };
        }
        let base = chosen.map(|c| best[c]).unwrap_or(0);
        best[idx] = base.saturating_add(durations.duration(graph.id_of(idx)));
        prev[idx] = chosen;
    }

    let Some(mut tail) = graph
        .indices()
        .reduce(|a, b| if heavier(graph, &best, a, b) { a } else { b })
    else {
        return Some(CriticalPath {
            steps: Vec::new(),
            total: 0,
        });
    };

    let total = best[tail];
    let mut steps = vec![graph.id_of(tail).to_string()];
    while let Some(p) = prev[tail] {
        steps.push(graph.id_of(p).to_string());
        tail = p;
    }
    steps.reverse();

    Some(CriticalPath { steps, total })
}

/// Whether `a` should be preferred over `b`: heavier chain wins, ties go to
/// the smaller id.
fn heavier(graph: &StepGraph, best: &[u64], a: usize, b: usize) -> bool {
    best[a] > best[b] || (best[a] == best[b] && graph.id_of(a) <= graph.id_of(b))
}
