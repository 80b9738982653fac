#![allow(dead_code)]

use stepdag::config::SchedulerSettings;
use stepdag::dag::StepGraph;
use stepdag::sim::DurationPolicy;

/// The seven rules of the reference scenario, in input order.
pub const SAMPLE_TEXT: &str = "Step C must be finished before step A can begin.\n\
Step C must be finished before step F can begin.\n\
Step A must be finished before step B can begin.\n\
Step A must be finished before step D can begin.\n\
Step B must be finished before step E can begin.\n\
Step D must be finished before step E can begin.\n\
Step F must be finished before step E can begin.\n";

/// Edges of the reference scenario as `(dependency, step)` pairs.
pub const SAMPLE_EDGES: &[(&str, &str)] = &[
    ("C", "A"),
    ("C", "F"),
    ("A", "B"),
    ("A", "D"),
    ("B", "E"),
    ("D", "E"),
    ("F", "E"),
];

/// Builder for `StepGraph` to simplify test setup.
pub struct GraphBuilder {
    graph: StepGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: StepGraph::new(),
        }
    }

    /// `dep` must be finished before `step` can begin.
    pub fn edge(mut self, dep: &str, step: &str) -> Self {
        self.graph.add_dependency(step, dep);
        self
    }

    pub fn edges(mut self, edges: &[(&str, &str)]) -> Self {
        for &(dep, step) in edges {
            self.graph.add_dependency(step, dep);
        }
        self
    }

    /// A step with no dependencies.
    pub fn step(mut self, id: &str) -> Self {
        self.graph.ensure_step(id);
        self
    }

    pub fn build(self) -> StepGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The reference scenario graph (C -> A, C -> F, A -> B, A -> D, B/D/F -> E).
pub fn sample_graph() -> StepGraph {
    GraphBuilder::new().edges(SAMPLE_EDGES).build()
}

/// Builder for `SchedulerSettings`, starting from the defaults.
pub struct SettingsBuilder {
    settings: SchedulerSettings,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            settings: SchedulerSettings::default(),
        }
    }

    pub fn workers(mut self, n: usize) -> Self {
        self.settings.workers = n;
        self
    }

    pub fn floor(mut self, floor: u64) -> Self {
        self.settings.floor = floor;
        self
    }

    pub fn max_ticks(mut self, max: u64) -> Self {
        self.settings.max_ticks = max;
        self
    }

    pub fn duration_policy(mut self, policy: DurationPolicy) -> Self {
        self.settings.duration_policy = policy;
        self
    }

    pub fn build(self) -> SchedulerSettings {
        self.settings
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
