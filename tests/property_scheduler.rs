// tests/property_scheduler.rs

use std::collections::HashMap;

use proptest::prelude::*;
use stepdag::dag::{StepGraph, compute_order, critical_path};
use stepdag::sim::{DurationModel, DurationPolicy, Scheduler, WorkerPool};
use stepdag_test_utils::builders::GraphBuilder;
use stepdag_test_utils::recorder::RecordingObserver;

const IDS: [&str; 12] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];

// Strategy to generate an acyclic graph with shuffled step names.
// Acyclicity comes from only letting position N depend on positions 0..N-1;
// the shuffle keeps that from lining up with lexicographic order.
fn dag_strategy(max_steps: usize) -> impl Strategy<Value = (StepGraph, Vec<(String, String)>)> {
    (1..=max_steps).prop_flat_map(|n| {
        let names = Just(IDS[..n].to_vec()).prop_shuffle();
        let deps = proptest::collection::vec(proptest::collection::vec(any::<usize>(), 0..3), n);
        (names, deps).prop_map(move |(names, raw_deps)| {
            let mut builder = GraphBuilder::new();
            let mut edges = Vec::new();
            for (i, potential) in raw_deps.into_iter().enumerate() {
                builder = builder.step(names[i]);
                if i == 0 {
                    continue;
                }
                for d in potential {
                    let dep = names[d % i];
                    builder = builder.edge(dep, names[i]);
                    edges.push((dep.to_string(), names[i].to_string()));
                }
            }
            (builder.build(), edges)
        })
    })
}

proptest! {
    #[test]
    fn order_is_a_valid_topological_permutation((graph, edges) in dag_strategy(12)) {
        let order = compute_order(&graph).expect("generated graphs are acyclic");
        prop_assert_eq!(order.len(), graph.len());

        let position: HashMap<&str, usize> =
            order.iter().enumerate().map(|(i, id)| (id.as_str(), i)).collect();
        prop_assert_eq!(position.len(), graph.len());

        for (dep, step) in &edges {
            prop_assert!(position[dep.as_str()] < position[step.as_str()],
                "{} must precede {}", dep, step);
        }

        prop_assert_eq!(compute_order(&graph).unwrap(), order);
    }

    #[test]
    fn makespan_is_bounded_by_critical_path_and_total_work(
        (graph, _edges) in dag_strategy(12),
        workers in 1usize..5,
        floor in 0u64..5,
    ) {
        let durations = DurationModel::new(floor, DurationPolicy::LeadingLetter);
        let report = Scheduler::new(&graph, WorkerPool::new(workers), durations).proceed(100_000);
        prop_assert!(report.outcome.is_finished());

        let elapsed = report.outcome.elapsed();
        let lower = critical_path(&graph, &durations).expect("acyclic").total;
        let upper: u64 = graph.steps().map(|id| durations.duration(id)).sum();

        prop_assert!(elapsed >= lower, "elapsed {} < critical path {}", elapsed, lower);
        prop_assert!(elapsed <= upper, "elapsed {} > total work {}", elapsed, upper);
    }

    #[test]
    fn single_worker_without_floor_follows_sequencer((graph, _edges) in dag_strategy(12)) {
        let durations = DurationModel::new(0, DurationPolicy::LeadingLetter);
        let mut recorder = RecordingObserver::new();
        Scheduler::new(&graph, WorkerPool::new(1), durations).proceed_with(100_000, &mut recorder);

        prop_assert_eq!(recorder.assigned_order(), compute_order(&graph).unwrap());
        prop_assert!(recorder.peak_busy() <= 1);
    }
}
