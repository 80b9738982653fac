// tests/sequencer_order.rs

mod common;
use crate::common::builders::{GraphBuilder, SAMPLE_EDGES, sample_graph};
use crate::common::init_tracing;

use stepdag::dag::{StepSet, compute_order, find_cycles, ready_steps};

#[test]
fn sample_graph_orders_as_cabdfe() {
    init_tracing();

    let order = compute_order(&sample_graph()).expect("sample graph is acyclic");
    assert_eq!(order.concat(), "CABDFE");
}

#[test]
fn order_is_independent_of_edge_insertion_order() {
    let mut reversed: Vec<(&str, &str)> = SAMPLE_EDGES.to_vec();
    reversed.reverse();
    let graph = GraphBuilder::new().edges(&reversed).build();

    assert_eq!(compute_order(&graph).unwrap().concat(), "CABDFE");
}

#[test]
fn repeated_runs_give_identical_output() {
    let graph = sample_graph();
    let first = compute_order(&graph).unwrap();
    for _ in 0..5 {
        assert_eq!(compute_order(&graph).unwrap(), first);
    }
}

#[test]
fn ties_go_to_the_lexicographically_smallest_id() {
    // Three independent roots inserted in reverse order.
    let graph = GraphBuilder::new().step("Z").step("M").step("A").build();
    assert_eq!(compute_order(&graph).unwrap(), vec!["A", "M", "Z"]);

    // Multi-character ids compare as whole strings.
    let graph = GraphBuilder::new()
        .edge("b1", "c")
        .step("a10")
        .step("a2")
        .build();
    assert_eq!(compute_order(&graph).unwrap(), vec!["a10", "a2", "b1", "c"]);
}

#[test]
fn two_step_cycle_is_reported() {
    init_tracing();

    let graph = GraphBuilder::new().edge("A", "B").edge("B", "A").build();
    let err = compute_order(&graph).expect_err("cycle must be detected");

    assert_eq!(err.remaining, vec!["A", "B"]);
    assert_eq!(err.cycles, vec![vec!["A".to_string(), "B".to_string()]]);
    assert!(err.to_string().contains("cycle detected"));
}

#[test]
fn cycle_downstream_of_valid_prefix_lists_only_stuck_steps() {
    // R is orderable; X <-> Y is a cycle; W waits on the cycle.
    let graph = GraphBuilder::new()
        .edge("R", "X")
        .edge("X", "Y")
        .edge("Y", "X")
        .edge("Y", "W")
        .build();

    let err = compute_order(&graph).unwrap_err();
    assert_eq!(err.remaining, vec!["W", "X", "Y"]);
    assert_eq!(err.cycles, vec![vec!["X".to_string(), "Y".to_string()]]);
}

#[test]
fn self_dependency_is_a_cycle() {
    let graph = GraphBuilder::new().edge("A", "A").build();
    assert!(compute_order(&graph).is_err());
    assert_eq!(find_cycles(&graph), vec![vec!["A".to_string()]]);
}

#[test]
fn ready_steps_honours_exclusion_and_sorts() {
    let graph = sample_graph();
    let c = graph.index_of("C").unwrap();
    let a = graph.index_of("A").unwrap();

    let mut completed = StepSet::with_capacity(graph.len());
    let ready = ready_steps(&graph, &completed, None);
    assert_eq!(ready, vec![c]);

    completed.insert(c);
    let ids = |v: Vec<usize>| v.into_iter().map(|i| graph.id_of(i).to_string()).collect::<Vec<_>>();
    assert_eq!(ids(ready_steps(&graph, &completed, None)), vec!["A", "F"]);

    let mut running = StepSet::with_capacity(graph.len());
    running.insert(a);
    assert_eq!(ids(ready_steps(&graph, &completed, Some(&running))), vec!["F"]);
}

#[test]
fn empty_graph_orders_to_empty_sequence() {
    let graph = GraphBuilder::new().build();
    assert_eq!(compute_order(&graph).unwrap(), Vec::<String>::new());
}
