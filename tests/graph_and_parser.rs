// tests/graph_and_parser.rs

mod common;
use crate::common::builders::{GraphBuilder, SAMPLE_TEXT};
use crate::common::init_tracing;

use stepdag::dag::StepSet;
use stepdag::input::{parse_line, parse_steps};

#[test]
fn parse_sample_materialises_every_step() {
    init_tracing();

    let parsed = parse_steps(SAMPLE_TEXT);
    assert_eq!(parsed.graph.len(), 6);
    assert_eq!(parsed.graph.edge_count(), 7);
    assert!(parsed.diagnostics.is_empty());

    for id in ["A", "B", "C", "D", "E", "F"] {
        assert!(parsed.graph.contains(id), "missing step {id}");
    }
    assert_eq!(parsed.graph.dependencies_of("E"), vec!["B", "D", "F"]);
    assert!(parsed.graph.dependencies_of("C").is_empty());
}

#[test]
fn parse_line_extracts_dependency_then_step() {
    assert_eq!(
        parse_line("Step C must be finished before step A can begin."),
        Some(("C", "A"))
    );
    // Trailing period is not required.
    assert_eq!(
        parse_line("Step Xy must be finished before step Z1 can begin"),
        Some(("Xy", "Z1"))
    );
    assert_eq!(parse_line("step c must be finished before step a can begin."), None);
}

#[test]
fn non_matching_lines_are_skipped_with_diagnostics() {
    init_tracing();

    let text = "Step A must be finished before step B can begin.\n\
                \n\
                this line is garbage\n\
                Step B must be finished before step C can begin.\n";
    let parsed = parse_steps(text);

    assert_eq!(parsed.graph.len(), 3);
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].line_number, 3);
    assert_eq!(parsed.diagnostics[0].line, "this line is garbage");
}

#[test]
fn forward_references_create_placeholder_nodes() {
    // "A" is referenced as a dependency before any rule names it as a step.
    let graph = GraphBuilder::new().edge("A", "B").build();

    let a = graph.index_of("A").expect("A materialised");
    let b = graph.index_of("B").expect("B materialised");
    assert!(graph.deps_of(a).is_empty());
    assert_eq!(graph.deps_of(b), &[a]);
}

#[test]
fn add_dependency_is_idempotent() {
    let graph = GraphBuilder::new()
        .edge("A", "B")
        .edge("A", "B")
        .edge("A", "B")
        .build();

    assert_eq!(graph.len(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn is_doable_requires_every_dependency_completed() {
    let graph = GraphBuilder::new().edge("A", "C").edge("B", "C").build();
    let a = graph.index_of("A").unwrap();
    let b = graph.index_of("B").unwrap();
    let c = graph.index_of("C").unwrap();

    let mut completed = StepSet::with_capacity(graph.len());
    assert!(graph.is_doable(a, &completed));
    assert!(!graph.is_doable(c, &completed));

    completed.insert(a);
    assert!(!graph.is_doable(c, &completed));

    completed.insert(b);
    assert!(graph.is_doable(c, &completed));
}
