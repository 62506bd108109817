//! Integration tests for the structural workflow rules.

mod helpers;

use helpers::*;
use validator::parse;
use validator::validate::{
    analyze_workflow, can_save_workflow, validate_workflow, validation_summary,
};

#[test]
fn review_workflow_fixture_passes() {
    let json = include_str!("fixtures/review_workflow.json");
    let workflow = parse::parse(json).expect("Should parse");
    let result = validate_workflow(&workflow.nodes, &workflow.edges);
    assert!(result.is_valid, "Expected valid, got: {:?}", result.errors);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert!(can_save_workflow(&workflow.nodes, &workflow.edges));
    insta::assert_snapshot!(
        validation_summary(&workflow.nodes, &workflow.edges),
        @"Validation passed"
    );
}

#[test]
fn orphan_processor_fixture_reports_both_defects() {
    let json = include_str!("fixtures/orphan_processor.json");
    let workflow = parse::parse(json).expect("Should parse");
    let result = validate_workflow(&workflow.nodes, &workflow.edges);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![
            "Processor nodes must have both incoming and outgoing connections: Approval",
            "Node 'Approval' is not connected to any other node",
        ]
    );
    assert!(result.warnings.is_empty());
    insta::assert_snapshot!(
        validation_summary(&workflow.nodes, &workflow.edges),
        @"Found 2 error(s)"
    );
}

#[test]
fn duplicate_start_fixture_reports_count_and_disconnection() {
    let json = include_str!("fixtures/duplicate_start.json");
    let workflow = parse::parse(json).expect("Should parse");
    let result = validate_workflow(&workflow.nodes, &workflow.edges);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![
            "Workflow must have exactly one start node, found 2",
            "Node 'Spare Start' is not connected to any other node",
            "Start node 'Spare Start' has no outgoing connection",
        ]
    );
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn linear_flow_is_valid() {
    let nodes = vec![
        start_node("s1", "Start"),
        processor_node("p1", "Process"),
        end_node("e1", "End"),
    ];
    let edges = vec![edge("s1", "p1"), edge("p1", "e1")];
    let result = validate_workflow(&nodes, &edges);
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn start_to_end_flow_is_valid_but_trivial() {
    let nodes = vec![start_node("s1", "Start"), end_node("e1", "End")];
    let edges = vec![edge("s1", "e1")];
    let result = validate_workflow(&nodes, &edges);
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(
        result.warnings,
        vec!["Workflow has no processor nodes and will run straight from start to end"]
    );
}

#[test]
fn lone_start_node_reports_every_defect_at_once() {
    let nodes = vec![start_node("s1", "Start")];
    let result = validate_workflow(&nodes, &[]);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![
            "Workflow must have exactly one end node",
            "Node 'Start' is not connected to any other node",
            "Start node 'Start' has no outgoing connection",
        ]
    );
}

#[test]
fn empty_workflow_is_rejected_with_a_single_error() {
    let result = validate_workflow(&[], &[edge("a", "b")]);
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.warnings.is_empty());
    insta::assert_snapshot!(validation_summary(&[], &[]), @"Workflow is empty");
}

#[test]
fn validation_is_idempotent() {
    let nodes = vec![
        start_node("s1", "Start"),
        start_node("s2", "Spare"),
        end_node("e1", "End"),
    ];
    let edges = vec![edge("s1", "e1")];
    let first = validate_workflow(&nodes, &edges);
    let second = validate_workflow(&nodes, &edges);
    assert_eq!(first.is_valid, second.is_valid);
    assert_eq!(first.errors, second.errors);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn wired_in_second_start_adds_exactly_the_count_error() {
    let mut nodes = vec![
        start_node("s1", "Start"),
        processor_node("p1", "Process"),
        end_node("e1", "End"),
    ];
    let mut edges = vec![edge("s1", "p1"), edge("p1", "e1")];
    let before = validate_workflow(&nodes, &edges);
    assert!(before.errors.is_empty());

    nodes.push(start_node("s2", "Second Start"));
    edges.push(edge("s2", "p1"));
    let after = validate_workflow(&nodes, &edges);
    assert_eq!(after.errors.len(), before.errors.len() + 1);
    assert_eq!(
        after.errors,
        vec!["Workflow must have exactly one start node, found 2"]
    );
}

#[test]
fn analysis_classifies_the_orphaned_processor() {
    let json = include_str!("fixtures/orphan_processor.json");
    let workflow = parse::parse(json).expect("Should parse");
    let details = analyze_workflow(&workflow.nodes, &workflow.edges);
    assert_eq!(details.start_nodes.len(), 1);
    assert_eq!(details.end_nodes.len(), 1);
    assert_eq!(details.processor_nodes.len(), 1);
    assert_eq!(details.isolated_nodes.len(), 1);
    assert_eq!(details.isolated_nodes[0].id, "proc-1");
    assert_eq!(details.unconnected_processor_nodes.len(), 1);
    assert_eq!(details.unconnected_processor_nodes[0].id, "proc-1");
}
