//! Structural validation of the workflow graph.
//!
//! All checks run over the raw node/edge slices the editor holds; edges whose
//! endpoints resolve to no node are kept, they simply connect nothing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::parse::types::{NodeType, WorkflowEdge, WorkflowNode};

/// Partition of the node set computed by [`analyze_workflow`].
#[derive(Debug, Default)]
pub struct ValidationDetails<'a> {
    pub start_nodes: Vec<&'a WorkflowNode>,
    pub end_nodes: Vec<&'a WorkflowNode>,
    pub processor_nodes: Vec<&'a WorkflowNode>,
    /// Non-start/end nodes touched by no edge. Start and end nodes are
    /// excluded here for compatibility with the editor's legacy isolation
    /// badge; the validator re-checks all types via [`validate_workflow`].
    pub isolated_nodes: Vec<&'a WorkflowNode>,
    pub unconnected_processor_nodes: Vec<&'a WorkflowNode>,
}

/// Verdict the save/execute actions gate on. Messages are shown verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Classify the nodes of a workflow-in-progress. Pure; cannot fail.
pub fn analyze_workflow<'a>(
    nodes: &'a [WorkflowNode],
    edges: &[WorkflowEdge],
) -> ValidationDetails<'a> {
    let mut details = ValidationDetails::default();

    for node in nodes {
        match node.kind {
            NodeType::Start => details.start_nodes.push(node),
            NodeType::End => details.end_nodes.push(node),
            NodeType::Processor => details.processor_nodes.push(node),
        }
    }

    let connected = connected_ids(edges);
    details.isolated_nodes = nodes
        .iter()
        .filter(|n| !n.is_start() && !n.is_end() && !connected.contains(n.id.as_str()))
        .collect();

    details.unconnected_processor_nodes = nodes
        .iter()
        .filter(|n| n.is_processor() && (!has_incoming(n, edges) || !has_outgoing(n, edges)))
        .collect();

    details
}

/// Run every structural rule and report all defects at once.
pub fn validate_workflow(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if nodes.is_empty() {
        errors.push("Workflow must contain at least one node".to_string());
        return ValidationResult {
            is_valid: false,
            errors,
            warnings,
        };
    }

    let details = analyze_workflow(nodes, edges);
    // Full connected set: unlike `ValidationDetails::isolated_nodes`, this one
    // covers start and end nodes too.
    let connected = connected_ids(edges);

    check_start_count(&details, &mut errors);
    check_end_count(&details, &mut errors);
    check_processor_connections(&details, &mut errors);
    check_isolated_nodes(nodes, &connected, &mut errors);
    check_start_outputs(&details, edges, &mut errors);
    check_end_inputs(&details, edges, &mut errors);

    if details.processor_nodes.is_empty() {
        warnings.push(
            "Workflow has no processor nodes and will run straight from start to end".to_string(),
        );
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn connected_ids(edges: &[WorkflowEdge]) -> HashSet<&str> {
    edges
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect()
}

fn has_incoming(node: &WorkflowNode, edges: &[WorkflowEdge]) -> bool {
    edges.iter().any(|e| e.target == node.id)
}

fn has_outgoing(node: &WorkflowNode, edges: &[WorkflowEdge]) -> bool {
    edges.iter().any(|e| e.source == node.id)
}

fn check_start_count(details: &ValidationDetails<'_>, errors: &mut Vec<String>) {
    match details.start_nodes.len() {
        0 => errors.push("Workflow must have exactly one start node".to_string()),
        1 => {}
        n => errors.push(format!(
            "Workflow must have exactly one start node, found {}",
            n
        )),
    }
}

fn check_end_count(details: &ValidationDetails<'_>, errors: &mut Vec<String>) {
    match details.end_nodes.len() {
        0 => errors.push("Workflow must have exactly one end node".to_string()),
        1 => {}
        n => errors.push(format!(
            "Workflow must have exactly one end node, found {}",
            n
        )),
    }
}

fn check_processor_connections(details: &ValidationDetails<'_>, errors: &mut Vec<String>) {
    if details.unconnected_processor_nodes.is_empty() {
        return;
    }
    let labels: Vec<&str> = details
        .unconnected_processor_nodes
        .iter()
        .map(|n| n.display_label())
        .collect();
    errors.push(format!(
        "Processor nodes must have both incoming and outgoing connections: {}",
        labels.join(", ")
    ));
}

fn check_isolated_nodes(
    nodes: &[WorkflowNode],
    connected: &HashSet<&str>,
    errors: &mut Vec<String>,
) {
    for node in nodes {
        if !connected.contains(node.id.as_str()) {
            errors.push(format!(
                "Node '{}' is not connected to any other node",
                node.display_label()
            ));
        }
    }
}

fn check_start_outputs(
    details: &ValidationDetails<'_>,
    edges: &[WorkflowEdge],
    errors: &mut Vec<String>,
) {
    for node in &details.start_nodes {
        if !has_outgoing(node, edges) {
            errors.push(format!(
                "Start node '{}' has no outgoing connection",
                node.display_label()
            ));
        }
    }
}

fn check_end_inputs(
    details: &ValidationDetails<'_>,
    edges: &[WorkflowEdge],
    errors: &mut Vec<String>,
) {
    for node in &details.end_nodes {
        if !has_incoming(node, edges) {
            errors.push(format!(
                "End node '{}' has no incoming connection",
                node.display_label()
            ));
        }
    }
}
