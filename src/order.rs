//! Topological execution order of the workflow graph.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::DiGraph;
use thiserror::Error;

use crate::parse::types::{WorkflowEdge, WorkflowNode};

/// The graph loops back on itself and has no execution order.
#[derive(Debug, Clone, Error)]
#[error("Workflow contains a cycle through node '{node_id}'")]
pub struct CycleError {
    pub node_id: String,
}

/// Returns node ids in execution order, for the run-preview panel.
/// Edges with dangling endpoints are skipped.
pub fn execution_order(
    nodes: &[WorkflowNode],
    edges: &[WorkflowEdge],
) -> Result<Vec<String>, CycleError> {
    let mut graph = DiGraph::<&str, ()>::new();
    let mut indices = HashMap::new();

    for node in nodes {
        let idx = graph.add_node(node.id.as_str());
        indices.insert(node.id.as_str(), idx);
    }
    for edge in edges {
        if let (Some(&s), Some(&t)) = (
            indices.get(edge.source.as_str()),
            indices.get(edge.target.as_str()),
        ) {
            graph.add_edge(s, t, ());
        }
    }

    match toposort(&graph, None) {
        Ok(order) => Ok(order.into_iter().map(|idx| graph[idx].to_string()).collect()),
        Err(cycle) => Err(CycleError {
            node_id: graph[cycle.node_id()].to_string(),
        }),
    }
}
