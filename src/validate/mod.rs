//! Validation of the workflow graph and its node configurations.
//!
//! Structural rules gate save/execute and report plain messages the UI shows
//! verbatim; node-config rules back the editor's per-node config panel.

pub mod node_rules;
pub mod structural;

pub use structural::{ValidationDetails, ValidationResult, analyze_workflow, validate_workflow};

use crate::parse::types::{WorkflowEdge, WorkflowNode};

/// One-line status for the editor's validation badge.
pub fn validation_summary(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> String {
    if nodes.is_empty() {
        return "Workflow is empty".to_string();
    }
    let result = validate_workflow(nodes, edges);
    if result.is_valid {
        "Validation passed".to_string()
    } else {
        format!("Found {} error(s)", result.errors.len())
    }
}

/// Whether the save action should be enabled.
pub fn can_save_workflow(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> bool {
    validate_workflow(nodes, edges).is_valid
}
