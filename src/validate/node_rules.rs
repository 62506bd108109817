//! Per-node configuration validation.
//!
//! Runs when a node's config panel is closed, independently of the
//! structural rules in [`super::structural`].

use crate::error::ValidatorError;
use crate::parse::types::{Assignee, Workflow, WorkflowNode};

/// Validate a single node's configuration. Returns all errors found.
pub fn validate_node(node: &WorkflowNode) -> Vec<ValidatorError> {
    let mut errors = Vec::new();
    let node_id = Some(node.id.clone());

    if node.data.label.trim().is_empty() {
        errors.push(ValidatorError::node(
            "N001",
            "Node label must not be empty",
            node_id.clone(),
        ));
    }

    if node.is_processor() {
        match &node.data.assignee {
            None => {
                errors.push(ValidatorError::node(
                    "N002",
                    "Processor node must be assigned to a human or an agent",
                    node_id.clone(),
                ));
            }
            Some(Assignee::Human { user_id }) => {
                if user_id.trim().is_empty() {
                    errors.push(ValidatorError::node(
                        "N003",
                        "Human assignee is missing a user id",
                        node_id.clone(),
                    ));
                }
            }
            Some(Assignee::Agent { agent_id }) => {
                if agent_id.trim().is_empty() {
                    errors.push(ValidatorError::node(
                        "N003",
                        "Agent assignee is missing an agent id",
                        node_id.clone(),
                    ));
                }
            }
        }
    } else if node.data.assignee.is_some() {
        errors.push(ValidatorError::node(
            "N004",
            format!("{:?} nodes cannot have an assignee", node.kind),
            node_id.clone(),
        ));
    }

    if let Some(sub_workflow_id) = &node.data.sub_workflow_id {
        if sub_workflow_id.trim().is_empty() {
            errors.push(ValidatorError::node(
                "N005",
                "Subdivision workflow reference must not be empty",
                node_id,
            ));
        }
    }

    errors
}

/// Validate every node config in the workflow.
pub fn validate_nodes(workflow: &Workflow) -> Vec<ValidatorError> {
    workflow.nodes.iter().flat_map(validate_node).collect()
}
