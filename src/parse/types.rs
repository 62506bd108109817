//! Rust types mirroring the frontend workflow model.
//!
//! These types are the serde target for the JSON the graph editor sends.
//! SYNC NOTE: Keep this file aligned with the frontend workflow store; when
//! node data shapes change, also review the validate modules.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
    pub created_at: String,
    pub updated_at: String,
}

/// One step of the workflow graph as drawn in the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeType,
    pub position: Position,
    pub data: NodeData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Start,
    Processor,
    End,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub label: String,
    /// Who executes the task instances created at this node.
    /// Only meaningful on processor nodes.
    #[serde(default)]
    pub assignee: Option<Assignee>,
    /// Child workflow a processor node subdivides its tasks into.
    #[serde(default)]
    pub sub_workflow_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Assignee {
    #[serde(rename = "human")]
    Human {
        #[serde(rename = "userId")]
        user_id: String,
    },
    #[serde(rename = "agent")]
    Agent {
        #[serde(rename = "agentId")]
        agent_id: String,
    },
}

/// A directed allowed-transition between two nodes.
///
/// `source`/`target` are node ids but are not required to resolve; the
/// validator treats dangling endpoints as connecting nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEdge {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub target_handle: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl WorkflowNode {
    pub fn is_start(&self) -> bool {
        self.kind == NodeType::Start
    }

    pub fn is_end(&self) -> bool {
        self.kind == NodeType::End
    }

    pub fn is_processor(&self) -> bool {
        self.kind == NodeType::Processor
    }

    /// Name used in diagnostics; falls back to the id for unlabeled nodes.
    pub fn display_label(&self) -> &str {
        if self.data.label.trim().is_empty() {
            &self.id
        } else {
            &self.data.label
        }
    }
}
