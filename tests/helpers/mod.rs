use validator::parse::types::*;

// =============================================================================
// Node and edge builders
// =============================================================================

fn node(id: &str, kind: NodeType, label: &str) -> WorkflowNode {
    WorkflowNode {
        id: id.into(),
        kind,
        position: Position { x: 0.0, y: 0.0 },
        data: NodeData {
            label: label.into(),
            assignee: None,
            sub_workflow_id: None,
        },
    }
}

pub fn start_node(id: &str, label: &str) -> WorkflowNode {
    node(id, NodeType::Start, label)
}

pub fn end_node(id: &str, label: &str) -> WorkflowNode {
    node(id, NodeType::End, label)
}

pub fn processor_node(id: &str, label: &str) -> WorkflowNode {
    node(id, NodeType::Processor, label)
}

pub fn human_processor(id: &str, label: &str, user_id: &str) -> WorkflowNode {
    let mut n = node(id, NodeType::Processor, label);
    n.data.assignee = Some(Assignee::Human {
        user_id: user_id.into(),
    });
    n
}

pub fn agent_processor(id: &str, label: &str, agent_id: &str) -> WorkflowNode {
    let mut n = node(id, NodeType::Processor, label);
    n.data.assignee = Some(Assignee::Agent {
        agent_id: agent_id.into(),
    });
    n
}

pub fn edge(source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge {
        id: format!("{}-{}", source, target),
        source: source.into(),
        target: target.into(),
        source_handle: None,
        target_handle: None,
    }
}
