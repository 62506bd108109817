//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::ValidatorError;
use crate::validate::ValidationResult;

/// Validate a workflow JSON for the save/execute gate.
/// Returns a `{isValid, errors, warnings}` object.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> ValidationResult {
    match crate::parse::parse(json) {
        Ok(workflow) => crate::validate::validate_workflow(&workflow.nodes, &workflow.edges),
        Err(errors) => ValidationResult {
            is_valid: false,
            errors: errors.into_iter().map(|e| e.message).collect(),
            warnings: vec![],
        },
    }
}

/// Validate a single node JSON for the config panel.
/// Returns a JSON array of issue objects.
#[wasm_bindgen]
pub fn validate_node(node_json: &str) -> JsValue {
    let result = validate_node_inner(node_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_node_inner(node_json: &str) -> Vec<ErrorDto> {
    let node = match serde_json::from_str::<crate::parse::types::WorkflowNode>(node_json) {
        Ok(n) => n,
        Err(e) => {
            return vec![ErrorDto {
                code: "P001".into(),
                phase: "Parse".into(),
                message: format!("Failed to parse node JSON: {}", e),
                node_id: None,
            }];
        }
    };

    let errors = crate::validate::node_rules::validate_node(&node);
    errors.into_iter().map(ErrorDto::from).collect()
}

/// One-line validation status for the editor badge.
#[wasm_bindgen]
pub fn workflow_summary(json: &str) -> String {
    match crate::parse::parse(json) {
        Ok(workflow) => crate::validate::validation_summary(&workflow.nodes, &workflow.edges),
        Err(errors) => errors
            .into_iter()
            .map(|e| e.message)
            .next()
            .unwrap_or_else(|| "Failed to parse workflow JSON".to_string()),
    }
}

/// Whether the save button should be enabled.
#[wasm_bindgen]
pub fn can_save_workflow(json: &str) -> bool {
    match crate::parse::parse(json) {
        Ok(workflow) => crate::validate::can_save_workflow(&workflow.nodes, &workflow.edges),
        Err(_) => false,
    }
}

/// Execution order for the run-preview panel.
/// Returns `{status: "ok", order}` or `{status: "error", message}`.
#[wasm_bindgen]
pub fn execution_order(json: &str) -> JsValue {
    let result = execution_order_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn execution_order_inner(json: &str) -> OrderResult {
    let workflow = match crate::parse::parse(json) {
        Ok(w) => w,
        Err(errors) => {
            return OrderResult::Error {
                message: errors
                    .into_iter()
                    .map(|e| e.message)
                    .next()
                    .unwrap_or_else(|| "Failed to parse workflow JSON".to_string()),
            };
        }
    };

    match crate::order::execution_order(&workflow.nodes, &workflow.edges) {
        Ok(order) => OrderResult::Ok { order },
        Err(e) => OrderResult::Error {
            message: e.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    node_id: Option<String>,
}

impl From<ValidatorError> for ErrorDto {
    fn from(e: ValidatorError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
            node_id: e.node_id,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum OrderResult {
    #[serde(rename = "ok")]
    Ok { order: Vec<String> },
    #[serde(rename = "error")]
    Error { message: String },
}
