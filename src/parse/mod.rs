//! Parse phase: frontend workflow JSON → Rust types.

pub mod types;

pub use types::*;

use crate::error::ValidatorError;

/// Deserialize a workflow JSON string into a `Workflow` struct.
pub fn parse(json: &str) -> Result<Workflow, Vec<ValidatorError>> {
    serde_json::from_str::<Workflow>(json).map_err(|e| {
        vec![ValidatorError::parse(
            "P001",
            format!("Failed to parse workflow JSON: {}", e),
        )]
    })
}
