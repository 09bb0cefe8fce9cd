//! Wire DTOs for the task service endpoints that need request bodies.
//!
//! Responses deserialize straight into the domain types (`Column`, `Task`),
//! which carry the camelCase wire layout themselves.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskRequest {
    pub column_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDescriptionRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDescriptionResponse {
    pub description: String,
}
