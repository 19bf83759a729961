// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    // Optional so an absent field reaches the validator as `MissingField`.
    pub message: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub timestamp: String,
    pub message_length: usize,
    pub processing_time: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Servidor está funcionando!".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RootMessage {
    pub message: String,
}

/// One entry of the `detail` list in a 422 body.
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub error: String,
    pub detail: Vec<FieldError>,
}

/// Body of the 400 returned by the manual-validation endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
