use serde::{Deserialize, Serialize};
use crate::models::domain::{Diagnosis, ModelKind};

/// Response for the JSON prediction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction_id: String,
    pub diagnosis: Diagnosis,
    pub label: String,
    pub probability: f64,
    pub confidence: f64,
    pub confidence_display: String,
    pub model: ModelKind,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Chat widget answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: Option<ModelKind>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
