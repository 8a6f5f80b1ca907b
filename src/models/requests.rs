use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::FEATURE_COUNT;

/// JSON prediction request, one field per measurement
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(range(min = 0.0))]
    pub mean_radius: f64,
    #[validate(range(min = 0.0))]
    pub mean_texture: f64,
    #[validate(range(min = 0.0))]
    pub mean_perimeter: f64,
    #[validate(range(min = 0.0))]
    pub mean_area: f64,
    #[validate(range(min = 0.0))]
    pub mean_compactness: f64,
    #[validate(range(min = 0.0))]
    pub mean_concavity: f64,
    #[validate(range(min = 0.0))]
    pub worst_radius: f64,
    #[validate(range(min = 0.0))]
    pub worst_texture: f64,
    #[validate(range(min = 0.0))]
    pub worst_perimeter: f64,
    #[validate(range(min = 0.0))]
    pub worst_concavity: f64,
}

impl PredictRequest {
    /// Values in `FEATURE_NAMES` order
    pub fn to_values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.mean_radius,
            self.mean_texture,
            self.mean_perimeter,
            self.mean_area,
            self.mean_compactness,
            self.mean_concavity,
            self.worst_radius,
            self.worst_texture,
            self.worst_perimeter,
            self.worst_concavity,
        ]
    }
}

/// Chat widget message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}
