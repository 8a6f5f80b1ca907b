// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Diagnosis, FeatureVector, ModelKind, Verdict, FEATURE_COUNT, FEATURE_LABELS, FEATURE_NAMES};
pub use requests::{ChatRequest, PredictRequest};
pub use responses::{ChatResponse, ErrorResponse, HealthResponse, PredictResponse};
