use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, FeatureVector, HealthResponse, PredictRequest, PredictResponse};
use crate::routes::AppState;
use crate::services::DiagnoseError;

/// Configure the JSON API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
///
/// Reports `degraded` when no model could be loaded at startup.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.model.is_ready() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.model.kind(),
        timestamp: chrono::Utc::now(),
    })
}

/// JSON prediction endpoint
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "mean_radius": 14.1,
///   "mean_texture": 19.3,
///   "...": "one key per measurement",
///   "worst_concavity": 0.27
/// }
/// ```
async fn predict(state: web::Data<AppState>, req: web::Json<PredictRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let features = match FeatureVector::new(req.to_values()) {
        Ok(features) => features,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    match state.model.diagnose(&features) {
        Ok((verdict, model)) => HttpResponse::Ok().json(PredictResponse {
            prediction_id: uuid::Uuid::new_v4().to_string(),
            diagnosis: verdict.diagnosis,
            label: verdict.diagnosis.label().to_string(),
            probability: verdict.probability,
            confidence: verdict.confidence,
            confidence_display: verdict.confidence_display(),
            model,
            created_at: chrono::Utc::now(),
        }),
        Err(DiagnoseError::Unavailable) => {
            tracing::warn!("Prediction requested but no model is loaded");
            HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "Model unavailable".to_string(),
                message: DiagnoseError::Unavailable.to_string(),
                status_code: 503,
            })
        }
        Err(e) => {
            tracing::error!("Prediction failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Prediction failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
