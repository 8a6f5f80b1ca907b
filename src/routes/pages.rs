use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use std::collections::HashMap;
use thiserror::Error;

use crate::core::{parse_form, FeatureError, PredictionError};
use crate::routes::AppState;
use crate::services::{DiagnoseError, TemplateError, CANCER_MODEL_NAME};

/// Failures on the HTML form flow, rendered as plain text
#[derive(Debug, Error)]
pub enum PageError {
    #[error("{0}")]
    InvalidInput(#[from] FeatureError),

    #[error("Erreur : Formulaire invalide ({0}).")]
    Form(String),

    #[error("Erreur : Le modèle de prédiction du cancer n'a pas pu être chargé.")]
    ModelUnavailable,

    #[error("Une erreur s'est produite lors de la prédiction du cancer: {0}")]
    Prediction(#[from] PredictionError),

    #[error("Erreur lors de l'affichage de la page: {0}")]
    Render(#[from] TemplateError),
}

impl From<DiagnoseError> for PageError {
    fn from(err: DiagnoseError) -> Self {
        match err {
            DiagnoseError::Unavailable => PageError::ModelUnavailable,
            DiagnoseError::Prediction(e) => PageError::Prediction(e),
        }
    }
}

impl error::ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        match self {
            PageError::InvalidInput(_) | PageError::Form(_) => StatusCode::BAD_REQUEST,
            PageError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            PageError::Prediction(_) | PageError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

/// Handle undecodable form bodies
pub fn handle_form_error(err: error::UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Form payload error on {}: {}", req.path(), err);
    PageError::Form(err.to_string()).into()
}

/// Configure the HTML pages
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index)).service(
        web::resource("/predict_cancer")
            .app_data(web::FormConfig::default().error_handler(handle_form_error))
            .route(web::post().to(predict_cancer)),
    );
}

/// Landing page with the measurement form and the chat widget
///
/// GET /
async fn index(state: web::Data<AppState>) -> Result<HttpResponse, PageError> {
    let html = state.pages.render_index()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// Form submission
///
/// POST /predict_cancer (application/x-www-form-urlencoded)
///
/// Expects the ten fields listed in `FEATURE_NAMES`. Errors are returned as
/// plain text so the browser shows them as-is.
async fn predict_cancer(
    state: web::Data<AppState>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, PageError> {
    if !state.model.is_ready() {
        tracing::warn!("Prediction requested but no model is loaded");
        return Err(PageError::ModelUnavailable);
    }

    let features = parse_form(&form).map_err(|e| {
        tracing::info!("Rejected form submission: {}", e);
        e
    })?;

    let (verdict, _) = state.model.diagnose(&features)?;
    let html = state.pages.render_result(&verdict, CANCER_MODEL_NAME)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
