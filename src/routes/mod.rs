// Route exports
pub mod api;
pub mod chat;
pub mod pages;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use std::sync::Arc;

use crate::core::ChatResponder;
use crate::services::{ModelHandle, PageRenderer};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub model: ModelHandle,
    pub chat: ChatResponder,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(model: ModelHandle, chat: ChatResponder, pages: PageRenderer) -> Self {
        Self {
            model,
            chat,
            pages: Arc::new(pages),
        }
    }
}

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors on the API scope
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Register the HTML pages, the chat endpoint and the JSON API
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::configure)
        .configure(chat::configure)
        .service(
            web::scope("/api/v1")
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .configure(api::configure),
        );
}
