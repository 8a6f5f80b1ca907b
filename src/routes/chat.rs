use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use thiserror::Error;

use crate::core::knowledge::error_answer;
use crate::models::{ChatRequest, ChatResponse};
use crate::routes::AppState;

/// Unreadable chat request; answered in the chat's own JSON shape
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ChatPayloadError(pub String);

impl error::ResponseError for ChatPayloadError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ChatResponse {
            response: error_answer(&self.0),
        })
    }
}

/// Handle JSON payload errors on the chat endpoint
pub fn handle_chat_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Chat payload error on {}: {}", req.path(), err);
    ChatPayloadError(err.to_string()).into()
}

/// Configure the chat endpoint
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/chat")
            .app_data(web::JsonConfig::default().error_handler(handle_chat_payload_error))
            .route(web::post().to(chat)),
    );
}

/// Chat widget endpoint
///
/// POST /chat
///
/// Request body:
/// ```json
/// { "message": "string" }
/// ```
async fn chat(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    let answer = state.chat.respond(&req.message);
    HttpResponse::Ok().json(ChatResponse {
        response: answer.to_string(),
    })
}
