// Integration tests for Rose Screen

use actix_web::{http::StatusCode, test, web, App};
use rose_screen::core::knowledge::ERROR_ANSWER_PREFIX;
use rose_screen::core::{ChatResponder, DemoSettings, LinearModel};
use rose_screen::models::{ChatResponse, Diagnosis, ErrorResponse, HealthResponse, ModelKind, PredictResponse, FEATURE_NAMES};
use rose_screen::routes::{self, AppState};
use rose_screen::services::{ModelHandle, ModelStore, PageRenderer};
use serde_json::json;
use std::sync::Arc;

/// p = sigmoid(-5 + 0.1 * sum(features))
fn linear_state() -> AppState {
    let model = LinearModel::new(-5.0, vec![0.1; 10], None);
    state_with(ModelHandle::ready(Arc::new(model)))
}

fn state_with(model: ModelHandle) -> AppState {
    AppState::new(
        model,
        ChatResponder::with_default_knowledge(),
        PageRenderer::new().expect("templates should compile"),
    )
}

fn form_with(value: &str) -> Vec<(String, String)> {
    FEATURE_NAMES
        .iter()
        .map(|name| (name.to_string(), value.to_string()))
        .collect()
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(routes::configure_routes),
        )
        .await
    };
}

async fn body_string(resp: actix_web::dev::ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

#[actix_web::test]
async fn test_index_page_renders_form() {
    let app = init_app!(linear_state());

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    for name in FEATURE_NAMES {
        assert!(html.contains(name), "form is missing {}", name);
    }
}

#[actix_web::test]
async fn test_predict_malignant() {
    let app = init_app!(linear_state());

    let req = test::TestRequest::post()
        .uri("/predict_cancer")
        .set_form(form_with("20"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    assert!(html.contains("Malin (Confiance: 100.0%)"), "unexpected page: {}", html);
    assert!(html.contains("Cancer du Sein"));
}

#[actix_web::test]
async fn test_predict_benign() {
    let app = init_app!(linear_state());

    let req = test::TestRequest::post()
        .uri("/predict_cancer")
        .set_form(form_with("0"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // sigmoid(-5) = 0.0067, so 99.3% benign
    let html = body_string(resp).await;
    assert!(html.contains("Bénin (Confiance: 99.3%)"), "unexpected page: {}", html);
}

#[actix_web::test]
async fn test_predict_missing_field() {
    let app = init_app!(linear_state());

    let mut form = form_with("1");
    form.retain(|(name, _)| name != "mean_perimeter");

    let req = test::TestRequest::post()
        .uri("/predict_cancer")
        .set_form(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(resp).await,
        "Erreur : Le champ 'mean_perimeter' est manquant."
    );
}

#[actix_web::test]
async fn test_predict_negative_field() {
    let app = init_app!(linear_state());

    let mut form = form_with("1");
    form[3].1 = "-12.5".to_string();

    let req = test::TestRequest::post()
        .uri("/predict_cancer")
        .set_form(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(resp).await,
        "Erreur : Le champ 'mean_area' ne peut pas être négatif."
    );
}

#[actix_web::test]
async fn test_predict_invalid_number() {
    let app = init_app!(linear_state());

    let mut form = form_with("1");
    form[0].1 = "abc".to_string();

    let req = test::TestRequest::post()
        .uri("/predict_cancer")
        .set_form(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(resp).await,
        "Erreur : Le champ 'mean_radius' doit être un nombre valide."
    );
}

#[actix_web::test]
async fn test_predict_without_model() {
    let app = init_app!(state_with(ModelHandle::unavailable()));

    let req = test::TestRequest::post()
        .uri("/predict_cancer")
        .set_form(form_with("1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_string(resp).await,
        "Erreur : Le modèle de prédiction du cancer n'a pas pu être chargé."
    );
}

#[actix_web::test]
async fn test_predict_rejects_non_form_body() {
    let app = init_app!(linear_state());

    let req = test::TestRequest::post()
        .uri("/predict_cancer")
        .set_json(json!({ "mean_radius": 1.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(resp).await.starts_with("Erreur : Formulaire invalide"));
}

#[actix_web::test]
async fn test_predict_with_demo_model() {
    let dir = tempfile::tempdir().unwrap();
    let store = ModelStore::new(
        dir.path().join("model.json"),
        dir.path().join("model.toml"),
        Some(DemoSettings::default()),
    );
    let app = init_app!(state_with(store.load_handle()));

    let req = test::TestRequest::post()
        .uri("/predict_cancer")
        .set_form(form_with("3.5"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("(Confiance: "));
}

#[actix_web::test]
async fn test_chat_keyword() {
    let app = init_app!(linear_state());

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "message": "  Comment faire l'AUTO-EXAMEN ?" }))
        .to_request();
    let resp: ChatResponse = test::call_and_read_body_json(&app, req).await;
    assert!(resp.response.starts_with("🤲 Auto-examen des seins"));
}

#[actix_web::test]
async fn test_chat_fallback() {
    let app = init_app!(linear_state());

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "message": "quelle est la météo ?" }))
        .to_request();
    let resp: ChatResponse = test::call_and_read_body_json(&app, req).await;
    assert!(resp.response.starts_with("🤔 Je ne suis pas sûre"));
}

#[actix_web::test]
async fn test_chat_missing_message_uses_fallback() {
    let app = init_app!(linear_state());

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ChatResponse = test::read_body_json(resp).await;
    assert!(body.response.starts_with("🤔"));
}

#[actix_web::test]
async fn test_chat_malformed_payload() {
    let app = init_app!(linear_state());

    let req = test::TestRequest::post()
        .uri("/chat")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ChatResponse = test::read_body_json(resp).await;
    assert!(body.response.starts_with(ERROR_ANSWER_PREFIX));
}

#[actix_web::test]
async fn test_chat_non_string_message() {
    let app = init_app!(linear_state());

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "message": 42 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ChatResponse = test::read_body_json(resp).await;
    assert!(body.response.starts_with(ERROR_ANSWER_PREFIX));
}

#[actix_web::test]
async fn test_health_reports_model() {
    let app = init_app!(linear_state());

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.status, "healthy");
    assert_eq!(resp.model, Some(ModelKind::Linear));
}

#[actix_web::test]
async fn test_health_degraded_without_model() {
    let app = init_app!(state_with(ModelHandle::unavailable()));

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.status, "degraded");
    assert_eq!(resp.model, None);
}

fn api_payload(value: f64) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = FEATURE_NAMES
        .iter()
        .map(|name| (name.to_string(), json!(value)))
        .collect();
    serde_json::Value::Object(map)
}

#[actix_web::test]
async fn test_api_predict() {
    let app = init_app!(linear_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(api_payload(20.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: PredictResponse = test::read_body_json(resp).await;
    assert_eq!(body.diagnosis, Diagnosis::Malignant);
    assert_eq!(body.label, "Malin");
    assert_eq!(body.model, ModelKind::Linear);
    assert!(body.probability > 0.99);
    assert!(!body.prediction_id.is_empty());
}

#[actix_web::test]
async fn test_api_predict_rejects_negative() {
    let app = init_app!(linear_state());

    let mut payload = api_payload(1.0);
    payload["worst_texture"] = json!(-3.0);

    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Validation failed");
    assert!(body.message.contains("worst_texture"));
}

#[actix_web::test]
async fn test_api_predict_missing_field() {
    let app = init_app!(linear_state());

    let mut payload = api_payload(1.0);
    payload.as_object_mut().unwrap().remove("mean_radius");

    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
}

#[actix_web::test]
async fn test_api_predict_without_model() {
    let app = init_app!(state_with(ModelHandle::unavailable()));

    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(api_payload(1.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

/// Half the coefficients overflow to +inf and half to -inf at 1e308
fn overflowing_state() -> AppState {
    let mut coefficients = vec![0.0; 10];
    coefficients[..4].copy_from_slice(&[2.0, 2.0, -2.0, -2.0]);
    let model = LinearModel::new(0.0, coefficients, None);
    state_with(ModelHandle::ready(Arc::new(model)))
}

#[actix_web::test]
async fn test_predict_non_finite_score() {
    let app = init_app!(overflowing_state());

    let req = test::TestRequest::post()
        .uri("/predict_cancer")
        .set_form(form_with("1e308"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_string(resp).await,
        "Une erreur s'est produite lors de la prédiction du cancer: le modèle a produit un score non numérique"
    );
}

#[actix_web::test]
async fn test_api_predict_non_finite_score() {
    let app = init_app!(overflowing_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(api_payload(1e308))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Prediction failed");
    assert_eq!(body.status_code, 500);
}

#[actix_web::test]
async fn test_corrupt_linear_model_leaves_service_degraded() {
    let dir = tempfile::tempdir().unwrap();
    let linear = dir.path().join("model.toml");
    std::fs::write(&linear, "intercept = [").unwrap();

    let store = ModelStore::new(
        dir.path().join("model.json"),
        linear,
        Some(DemoSettings::default()),
    );
    let app = init_app!(state_with(store.load_handle()));

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let health: HealthResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health.status, "degraded");
    assert_eq!(health.model, None);

    let req = test::TestRequest::post()
        .uri("/predict_cancer")
        .set_form(form_with("1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
