use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use rose_screen::config::{LoggingSettings, Settings};
use rose_screen::core::ChatResponder;
use rose_screen::routes::{self, AppState};
use rose_screen::services::{ModelStore, PageRenderer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging; `RUST_LOG` and `LOG_FORMAT` override the configured values
fn init_logging(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    init_logging(&settings.logging);
    info!("Starting Rose Screen service...");

    // Model loading never aborts startup; predictions answer 503 instead
    let model = ModelStore::from_settings(&settings.model).load_handle();
    match model.kind() {
        Some(kind) => info!("Prediction model ready ({})", kind),
        None => error!("No prediction model available, /predict_cancer will be unavailable"),
    }

    let pages = PageRenderer::new().map_err(|e| {
        error!("Failed to compile page templates: {}", e);
        std::io::Error::other(e)
    })?;

    let chat = ChatResponder::with_default_knowledge();
    info!("Chat responder loaded with {} keywords", chat.len());

    let app_state = AppState::new(model, chat, pages);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
