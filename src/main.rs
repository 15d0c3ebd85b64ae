use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use icp_match::config::{LoggingSettings, Settings};
use icp_match::core::{validate_table, Matcher, CRITERIA};
use icp_match::models::NumericProximity;
use icp_match::routes::{self, matches::AppState};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

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
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap_or_default())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Initialize logging; RUST_LOG takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let loaded = Settings::load();
    let logging = loaded
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    info!("Starting ICP matching service...");

    let settings = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    // Criterion table self-check
    validate_table(&CRITERIA).map_err(|e| {
        error!("Criterion table is invalid: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    // Initialize matcher with configured limits and proximity band
    let proximity = NumericProximity::from(&settings.scoring.proximity);
    let matcher = Matcher::new(
        proximity,
        settings.matching.default_limit,
        settings.matching.max_limit,
    );

    info!(
        "Matcher initialized with {} criteria, proximity: {:?}, default limit: {}",
        CRITERIA.len(),
        proximity,
        settings.matching.default_limit
    );

    // Build application state
    let app_state = AppState { matcher };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let json_limit = settings.server.json_limit_bytes;

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(
                web::JsonConfig::default()
                    .limit(json_limit)
                    .error_handler(handle_json_payload_error),
            )
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
