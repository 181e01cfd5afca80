//! # salescast-server
//!
//! REST API server for the salescast forecasting library.
//! One dashboard session is shared by all handlers behind a mutex.

use axum::{
    routing::{get, post},
    Json, Router,
};
use forecast_facade::{DashboardSession, ForecastConfig, InMemorySeriesStore};
use std::env;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<DashboardSession>>,
    config: Arc<ForecastConfig>,
}

impl AppState {
    pub fn new(session: DashboardSession, config: ForecastConfig) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            config: Arc::new(config),
        }
    }
}

/// Liveness check: answers while the server is running.
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Build the router with every endpoint and middleware layer.
pub fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints
        .route("/health/live", get(liveness))
        .route("/health", get(liveness))
        // API endpoints
        .route(
            "/api/v1/series",
            get(routes::list_series)
                .post(routes::append_sample)
                .delete(routes::clear_series),
        )
        .route("/api/v1/series/export", get(routes::export_series))
        .route("/api/v1/metrics", get(routes::metrics))
        .route("/api/v1/forecast", post(routes::forecast))
        .route("/api/v1/insights", get(routes::insights))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salescast_server=info,tower_http=info".into()),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config =
        ForecastConfig::from_env().map_err(|e| format!("Invalid forecast settings: {}", e))?;
    let session = DashboardSession::new(InMemorySeriesStore::with_sample_data(), &config)
        .map_err(|e| format!("Failed to create session: {}", e))?;
    let app = app(AppState::new(session, config));

    // Server configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .map_err(|_| "PORT must be a valid number".to_string())?;
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|_| "Invalid HOST:PORT configuration".to_string())?;

    tracing::info!("salescast-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))
}
