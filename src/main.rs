mod api;
mod config;
mod error;
mod services;
mod sources;
mod types;

use axum::Router;
use config::Config;
use services::SignalService;
use sources::YahooFinanceClient;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub yahoo_client: Arc<YahooFinanceClient>,
    pub signal_service: Arc<SignalService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sigil=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());
    info!("Starting Sigil server on {}:{}", config.host, config.port);

    let yahoo_client = Arc::new(YahooFinanceClient::new(config.request_timeout));
    let signal_service = SignalService::new();

    let state = AppState {
        config: config.clone(),
        yahoo_client,
        signal_service,
    };

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Sigil server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
