use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod telemetry;

pub use config::{Config, ConfigError, EnvSource, PayloadVariant, ProcessEnv, StaticEnv};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub env: Arc<dyn EnvSource>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            env: Arc::new(ProcessEnv),
        }
    }

    pub fn with_env(config: Config, env: Arc<dyn EnvSource>) -> Self {
        Self { config, env }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Unversioned routes serve the configured variant
        .route("/health", get(handlers::health::health_check))
        .route("/", get(handlers::home::home))
        .route("/security", get(handlers::security::security_info))
        // Basic payloads
        .route("/v1", get(handlers::home::home_basic))
        .route("/v1/health", get(handlers::health::health_basic))
        .route("/v1/security", get(handlers::security::security_basic))
        // Extended payloads
        .route("/v2", get(handlers::home::home_extended))
        .route("/v2/health", get(handlers::health::health_extended))
        .route("/v2/security", get(handlers::security::security_extended))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::trace_layer())
                .layer(middleware::cors_layer()),
        )
        .with_state(state)
}
