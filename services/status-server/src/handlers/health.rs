use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};

use crate::config::{
    EnvSource, PayloadVariant, APP_VERSION_VAR, DEFAULT_APP_VERSION, DEFAULT_IMAGE_SIGNED,
    IMAGE_SIGNED_VAR,
};
use crate::models::HealthResponse;
use crate::AppState;

/// Builds the health payload. `APP_VERSION` and `IMAGE_SIGNED` are looked up on every call.
pub fn health_payload(env: &dyn EnvSource, variant: PayloadVariant) -> HealthResponse {
    HealthResponse {
        status: "healthy",
        version: env.var_or(APP_VERSION_VAR, DEFAULT_APP_VERSION),
        signed: env.var_or(IMAGE_SIGNED_VAR, DEFAULT_IMAGE_SIGNED),
        sbom_available: true,
        security_verified: match variant {
            PayloadVariant::Basic => None,
            PayloadVariant::Extended => Some(true),
        },
    }
}

pub async fn health_check(State(state): State<AppState>) -> Response {
    Json(health_payload(state.env.as_ref(), state.config.variant)).into_response()
}

pub async fn health_basic(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(health_payload(state.env.as_ref(), PayloadVariant::Basic))
}

pub async fn health_extended(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(health_payload(state.env.as_ref(), PayloadVariant::Extended))
}
