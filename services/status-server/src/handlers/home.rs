use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};

use crate::config::PayloadVariant;
use crate::models::{BasicHomeResponse, ExtendedHomeResponse, FeatureSet, DEMO_MESSAGE};
use crate::AppState;

pub fn basic_payload() -> BasicHomeResponse {
    BasicHomeResponse {
        message: DEMO_MESSAGE,
        security_features: vec![
            "✅ Image Signing with Cosign",
            "✅ SBOM Generation with Syft",
            "✅ Policy Enforcement with ACS",
            "✅ Zero Trust Network Policies",
        ],
    }
}

pub fn extended_payload() -> ExtendedHomeResponse {
    ExtendedHomeResponse {
        message: DEMO_MESSAGE,
        features: FeatureSet {
            image_signing: "Cosign",
            sbom: "Syft (SPDX/CycloneDX)",
            vulnerability_scanning: "Trivy + Clair",
            policy_enforcement: "Red Hat ACS",
            sbom_analysis: "Trusted Profile Analyzer",
            ci_cd: "Tekton Pipelines",
            zero_trust: "Network Policies",
        },
        integrations: vec![
            "Red Hat Quay",
            "Red Hat ACS",
            "Trusted Profile Analyzer",
            "OpenShift Pipelines",
            "MLflow (AI/ML)",
        ],
    }
}

pub async fn home(State(state): State<AppState>) -> Response {
    match state.config.variant {
        PayloadVariant::Basic => home_basic().await.into_response(),
        PayloadVariant::Extended => home_extended().await.into_response(),
    }
}

pub async fn home_basic() -> Json<BasicHomeResponse> {
    Json(basic_payload())
}

pub async fn home_extended() -> Json<ExtendedHomeResponse> {
    Json(extended_payload())
}
