use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};

use crate::config::PayloadVariant;
use crate::models::{
    BasicSecurityResponse, Compliance, ExtendedSecurityResponse, ImageSignature, SbomStatus,
    VulnerabilityScan,
};
use crate::AppState;

pub fn basic_payload() -> BasicSecurityResponse {
    BasicSecurityResponse {
        image_signed: true,
        signature_verified: true,
        sbom_format: "SPDX",
        compliance: vec!["CIS", "PCI-DSS", "NIST"],
        zero_trust: true,
    }
}

pub fn extended_payload() -> ExtendedSecurityResponse {
    ExtendedSecurityResponse {
        image_signature: ImageSignature {
            signed: true,
            algorithm: "cosign",
            verified: true,
        },
        sbom: SbomStatus {
            format: "SPDX 2.3",
            attached: true,
            signed: true,
        },
        vulnerabilities: VulnerabilityScan {
            scanned: true,
            critical: 0,
            high: 0,
            policy_compliant: true,
        },
        compliance: Compliance {
            standards: vec!["CIS", "PCI-DSS", "NIST SP 800-53"],
            status: "COMPLIANT",
        },
    }
}

pub async fn security_info(State(state): State<AppState>) -> Response {
    match state.config.variant {
        PayloadVariant::Basic => security_basic().await.into_response(),
        PayloadVariant::Extended => security_extended().await.into_response(),
    }
}

pub async fn security_basic() -> Json<BasicSecurityResponse> {
    Json(basic_payload())
}

pub async fn security_extended() -> Json<ExtendedSecurityResponse> {
    Json(extended_payload())
}
