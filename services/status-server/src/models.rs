use serde::Serialize;

pub const DEMO_MESSAGE: &str = "Secure Supply Chain Demo - ROSA";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    /// Passed through verbatim from the environment, so `"false"` stays a string.
    pub signed: String,
    pub sbom_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_verified: Option<bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BasicHomeResponse {
    pub message: &'static str,
    pub security_features: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExtendedHomeResponse {
    pub message: &'static str,
    pub features: FeatureSet,
    pub integrations: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeatureSet {
    pub image_signing: &'static str,
    pub sbom: &'static str,
    pub vulnerability_scanning: &'static str,
    pub policy_enforcement: &'static str,
    pub sbom_analysis: &'static str,
    pub ci_cd: &'static str,
    pub zero_trust: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BasicSecurityResponse {
    pub image_signed: bool,
    pub signature_verified: bool,
    pub sbom_format: &'static str,
    pub compliance: Vec<&'static str>,
    pub zero_trust: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExtendedSecurityResponse {
    pub image_signature: ImageSignature,
    pub sbom: SbomStatus,
    pub vulnerabilities: VulnerabilityScan,
    pub compliance: Compliance,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageSignature {
    pub signed: bool,
    pub algorithm: &'static str,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SbomStatus {
    pub format: &'static str,
    pub attached: bool,
    pub signed: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VulnerabilityScan {
    pub scanned: bool,
    pub critical: u32,
    pub high: u32,
    pub policy_compliant: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Compliance {
    pub standards: Vec<&'static str>,
    pub status: &'static str,
}
