//! Trust line setup DTOs.

use serde::{Deserialize, Serialize};

/// `POST /api/trustline/check-issuer`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckIssuerRequest {
    pub username: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssuerRisk {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssuerCheck {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub blacklisted: bool,
    #[serde(default)]
    pub age_months: u32,
    #[serde(default)]
    pub issues_currency: bool,
    pub risk: IssuerRisk,
}

/// `POST /api/trustline/create`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTrustlineRequest {
    pub username: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    pub limit: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTrustlineResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Present when the line was created but the backend could not record it.
    #[serde(default)]
    pub warning: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuer_check_parses_backend_result() {
        let body = r#"{
            "valid": true, "blacklisted": false, "age_months": 3,
            "issues_currency": true, "risk": "medium",
            "details": {"currency": "USD"}
        }"#;
        let check: IssuerCheck = serde_json::from_str(body).expect("check should parse");
        assert_eq!(check.risk, IssuerRisk::Medium);
        assert_eq!(check.age_months, 3);
    }
}
