use serde::{Deserialize, Serialize};
use serde_json::Value;

// API Response wrappers

/// OAuth2 password-grant response from the accounts service.
/// `access_token` stays optional so a 200 with a missing field is
/// reported as such rather than as a parse error.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DetailedProductResponse {
    #[serde(rename = "Products", default)]
    pub products: Vec<crate::models::Product>,
    #[serde(rename = "TotalCount", default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
