use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One price row from the pricing service
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProductPrice {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(rename = "EntityId", default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<i64>,
    #[serde(rename = "CatalogItemId", default, skip_serializing_if = "Option::is_none")]
    pub catalog_item_id: Option<Value>,
    #[serde(rename = "RegularPrice", default, skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<f64>,
    #[serde(rename = "AtTierPrice", default, skip_serializing_if = "Option::is_none")]
    pub at_tier_price: Option<f64>,
    #[serde(rename = "PricingTier", default, skip_serializing_if = "Option::is_none")]
    pub pricing_tier: Option<PricingTier>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PricingTier {
    #[serde(rename = "TierName", default, skip_serializing_if = "Option::is_none")]
    pub tier_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One tax rate row from the taxes service
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TaxRate {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Rate", default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
