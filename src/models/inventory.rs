use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One inventory line as returned by the room/supply-chain endpoints.
/// These endpoints disagree about field names, so both the identifier and
/// the quantity are resolved through a fallback chain and everything else
/// stays in `extra` for the raw dump.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InventoryRecord {
    #[serde(rename = "ProductId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Value>,
    #[serde(rename = "CatalogItemId", default, skip_serializing_if = "Option::is_none")]
    pub catalog_item_id: Option<Value>,
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(rename = "EntityId", default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<Value>,
    #[serde(rename = "QuantityOnHand", default, skip_serializing_if = "Option::is_none")]
    pub quantity_on_hand: Option<f64>,
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(rename = "StockCount", default, skip_serializing_if = "Option::is_none")]
    pub stock_count: Option<f64>,
    #[serde(rename = "OnHand", default, skip_serializing_if = "Option::is_none")]
    pub on_hand: Option<f64>,
    #[serde(rename = "InStockQuantity", default, skip_serializing_if = "Option::is_none")]
    pub in_stock_quantity: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl InventoryRecord {
    /// Product identifier, whichever field this endpoint used for it
    pub fn resolve_id(&self) -> Option<&Value> {
        self.product_id
            .as_ref()
            .or(self.catalog_item_id.as_ref())
            .or(self.id.as_ref())
            .or(self.entity_id.as_ref())
    }

    /// On-hand quantity, whichever field this endpoint used for it
    pub fn resolve_quantity(&self) -> Option<f64> {
        self.quantity_on_hand
            .or(self.quantity)
            .or(self.stock_count)
            .or(self.on_hand)
            .or(self.in_stock_quantity)
    }

    pub fn id_display(&self) -> String {
        self.resolve_id().map(display_value).unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn quantity_display(&self) -> String {
        self.resolve_quantity()
            .map(|q| q.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Render a JSON scalar the way it reads on the wire, without quoting strings
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
