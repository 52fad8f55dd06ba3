use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One product record from the DetailedProductData endpoints.
/// The data platform attaches more fields than any probe run needs, so
/// anything not modelled explicitly lands in `extra`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Product {
    #[serde(rename = "ProductId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "MasterProductId", default, skip_serializing_if = "Option::is_none")]
    pub master_product_id: Option<i64>,
    #[serde(rename = "CategoryName", default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(rename = "ClassificationName", default, skip_serializing_if = "Option::is_none")]
    pub classification_name: Option<String>,
    #[serde(rename = "LongDescription", default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(rename = "IsArchived", default)]
    pub is_archived: bool,
    #[serde(rename = "CreatedDateUtc", default, skip_serializing_if = "Option::is_none")]
    pub created_date_utc: Option<String>,
    #[serde(rename = "UpdatedDateUtc", default, skip_serializing_if = "Option::is_none")]
    pub updated_date_utc: Option<String>,
    #[serde(rename = "Skus", default, skip_serializing_if = "Vec::is_empty")]
    pub skus: Vec<Sku>,
    #[serde(rename = "Availability", default, skip_serializing_if = "Vec::is_empty")]
    pub availability: Vec<AvailabilityRecord>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Product {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// First SKU value when the response carried any
    pub fn catalog_sku(&self) -> Option<&str> {
        self.skus.first().and_then(|s| s.value.as_deref())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Sku {
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Per-location/per-room stock record nested under a product
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AvailabilityRecord {
    #[serde(rename = "LocationId", default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    #[serde(rename = "RoomId", default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[serde(rename = "InStockQuantity", default, skip_serializing_if = "Option::is_none")]
    pub in_stock_quantity: Option<f64>,
    #[serde(rename = "OnOrderQuantity", default, skip_serializing_if = "Option::is_none")]
    pub on_order_quantity: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Fixed filter payload for the DetailedProductData family of endpoints.
/// Field spelling follows the API documentation exactly.
#[derive(Debug, Serialize, Clone)]
pub struct DetailedProductRequest {
    #[serde(rename = "LocationId")]
    pub location_id: i64,
    #[serde(rename = "IncludeProductSkusAndUpcs")]
    pub include_product_skus_and_upcs: bool,
    #[serde(rename = "IncludeProductSpecifications")]
    pub include_product_specifications: bool,
    #[serde(rename = "IncludeClassifications")]
    pub include_classifications: bool,
    #[serde(rename = "IncludeProductAssets")]
    pub include_product_assets: bool,
    #[serde(rename = "IncludeAvailability")]
    pub include_availability: bool,
    #[serde(rename = "IncludePackageDetails")]
    pub include_package_details: bool,
    #[serde(rename = "IncludePricing")]
    pub include_pricing: bool,
    #[serde(rename = "IncludeTaxes")]
    pub include_taxes: bool,
    #[serde(rename = "InStockOnly")]
    pub in_stock_only: bool,
    #[serde(rename = "IncludeAllLifecycles")]
    pub include_all_lifecycles: bool,
    #[serde(rename = "SellingRoomOnly")]
    pub selling_room_only: bool,
    #[serde(rename = "Skip", skip_serializing_if = "Option::is_none")]
    pub skip: Option<i64>,
    #[serde(rename = "Top", skip_serializing_if = "Option::is_none")]
    pub top: Option<i64>,
    #[serde(rename = "ProductIds", skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<i64>>,
}

impl DetailedProductRequest {
    /// Bulk query: everything included, first `top` products
    pub fn bulk(location_id: i64, top: i64) -> Self {
        Self {
            location_id,
            include_product_skus_and_upcs: true,
            include_product_specifications: true,
            include_classifications: true,
            include_product_assets: true,
            include_availability: true,
            include_package_details: true,
            include_pricing: true,
            include_taxes: true,
            in_stock_only: false,
            include_all_lifecycles: true,
            selling_room_only: false,
            skip: Some(0),
            top: Some(top),
            product_ids: None,
        }
    }

    /// Re-query restricted to specific product IDs
    pub fn by_id_list(location_id: i64, product_ids: Vec<i64>) -> Self {
        Self {
            skip: None,
            top: None,
            product_ids: Some(product_ids),
            ..Self::bulk(location_id, 0)
        }
    }
}
