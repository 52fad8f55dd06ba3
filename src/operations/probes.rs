// Endpoint probing - try guessed paths until one returns usable data
use serde_json::Value;
use crate::client::CovaClient;
use crate::storage::ResponseStore;
use crate::{v_error, v_out};

/// Keys that mark a catalog item as carrying inventory data
const INVENTORY_KEYS: [&str; 6] = [
    "Quantity",
    "Stock",
    "Inventory",
    "QuantityOnHand",
    "InStockQuantity",
    "Availability",
];

pub struct ProbeOperations<'a> {
    client: &'a CovaClient,
}

impl<'a> ProbeOperations<'a> {
    pub fn new(client: &'a CovaClient) -> Self {
        Self { client }
    }

    /// Candidate paths for a location-wide inventory listing. Nobody has
    /// found documentation for one that works, hence the guessing.
    fn inventory_candidates(&self) -> Vec<String> {
        let company = self.client.company_id();
        let location = self.client.location_id();
        vec![
            format!("/SupplyChain/v1/companies/{}/location/{}/inventory", company, location),
            format!("/DataPlatform/Inventory/v1/Companies({})/Locations({})/CatalogItems", company, location),
            format!("/Inventory/v1/Companies/{}/Inventory/Locations/{}", company, location),
            format!("/v1/companies/{}/locations/{}/inventory", company, location),
            format!("/v1/Companies/{}/Inventory", company),
        ]
    }

    fn catalog_candidates(&self) -> Vec<String> {
        let company = self.client.company_id();
        vec![
            format!("/Catalog/v1/Companies({})/CatalogItems", company),
            format!("/v1/Companies/{}/Catalog/Items", company),
            format!("/v1/Companies/{}/CatalogItems", company),
        ]
    }

    /// Walk the guessed inventory endpoints, keep the first that answers
    /// 200 with parseable JSON, and dump that body to disk
    pub async fn probe_direct_inventory(&self, store: &mut ResponseStore) -> Option<Value> {
        v_out!("🔄 Trying various inventory endpoints...");

        for endpoint in self.inventory_candidates() {
            v_out!("\n🔄 Trying endpoint: {}{}", self.client.base_url(), endpoint);

            let (status, body) = match self.client.get_raw(&endpoint).await {
                Ok(result) => result,
                Err(e) => {
                    v_error!("❌ Request failed: {}", e);
                    continue;
                }
            };

            if status != 200 {
                v_error!("❌ Error {}: {}...", status, truncate(&body, 100));
                continue;
            }

            match serde_json::from_str::<Value>(&body) {
                Ok(data) => {
                    let item_count = count_items(&data, &["Items", "Inventory"]);
                    v_out!("✅ Success! Got {} items", item_count);

                    if let Err(e) = store.dump_for_endpoint("inventory", &endpoint, &data) {
                        v_error!("⚠️ Failed to save inventory dump: {}", e);
                    }
                    return Some(data);
                }
                Err(e) => {
                    v_error!("⚠️ Error parsing JSON ({}): {}...", e, truncate(&body, 100));
                }
            }
        }

        v_error!("❌ All inventory endpoints failed");
        None
    }

    /// Walk the guessed catalog endpoints the same way, additionally
    /// checking the first few items for anything stock-shaped
    pub async fn probe_catalog_items(&self, store: &mut ResponseStore) -> Option<Value> {
        v_out!("🔄 Getting catalog items...");

        for endpoint in self.catalog_candidates() {
            v_out!("\n🔄 Trying catalog endpoint: {}{}", self.client.base_url(), endpoint);

            let (status, body) = match self.client.get_raw(&endpoint).await {
                Ok(result) => result,
                Err(e) => {
                    v_error!("❌ Request failed: {}", e);
                    continue;
                }
            };

            if status != 200 {
                v_error!("❌ Error {}: {}...", status, truncate(&body, 100));
                continue;
            }

            match serde_json::from_str::<Value>(&body) {
                Ok(data) => {
                    let item_count = count_items(&data, &["Items", "CatalogItems"]);
                    v_out!("✅ Success! Got {} catalog items", item_count);

                    if item_count > 0 {
                        inspect_catalog_items(&data);
                    }

                    if let Err(e) = store.dump_for_endpoint("catalog", &endpoint, &data) {
                        v_error!("⚠️ Failed to save catalog dump: {}", e);
                    }
                    return Some(data);
                }
                Err(e) => {
                    v_error!("⚠️ Error parsing JSON ({}): {}...", e, truncate(&body, 100));
                }
            }
        }

        v_error!("❌ All catalog endpoints failed");
        None
    }
}

/// Count the records in a response whose shape is only known at runtime:
/// a bare array, an object keyed by one of `preferred_keys`, or failing
/// that the number of top-level values
pub fn count_items(data: &Value, preferred_keys: &[&str]) -> usize {
    match data {
        Value::Array(items) => items.len(),
        Value::Object(map) => {
            for key in preferred_keys {
                if let Some(Value::Array(items)) = map.get(*key) {
                    return items.len();
                }
            }
            map.len()
        }
        _ => 0,
    }
}

/// Pull the first three items out of whichever container shape the
/// catalog endpoint used and report any inventory-bearing keys
fn inspect_catalog_items(data: &Value) {
    let items: Vec<&Value> = match data {
        Value::Array(items) => items.iter().take(3).collect(),
        Value::Object(map) => ["Items", "CatalogItems"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .map(|items| items.iter().take(3).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    if items.is_empty() {
        return;
    }

    v_out!("\n🔎 Checking for inventory data in catalog items:");
    for (idx, item) in items.iter().enumerate() {
        if let Value::Object(fields) = item {
            let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
            v_out!("Item #{} - keys: {}", idx + 1, keys.join(", "));

            for key in INVENTORY_KEYS {
                if let Some(value) = fields.get(key) {
                    v_out!("  Found inventory data: {} = {}", key, value);
                }
            }
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
