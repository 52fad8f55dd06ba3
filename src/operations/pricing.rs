// Pricing and tax surveying against the pricing/taxes services
use crate::client::CovaClient;
use crate::models::{ProductPrice, TaxRate};
use crate::storage::ResponseStore;
use crate::{v_error, v_out, v_verbose};

pub struct PricingOperations<'a> {
    client: &'a CovaClient,
}

impl<'a> PricingOperations<'a> {
    pub fn new(client: &'a CovaClient) -> Self {
        Self { client }
    }

    /// Fetch one page of product prices, print a summary, dump the page
    pub async fn survey_prices(&self, page_size: i64, store: &mut ResponseStore) -> Option<Vec<ProductPrice>> {
        v_out!("🔄 Getting product prices...");

        let prices = match self.client.get_product_prices(page_size).await {
            Ok(prices) => prices,
            Err(e) => {
                v_error!("❌ Error getting product prices: {}", e);
                return None;
            }
        };

        v_out!("✅ Successfully got {} price records", prices.len());

        let regular_prices: Vec<f64> = prices.iter().filter_map(|p| p.regular_price).collect();
        if let (Some(min), Some(max)) = (
            regular_prices.iter().cloned().reduce(f64::min),
            regular_prices.iter().cloned().reduce(f64::max),
        ) {
            v_out!("   Regular price range: {:.2} - {:.2}", min, max);
        }

        for price in prices.iter().take(3) {
            v_verbose!(
                "   CatalogItemId: {}, Regular: {}, AtTier: {}, Tier: {}",
                price.catalog_item_id.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "Unknown".to_string()),
                price.regular_price.unwrap_or(0.0),
                price.at_tier_price.unwrap_or(0.0),
                price
                    .pricing_tier
                    .as_ref()
                    .and_then(|t| t.tier_name.as_deref())
                    .unwrap_or("-")
            );
        }

        match serde_json::to_value(&prices) {
            Ok(data) => {
                if let Err(e) = store.dump_named("product_prices_response.json", &data) {
                    v_error!("⚠️ Failed to save price dump: {}", e);
                }
            }
            Err(e) => v_error!("⚠️ Failed to serialize price dump: {}", e),
        }

        Some(prices)
    }

    /// Fetch the company tax rates, print a summary, dump the list
    pub async fn survey_tax_rates(&self, store: &mut ResponseStore) -> Option<Vec<TaxRate>> {
        v_out!("\n🔄 Getting tax rates...");

        let rates = match self.client.get_tax_rates().await {
            Ok(rates) => rates,
            Err(e) => {
                v_error!("❌ Error getting tax rates: {}", e);
                return None;
            }
        };

        v_out!("✅ Successfully got {} tax rates", rates.len());
        for rate in &rates {
            v_out!(
                "   {}: {}",
                rate.name.as_deref().unwrap_or("(unnamed)"),
                rate.rate.map(|r| format!("{}", r)).unwrap_or_else(|| "?".to_string())
            );
        }

        match serde_json::to_value(&rates) {
            Ok(data) => {
                if let Err(e) = store.dump_named("tax_rates_response.json", &data) {
                    v_error!("⚠️ Failed to save tax rate dump: {}", e);
                }
            }
            Err(e) => v_error!("⚠️ Failed to serialize tax rate dump: {}", e),
        }

        Some(rates)
    }
}
