// Explorer module - Linear drive through every endpoint worth probing
use crate::client::CovaClient;
use crate::config::CovaConfig;
use crate::models::DetailedProductResponse;
use crate::operations::{analyze_availability_data, PricingOperations, ProbeOperations};
use crate::storage::ResponseStore;
use crate::{v_error, v_out};

/// Which exploration steps to leave out of the run
#[derive(Debug, Default, Clone)]
pub struct ExplorerOptions {
    pub skip_catalog: bool,
    pub skip_inventory_probe: bool,
    pub skip_pricing: bool,
    pub skip_updated_since: bool,
    pub skip_rooms: bool,
}

pub struct Explorer {
    pub client: CovaClient,
    store: ResponseStore,
    options: ExplorerOptions,
    product_sample_size: i64,
    product_id_limit: usize,
    price_page_size: i64,
    updated_since_days: i64,
}

impl Explorer {
    pub fn new(client: CovaClient, config: &CovaConfig, options: ExplorerOptions) -> Self {
        let store = ResponseStore::new(&config.probe.output_dir);
        Self {
            client,
            store,
            options,
            product_sample_size: config.probe.product_sample_size,
            product_id_limit: config.probe.product_id_limit,
            price_page_size: config.probe.price_page_size,
            updated_since_days: config.probe.updated_since_days,
        }
    }

    /// Run the full exploration sequence. Individual step failures are
    /// printed and skipped; the run itself keeps going.
    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        v_out!("\n═══ STEP 1: Detailed Product Data ═══");
        self.explore_products().await;

        if !self.options.skip_catalog {
            v_out!("\n═══ STEP 2: Catalog Item Probing ═══");
            let probes = ProbeOperations::new(&self.client);
            probes.probe_catalog_items(&mut self.store).await;
        }

        if !self.options.skip_inventory_probe {
            v_out!("\n═══ STEP 3: Inventory Endpoint Probing ═══");
            let probes = ProbeOperations::new(&self.client);
            probes.probe_direct_inventory(&mut self.store).await;
        }

        if !self.options.skip_pricing {
            v_out!("\n═══ STEP 4: Pricing & Taxes ═══");
            let pricing = PricingOperations::new(&self.client);
            pricing.survey_prices(self.price_page_size, &mut self.store).await;
            pricing.survey_tax_rates(&mut self.store).await;
        }

        if !self.options.skip_updated_since {
            v_out!("\n═══ STEP 5: Recently Updated Products ═══");
            self.explore_updated_since().await;
        }

        if !self.options.skip_rooms {
            v_out!("\n═══ STEP 6: Rooms & Room Inventory ═══");
            // Guarded as a unit: anything failing in here is reported
            // and the run still finishes with the dump manifest
            if let Err(e) = self.explore_rooms().await {
                v_error!("❌ Error getting rooms data: {}", e);
            }
        }

        v_out!("");
        self.store.print_manifest();
        Ok(())
    }

    /// Bulk product query, availability analysis, then the by-id re-query
    /// over the IDs the bulk query surfaced
    async fn explore_products(&mut self) {
        v_out!("🔄 Getting detailed product data...");

        let product_data = match self.client.get_detailed_product_data(self.product_sample_size).await {
            Ok(response) => {
                v_out!("✅ Successfully got product data. Products count: {}", response.products.len());
                response
            }
            Err(e) => {
                v_error!("❌ Error getting product data: {}", e);
                return;
            }
        };

        analyze_availability_data(&product_data);
        self.dump_response("product_data_response.json", &product_data);

        let product_ids: Vec<i64> = product_data
            .products
            .iter()
            .filter_map(|p| p.product_id)
            .take(self.product_id_limit)
            .collect();

        if product_ids.is_empty() {
            v_error!("⚠️ No product IDs found to re-query");
            return;
        }

        v_out!("\n🔄 Getting detailed product data for {} specific products...", product_ids.len());
        v_out!("   ProductIds: {:?}", product_ids);

        match self.client.get_products_by_id_list(product_ids).await {
            Ok(response) => {
                v_out!(
                    "✅ Successfully got product data for specific IDs. Products count: {}",
                    response.products.len()
                );
                analyze_availability_data(&response);
                self.dump_response("product_specific_ids_response.json", &response);
            }
            Err(e) => {
                v_error!("❌ Error getting product data by ID list: {}", e);
            }
        }
    }

    /// Products touched inside the configured updated-since window
    async fn explore_updated_since(&mut self) {
        let cutoff = chrono::Utc::now() - chrono::Duration::days(self.updated_since_days);
        v_out!(
            "🔄 Getting products updated since {} ({} days back)...",
            cutoff.format("%Y-%m-%dT%H:%M:%SZ"),
            self.updated_since_days
        );

        match self.client.get_products_updated_since(cutoff).await {
            Ok(response) => {
                v_out!("✅ Successfully got updated products. Products count: {}", response.products.len());
                self.dump_response("products_updated_since_response.json", &response);
            }
            Err(e) => {
                v_error!("❌ Error getting updated products: {}", e);
            }
        }
    }

    /// Rooms listing, then inventory for the first room that has an Id
    async fn explore_rooms(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        v_out!("🔄 Getting rooms data...");

        let rooms = self.client.get_rooms().await?;
        v_out!("✅ Successfully got rooms data: {} rooms", rooms.len());

        let Some(first_room) = rooms.first() else {
            v_error!("⚠️ Location has no rooms");
            return Ok(());
        };

        let Some(room_id) = first_room.id else {
            v_error!("⚠️ First room has no Id field, skipping inventory query");
            return Ok(());
        };

        v_out!("\n🔄 Getting inventory for room {} ({})...", room_id, first_room.display_name());
        let room_inventory = self.client.get_room_inventory(room_id).await?;
        v_out!("✅ Successfully got inventory data for room {}: {} items", room_id, room_inventory.len());

        match serde_json::to_value(&room_inventory) {
            Ok(data) => {
                if let Err(e) = self.store.dump_named("room_inventory_response.json", &data) {
                    v_error!("⚠️ Failed to save room inventory dump: {}", e);
                }
            }
            Err(e) => v_error!("⚠️ Failed to serialize room inventory dump: {}", e),
        }

        v_out!("\n📊 Inventory summary:");
        v_out!("Found {} inventory items", room_inventory.len());

        if !room_inventory.is_empty() {
            v_out!("\nFirst 3 inventory items:");
            for (idx, item) in room_inventory.iter().take(3).enumerate() {
                v_out!("Item #{}: ProductId: {}, Quantity: {}", idx + 1, item.id_display(), item.quantity_display());

                for (key, value) in &item.extra {
                    v_out!("  {}: {}", key, value);
                }
            }
        }

        Ok(())
    }

    fn dump_response(&mut self, filename: &str, response: &DetailedProductResponse) {
        match serde_json::to_value(response) {
            Ok(data) => {
                if let Err(e) = self.store.dump_named(filename, &data) {
                    v_error!("⚠️ Failed to save {}: {}", filename, e);
                }
            }
            Err(e) => v_error!("⚠️ Failed to serialize {}: {}", filename, e),
        }
    }

    pub fn store(&self) -> &ResponseStore {
        &self.store
    }
}
