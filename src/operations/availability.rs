// Availability reporting over detailed product data
use crate::models::{DetailedProductResponse, Product};
use crate::{v_error, v_out};

/// How many availability-bearing products get the per-record breakdown
const DETAIL_SAMPLE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySummary {
    pub product_count: usize,
    pub products_with_availability: usize,
    pub total_availability_records: usize,
}

/// Count and print the availability sub-records in a product response.
/// Pure reporting over data already fetched.
pub fn analyze_availability_data(response: &DetailedProductResponse) -> AvailabilitySummary {
    v_out!("\n🔎 Analyzing availability data...");

    let products = &response.products;
    if products.is_empty() {
        v_error!("❌ No products data found");
        return AvailabilitySummary {
            product_count: 0,
            products_with_availability: 0,
            total_availability_records: 0,
        };
    }

    let mut products_with_availability = 0;
    let mut total_availability_records = 0;

    for product in products {
        if !product.availability.is_empty() {
            products_with_availability += 1;
            total_availability_records += product.availability.len();
        }
    }

    v_out!(
        "Found {} products with availability data (out of {} products)",
        products_with_availability,
        products.len()
    );
    v_out!("Total availability items: {}", total_availability_records);

    v_out!("\nDetailed availability data for first {} products with availability:", DETAIL_SAMPLE);
    let mut shown = 0;
    for product in products {
        if product.availability.is_empty() {
            continue;
        }

        print_product_availability(product);

        shown += 1;
        if shown >= DETAIL_SAMPLE {
            break;
        }
    }

    if shown == 0 {
        v_error!("❌ No products found with availability data!");
    }

    AvailabilitySummary {
        product_count: products.len(),
        products_with_availability,
        total_availability_records,
    }
}

fn print_product_availability(product: &Product) {
    v_out!("\nProduct: {} (ID: {})", product.display_name(), fmt_opt_id(product.product_id));

    for (idx, record) in product.availability.iter().enumerate() {
        v_out!("  Availability #{}:", idx + 1);
        v_out!("    LocationId: {}", fmt_opt_id(record.location_id));
        v_out!("    RoomId: {}", fmt_opt_id(record.room_id));
        v_out!("    InStockQuantity: {}", record.in_stock_quantity.unwrap_or(0.0));

        // Whatever else this endpoint decided to attach
        if let Some(on_order) = record.on_order_quantity {
            v_out!("    OnOrderQuantity: {}", on_order);
        }
        for (key, value) in &record.extra {
            v_out!("    {}: {}", key, value);
        }
    }
}

fn fmt_opt_id(id: Option<i64>) -> String {
    id.map(|v| v.to_string()).unwrap_or_else(|| "Unknown".to_string())
}
