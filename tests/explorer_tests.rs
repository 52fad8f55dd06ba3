use cova_probe::{CovaClient, Explorer, ExplorerOptions};
use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::test_config;

/// Full-sequence run against a mock API: every step finds data and every
/// expected dump lands in the output directory.
#[tokio::test]
async fn full_exploration_writes_all_dumps() {
    let server = MockServer::start().await;
    let dump_dir = tempfile::tempdir().unwrap();
    let config = test_config(&server.uri(), dump_dir.path().to_str().unwrap());

    let product_body = json!({
        "Products": [
            {
                "ProductId": 101,
                "Name": "Test Product",
                "Skus": [{"Value": "SKU-101"}],
                "Availability": [
                    {"LocationId": 293894, "RoomId": 5, "InStockQuantity": 12.0, "OnOrderQuantity": 2.0}
                ]
            },
            {"ProductId": 102, "Name": "Empty Product", "Availability": []}
        ],
        "TotalCount": 2
    });

    Mock::given(method("POST"))
        .and(path("/dataplatform/v1/companies/293892/DetailedProductData"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/dataplatform/v1/companies/293892/DetailedProductData/ByProductIdList"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path_regex(r"^/dataplatform/v1/companies/293892/DetailedProductData/UpdatedAsOf/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Products": []})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/Catalog/v1/Companies(293892)/CatalogItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "CatalogItems": [{"Id": "c-1", "Quantity": 4}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/SupplyChain/v1/companies/293892/location/293894/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"ProductId": 101, "QuantityOnHand": 7.0}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pricing/v1/Companies(293892)/ProductPrices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Id": "p-1", "CatalogItemId": "c-1", "RegularPrice": 12.5, "AtTierPrice": 10.0}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/taxes/v1/Companies(293892)/TaxRates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Id": "t-1", "Name": "GST", "Rate": 0.05}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/Companies/293892/Locations/293894/Rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Id": 5, "Name": "Sales Floor"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/SupplyChain/v1/companies/293892/location/293894/room/5/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"CatalogItemId": "c-1", "Quantity": 3.0, "PackageId": "pk-9"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CovaClient::new("test-token".to_string(), &config).unwrap();
    let mut explorer = Explorer::new(client, &config, ExplorerOptions::default());
    explorer.run().await.expect("run should complete");

    for dump in [
        "product_data_response.json",
        "product_specific_ids_response.json",
        "catalog_CatalogItems.json",
        "inventory_inventory.json",
        "product_prices_response.json",
        "tax_rates_response.json",
        "products_updated_since_response.json",
        "room_inventory_response.json",
    ] {
        assert!(dump_dir.path().join(dump).exists(), "missing dump {}", dump);
    }
    assert_eq!(explorer.store().written().len(), 8);
}

/// A failing product step must not keep the rest of the sequence from
/// running; a failing rooms step is swallowed by its guard.
#[tokio::test]
async fn exploration_proceeds_past_failing_steps() {
    let server = MockServer::start().await;
    let dump_dir = tempfile::tempdir().unwrap();
    let config = test_config(&server.uri(), dump_dir.path().to_str().unwrap());

    // Product data errors out; catalog still answers; everything else 404s
    Mock::given(method("POST"))
        .and(path("/dataplatform/v1/companies/293892/DetailedProductData"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/Catalog/v1/Companies(293892)/CatalogItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"Id": "c-1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CovaClient::new("test-token".to_string(), &config).unwrap();
    let mut explorer = Explorer::new(client, &config, ExplorerOptions::default());
    explorer.run().await.expect("run should survive step failures");

    assert!(dump_dir.path().join("catalog_CatalogItems.json").exists());
    assert!(!dump_dir.path().join("product_data_response.json").exists());
    assert!(!dump_dir.path().join("room_inventory_response.json").exists());
}

/// Skip flags cut whole steps out of the sequence
#[tokio::test]
async fn skip_flags_suppress_their_steps() {
    let server = MockServer::start().await;
    let dump_dir = tempfile::tempdir().unwrap();
    let config = test_config(&server.uri(), dump_dir.path().to_str().unwrap());

    Mock::given(method("POST"))
        .and(path("/dataplatform/v1/companies/293892/DetailedProductData"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Products": [{"ProductId": 101, "Name": "Only Product"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/dataplatform/v1/companies/293892/DetailedProductData/ByProductIdList"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Products": []})))
        .expect(1)
        .mount(&server)
        .await;

    let options = ExplorerOptions {
        skip_catalog: true,
        skip_inventory_probe: true,
        skip_pricing: true,
        skip_updated_since: true,
        skip_rooms: true,
    };

    let client = CovaClient::new("test-token".to_string(), &config).unwrap();
    let mut explorer = Explorer::new(client, &config, options);
    explorer.run().await.expect("run should complete");

    // Only the two product dumps, nothing from the skipped steps
    assert_eq!(explorer.store().written().len(), 2);
    assert!(dump_dir.path().join("product_data_response.json").exists());
    assert!(dump_dir.path().join("product_specific_ids_response.json").exists());
}
