use cova_probe::operations::probes::{count_items, ProbeOperations};
use cova_probe::{CovaClient, ResponseStore};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::test_config;

/// Probing walks a fixed candidate list in order and keeps the first
/// endpoint that answers 200 with parseable JSON. Unmatched paths on the
/// mock server answer 404, which stands in for the endpoints that the
/// real API rejects.

#[tokio::test]
async fn inventory_probe_falls_through_to_first_usable_endpoint() {
    let server = MockServer::start().await;
    let dump_dir = tempfile::tempdir().unwrap();
    let config = test_config(&server.uri(), dump_dir.path().to_str().unwrap());
    let client = CovaClient::new("test-token".to_string(), &config).unwrap();
    let mut store = ResponseStore::new(dump_dir.path().to_str().unwrap());

    // First candidate is rejected, second one answers
    Mock::given(method("GET"))
        .and(path("/SupplyChain/v1/companies/293892/location/293894/inventory"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/DataPlatform/Inventory/v1/Companies(293892)/Locations(293894)/CatalogItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"CatalogItemId": "c-1", "Quantity": 4},
            {"CatalogItemId": "c-2", "Quantity": 0}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let probes = ProbeOperations::new(&client);
    let result = probes.probe_direct_inventory(&mut store).await;

    let data = result.expect("second candidate should win");
    assert_eq!(data.as_array().unwrap().len(), 2);

    let dump_path = dump_dir.path().join("inventory_CatalogItems.json");
    assert!(dump_path.exists(), "winning response should be dumped");
    assert_eq!(store.written().len(), 1);
}

#[tokio::test]
async fn inventory_probe_stops_at_first_success() {
    let server = MockServer::start().await;
    let dump_dir = tempfile::tempdir().unwrap();
    let config = test_config(&server.uri(), dump_dir.path().to_str().unwrap());
    let client = CovaClient::new("test-token".to_string(), &config).unwrap();
    let mut store = ResponseStore::new(dump_dir.path().to_str().unwrap());

    Mock::given(method("GET"))
        .and(path("/SupplyChain/v1/companies/293892/location/293894/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Items": [1, 2, 3]})))
        .expect(1)
        .mount(&server)
        .await;

    // Later candidates must not be touched once one has answered
    Mock::given(method("GET"))
        .and(path("/DataPlatform/Inventory/v1/Companies(293892)/Locations(293894)/CatalogItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let probes = ProbeOperations::new(&client);
    let result = probes.probe_direct_inventory(&mut store).await;
    assert!(result.is_some());

    assert!(dump_dir.path().join("inventory_inventory.json").exists());
}

#[tokio::test]
async fn inventory_probe_skips_unparseable_bodies() {
    let server = MockServer::start().await;
    let dump_dir = tempfile::tempdir().unwrap();
    let config = test_config(&server.uri(), dump_dir.path().to_str().unwrap());
    let client = CovaClient::new("test-token".to_string(), &config).unwrap();
    let mut store = ResponseStore::new(dump_dir.path().to_str().unwrap());

    // 200 with an HTML error page, not JSON
    Mock::given(method("GET"))
        .and(path("/SupplyChain/v1/companies/293892/location/293894/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/DataPlatform/Inventory/v1/Companies(293892)/Locations(293894)/CatalogItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"Id": 1}])))
        .expect(1)
        .mount(&server)
        .await;

    let probes = ProbeOperations::new(&client);
    let result = probes.probe_direct_inventory(&mut store).await;
    assert!(result.is_some());
}

#[tokio::test]
async fn inventory_probe_returns_none_when_everything_fails() {
    let server = MockServer::start().await;
    let dump_dir = tempfile::tempdir().unwrap();
    let config = test_config(&server.uri(), dump_dir.path().to_str().unwrap());
    let client = CovaClient::new("test-token".to_string(), &config).unwrap();
    let mut store = ResponseStore::new(dump_dir.path().to_str().unwrap());

    // No mounts: every candidate gets the mock server's 404

    let probes = ProbeOperations::new(&client);
    let result = probes.probe_direct_inventory(&mut store).await;
    assert!(result.is_none());
    assert!(store.written().is_empty(), "nothing should be dumped on total failure");
}

#[tokio::test]
async fn catalog_probe_reports_inventory_bearing_keys() {
    let server = MockServer::start().await;
    let dump_dir = tempfile::tempdir().unwrap();
    let config = test_config(&server.uri(), dump_dir.path().to_str().unwrap());
    let client = CovaClient::new("test-token".to_string(), &config).unwrap();
    let mut store = ResponseStore::new(dump_dir.path().to_str().unwrap());

    Mock::given(method("GET"))
        .and(path("/Catalog/v1/Companies(293892)/CatalogItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "CatalogItems": [
                {"Id": "c-1", "Name": "Widget", "Quantity": 4},
                {"Id": "c-2", "Name": "Gadget"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let probes = ProbeOperations::new(&client);
    let result = probes.probe_catalog_items(&mut store).await;

    let data = result.expect("first candidate should win");
    assert_eq!(count_items(&data, &["Items", "CatalogItems"]), 2);
    assert!(dump_dir.path().join("catalog_CatalogItems.json").exists());
}

#[test]
fn count_items_handles_the_shapes_seen_in_the_wild() {
    assert_eq!(count_items(&json!([1, 2, 3]), &["Items"]), 3);
    assert_eq!(count_items(&json!({"Items": [1, 2]}), &["Items", "Inventory"]), 2);
    assert_eq!(count_items(&json!({"Inventory": [1]}), &["Items", "Inventory"]), 1);
    // Preference order matters when both keys are present
    assert_eq!(count_items(&json!({"Items": [1], "Inventory": [1, 2]}), &["Items", "Inventory"]), 1);
    // Unknown object shape falls back to counting top-level values
    assert_eq!(count_items(&json!({"a": 1, "b": 2}), &["Items"]), 2);
    assert_eq!(count_items(&json!("scalar"), &["Items"]), 0);
}
