use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use crate::config::CovaConfig;
use crate::models::*;
use crate::{v_trace, v_verbose};
use std::fs::OpenOptions;
use std::io::Write;

/// Request a bearer token from the accounts service with the OAuth2
/// password grant. The token lives for this process run only.
pub async fn request_token(config: &CovaConfig) -> Result<String, Box<dyn std::error::Error>> {
    let params = [
        ("grant_type", "password"),
        ("client_id", config.credentials.client_id.as_str()),
        ("client_secret", config.credentials.client_secret.as_str()),
        ("username", config.credentials.username.as_str()),
        ("password", config.credentials.password.as_str()),
    ];

    let client = reqwest::Client::new();
    let response = client.post(&config.api.auth_url).form(&params).send().await?;
    let status = response.status();

    if !status.is_success() {
        let error_body = response.text().await.unwrap_or_else(|_| "Could not read response".to_string());
        return Err(format!("Token request failed with status {}: {}", status.as_u16(), error_body).into());
    }

    let token_response: TokenResponse = response.json().await?;
    match token_response.access_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err("No access token found in auth response".into()),
    }
}

#[derive(Clone)]
pub struct CovaClient {
    client: reqwest::Client,
    pub token: String,
    base_url: String,
    company_id: String,
    location_id: String,
    location_id_num: i64,
    api_logging: bool,
    api_log_file: String,
}

impl CovaClient {
    pub fn new(token: String, config: &CovaConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))?,
        );

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(CovaClient {
            client,
            token,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            company_id: config.company.company_id.clone(),
            location_id: config.company.location_id.clone(),
            location_id_num: config.location_id_num()?,
            api_logging: false,
            api_log_file: config.probe.api_log_file.clone(),
        })
    }

    pub fn set_api_logging(&mut self, logging: bool) {
        self.api_logging = logging;
    }

    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn log_api_call(&self, method: &str, url: &str, body: Option<&str>, response_status: u16, response_body: Option<&str>) {
        if !self.api_logging {
            return;
        }

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!(
            "\n=== API CALL [{timestamp}] ===\n\
             Method: {method}\n\
             URL: {url}\n\
             Request Body: {request_body}\n\
             Response Status: {response_status}\n\
             Response Body: {response_body}\n\
             ========================================\n",
            timestamp = timestamp,
            method = method,
            url = url,
            request_body = body.unwrap_or("None"),
            response_status = response_status,
            response_body = response_body.unwrap_or("Not captured")
        );

        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.api_log_file)
        {
            let _ = file.write_all(log_entry.as_bytes());
        }
    }

    /// POST one of the DetailedProductData endpoints with the shared filter
    /// payload and parse the product list out of the response
    async fn post_detailed_products(&self, endpoint: &str, payload: &DetailedProductRequest) -> Result<DetailedProductResponse, Box<dyn std::error::Error>> {
        let url = format!("{}{}", self.base_url, endpoint);
        let payload_text = serde_json::to_string(payload)?;
        v_verbose!("📤 Sending request to {} with payload: {}", url, payload_text);

        let response = self.client.post(&url).json(payload).send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read response".to_string());
            self.log_api_call("POST", &url, Some(&payload_text), status, Some(&error_body));
            return Err(format!("Product data request failed with status {}: {}", status, error_body).into());
        }

        let response_text = response.text().await?;
        self.log_api_call("POST", &url, Some(&payload_text), status, Some(&response_text));
        v_trace!("📥 Response body: {}", response_text);

        let product_response: DetailedProductResponse = serde_json::from_str(&response_text)?;
        Ok(product_response)
    }

    // Product operations
    pub async fn get_detailed_product_data(&self, sample_size: i64) -> Result<DetailedProductResponse, Box<dyn std::error::Error>> {
        let endpoint = format!("/dataplatform/v1/companies/{}/DetailedProductData", self.company_id);
        let payload = DetailedProductRequest::bulk(self.location_id_num, sample_size);
        self.post_detailed_products(&endpoint, &payload).await
    }

    pub async fn get_products_by_id_list(&self, product_ids: Vec<i64>) -> Result<DetailedProductResponse, Box<dyn std::error::Error>> {
        let endpoint = format!(
            "/dataplatform/v1/companies/{}/DetailedProductData/ByProductIdList",
            self.company_id
        );
        let payload = DetailedProductRequest::by_id_list(self.location_id_num, product_ids);
        self.post_detailed_products(&endpoint, &payload).await
    }

    pub async fn get_products_updated_since(&self, cutoff: chrono::DateTime<chrono::Utc>) -> Result<DetailedProductResponse, Box<dyn std::error::Error>> {
        let endpoint = format!(
            "/dataplatform/v1/companies/{}/DetailedProductData/UpdatedAsOf/{}",
            self.company_id,
            cutoff.format("%Y-%m-%dT%H:%M:%SZ")
        );
        let payload = DetailedProductRequest::bulk(self.location_id_num, 0);
        self.post_detailed_products(&endpoint, &payload).await
    }

    // Room operations
    pub async fn get_rooms(&self) -> Result<Vec<Room>, Box<dyn std::error::Error>> {
        let url = format!(
            "{}/v1/Companies/{}/Locations/{}/Rooms",
            self.base_url, self.company_id, self.location_id
        );
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read response".to_string());
            self.log_api_call("GET", &url, None, status, Some(&error_body));
            return Err(format!("Rooms request failed with status {}: {}", status, error_body).into());
        }

        let response_text = response.text().await?;
        self.log_api_call("GET", &url, None, status, Some(&response_text));

        let rooms: Vec<Room> = serde_json::from_str(&response_text)?;
        Ok(rooms)
    }

    pub async fn get_room_inventory(&self, room_id: i64) -> Result<Vec<InventoryRecord>, Box<dyn std::error::Error>> {
        let url = format!(
            "{}/SupplyChain/v1/companies/{}/location/{}/room/{}/inventory",
            self.base_url, self.company_id, self.location_id, room_id
        );
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read response".to_string());
            self.log_api_call("GET", &url, None, status, Some(&error_body));
            return Err(format!("Room inventory request failed with status {}: {}", status, error_body).into());
        }

        let response_text = response.text().await?;
        self.log_api_call("GET", &url, None, status, Some(&response_text));

        let items: Vec<InventoryRecord> = serde_json::from_str(&response_text)?;
        Ok(items)
    }

    // Pricing operations
    pub async fn get_product_prices(&self, page_size: i64) -> Result<Vec<ProductPrice>, Box<dyn std::error::Error>> {
        let url = format!(
            "{}/pricing/v1/Companies({})/ProductPrices?$filter=EntityId eq {}&$skip=0&$top={}",
            self.base_url, self.company_id, self.location_id, page_size
        );
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read response".to_string());
            self.log_api_call("GET", &url, None, status, Some(&error_body));
            return Err(format!("Price request failed with status {}: {}", status, error_body).into());
        }

        let response_text = response.text().await?;
        self.log_api_call("GET", &url, None, status, Some(&response_text));

        let prices: Vec<ProductPrice> = serde_json::from_str(&response_text)?;
        Ok(prices)
    }

    pub async fn get_tax_rates(&self) -> Result<Vec<TaxRate>, Box<dyn std::error::Error>> {
        let url = format!("{}/taxes/v1/Companies({})/TaxRates", self.base_url, self.company_id);
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read response".to_string());
            self.log_api_call("GET", &url, None, status, Some(&error_body));
            return Err(format!("Tax rate request failed with status {}: {}", status, error_body).into());
        }

        let response_text = response.text().await?;
        self.log_api_call("GET", &url, None, status, Some(&response_text));

        let rates: Vec<TaxRate> = serde_json::from_str(&response_text)?;
        Ok(rates)
    }

    /// GET an arbitrary endpoint path without treating non-200 as an error.
    /// Endpoint probing inspects the status itself.
    pub async fn get_raw(&self, endpoint: &str) -> Result<(u16, String), Box<dyn std::error::Error>> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        self.log_api_call("GET", &url, None, status, Some(&body));
        Ok((status, body))
    }
}
