use serde::{Deserialize, Serialize};
use crate::v_out;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CovaConfig {
    pub api: ApiConfig,
    pub credentials: CredentialConfig,
    pub company: CompanyConfig,
    pub probe: ProbeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// OAuth2 token endpoint on the iQmetrix accounts service
    pub auth_url: String,
    /// Base URL for all Cova data endpoints
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialConfig {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Company identifier assigned by Cova
    pub company_id: String,
    /// Location (store) identifier under the company
    pub location_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// How many products to request in the bulk detailed-product query
    pub product_sample_size: i64,
    /// How many product IDs to carry into the by-id re-query
    pub product_id_limit: usize,
    /// Page size for the single pricing query
    pub price_page_size: i64,
    /// Cutoff window for the updated-since query, in days
    pub updated_since_days: i64,
    /// Directory where raw JSON response dumps are written
    pub output_dir: String,
    /// File that receives the API call log when --api-log is set
    pub api_log_file: String,
}

impl Default for CovaConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                auth_url: crate::ACCOUNTS_AUTH_URL.to_string(),
                base_url: crate::API_BASE_URL.to_string(),
            },
            credentials: CredentialConfig {
                client_id: "SeatoSky.SeatoSky".to_string(),
                client_secret: "asIhtUi91ZIwPXHRnwfgMLLz".to_string(),
                username: "SeatoSky.COVA.APIUser.SeatoSky".to_string(),
                password: "XrE4XIU@2%".to_string(),
            },
            company: CompanyConfig {
                company_id: "293892".to_string(),
                location_id: "293894".to_string(),
            },
            probe: ProbeConfig {
                product_sample_size: 10,
                product_id_limit: 5,
                price_page_size: 10,
                updated_since_days: 7,
                output_dir: ".".to_string(),
                api_log_file: "api_probe.log".to_string(),
            },
        }
    }
}

impl CovaConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            v_out!("📋 Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: CovaConfig = toml::from_str(&config_str)?;
            Ok(config)
        } else {
            v_out!("📋 Creating default configuration at {}", config_path);
            let config = CovaConfig::default();
            config.save(config_path)?;
            v_out!("💡 Edit {} to point at your own company and credentials", config_path);
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.api.auth_url.is_empty() || self.api.base_url.is_empty() {
            return Err("auth_url and base_url must not be empty".to_string());
        }
        if self.credentials.client_id.is_empty() || self.credentials.username.is_empty() {
            return Err("client_id and username must not be empty".to_string());
        }
        if self.company.company_id.is_empty() || self.company.location_id.is_empty() {
            return Err("company_id and location_id must not be empty".to_string());
        }
        // The detailed-product payload carries LocationId as an integer
        if self.company.location_id.parse::<i64>().is_err() {
            return Err("location_id must be numeric".to_string());
        }
        if self.probe.product_sample_size <= 0 {
            return Err("product_sample_size must be greater than 0".to_string());
        }
        if self.probe.price_page_size <= 0 {
            return Err("price_page_size must be greater than 0".to_string());
        }
        if self.probe.product_id_limit == 0 {
            return Err("product_id_limit must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Print configuration summary (never echoes secrets)
    pub fn print_summary(&self) {
        v_out!("📋 Configuration Summary:");
        v_out!("   🌐 API base: {}", self.api.base_url);
        v_out!("   🏢 Company: {} / Location: {}", self.company.company_id, self.company.location_id);
        v_out!("   👤 API user: {}", self.credentials.username);
        v_out!("   📦 Product sample: {} (re-query limit {})", self.probe.product_sample_size, self.probe.product_id_limit);
        v_out!("   💾 Dump directory: {}", self.probe.output_dir);
    }

    /// LocationId as the integer the data platform payloads expect
    pub fn location_id_num(&self) -> Result<i64, Box<dyn std::error::Error>> {
        self.company
            .location_id
            .parse::<i64>()
            .map_err(|e| format!("location_id '{}' is not numeric: {}", self.company.location_id, e).into())
    }
}
