// Cova API Probe Library
// Diagnostic explorer for the Cova retail/inventory cloud API

pub mod models;
pub mod client;
pub mod operations;
pub mod explorer;
pub mod storage;
pub mod config;
pub mod verbosity;

// Re-export commonly used types
pub use models::{
    product::{Product, AvailabilityRecord},
    room::Room,
    inventory::InventoryRecord,
    responses::*,
};

pub use client::{CovaClient, request_token};
pub use explorer::{Explorer, ExplorerOptions};
pub use config::CovaConfig;
pub use storage::ResponseStore;

// Constants
pub const ACCOUNTS_AUTH_URL: &str = "https://accounts.iqmetrix.net/v1/oauth2/token";
pub const API_BASE_URL: &str = "https://api.covasoft.net";
pub const CONFIG_FILE: &str = "cova_probe.toml";
