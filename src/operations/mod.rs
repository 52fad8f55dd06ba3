// Operations module - Higher-level exploration steps over the raw client

pub mod probes;
pub mod availability;
pub mod pricing;

pub use probes::ProbeOperations;
pub use availability::{analyze_availability_data, AvailabilitySummary};
pub use pricing::PricingOperations;
