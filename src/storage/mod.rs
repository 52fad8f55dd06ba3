// Storage module - Raw response persistence

pub mod response_store;

pub use response_store::ResponseStore;
