// Client module - Cova API client
pub mod api;

pub use api::{CovaClient, request_token};
