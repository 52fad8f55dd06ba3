// Models module - All data structures and API payloads

pub mod product;
pub mod room;
pub mod inventory;
pub mod pricing;
pub mod responses;

// Re-export all models for easier imports
pub use product::*;
pub use room::*;
pub use inventory::*;
pub use pricing::*;
pub use responses::*;
