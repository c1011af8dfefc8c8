//! FILENAME: core/catalog/src/lib.rs
//! PURPOSE: Shared data model for the price comparison catalog.
//! CONTEXT: Re-exports public types and modules for use by the pivot and
//! persistence crates.

pub mod error;
pub mod history;
pub mod logging;
pub mod price;
pub mod record;
pub mod settings;
pub mod suggest;
pub mod tier;

// Re-export commonly used types at the crate root
pub use error::RecordError;
pub use history::{diff_prices, PriceChange};
pub use price::{format_price, PriceSnapshot};
pub use record::ProductRecord;
pub use settings::{setting_label, TierDescriptor, VisibilityConfig, VisibilitySetting};
pub use suggest::{CatalogSuggestions, ProductCategory};
pub use tier::PriceTier;
