//! FILENAME: core/persistence/src/lib.rs
//! Catalog Persistence Module
//!
//! Reads the catalog store's JSON responses: the joined product listing the
//! pivot consumes, the tier visibility settings, and the price change log.

mod error;
mod rows;
mod records;
mod settings;
mod history;

pub use error::PersistenceError;
pub use records::{load_records, parse_records, sort_records};
pub use settings::{load_visibility, parse_visibility, visibility_to_json};
pub use history::{load_history, parse_history, PriceHistoryEntry, DEFAULT_HISTORY_LIMIT};
