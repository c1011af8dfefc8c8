//! FILENAME: core/persistence/src/history.rs
//! Price change log reader.
//!
//! Each admin price save appends a row holding the snapshot before and after
//! the edit, joined with the product it belongs to.

use std::path::Path;

use catalog::{diff_prices, log_info, PriceChange, PriceSnapshot};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::rows::{parse_rows, snapshot_from_columns, BrandRef, PriceColumns};

/// How many entries the history screen lists.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
struct ProductRef {
    #[serde(default)]
    car_make: Option<String>,
    #[serde(default)]
    car_model: Option<String>,
    #[serde(default)]
    product_variant: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    brands: Option<BrandRef>,
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(default)]
    changed_at: Option<String>,
    #[serde(default)]
    products: Option<ProductRef>,
    #[serde(default)]
    old_prices: Option<PriceColumns>,
    #[serde(default)]
    new_prices: Option<PriceColumns>,
}

/// One logged price edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistoryEntry {
    pub changed_at: String,
    pub brand_name: String,
    pub make: String,
    pub model: String,
    pub variant: String,
    pub position: String,
    pub old_prices: Option<PriceSnapshot>,
    pub new_prices: Option<PriceSnapshot>,
}

impl PriceHistoryEntry {
    /// Tiers that moved in this edit.
    pub fn changes(&self) -> Vec<PriceChange> {
        diff_prices(self.old_prices.as_ref(), self.new_prices.as_ref())
    }
}

impl From<HistoryRow> for PriceHistoryEntry {
    fn from(row: HistoryRow) -> Self {
        let product = row.products.as_ref();
        PriceHistoryEntry {
            changed_at: row.changed_at.unwrap_or_default(),
            brand_name: product
                .and_then(|p| p.brands.as_ref())
                .and_then(|b| b.name.clone())
                .unwrap_or_default(),
            make: text(product.and_then(|p| p.car_make.as_ref())),
            model: text(product.and_then(|p| p.car_model.as_ref())),
            variant: text(product.and_then(|p| p.product_variant.as_ref())),
            position: text(product.and_then(|p| p.position.as_ref())),
            old_prices: row.old_prices.as_ref().map(snapshot_from_columns),
            new_prices: row.new_prices.as_ref().map(snapshot_from_columns),
        }
    }
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// Parses history rows, newest first, keeping at most `limit` entries.
/// Timestamps compare as ISO-8601 text.
pub fn parse_history(json: &str, limit: usize) -> Result<Vec<PriceHistoryEntry>, PersistenceError> {
    let rows: Vec<HistoryRow> = parse_rows(json)?;
    let mut entries: Vec<PriceHistoryEntry> = rows.into_iter().map(PriceHistoryEntry::from).collect();
    entries.sort_by(|a, b| b.changed_at.cmp(&a.changed_at));
    entries.truncate(limit);
    Ok(entries)
}

pub fn load_history(path: impl AsRef<Path>, limit: usize) -> Result<Vec<PriceHistoryEntry>, PersistenceError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let entries = parse_history(&json, limit)?;
    log_info!("LOAD", "loaded {} history entries from {}", entries.len(), path.display());
    Ok(entries)
}
