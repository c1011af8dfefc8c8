//! FILENAME: core/persistence/src/records.rs
//! Product listing loader - the record batch the pivot consumes.
//!
//! Rows come from the products table joined with its brand and its price
//! rows. Null string columns become empty strings here so the pivot can
//! report them as skipped records instead of failing the whole load.

use std::path::Path;

use catalog::{log_info, ProductRecord};
use serde::Deserialize;
use serde_json::Value;

use crate::error::PersistenceError;
use crate::rows::{parse_rows, snapshot_from_columns, BrandRef, PriceColumns};

/// The joined price column: an array of rows, a single row, or null.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceRows {
    Many(Vec<PriceColumns>),
    One(PriceColumns),
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    #[serde(default)]
    car_make: Option<String>,
    #[serde(default)]
    car_model: Option<String>,
    #[serde(default)]
    product_variant: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    part_number: Option<String>,
    #[serde(default)]
    brands: Option<BrandRef>,
    #[serde(default)]
    prices: Option<PriceRows>,
}

impl ProductRow {
    fn into_record(self) -> ProductRecord {
        let price = match &self.prices {
            None => None,
            Some(PriceRows::One(columns)) => Some(columns),
            Some(PriceRows::Many(rows)) => most_recent(rows),
        }
        .map(snapshot_from_columns);

        ProductRecord {
            make: self.car_make.unwrap_or_default(),
            model: self.car_model.unwrap_or_default(),
            variant: self.product_variant.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            brand_name: self.brands.and_then(|b| b.name).unwrap_or_default(),
            part_number: self.part_number.filter(|p| !p.trim().is_empty()),
            price,
        }
    }
}

/// Picks the price row with the latest `updated_at`; the first row on ties
/// or when no row carries a timestamp. Timestamps compare as ISO-8601 text.
fn most_recent(rows: &[PriceColumns]) -> Option<&PriceColumns> {
    let stamp = |row: &PriceColumns| row.get("updated_at").and_then(Value::as_str).map(str::to_string);
    let mut best: Option<(&PriceColumns, Option<String>)> = None;
    for row in rows {
        let row_stamp = stamp(row);
        let newer = match &best {
            None => true,
            Some((_, best_stamp)) => row_stamp > *best_stamp,
        };
        if newer {
            best = Some((row, row_stamp));
        }
    }
    best.map(|(row, _)| row)
}

/// Parses a product listing response into records, in response order.
pub fn parse_records(json: &str) -> Result<Vec<ProductRecord>, PersistenceError> {
    let rows: Vec<ProductRow> = parse_rows(json)?;
    Ok(rows.into_iter().map(ProductRow::into_record).collect())
}

/// Loads a product listing from a JSON file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<ProductRecord>, PersistenceError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let records = parse_records(&json)?;
    log_info!("LOAD", "loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Orders records by (make, model, position), the order the pivot expects
/// its input in. Stable, so equal keys keep their relative order.
pub fn sort_records(records: &mut [ProductRecord]) {
    records.sort_by(|a, b| {
        (&a.make, &a.model, &a.position).cmp(&(&b.make, &b.model, &b.position))
    });
}
