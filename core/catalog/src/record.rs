//! FILENAME: core/catalog/src/record.rs
//! PURPOSE: The flat (product, brand, price) record the catalog store returns.
//! CONTEXT: Records are produced fresh per query and are read-only from then
//! on. Required fields that the store left null arrive as empty strings; the
//! pivot reports those records as skipped instead of grouping them.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::price::PriceSnapshot;

/// One product listed under one brand, with its current price snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub make: String,
    pub model: String,
    pub variant: String,
    pub position: String,
    pub category: String,
    pub brand_name: String,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub price: Option<PriceSnapshot>,
}

impl ProductRecord {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        variant: impl Into<String>,
        position: impl Into<String>,
        brand_name: impl Into<String>,
    ) -> Self {
        ProductRecord {
            make: make.into(),
            model: model.into(),
            variant: variant.into(),
            position: position.into(),
            brand_name: brand_name.into(),
            ..ProductRecord::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_part_number(mut self, part_number: impl Into<String>) -> Self {
        self.part_number = Some(part_number.into());
        self
    }

    pub fn with_price(mut self, price: PriceSnapshot) -> Self {
        self.price = Some(price);
        self
    }

    /// Copy with make, model and variant trimmed, as applied on data entry
    /// so that "City " and "City" land on the same row.
    pub fn trimmed(&self) -> Self {
        ProductRecord {
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            variant: self.variant.trim().to_string(),
            ..self.clone()
        }
    }

    /// Returns the trimmed value of a required field, or the error naming it.
    pub fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, RecordError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(RecordError::MissingField { field })
        } else {
            Ok(trimmed)
        }
    }
}
