//! FILENAME: core/pivot-engine/src/row_key.rs
//! Row identity - the grouping key that puts records on the same visual row.
//!
//! The key is a structured tuple of trimmed fields compared field by field.
//! No case folding or fuzzy matching is applied: "city" and "City" are two
//! rows. Brand names follow the same rule when they become columns.

use serde::{Deserialize, Serialize};
use catalog::{ProductRecord, RecordError};

use crate::definition::RowGrouping;

/// Composite key of the descriptive fields of a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowIdentity {
    pub make: String,
    pub model: String,
    pub variant: String,
    pub position: String,
    /// Present only when the grouping includes category.
    pub category: Option<String>,
}

impl RowIdentity {
    /// "Honda City" style title for the descriptive column.
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// Builds the row identity of a record, failing on the first required field
/// that is blank. The brand name is required too, since a record without a
/// brand has no column to land in.
pub fn row_key(record: &ProductRecord, grouping: RowGrouping) -> Result<RowIdentity, RecordError> {
    let make = ProductRecord::require(&record.make, "make")?;
    let model = ProductRecord::require(&record.model, "model")?;
    let variant = ProductRecord::require(&record.variant, "variant")?;
    let position = ProductRecord::require(&record.position, "position")?;
    let category = if grouping.includes_category() {
        Some(ProductRecord::require(&record.category, "category")?.to_string())
    } else {
        None
    };
    ProductRecord::require(&record.brand_name, "brand_name")?;

    Ok(RowIdentity {
        make: make.to_string(),
        model: model.to_string(),
        variant: variant.to_string(),
        position: position.to_string(),
        category,
    })
}
