//! FILENAME: core/catalog/src/error.rs

use serde::Serialize;
use thiserror::Error;

/// A record that cannot be placed into a pivot row.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecordError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}
