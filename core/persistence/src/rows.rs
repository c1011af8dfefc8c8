//! FILENAME: core/persistence/src/rows.rs
//! Row-level helpers shared by the loaders.

use catalog::{PriceSnapshot, PriceTier};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::PersistenceError;

/// A store response: either the bare row array or the `{data, error}`
/// envelope the hosted store wraps it in.
#[derive(Deserialize)]
#[serde(untagged)]
enum Response<T> {
    Bare(Vec<T>),
    Wrapped {
        data: Option<Vec<T>>,
        error: Option<Value>,
    },
}

/// Parses a response body into rows. A non-null `error` fails the load.
pub(crate) fn parse_rows<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, PersistenceError> {
    match serde_json::from_str::<Response<T>>(json)? {
        Response::Bare(rows) => Ok(rows),
        Response::Wrapped { error: Some(error), .. } if !error.is_null() => {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string());
            Err(PersistenceError::InvalidFormat(message))
        }
        Response::Wrapped { data, .. } => Ok(data.unwrap_or_default()),
    }
}

/// A price row: tier columns plus bookkeeping columns we ignore.
pub(crate) type PriceColumns = Map<String, Value>;

/// Reads the tier columns of a price row. Null or unparseable values are
/// left unset; numeric strings are accepted.
pub(crate) fn snapshot_from_columns(columns: &PriceColumns) -> PriceSnapshot {
    columns
        .iter()
        .filter_map(|(key, value)| {
            let tier = PriceTier::from_key(key)?;
            let number = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            }?;
            Some((tier, number))
        })
        .collect()
}

/// `{"name": ...}` as joined from the brands table.
#[derive(Debug, Deserialize)]
pub(crate) struct BrandRef {
    #[serde(default)]
    pub name: Option<String>,
}
