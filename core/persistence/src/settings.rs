//! FILENAME: core/persistence/src/settings.rs
//! Visibility settings loader.

use std::path::Path;

use catalog::{log_info, VisibilityConfig, VisibilitySetting};
use serde::Deserialize;

use crate::error::PersistenceError;

#[derive(Debug, Deserialize)]
struct SettingRow {
    #[serde(default)]
    id: Option<i64>,
    setting_key: String,
    #[serde(default)]
    is_visible: bool,
}

/// Parses settings rows. Rows carrying an `id` are ordered by it (rows
/// without one keep their place after them); the resulting order is the
/// tier column order.
pub fn parse_visibility(json: &str) -> Result<VisibilityConfig, PersistenceError> {
    let mut rows: Vec<SettingRow> = crate::rows::parse_rows(json)?;
    rows.sort_by_key(|row| (row.id.is_none(), row.id));
    Ok(VisibilityConfig::new(
        rows.into_iter()
            .map(|row| VisibilitySetting::new(row.setting_key, row.is_visible))
            .collect(),
    ))
}

pub fn load_visibility(path: impl AsRef<Path>) -> Result<VisibilityConfig, PersistenceError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let config = parse_visibility(&json)?;
    log_info!(
        "LOAD",
        "loaded {} visibility settings from {}",
        config.settings().len(),
        path.display()
    );
    Ok(config)
}

/// Serializes a config back to settings rows for saving.
pub fn visibility_to_json(config: &VisibilityConfig) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(config)?)
}
