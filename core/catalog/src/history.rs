//! FILENAME: core/catalog/src/history.rs
//! PURPOSE: Compares the price snapshots before and after an admin edit.
//! CONTEXT: Every price save appends a change log entry holding the old and
//! new snapshot. The history screen lists only the tiers that moved.

use serde::{Deserialize, Serialize};

use crate::price::PriceSnapshot;
use crate::tier::PriceTier;

/// One tier whose value changed. Unset values are reported as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub tier: PriceTier,
    pub old: f64,
    pub new: f64,
}

impl PriceChange {
    pub fn label(&self) -> &'static str {
        self.tier.label()
    }
}

/// Tiers that differ between two snapshots, in history display order.
/// A tier unset on both sides is not a change.
pub fn diff_prices(old: Option<&PriceSnapshot>, new: Option<&PriceSnapshot>) -> Vec<PriceChange> {
    PriceTier::HISTORY_ORDER
        .iter()
        .filter_map(|&tier| {
            let before = old.and_then(|s| s.value(tier));
            let after = new.and_then(|s| s.value(tier));
            if before == after {
                return None;
            }
            Some(PriceChange {
                tier,
                old: before.unwrap_or(0.0),
                new: after.unwrap_or(0.0),
            })
        })
        .collect()
}
