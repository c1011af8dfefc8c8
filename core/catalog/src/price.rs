//! FILENAME: core/catalog/src/price.rs
//! PURPOSE: The price snapshot attached to a (product, brand) pair.
//! CONTEXT: A snapshot is sparse. A tier that is missing, zero, negative or
//! NaN is "not set"; it never means the part is free.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::tier::PriceTier;

/// Sparse mapping from tier to quoted value. At most one entry per tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    entries: SmallVec<[(PriceTier, f64); 5]>,
}

impl PriceSnapshot {
    pub fn new() -> Self {
        PriceSnapshot {
            entries: SmallVec::new(),
        }
    }

    /// Builder form of `set`.
    pub fn with(mut self, tier: PriceTier, value: f64) -> Self {
        self.set(tier, value);
        self
    }

    /// Stores a value for a tier, replacing any previous one.
    pub fn set(&mut self, tier: PriceTier, value: f64) {
        match self.entries.iter_mut().find(|(t, _)| *t == tier) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((tier, value)),
        }
    }

    /// The raw stored value, whatever it is.
    pub fn get(&self, tier: PriceTier) -> Option<f64> {
        self.entries
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, v)| *v)
    }

    /// The value only when it counts as set (strictly positive and finite).
    pub fn value(&self, tier: PriceTier) -> Option<f64> {
        self.get(tier).filter(|v| is_set(*v))
    }

    pub fn is_set(&self, tier: PriceTier) -> bool {
        self.value(tier).is_some()
    }

    /// True when no tier holds a set value.
    pub fn is_blank(&self) -> bool {
        self.entries.iter().all(|(_, v)| !is_set(*v))
    }

    /// Stored entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PriceTier, f64)> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<(PriceTier, f64)> for PriceSnapshot {
    fn from_iter<I: IntoIterator<Item = (PriceTier, f64)>>(iter: I) -> Self {
        let mut snapshot = PriceSnapshot::new();
        for (tier, value) in iter {
            snapshot.set(tier, value);
        }
        snapshot
    }
}

fn is_set(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Display form of a price: shortest decimal that round-trips (`120`, `120.5`).
pub fn format_price(value: f64) -> String {
    format!("{}", value)
}
