//! FILENAME: core/catalog/src/tier.rs
//! PURPOSE: The closed set of price tiers a product can be quoted at.
//! CONTEXT: Tiers are addressed three ways: the column name in the price store
//! (`price_retail`), the visibility toggle in the settings store
//! (`show_retail`), and the human label (`Retail`).

use serde::{Deserialize, Serialize};

/// A named price column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Distributor,
    Agent,
    Workshop,
    Retail,
    Online,
}

impl PriceTier {
    /// All tiers in canonical order.
    pub const ALL: [PriceTier; 5] = [
        PriceTier::Distributor,
        PriceTier::Agent,
        PriceTier::Workshop,
        PriceTier::Retail,
        PriceTier::Online,
    ];

    /// Order used by the price change log.
    pub const HISTORY_ORDER: [PriceTier; 5] = [
        PriceTier::Retail,
        PriceTier::Distributor,
        PriceTier::Agent,
        PriceTier::Workshop,
        PriceTier::Online,
    ];

    /// Column name in the price store.
    pub fn key(self) -> &'static str {
        match self {
            PriceTier::Distributor => "price_distributor",
            PriceTier::Agent => "price_agent",
            PriceTier::Workshop => "price_workshop",
            PriceTier::Retail => "price_retail",
            PriceTier::Online => "price_online",
        }
    }

    /// Visibility toggle name in the settings store.
    pub fn setting_key(self) -> &'static str {
        match self {
            PriceTier::Distributor => "show_distributor",
            PriceTier::Agent => "show_agent",
            PriceTier::Workshop => "show_workshop",
            PriceTier::Retail => "show_retail",
            PriceTier::Online => "show_online",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceTier::Distributor => "Distributor",
            PriceTier::Agent => "Agent",
            PriceTier::Workshop => "Workshop",
            PriceTier::Retail => "Retail",
            PriceTier::Online => "Online",
        }
    }

    /// Parses a price store column name. Unknown names yield None.
    pub fn from_key(key: &str) -> Option<PriceTier> {
        PriceTier::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Parses a settings toggle name. Unknown names yield None.
    pub fn from_setting_key(key: &str) -> Option<PriceTier> {
        PriceTier::ALL.into_iter().find(|t| t.setting_key() == key)
    }

    /// Position in `ALL`, used to index inline per-tier storage.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
