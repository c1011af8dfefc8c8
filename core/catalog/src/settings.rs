//! FILENAME: core/catalog/src/settings.rs
//! PURPOSE: Visibility toggles that decide which price tiers the public
//! comparison page shows.
//! CONTEXT: The settings store holds one `{setting_key, is_visible}` row per
//! tier. The row order is the column order on the page.

use serde::{Deserialize, Serialize};

use crate::tier::PriceTier;

/// A single toggle as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilitySetting {
    pub setting_key: String,
    pub is_visible: bool,
}

impl VisibilitySetting {
    pub fn new(setting_key: impl Into<String>, is_visible: bool) -> Self {
        VisibilitySetting {
            setting_key: setting_key.into(),
            is_visible,
        }
    }

    /// Human label for the settings screen.
    pub fn label(&self) -> String {
        setting_label(&self.setting_key)
    }
}

/// A price tier as it participates in a rendered matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDescriptor {
    pub tier: PriceTier,

    /// Column label shown in the header.
    pub label: String,

    pub visible: bool,

    /// 0-based position among the tiers of the same matrix.
    pub display_order: usize,
}

impl TierDescriptor {
    pub fn new(tier: PriceTier, display_order: usize) -> Self {
        TierDescriptor {
            tier,
            label: tier.label().to_string(),
            visible: true,
            display_order,
        }
    }

    /// Same tier under a different header label (the print sheet says "RRP").
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn key(&self) -> &'static str {
        self.tier.key()
    }
}

/// Ordered list of tier visibility toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityConfig {
    settings: Vec<VisibilitySetting>,
}

impl VisibilityConfig {
    pub fn new(settings: Vec<VisibilitySetting>) -> Self {
        VisibilityConfig { settings }
    }

    /// Every tier in canonical order with the same flag.
    pub fn canonical(visible: bool) -> Self {
        VisibilityConfig {
            settings: PriceTier::ALL
                .iter()
                .map(|t| VisibilitySetting::new(t.setting_key(), visible))
                .collect(),
        }
    }

    pub fn settings(&self) -> &[VisibilitySetting] {
        &self.settings
    }

    /// Known tiers in configured order with their effective flag.
    ///
    /// The first occurrence of a key fixes its position; the last occurrence
    /// decides its flag. Unknown keys are skipped.
    fn resolved(&self) -> Vec<(PriceTier, bool)> {
        let mut resolved: Vec<(PriceTier, bool)> = Vec::with_capacity(PriceTier::ALL.len());
        for setting in &self.settings {
            let Some(tier) = PriceTier::from_setting_key(&setting.setting_key) else {
                continue;
            };
            match resolved.iter_mut().find(|(t, _)| *t == tier) {
                Some(entry) => entry.1 = setting.is_visible,
                None => resolved.push((tier, setting.is_visible)),
            }
        }
        resolved
    }

    pub fn is_visible(&self, tier: PriceTier) -> bool {
        self.resolved()
            .iter()
            .any(|(t, visible)| *t == tier && *visible)
    }

    /// Visible tiers in configured order. Missing tiers are not visible.
    pub fn visible_tiers(&self) -> Vec<TierDescriptor> {
        self.resolved()
            .into_iter()
            .filter(|(_, visible)| *visible)
            .enumerate()
            .map(|(order, (tier, _))| TierDescriptor::new(tier, order))
            .collect()
    }

    /// All five tiers: configured ones first in configured order, then the
    /// ones the config does not mention (hidden).
    pub fn tier_descriptors(&self) -> Vec<TierDescriptor> {
        let mut resolved = self.resolved();
        for tier in PriceTier::ALL {
            if !resolved.iter().any(|(t, _)| *t == tier) {
                resolved.push((tier, false));
            }
        }
        resolved
            .into_iter()
            .enumerate()
            .map(|(order, (tier, visible))| TierDescriptor {
                visible,
                ..TierDescriptor::new(tier, order)
            })
            .collect()
    }

    /// Sets the flag on every row for this tier, appending a row if none exists.
    pub fn set_visible(&mut self, tier: PriceTier, visible: bool) {
        let mut found = false;
        for setting in self
            .settings
            .iter_mut()
            .filter(|s| s.setting_key == tier.setting_key())
        {
            setting.is_visible = visible;
            found = true;
        }
        if !found {
            self.settings
                .push(VisibilitySetting::new(tier.setting_key(), visible));
        }
    }

    /// Flips the effective flag of a tier.
    pub fn toggle(&mut self, tier: PriceTier) {
        let visible = self.is_visible(tier);
        self.set_visible(tier, !visible);
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        let mut config = VisibilityConfig::canonical(false);
        config.set_visible(PriceTier::Retail, true);
        config
    }
}

/// Turns a toggle key into its settings screen label:
/// `show_distributor` -> `Distributor Price`.
pub fn setting_label(setting_key: &str) -> String {
    let stem = setting_key.strip_prefix("show_").unwrap_or(setting_key);
    let words: Vec<String> = stem
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    format!("{} Price", words.join(" "))
}
