//! FILENAME: core/pivot-engine/src/definition.rs
//! Pivot Definition - The configuration of a comparison matrix.
//!
//! This module contains all the types needed to DESCRIBE a matrix:
//! which tiers it shows, how records are grouped into rows, how empty
//! cells read, and which of the two column nestings is used.
//! These structures are immutable snapshots of user intent; the engine
//! never mutates them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use catalog::{PriceTier, TierDescriptor, VisibilityConfig};

// ============================================================================
// ROW GROUPING
// ============================================================================

/// Which descriptive fields make up a row identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowGrouping {
    /// make + model + variant + position + category (public page).
    WithCategory,
    /// make + model + variant + position (print sheet).
    WithoutCategory,
}

impl RowGrouping {
    pub fn includes_category(self) -> bool {
        matches!(self, RowGrouping::WithCategory)
    }
}

impl Default for RowGrouping {
    fn default() -> Self {
        RowGrouping::WithCategory
    }
}

// ============================================================================
// VIEW MODE
// ============================================================================

/// Column nesting of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    /// Outer axis = tiers, inner axis = brands ("customer view").
    TierMajor,
    /// Outer axis = brands, inner axis = tiers ("brand view").
    BrandMajor,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::TierMajor
    }
}

// ============================================================================
// CELL PLACEHOLDERS
// ============================================================================

/// Display text for cells that hold no positive price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPlaceholders {
    /// No price snapshot exists for this brand in this row.
    pub absent: String,
    /// A snapshot exists but this tier is zero or unset.
    pub not_set: String,
}

impl Default for CellPlaceholders {
    fn default() -> Self {
        CellPlaceholders {
            absent: "-".to_string(),
            not_set: "N/A".to_string(),
        }
    }
}

// ============================================================================
// PIVOT DEFINITION
// ============================================================================

/// Complete configuration for one matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotDefinition {
    /// Candidate tiers. Only `visible` ones are rendered, by `display_order`.
    pub tiers: SmallVec<[TierDescriptor; 5]>,

    pub grouping: RowGrouping,

    pub placeholders: CellPlaceholders,

    /// Tiers whose priced cells are highlighted.
    pub emphasized_tiers: SmallVec<[PriceTier; 2]>,

    /// Label of the descriptive column header.
    pub row_header_label: String,

    /// Whether the search query also matches part numbers.
    pub search_part_numbers: bool,
}

impl PivotDefinition {
    pub fn new(tiers: impl IntoIterator<Item = TierDescriptor>, grouping: RowGrouping) -> Self {
        PivotDefinition {
            tiers: tiers.into_iter().collect(),
            grouping,
            placeholders: CellPlaceholders::default(),
            emphasized_tiers: SmallVec::new(),
            row_header_label: "Model / Product".to_string(),
            search_part_numbers: true,
        }
    }

    /// Public comparison page: the tiers the settings make visible, in the
    /// configured order, grouped with category, retail highlighted.
    pub fn homepage(config: &VisibilityConfig) -> Self {
        let mut definition = PivotDefinition::new(config.visible_tiers(), RowGrouping::WithCategory);
        definition.emphasized_tiers.push(PriceTier::Retail);
        definition
    }

    /// Printable price sheet: distributor cost and retail side by side per
    /// brand, whatever the visibility settings say. Category is not part of
    /// the row identity, both empty states print as a dash and the search
    /// covers make, model and brand only.
    pub fn print_sheet() -> Self {
        let tiers = [
            TierDescriptor::new(PriceTier::Distributor, 0).with_label("Cost"),
            TierDescriptor::new(PriceTier::Retail, 1).with_label("RRP"),
        ];
        let mut definition = PivotDefinition::new(tiers, RowGrouping::WithoutCategory);
        definition.placeholders.not_set = definition.placeholders.absent.clone();
        definition.row_header_label = "Model / Specification".to_string();
        definition.search_part_numbers = false;
        definition
    }

    /// Visible tiers sorted by display order (stable for equal orders).
    pub fn visible_tiers(&self) -> Vec<&TierDescriptor> {
        let mut tiers: Vec<&TierDescriptor> = self.tiers.iter().filter(|t| t.visible).collect();
        tiers.sort_by_key(|t| t.display_order);
        tiers
    }

    pub fn is_emphasized(&self, tier: PriceTier) -> bool {
        self.emphasized_tiers.contains(&tier)
    }
}

impl Default for PivotDefinition {
    fn default() -> Self {
        PivotDefinition::homepage(&VisibilityConfig::default())
    }
}
