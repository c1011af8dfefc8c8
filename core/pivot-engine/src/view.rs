//! FILENAME: core/pivot-engine/src/view.rs
//! Matrix View - Renderable output for the comparison table.
//!
//! This module turns a PivotResult into the two header rows and the data
//! grid a renderer walks without any knowledge of grouping. The column
//! sequence for both nestings comes from one traversal (`column_order`), so
//! the tier-major and brand-major tables always agree on every cell.

use serde::Serialize;
use catalog::{format_price, PriceTier, TierDescriptor};

use crate::definition::{PivotDefinition, ViewMode};
use crate::engine::{PivotResult, PivotRow};
use crate::row_key::RowIdentity;

// ============================================================================
// CELL STATE
// ============================================================================

/// What a (row, brand, tier) cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum CellState {
    /// No price snapshot for this brand on this row.
    Absent,
    /// A snapshot exists but the tier is zero or unset.
    NotSet,
    /// A positive price.
    Price(f64),
}

impl CellState {
    pub fn price(self) -> Option<f64> {
        match self {
            CellState::Price(value) => Some(value),
            CellState::Absent | CellState::NotSet => None,
        }
    }
}

/// Resolves one cell from the grouped row.
pub fn resolve_cell(row: &PivotRow, brand: &str, tier: PriceTier) -> CellState {
    match row.price(brand) {
        None => CellState::Absent,
        Some(snapshot) => match snapshot.value(tier) {
            Some(value) => CellState::Price(value),
            None => CellState::NotSet,
        },
    }
}

// ============================================================================
// AXIS TRAVERSAL
// ============================================================================

/// One data column: a brand crossed with a tier, by index into the view's
/// `brands` and `tiers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixColumn {
    pub brand_index: usize,
    pub tier_index: usize,
}

/// Sizes of the (outer, inner) axes for a mode.
fn axis_lengths(brand_count: usize, tier_count: usize, mode: ViewMode) -> (usize, usize) {
    match mode {
        ViewMode::TierMajor => (tier_count, brand_count),
        ViewMode::BrandMajor => (brand_count, tier_count),
    }
}

/// Every (brand, tier) pair exactly once, nested outer-then-inner per mode.
pub fn column_order(brand_count: usize, tier_count: usize, mode: ViewMode) -> Vec<MatrixColumn> {
    let (outer, inner) = axis_lengths(brand_count, tier_count, mode);
    let mut columns = Vec::with_capacity(outer * inner);
    for o in 0..outer {
        for i in 0..inner {
            let (brand_index, tier_index) = match mode {
                ViewMode::TierMajor => (i, o),
                ViewMode::BrandMajor => (o, i),
            };
            columns.push(MatrixColumn { brand_index, tier_index });
        }
    }
    columns
}

// ============================================================================
// VIEW STRUCTURES
// ============================================================================

/// A header-row-1 cell spanning one outer-axis group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderGroup {
    pub label: String,
    pub span: usize,
}

/// A data cell with its display text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixCell {
    pub state: CellState,

    /// Pre-formatted display string (price, or the placeholder for its state).
    pub formatted_value: String,

    /// Highlight hint for emphasised tiers with a price.
    pub is_emphasized: bool,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub identity: RowIdentity,
    pub category: String,
    /// One cell per entry of `MatrixView::columns`.
    pub cells: Vec<MatrixCell>,
}

/// The complete table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixView {
    pub mode: ViewMode,

    /// Active brands, ascending.
    pub brands: Vec<String>,

    /// Rendered tiers in display order.
    pub tiers: Vec<TierDescriptor>,

    /// Label of the descriptive column (spans both header rows).
    pub row_header_label: String,

    /// Header row 1. Empty when there are no data columns.
    pub header_groups: Vec<HeaderGroup>,

    /// Header row 2, one label per data column.
    pub header_labels: Vec<String>,

    pub columns: Vec<MatrixColumn>,

    pub rows: Vec<MatrixRow>,

    /// Records the pivot could not place.
    pub skipped_count: usize,
}

impl MatrixView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column position of a (brand, tier) pair, if both are in the view.
    pub fn column_of(&self, brand: &str, tier: PriceTier) -> Option<usize> {
        let brand_index = self.brands.iter().position(|b| b == brand)?;
        let tier_index = self.tiers.iter().position(|t| t.tier == tier)?;
        self.columns
            .iter()
            .position(|c| c.brand_index == brand_index && c.tier_index == tier_index)
    }

    pub fn cell(&self, row: usize, brand: &str, tier: PriceTier) -> Option<&MatrixCell> {
        let col = self.column_of(brand, tier)?;
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    /// Explicit empty-state text.
    pub fn empty_message(query: &str) -> String {
        format!("No products found matching \"{}\"", query)
    }
}

// ============================================================================
// ASSEMBLY
// ============================================================================

/// Assembles the renderable matrix for one view mode.
pub fn calculate_matrix(result: &PivotResult, definition: &PivotDefinition, mode: ViewMode) -> MatrixView {
    let tiers: Vec<TierDescriptor> = definition.visible_tiers().into_iter().cloned().collect();
    let brands = result.brands.clone();
    let columns = column_order(brands.len(), tiers.len(), mode);

    let (header_groups, header_labels) = generate_headers(&brands, &tiers, &columns, mode);

    let rows = result
        .rows
        .iter()
        .map(|row| MatrixRow {
            identity: row.identity.clone(),
            category: row.category.clone(),
            cells: columns
                .iter()
                .map(|c| generate_cell(row, &brands[c.brand_index], &tiers[c.tier_index], definition))
                .collect(),
        })
        .collect();

    MatrixView {
        mode,
        brands,
        tiers,
        row_header_label: definition.row_header_label.clone(),
        header_groups,
        header_labels,
        columns,
        rows,
        skipped_count: result.skipped_count(),
    }
}

/// Header rows derived from the same column sequence as the data cells.
fn generate_headers(
    brands: &[String],
    tiers: &[TierDescriptor],
    columns: &[MatrixColumn],
    mode: ViewMode,
) -> (Vec<HeaderGroup>, Vec<String>) {
    let outer_label = |c: &MatrixColumn| match mode {
        ViewMode::TierMajor => tiers[c.tier_index].label.clone(),
        ViewMode::BrandMajor => brands[c.brand_index].clone(),
    };
    let inner_label = |c: &MatrixColumn| match mode {
        ViewMode::TierMajor => brands[c.brand_index].clone(),
        ViewMode::BrandMajor => tiers[c.tier_index].label.clone(),
    };

    let (_, inner) = axis_lengths(brands.len(), tiers.len(), mode);
    let header_groups = columns
        .chunks(inner.max(1))
        .filter_map(|group| group.first())
        .map(|first| HeaderGroup {
            label: outer_label(first),
            span: inner,
        })
        .collect();
    let header_labels = columns.iter().map(inner_label).collect();

    (header_groups, header_labels)
}

fn generate_cell(row: &PivotRow, brand: &str, tier: &TierDescriptor, definition: &PivotDefinition) -> MatrixCell {
    let state = resolve_cell(row, brand, tier.tier);
    let formatted_value = match state {
        CellState::Absent => definition.placeholders.absent.clone(),
        CellState::NotSet => definition.placeholders.not_set.clone(),
        CellState::Price(value) => format_price(value),
    };
    MatrixCell {
        state,
        formatted_value,
        is_emphasized: state.price().is_some() && definition.is_emphasized(tier.tier),
    }
}
