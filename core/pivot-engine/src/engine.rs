//! FILENAME: core/pivot-engine/src/engine.rs
//! Pivot Engine - Groups flat (product, brand, price) records into rows.
//!
//! This module takes an already filtered batch of ProductRecords and a
//! PivotDefinition and produces a PivotResult: one row per distinct row
//! identity, each holding the price snapshot of every brand that lists it,
//! plus the sorted set of brands the batch contains.
//!
//! Algorithm (single linear pass):
//! 1. Derive the row identity of each record; blank required fields skip
//!    the record and are reported, never fatal.
//! 2. Intern the identity: the first time it is seen a new row is appended,
//!    so rows keep the upstream (make, model, position) order.
//! 3. Store the record's snapshot under its brand (last write wins).
//! 4. Collect brand names as they are grouped and sort them at the end, so
//!    the brand set is exactly the brands of the grouped records.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use catalog::{log_debug, log_warn, PriceSnapshot, ProductRecord, RecordError};

use crate::definition::{PivotDefinition, ViewMode};
use crate::filter::RecordFilter;
use crate::row_key::{row_key, RowIdentity};
use crate::view::{calculate_matrix, MatrixView};

// ============================================================================
// RESULT STRUCTURES
// ============================================================================

/// One visual row: a row identity and the snapshot each brand quotes for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotRow {
    pub identity: RowIdentity,

    /// Category of the first record on this row, kept for display even when
    /// the grouping ignores it.
    pub category: String,

    /// Brand name -> snapshot. A brand with a record but no snapshot maps to
    /// None; a brand with no record is not a key.
    pub cells_by_brand: FxHashMap<String, Option<PriceSnapshot>>,
}

impl PivotRow {
    fn new(identity: RowIdentity, category: &str) -> Self {
        PivotRow {
            identity,
            category: category.to_string(),
            cells_by_brand: FxHashMap::default(),
        }
    }

    /// True when some record placed this brand on this row.
    pub fn has_record(&self, brand: &str) -> bool {
        self.cells_by_brand.contains_key(brand)
    }

    /// The snapshot for a brand, if a record with a snapshot exists.
    pub fn price(&self, brand: &str) -> Option<&PriceSnapshot> {
        self.cells_by_brand.get(brand).and_then(|p| p.as_ref())
    }
}

/// A record the pivot could not place, by position in its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: RecordError,
}

/// Output of one pivot pass.
#[derive(Debug, Clone, Serialize)]
pub struct PivotResult {
    /// Rows in first-seen order.
    pub rows: Vec<PivotRow>,

    /// Distinct brand names of the grouped records, ascending by raw name.
    pub brands: Vec<String>,

    pub skipped: Vec<SkippedRecord>,

    #[serde(skip)]
    row_index: FxHashMap<RowIdentity, usize>,
}

impl PivotResult {
    pub fn empty() -> Self {
        PivotResult {
            rows: Vec::new(),
            brands: Vec::new(),
            skipped: Vec::new(),
            row_index: FxHashMap::default(),
        }
    }

    pub fn row(&self, identity: &RowIdentity) -> Option<&PivotRow> {
        self.row_index.get(identity).map(|&i| &self.rows[i])
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl PartialEq for PivotResult {
    fn eq(&self, other: &Self) -> bool {
        // row_index is derived from rows
        self.rows == other.rows && self.brands == other.brands && self.skipped == other.skipped
    }
}

// ============================================================================
// PIVOT CALCULATOR
// ============================================================================

/// Accumulates rows over one pass.
struct PivotCalculator<'d, 'r> {
    definition: &'d PivotDefinition,
    result: PivotResult,
    brand_set: FxHashSet<&'r str>,
}

impl<'d, 'r> PivotCalculator<'d, 'r> {
    fn new(definition: &'d PivotDefinition) -> Self {
        PivotCalculator {
            definition,
            result: PivotResult::empty(),
            brand_set: FxHashSet::default(),
        }
    }

    fn add_record(&mut self, index: usize, record: &'r ProductRecord) {
        let identity = match row_key(record, self.definition.grouping) {
            Ok(identity) => identity,
            Err(reason) => {
                log_warn!("PIVOT", "skipping record #{}: {}", index, reason);
                self.result.skipped.push(SkippedRecord { index, reason });
                return;
            }
        };

        let row_idx = match self.result.row_index.get(&identity) {
            Some(&idx) => idx,
            None => {
                let idx = self.result.rows.len();
                self.result.rows.push(PivotRow::new(identity.clone(), &record.category));
                self.result.row_index.insert(identity, idx);
                idx
            }
        };

        // Brands are trimmed like the row fields but keep their case.
        let brand = record.brand_name.trim();
        self.brand_set.insert(brand);
        self.result.rows[row_idx]
            .cells_by_brand
            .insert(brand.to_string(), record.price.clone());
    }

    fn finish(mut self) -> PivotResult {
        let mut brands: Vec<String> = self.brand_set.into_iter().map(str::to_string).collect();
        brands.sort();
        self.result.brands = brands;

        log_debug!(
            "PIVOT",
            "pivot rows={} brands={} skipped={}",
            self.result.rows.len(),
            self.result.brands.len(),
            self.result.skipped.len()
        );
        self.result
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Groups a filtered batch into pivot rows.
/// This is the main entry point for the grouping engine.
pub fn calculate_pivot<'a, I>(records: I, definition: &PivotDefinition) -> PivotResult
where
    I: IntoIterator<Item = &'a ProductRecord>,
{
    let mut calculator = PivotCalculator::new(definition);
    for (index, record) in records.into_iter().enumerate() {
        calculator.add_record(index, record);
    }
    calculator.finish()
}

/// Full pass over the raw batch: filter, group, assemble.
pub fn calculate_catalog_view(
    records: &[ProductRecord],
    query: &str,
    definition: &PivotDefinition,
    mode: ViewMode,
) -> MatrixView {
    let filtered = RecordFilter::new(query)
        .with_part_numbers(definition.search_part_numbers)
        .apply(records);
    log_debug!(
        "FILTER",
        "query={:?} matched {} of {} records",
        query,
        filtered.len(),
        records.len()
    );
    let result = calculate_pivot(filtered, definition);
    calculate_matrix(&result, definition, mode)
}

/// Printable price sheet: fixed cost/RRP tiers, brand-major, no category.
pub fn calculate_print_sheet(records: &[ProductRecord], query: &str) -> MatrixView {
    calculate_catalog_view(records, query, &PivotDefinition::print_sheet(), ViewMode::BrandMajor)
}
