//! FILENAME: core/pivot-engine/src/lib.rs
//! Price comparison pivot for the catalog.
//!
//! This crate reshapes the flat (product, brand, price) batch into the
//! products x brands x tiers matrix the comparison page and the print sheet
//! render. It depends on `catalog` for the shared record and tier types.
//!
//! Layers:
//! - `definition`: Configuration (what the matrix IS)
//! - `filter` / `row_key`: Search predicate and row grouping key
//! - `engine`: Grouping engine (HOW rows are built)
//! - `view`: Renderable output (WHAT we display)
//! - `session`: Cached batch, memoized views, latest-request-wins passes

pub mod definition;
pub mod filter;
pub mod row_key;
pub mod engine;
pub mod view;
pub mod session;

pub use definition::*;
pub use filter::{filter_records, RecordFilter};
pub use row_key::{row_key, RowIdentity};
pub use engine::{
    calculate_catalog_view, calculate_pivot, calculate_print_sheet,
    PivotResult, PivotRow, SkippedRecord,
};
pub use view::*;
pub use session::{CatalogSession, PassTicket};
