//! FILENAME: core/pivot-engine/src/session.rs
//! Catalog Session - Holds the cached raw batch between filter passes.
//!
//! A keystroke never refetches: it re-runs filter -> pivot -> assemble over
//! the batch held here. The batch is shared as an `Arc<[ProductRecord]>`, so
//! a pass works on the snapshot it started with even if the host swaps in a
//! new batch meanwhile. The last computed view is memoized on
//! (batch generation, query, definition, mode); any change recomputes.

use std::sync::Arc;

use catalog::{log_debug, log_info, ProductRecord};

use crate::definition::{PivotDefinition, ViewMode};
use crate::engine::calculate_catalog_view;
use crate::view::MatrixView;

/// Inputs a memoized view was computed from.
#[derive(Debug, Clone, PartialEq)]
struct ViewKey {
    generation: u64,
    query: String,
    definition: PivotDefinition,
    mode: ViewMode,
}

/// Handle for one pass started by `begin_pass`. Carries the batch snapshot
/// the pass must read.
#[derive(Debug, Clone)]
pub struct PassTicket {
    pass_id: u64,
    generation: u64,
    batch: Arc<[ProductRecord]>,
}

impl PassTicket {
    pub fn pass_id(&self) -> u64 {
        self.pass_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Runs the full pipeline over this ticket's snapshot. Needs no access to
    /// the session, so it can run off whatever lock guards it.
    pub fn run(&self, query: &str, definition: &PivotDefinition, mode: ViewMode) -> MatrixView {
        calculate_catalog_view(&self.batch, query, definition, mode)
    }
}

/// The cached raw batch and the views derived from it.
#[derive(Debug)]
pub struct CatalogSession {
    batch: Arc<[ProductRecord]>,
    generation: u64,
    latest_pass: u64,
    memo: Option<(ViewKey, Arc<MatrixView>)>,
    published: Option<Arc<MatrixView>>,
}

impl CatalogSession {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        CatalogSession {
            batch: records.into(),
            generation: 0,
            latest_pass: 0,
            memo: None,
            published: None,
        }
    }

    /// Swaps in a freshly fetched batch. Views of the old batch stay valid
    /// for whoever holds them but are never served again, and passes started
    /// on it can no longer publish.
    pub fn replace_batch(&mut self, records: Vec<ProductRecord>) {
        self.batch = records.into();
        self.generation += 1;
        self.memo = None;
        self.published = None;
        log_info!(
            "SESSION",
            "batch replaced generation={} records={}",
            self.generation,
            self.batch.len()
        );
    }

    /// The current batch. Holding the Arc pins this batch for a whole pass.
    pub fn snapshot(&self) -> Arc<[ProductRecord]> {
        Arc::clone(&self.batch)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn record_count(&self) -> usize {
        self.batch.len()
    }

    /// Memoized full pass. Returns the cached view when the batch, query,
    /// definition and mode are all unchanged.
    pub fn view(&mut self, query: &str, definition: &PivotDefinition, mode: ViewMode) -> Arc<MatrixView> {
        let key = ViewKey {
            generation: self.generation,
            query: query.to_string(),
            definition: definition.clone(),
            mode,
        };
        if let Some((cached_key, view)) = &self.memo {
            if *cached_key == key {
                log_debug!("SESSION", "view cache hit query={:?}", query);
                return Arc::clone(view);
            }
        }

        let view = Arc::new(calculate_catalog_view(&self.batch, query, definition, mode));
        self.memo = Some((key, Arc::clone(&view)));
        view
    }

    // ========================================================================
    // LATEST REQUEST WINS
    // ========================================================================

    /// Starts a pass. Every earlier ticket stops being the latest.
    pub fn begin_pass(&mut self) -> PassTicket {
        self.latest_pass += 1;
        PassTicket {
            pass_id: self.latest_pass,
            generation: self.generation,
            batch: self.snapshot(),
        }
    }

    /// True when no newer pass has started and the batch the ticket read is
    /// still the current one.
    pub fn is_latest(&self, ticket: &PassTicket) -> bool {
        ticket.pass_id == self.latest_pass && ticket.generation == self.generation
    }

    /// Accepts a finished pass only if it is still the latest. Returns
    /// whether the view was published.
    pub fn publish(&mut self, ticket: &PassTicket, view: MatrixView) -> bool {
        if !self.is_latest(ticket) {
            log_debug!(
                "SESSION",
                "dropping stale pass {} generation={} (latest {} generation={})",
                ticket.pass_id,
                ticket.generation,
                self.latest_pass,
                self.generation
            );
            return false;
        }
        self.published = Some(Arc::new(view));
        true
    }

    /// The most recently published view.
    pub fn published(&self) -> Option<Arc<MatrixView>> {
        self.published.clone()
    }
}
