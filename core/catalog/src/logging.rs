//! FILENAME: core/catalog/src/logging.rs
// PURPOSE: Category-tagged logging macros shared by the catalog crates.
//
// The category becomes the `log` target, so a host can filter on "PIVOT",
// "FILTER", "SESSION" or "LOAD". No logger is installed here.

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::log::debug!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::log::info!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::log::warn!(target: $cat, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::log::error!(target: $cat, $($arg)*)
    };
}

// Re-exported so the macros resolve `log` from any calling crate.
#[doc(hidden)]
pub use log;

pub use log_debug;
pub use log_error;
pub use log_info;
pub use log_warn;
