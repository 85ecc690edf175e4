#![doc(test(attr(deny(warnings))))]

//! Fintrack Core provides the projection and aggregation primitives behind a
//! personal finance tracker: instrument valuation under kind-specific
//! compounding rules, elapsed-period accounting, contribution ledgers, and
//! calendar-month budget summaries.
//!
//! The crate is a pure engine. Record collections are owned by the caller,
//! the observation date is always an explicit parameter, and every derived
//! figure is recomputed on demand rather than incrementally maintained.

pub mod domain;
pub mod engine;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
