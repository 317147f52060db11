#![doc(test(attr(deny(warnings))))]

//! finbti turns fetched personal-finance data into display-ready view models:
//! financial MBTI trait splits, date-grouped ledgers and savings goal progress.

pub mod cli;
pub mod errors;
pub mod utils;

pub use finbti_config;
pub use finbti_core;
pub use finbti_domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("finbti tracing initialized.");
    });
}
