#![doc(test(attr(deny(warnings))))]

//! Duo Split tracks expenses shared by two people and works out, month by month,
//! what each of them paid, what each of them should have paid, and who owes whom.
//!
//! The balance engine in [`ledger`] is pure: every call takes the full expense
//! collection and a [`ledger::MonthKey`] and recomputes from scratch.

pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Duo Split tracing initialized.");
    });
}
