#![doc(test(attr(deny(warnings))))]

//! Crop Ledger tracks per-season crop finances: entries live in an in-memory
//! store, mirror to a flat comma-delimited file, and feed seasonal and annual
//! profit summaries behind an interactive menu shell.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Crop Ledger tracing initialized.");
    });
}
