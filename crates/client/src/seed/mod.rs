//! Product seeding: draft generation and the three-phase runner.
//!
//! A run is strictly sequential: resolve store context (sales channel,
//! existing product ids, categories), generate drafts in memory, submit one
//! bulk-create call. No retries, no partial-success tracking; the first
//! error aborts the run and propagates to the caller.
//!
//! Re-running is knowingly not idempotent: every run creates another batch
//! of similar-looking products. Handles and SKUs are keyed off the
//! existing-product count, so consecutive runs do not collide with each
//! other, but this is best-effort uniqueness, not a guarantee.

mod error;
pub mod generator;
mod runner;

pub use error::SeedError;
pub use runner::{SeedOptions, SeedSummary, StoreStats, seed_products, store_stats};

/// Sales channel generated products are attached to unless overridden.
pub const DEFAULT_SALES_CHANNEL: &str = "Default Sales Channel";

/// Number of products one seeding run generates unless overridden.
pub const DEFAULT_PRODUCT_COUNT: usize = 1000;
