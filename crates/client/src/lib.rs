//! Medusa Admin API client and product-seeding engine.
//!
//! This crate does the actual work behind the `mseed` CLI: it talks to a
//! Medusa store over the Admin REST API and runs the product-seeding flow
//! (resolve store context, generate synthetic drafts, submit one bulk
//! create call).
//!
//! # Architecture
//!
//! - [`config`] - Environment-based configuration (`MEDUSA_ADMIN_URL`,
//!   `MEDUSA_ADMIN_TOKEN`)
//! - [`api`] - Thin typed client over the Admin REST endpoints the seeder
//!   needs (product/category/sales-channel listings, bulk product create)
//! - [`seed`] - Draft generation and the three-phase seeding runner
//!
//! # Example
//!
//! ```rust,ignore
//! use medusa_seed_client::{AdminClient, MedusaConfig, seed};
//!
//! let config = MedusaConfig::from_env()?;
//! let client = AdminClient::new(&config);
//!
//! let summary = seed::seed_products(&client, &seed::SeedOptions::default()).await?;
//! tracing::info!(created = summary.created, "done");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod seed;

pub use api::{AdminApiError, AdminClient};
pub use config::{ConfigError, MedusaConfig};
