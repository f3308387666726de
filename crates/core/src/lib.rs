//! Medusa Seed Core - Shared types library.
//!
//! This crate provides the domain types used across the seeding toolkit:
//! - `client` - Medusa Admin API client and seeding engine
//! - `cli` - Command-line entry point
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Everything
//! here serializes with serde to the wire shapes the Medusa Admin API
//! expects, so the client crate can hand these structs straight to reqwest.
//!
//! # Modules
//!
//! - [`types`] - Product drafts, variant drafts, store references, and
//!   newtype wrappers for type-safe ids

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
