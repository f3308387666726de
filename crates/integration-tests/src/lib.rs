//! Integration tests for the Medusa seeding toolkit.
//!
//! These tests exercise the generation pipeline end-to-end at its real
//! batch size and check the wire shapes handed to the Admin API, all
//! in-process without a running store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p medusa-seed-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `product_generation` - Full-batch properties of generated drafts
//! - `wire_format` - JSON shapes the Admin API receives

#![cfg_attr(not(test), forbid(unsafe_code))]
