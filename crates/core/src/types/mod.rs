//! Core types for the Medusa seeding toolkit.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod draft;
pub mod id;
pub mod refs;
pub mod status;

pub use draft::{
    CurrencyCode, ProductDraft, ProductImage, ProductOption, ProductVariantDraft, VariantOptions,
    VariantPrice,
};
pub use id::*;
pub use refs::{CategoryRef, SalesChannelRef};
pub use status::ProductStatus;
