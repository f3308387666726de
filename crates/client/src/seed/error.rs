//! Seeding error taxonomy.

use thiserror::Error;

use crate::api::AdminApiError;

/// Errors that can occur during a seeding run.
///
/// Empty store preconditions get named variants so callers can react
/// deliberately instead of hitting an out-of-bounds fault mid-run.
#[derive(Debug, Error)]
pub enum SeedError {
    /// An Admin API call failed.
    #[error(transparent)]
    Api(#[from] AdminApiError),

    /// The name-filtered sales-channel lookup matched nothing.
    #[error("Sales channel not found: {0}")]
    SalesChannelNotFound(String),

    /// The store has no product categories to tag generated products with.
    #[error("No product categories exist in the store")]
    NoCategories,
}
