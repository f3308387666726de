//! Product status values.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a product.
///
/// Maps to Medusa's product status values; the wire format is snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Draft,
    Proposed,
    Published,
    Rejected,
}
