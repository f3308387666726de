//! Read-only references to store entities.
//!
//! These are the slices of existing store data the seeder reads before
//! generating anything. They are never created or mutated by this toolkit;
//! the store owns them.

use serde::{Deserialize, Serialize};

use super::id::{CategoryId, SalesChannelId};

/// A pre-existing product category, used only to tag generated products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: String,
}

/// A pre-existing sales channel a product is made available through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesChannelRef {
    pub id: SalesChannelId,
    pub name: String,
}
