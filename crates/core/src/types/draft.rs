//! In-memory product drafts submitted for creation.
//!
//! A draft describes a product exactly as the Admin API's bulk-create
//! endpoint expects it. Drafts are transient: they exist only until handed
//! to the store, which is solely responsible for persistence and identity
//! assignment.

use serde::{Deserialize, Serialize};

use super::id::{CategoryId, SalesChannelId};
use super::status::ProductStatus;

/// A product description submitted for creation, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    /// URL-safe slug identifying the product.
    pub handle: String,
    /// Shipping weight in grams.
    pub weight: i32,
    pub status: ProductStatus,
    pub images: Vec<ProductImage>,
    /// Option axes offered by the product (Size, Color).
    pub options: Vec<ProductOption>,
    pub variants: Vec<ProductVariantDraft>,
    pub category_ids: Vec<CategoryId>,
    pub sales_channel_ids: Vec<SalesChannelId>,
}

/// A purchasable option combination (size x color) of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariantDraft {
    pub title: String,
    pub sku: String,
    pub options: VariantOptions,
    pub prices: Vec<VariantPrice>,
}

/// Option values selected by a single variant.
///
/// The wire format keys these by option title, matching the `options`
/// entries on the parent draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOptions {
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "Color")]
    pub color: String,
}

/// A price entry for a variant in one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantPrice {
    /// Amount in the currency's standard unit.
    pub amount: i64,
    pub currency_code: CurrencyCode,
}

/// ISO 4217 currency codes, lowercased on the wire as Medusa expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyCode {
    Eur,
    Usd,
}

/// An image attached to a draft by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
}

/// An option axis a product offers, with its allowed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub title: String,
    pub values: Vec<String>,
}
