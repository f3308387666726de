//! Product listing and bulk-create operations.

use medusa_seed_core::{ProductDraft, ProductId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{AdminApiError, AdminClient, PAGE_SIZE};

#[derive(Debug, Deserialize)]
struct ProductEntry {
    id: ProductId,
}

#[derive(Debug, Deserialize)]
struct ProductListResponse {
    products: Vec<ProductEntry>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct BatchCreateRequest<'a> {
    create: &'a [ProductDraft],
}

#[derive(Debug, Deserialize)]
struct BatchCreateResponse {
    created: Vec<CreatedProduct>,
}

/// A product the store reports as created by a batch call.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedProduct {
    pub id: ProductId,
    pub handle: String,
}

impl AdminClient {
    /// List the ids of every product in the store.
    ///
    /// Pages through `/admin/products` until the reported count is
    /// exhausted; the returned length is the existing-product count the
    /// generator keys its handles and SKUs off.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn list_product_ids(&self) -> Result<Vec<ProductId>, AdminApiError> {
        let mut ids = Vec::new();
        let mut offset = 0;

        loop {
            let page: ProductListResponse = self
                .get(
                    "/admin/products",
                    &[
                        ("fields", "id".to_owned()),
                        ("limit", PAGE_SIZE.to_string()),
                        ("offset", offset.to_string()),
                    ],
                )
                .await?;

            let fetched = page.products.len();
            ids.extend(page.products.into_iter().map(|p| p.id));

            offset += fetched;
            if offset >= page.count || fetched == 0 {
                break;
            }
        }

        Ok(ids)
    }

    /// Create a batch of products in one call.
    ///
    /// All-or-nothing at the call boundary: if the store rejects any single
    /// draft (bad price, duplicate handle or SKU), the whole batch fails and
    /// nothing is reported as created.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store rejects the batch.
    #[instrument(skip_all, fields(products = drafts.len()))]
    pub async fn create_products_batch(
        &self,
        drafts: &[ProductDraft],
    ) -> Result<Vec<CreatedProduct>, AdminApiError> {
        let response: BatchCreateResponse = self
            .post("/admin/products/batch", &BatchCreateRequest { create: drafts })
            .await?;

        Ok(response.created)
    }
}
