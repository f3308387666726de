//! Product-category listing.

use medusa_seed_core::CategoryRef;
use serde::Deserialize;
use tracing::instrument;

use super::{AdminApiError, AdminClient, PAGE_SIZE};

#[derive(Debug, Deserialize)]
struct CategoryListResponse {
    product_categories: Vec<CategoryRef>,
    count: usize,
}

impl AdminClient {
    /// List every product category in the store (id and name only).
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<CategoryRef>, AdminApiError> {
        let mut categories = Vec::new();
        let mut offset = 0;

        loop {
            let page: CategoryListResponse = self
                .get(
                    "/admin/product-categories",
                    &[
                        ("fields", "id,name".to_owned()),
                        ("limit", PAGE_SIZE.to_string()),
                        ("offset", offset.to_string()),
                    ],
                )
                .await?;

            let fetched = page.product_categories.len();
            categories.extend(page.product_categories);

            offset += fetched;
            if offset >= page.count || fetched == 0 {
                break;
            }
        }

        Ok(categories)
    }
}
