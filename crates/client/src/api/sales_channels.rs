//! Sales-channel lookup.

use medusa_seed_core::SalesChannelRef;
use serde::Deserialize;
use tracing::instrument;

use super::{AdminApiError, AdminClient};

#[derive(Debug, Deserialize)]
struct SalesChannelListResponse {
    sales_channels: Vec<SalesChannelRef>,
}

impl AdminClient {
    /// List sales channels, optionally filtered by exact name.
    ///
    /// An unknown name is not an error here; it yields an empty list, and
    /// the caller decides what that means.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn list_sales_channels(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<SalesChannelRef>, AdminApiError> {
        let mut query = Vec::new();
        if let Some(name) = name {
            query.push(("name", name.to_owned()));
        }

        let response: SalesChannelListResponse =
            self.get("/admin/sales-channels", &query).await?;

        Ok(response.sales_channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_channel_response_parses_listing_shape() {
        let json = r#"{
            "sales_channels": [
                {"id": "sc_01", "name": "Default Sales Channel", "is_disabled": false}
            ],
            "count": 1
        }"#;

        let response: SalesChannelListResponse = serde_json::from_str(json).expect("parse listing");
        assert_eq!(response.sales_channels.len(), 1);
        assert_eq!(response.sales_channels[0].id.as_str(), "sc_01");
    }

    #[test]
    fn test_sales_channel_response_allows_empty_result() {
        let json = r#"{"sales_channels": [], "count": 0}"#;
        let response: SalesChannelListResponse = serde_json::from_str(json).expect("parse listing");
        assert!(response.sales_channels.is_empty());
    }
}
