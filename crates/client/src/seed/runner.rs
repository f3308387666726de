//! Three-phase seeding runner: resolve, generate, submit.

use medusa_seed_core::SalesChannelRef;
use tracing::{info, instrument};

use crate::api::AdminClient;

use super::error::SeedError;
use super::{DEFAULT_PRODUCT_COUNT, DEFAULT_SALES_CHANNEL, generator};

/// Options for a seeding run.
#[derive(Debug, Clone)]
pub struct SeedOptions {
    /// Number of products to generate.
    pub count: usize,
    /// Name of the sales channel products are attached to.
    pub sales_channel: String,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_PRODUCT_COUNT,
            sales_channel: DEFAULT_SALES_CHANNEL.to_owned(),
        }
    }
}

/// Result of a completed seeding run.
#[derive(Debug)]
pub struct SeedSummary {
    /// Products that existed in the store before the run.
    pub existing_products: usize,
    /// Drafts generated and submitted.
    pub generated: usize,
    /// Products the store reported as created.
    pub created: usize,
}

/// Counts of existing store entities.
#[derive(Debug)]
pub struct StoreStats {
    pub products: usize,
    pub categories: usize,
    pub sales_channels: usize,
}

/// Pick the channel a run attaches products to from a name-filtered lookup.
fn resolve_sales_channel(
    channels: Vec<SalesChannelRef>,
    name: &str,
) -> Result<SalesChannelRef, SeedError> {
    channels
        .into_iter()
        .next()
        .ok_or_else(|| SeedError::SalesChannelNotFound(name.to_owned()))
}

/// Run the full seeding flow against a store.
///
/// Resolves the sales channel, existing product ids, and categories, then
/// generates `options.count` drafts and submits them in one bulk-create
/// call. All-or-nothing: a rejected batch leaves nothing created and no
/// partial-success accounting is attempted.
///
/// # Errors
///
/// Returns an error if any API call fails, the sales-channel lookup is
/// empty, or the store has no categories.
#[instrument(skip(client), fields(count = options.count))]
pub async fn seed_products(
    client: &AdminClient,
    options: &SeedOptions,
) -> Result<SeedSummary, SeedError> {
    info!("Starting additional product seeding...");

    let channels = client
        .list_sales_channels(Some(&options.sales_channel))
        .await?;
    let sales_channel = resolve_sales_channel(channels, &options.sales_channel)?;

    let existing = client.list_product_ids().await?;
    let categories = client.list_categories().await?;

    let mut rng = rand::rng();
    let drafts = generator::generate_products(
        &mut rng,
        existing.len(),
        &sales_channel,
        &categories,
        options.count,
    )?;

    let created = client.create_products_batch(&drafts).await?;

    info!("Finished seeding {} additional unique products.", drafts.len());

    Ok(SeedSummary {
        existing_products: existing.len(),
        generated: drafts.len(),
        created: created.len(),
    })
}

/// Report counts of existing products, categories, and sales channels.
///
/// # Errors
///
/// Returns an error if any listing call fails.
#[instrument(skip(client))]
pub async fn store_stats(client: &AdminClient) -> Result<StoreStats, SeedError> {
    let products = client.list_product_ids().await?;
    let categories = client.list_categories().await?;
    let channels = client.list_sales_channels(None).await?;

    Ok(StoreStats {
        products: products.len(),
        categories: categories.len(),
        sales_channels: channels.len(),
    })
}
