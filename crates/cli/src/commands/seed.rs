//! Seed the store with synthetic products.
//!
//! The `products` command generates a batch of randomized product drafts
//! (names, categories, 8 size/color variants each, two-currency prices) and
//! submits them to the store's bulk product-create endpoint in one call.
//!
//! # Environment Variables
//!
//! - `MEDUSA_ADMIN_URL` - Base URL of the Medusa backend
//! - `MEDUSA_ADMIN_TOKEN` - Admin API bearer token
//! - `MEDUSA_SALES_CHANNEL` - Optional sales channel name override

use tracing::info;

use medusa_seed_client::seed::{self, SeedOptions};
use medusa_seed_client::{AdminClient, MedusaConfig};

/// Generate `count` products and create them in the store.
///
/// # Arguments
///
/// * `count` - Number of products to generate
/// * `sales_channel` - Sales channel name; falls back to the configured one
///
/// # Errors
///
/// Returns an error if configuration is missing, any store lookup fails, or
/// the bulk-create call is rejected.
pub async fn products(
    count: usize,
    sales_channel: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = MedusaConfig::from_env()?;
    let client = AdminClient::new(&config);

    let options = SeedOptions {
        count,
        sales_channel: sales_channel.unwrap_or_else(|| config.sales_channel.clone()),
    };

    info!(store = %client.base_url(), channel = %options.sales_channel, "Seeding products");

    let summary = seed::seed_products(&client, &options).await?;

    info!("Seeding complete!");
    info!("  Products before: {}", summary.existing_products);
    info!("  Drafts generated: {}", summary.generated);
    info!("  Products created: {}", summary.created);

    Ok(())
}

/// Show counts of existing products, categories, and sales channels.
///
/// # Errors
///
/// Returns an error if configuration is missing or a listing call fails.
pub async fn stats() -> Result<(), Box<dyn std::error::Error>> {
    let config = MedusaConfig::from_env()?;
    let client = AdminClient::new(&config);

    let stats = seed::store_stats(&client).await?;

    info!("Store Statistics");
    info!("================");
    info!("Products: {}", stats.products);
    info!("Categories: {}", stats.categories);
    info!("Sales channels: {}", stats.sales_channels);

    Ok(())
}
