//! Medusa Seed CLI - Store seeding and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed 1000 synthetic products into the store
//! mseed seed products
//!
//! # Seed a smaller batch into a specific sales channel
//! mseed seed products --count 50 --sales-channel "Webshop"
//!
//! # Show counts of existing store entities
//! mseed stats
//! ```
//!
//! # Commands
//!
//! - `seed products` - Generate synthetic products and create them in bulk
//! - `stats` - Show existing product/category/sales-channel counts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use medusa_seed_client::seed::DEFAULT_PRODUCT_COUNT;

mod commands;

#[derive(Parser)]
#[command(name = "mseed")]
#[command(author, version, about = "Medusa store seeding tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the store with generated data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
    /// Show counts of existing store entities
    Stats,
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Generate synthetic products and create them in one bulk call
    Products {
        /// Number of products to generate
        #[arg(short, long, default_value_t = DEFAULT_PRODUCT_COUNT)]
        count: usize,

        /// Sales channel to attach products to (default: configured channel)
        #[arg(short, long)]
        sales_channel: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { target } => match target {
            SeedTarget::Products {
                count,
                sales_channel,
            } => commands::seed::products(count, sales_channel).await?,
        },
        Commands::Stats => commands::seed::stats().await?,
    }
    Ok(())
}
