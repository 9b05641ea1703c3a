//! Emberkicks CLI - catalog tools and a scripted walkthrough.
//!
//! # Usage
//!
//! ```bash
//! # Show the buyer-visible catalog, optionally filtered
//! ek-cli browse
//! ek-cli browse --category Men --price under100
//! ek-cli browse --sale
//!
//! # List the seller registry
//! ek-cli sellers
//!
//! # Run the scripted end-to-end walkthrough
//! ek-cli demo
//! ```
//!
//! # Commands
//!
//! - `browse` - Apply the buyer filter to the seeded catalog
//! - `sellers` - List pending and verified sellers
//! - `demo` - Drive a full buyer + seller + admin journey

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use emberkicks_core::Category;
use emberkicks_marketplace::PriceBand;

mod commands;

#[derive(Parser)]
#[command(name = "ek-cli")]
#[command(author, version, about = "Emberkicks CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the buyer-visible catalog
    Browse {
        /// Category query parameter (Men, Women, Kids, Unisex)
        #[arg(short, long)]
        category: Option<Category>,

        /// Only on-sale listings
        #[arg(short, long)]
        sale: bool,

        /// Gender facet selections (repeatable; ignored with --category)
        #[arg(short, long)]
        gender: Vec<Category>,

        /// Price band selections (under100, 100to150, over150; repeatable)
        #[arg(short, long)]
        price: Vec<PriceBand>,
    },
    /// List the seller registry
    Sellers,
    /// Run the scripted end-to-end walkthrough
    Demo,
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ek_cli=info,emberkicks_marketplace=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Browse {
            category,
            sale,
            gender,
            price,
        } => commands::browse::run(category, sale, &gender, &price),
        Commands::Sellers => commands::sellers::run(),
        Commands::Demo => commands::demo::run().await?,
    }
    Ok(())
}
