//! tinyshop CLI - catalog browser and local cart.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! tinyshop products list
//! tinyshop products show 2
//!
//! # Manage the cart (kept in .tinyshop-cart.json)
//! tinyshop cart add 2
//! tinyshop cart update 2 -1
//! tinyshop cart remove 2
//! tinyshop cart show
//! tinyshop cart clear
//!
//! # Place the order
//! tinyshop cart checkout
//!
//! # Talk to another storefront
//! tinyshop --api-url http://shop.local:3000 products list
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tinyshop_cli::commands;
use tinyshop_cli::config::{CliConfig, DEFAULT_API_URL, DEFAULT_CART_FILE};
use tinyshop_cli::{CatalogClient, FileStore};
use tinyshop_core::ProductId;

#[derive(Parser)]
#[command(name = "tinyshop")]
#[command(author, version, about = "tinyshop catalog and cart")]
struct Cli {
    /// Storefront base URL
    #[arg(long, env = "TINYSHOP_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Local cart file
    #[arg(long, env = "TINYSHOP_CART_FILE", default_value = DEFAULT_CART_FILE, global = true)]
    cart_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the local cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List all products
    List,
    /// Show one product
    Show {
        /// Product ID
        id: ProductId,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show,
    /// Add one unit of a product
    Add {
        /// Product ID
        id: ProductId,
    },
    /// Change a line's quantity by a signed amount
    Update {
        /// Product ID
        id: ProductId,
        /// Quantity change, e.g. 1 or -1
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Remove a line
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Empty the cart
    Clear,
    /// Submit the cart as an order
    Checkout,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "tinyshop_cli=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::new(&cli.api_url, cli.cart_file)?;
    let client = CatalogClient::new(config.api_url);
    let store = FileStore::new(config.cart_file);
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List => commands::products::list(&client, &mut out).await?,
            ProductsAction::Show { id } => commands::products::show(&client, id, &mut out).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&store, &mut out)?,
            CartAction::Add { id } => commands::cart::add(&client, &store, id, &mut out).await?,
            CartAction::Update { id, delta } => {
                commands::cart::update(&store, id, delta, &mut out)?;
            }
            CartAction::Remove { id } => commands::cart::remove(&store, id, &mut out)?,
            CartAction::Clear => commands::cart::clear(&store, &mut out)?,
            CartAction::Checkout => commands::cart::checkout(&client, &store, &mut out).await?,
        },
    }
    Ok(())
}
