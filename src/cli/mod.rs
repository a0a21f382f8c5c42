//! Command-line interface definitions.

pub mod archives;
pub mod orders;
pub mod output;
pub mod products;
pub mod reset;
pub mod stats;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::Storefront;
use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::Result;

/// Pharmacy storefront back-office: orders, catalog and sales archives.
#[derive(Parser, Debug)]
#[command(name = "pharmacy-ledger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Print JSON documents instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Only print the command's primary output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show sales counters (archives any ended day or month first)
    Stats,

    /// Browse archived periods
    #[command(subcommand)]
    Archives(ArchivesCommand),

    /// Archive the current counters now and reset them
    Reset(ResetArgs),

    /// Manage orders
    #[command(subcommand)]
    Orders(OrdersCommand),

    /// Manage the product catalog
    #[command(subcommand)]
    Products(ProductsCommand),
}

/// Subcommands for `pharmacy-ledger archives`
#[derive(Subcommand, Debug)]
pub enum ArchivesCommand {
    /// Daily sales records, oldest first
    Daily,
    /// Monthly sales records, oldest first
    Monthly,
    /// Months with archived orders
    Months,
    /// Orders archived for one month
    Orders {
        /// Month as YYYY-MM
        month: String,
    },
}

/// Arguments for the `reset` subcommand.
#[derive(Parser, Debug)]
pub struct ResetArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Subcommands for `pharmacy-ledger orders`
#[derive(Subcommand, Debug)]
pub enum OrdersCommand {
    /// List live orders, newest first
    List,
    /// Show one order
    Show { id: String },
    /// Place an order from a JSON checkout file
    Create { file: PathBuf },
    /// Change an order's status
    Status {
        id: String,
        /// pending, confirmed, shipped, delivered or cancelled
        status: String,
    },
    /// Delete an order
    Delete { id: String },
}

/// Subcommands for `pharmacy-ledger products`
#[derive(Subcommand, Debug)]
pub enum ProductsCommand {
    /// List products
    List {
        /// Only this category ("all" for every category)
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one product
    Show { id: String },
    /// Add a product from a JSON file
    Add { file: PathBuf },
    /// Update a product from a JSON patch file
    Update { id: String, file: PathBuf },
    /// Delete a product
    Delete { id: String },
}

/// Run a parsed command against `shop`.
pub fn execute(shop: &Storefront, command: Commands) -> Result<()> {
    match command {
        Commands::Stats => stats::show(shop),
        Commands::Archives(command) => match command {
            ArchivesCommand::Daily => archives::daily(shop),
            ArchivesCommand::Monthly => archives::monthly(shop),
            ArchivesCommand::Months => archives::months(shop),
            ArchivesCommand::Orders { month } => archives::orders(shop, &month),
        },
        Commands::Reset(args) => reset::execute(shop, args.yes),
        Commands::Orders(command) => match command {
            OrdersCommand::List => orders::list(shop),
            OrdersCommand::Show { id } => orders::show(shop, &id),
            OrdersCommand::Create { file } => orders::create(shop, &file),
            OrdersCommand::Status { id, status } => orders::status(shop, &id, &status),
            OrdersCommand::Delete { id } => orders::delete(shop, &id),
        },
        Commands::Products(command) => match command {
            ProductsCommand::List { category } => products::list(shop, category.as_deref()),
            ProductsCommand::Show { id } => products::show(shop, &id),
            ProductsCommand::Add { file } => products::add(shop, &file),
            ProductsCommand::Update { id, file } => products::update(shop, &id, &file),
            ProductsCommand::Delete { id } => products::delete(shop, &id),
        },
    }
}

/// Read and parse a JSON input file.
fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Two-decimal amount.
fn money(amount: rust_decimal::Decimal) -> String {
    format!("{:.2}", amount)
}
