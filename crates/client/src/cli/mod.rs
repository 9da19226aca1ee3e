//! CLI command definitions.

pub mod account;
pub mod orders;
pub mod pages;
pub mod restaurants;
pub mod settings;
pub mod tenant;
pub mod websites;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the hostly API.
#[derive(Debug, Parser)]
#[command(name = "hostly-client")]
#[command(version, about = "CLI client for the hostly API", long_about = None)]
pub struct Cli {
    /// API base URL. Overrides the configured default.
    #[arg(long, env = "HOSTLY_API_URL")]
    pub api_url: Option<String>,

    /// Bearer token sent with every request.
    #[arg(long, env = "HOSTLY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Restaurant management and selection.
    Restaurants(restaurants::RestaurantsCommand),
    /// Website management.
    Websites(websites::WebsitesCommand),
    /// Website page management.
    Pages(pages::PagesCommand),
    /// Order management.
    Orders(orders::OrdersCommand),
    /// Today's numbers for a restaurant.
    Dashboard {
        /// Restaurant ID. Defaults to the selected restaurant.
        #[arg(long)]
        restaurant: Option<String>,
    },
    /// User settings.
    Settings(settings::SettingsCommand),
    /// The signed-in account.
    Account(account::AccountCommand),
    /// Search restaurants, orders and pages.
    Search {
        /// Search term, at least two characters.
        term: String,
    },
    /// Tenant site URLs.
    Tenant(tenant::TenantCommand),
}
