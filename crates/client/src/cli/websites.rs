//! Website CLI commands.

use clap::{Parser, Subcommand};

/// Website management commands.
#[derive(Debug, Parser)]
pub struct WebsitesCommand {
    #[command(subcommand)]
    pub action: WebsitesAction,
}

/// Available website actions.
#[derive(Debug, Subcommand)]
pub enum WebsitesAction {
    /// List the websites of a restaurant.
    List {
        /// Restaurant ID. Defaults to the selected restaurant.
        #[arg(long)]
        restaurant: Option<String>,
    },
    /// Get website by ID.
    Get {
        /// Website ID.
        id: String,
    },
    /// Create a new website.
    Create {
        /// Restaurant ID. Defaults to the selected restaurant.
        #[arg(long)]
        restaurant: Option<String>,
        /// Website name.
        #[arg(long)]
        name: String,
        /// Subdomain the site is served under.
        #[arg(long)]
        subdomain: String,
        /// Theme name.
        #[arg(long)]
        theme: Option<String>,
    },
    /// Update a website.
    Update {
        /// Website ID.
        id: String,
        /// Restaurant ID. Defaults to the selected restaurant.
        #[arg(long)]
        restaurant: Option<String>,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New theme.
        #[arg(long)]
        theme: Option<String>,
    },
    /// Publish a website.
    Publish {
        /// Website ID.
        id: String,
        /// Restaurant ID. Defaults to the selected restaurant.
        #[arg(long)]
        restaurant: Option<String>,
    },
    /// Delete website by ID.
    Delete {
        /// Website ID.
        id: String,
        /// Restaurant ID. Defaults to the selected restaurant.
        #[arg(long)]
        restaurant: Option<String>,
    },
}
