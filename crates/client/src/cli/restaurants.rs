//! Restaurant CLI commands.

use clap::{Parser, Subcommand};

/// Restaurant management commands.
#[derive(Debug, Parser)]
pub struct RestaurantsCommand {
    #[command(subcommand)]
    pub action: RestaurantsAction,
}

/// Available restaurant actions.
#[derive(Debug, Subcommand)]
pub enum RestaurantsAction {
    /// List restaurants owned by the signed-in user.
    List,
    /// Get restaurant by ID.
    Get {
        /// Restaurant ID.
        id: String,
    },
    /// Create a new restaurant.
    Create {
        /// Restaurant name.
        #[arg(long)]
        name: String,
        /// Subdomain the public site is served under.
        #[arg(long)]
        subdomain: String,
        /// Restaurant description.
        #[arg(long)]
        description: Option<String>,
        /// Currency code for prices.
        #[arg(long)]
        currency: Option<String>,
    },
    /// Update a restaurant.
    Update {
        /// Restaurant ID.
        id: String,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New address.
        #[arg(long)]
        address: Option<String>,
        /// New phone number.
        #[arg(long)]
        phone: Option<String>,
        /// New currency code.
        #[arg(long)]
        currency: Option<String>,
    },
    /// Delete restaurant by ID.
    Delete {
        /// Restaurant ID.
        id: String,
    },
    /// Select the restaurant other commands default to.
    Use {
        /// Restaurant ID.
        id: String,
    },
    /// Show the selected restaurant.
    Current,
}
