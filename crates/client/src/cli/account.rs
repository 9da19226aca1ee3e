//! Account CLI commands.

use clap::{Parser, Subcommand};

/// Commands for the signed-in account.
#[derive(Debug, Parser)]
pub struct AccountCommand {
    #[command(subcommand)]
    pub action: AccountAction,
}

/// Available account actions.
#[derive(Debug, Subcommand)]
pub enum AccountAction {
    /// Show the signed-in user.
    Me,
    /// Update name or email.
    Update {
        /// New display name.
        #[arg(long)]
        name: Option<String>,
        /// New email address.
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete the account and forget local state.
    Delete {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}
