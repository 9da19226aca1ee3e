//! Settings CLI commands.

use clap::{Parser, Subcommand};

/// Settings commands.
#[derive(Debug, Parser)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

/// Available settings actions.
#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    /// Show the current settings.
    Get,
    /// Update one or more settings.
    Update {
        /// Interface language.
        #[arg(long)]
        language: Option<String>,
        /// IANA timezone name.
        #[arg(long)]
        timezone: Option<String>,
        /// Enable or disable notifications.
        #[arg(long)]
        notifications: Option<bool>,
        /// Default currency code.
        #[arg(long)]
        currency: Option<String>,
    },
}
