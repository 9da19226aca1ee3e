//! Tenant URL CLI commands.

use clap::{Parser, Subcommand};

/// Tenant site commands.
#[derive(Debug, Parser)]
pub struct TenantCommand {
    #[command(subcommand)]
    pub action: TenantAction,
}

/// Available tenant actions.
#[derive(Debug, Subcommand)]
pub enum TenantAction {
    /// Print the public URL of a tenant site.
    Url {
        /// Tenant subdomain.
        subdomain: String,
    },
    /// Print the tenant subdomain a host name resolves to.
    Resolve {
        /// Host name, e.g. "trattoria.hostly.app".
        host: String,
    },
}
