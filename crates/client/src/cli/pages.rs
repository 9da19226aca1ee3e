//! Website page CLI commands.

use clap::{Parser, Subcommand};

/// Page management commands.
#[derive(Debug, Parser)]
pub struct PagesCommand {
    #[command(subcommand)]
    pub action: PagesAction,
}

/// Available page actions.
#[derive(Debug, Subcommand)]
pub enum PagesAction {
    /// List the pages of a website.
    List {
        /// Website ID.
        website_id: String,
    },
    /// Get page by ID.
    Get {
        /// Page ID.
        id: String,
    },
    /// Create a new page.
    Create {
        /// Website ID.
        website_id: String,
        /// Page title.
        #[arg(long)]
        title: String,
        /// URL slug. Derived from the title when omitted.
        #[arg(long)]
        slug: Option<String>,
    },
    /// Update a page.
    Update {
        /// Page ID.
        id: String,
        /// Website the page belongs to.
        #[arg(long)]
        website: String,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New slug.
        #[arg(long)]
        slug: Option<String>,
        /// Publish or unpublish the page.
        #[arg(long)]
        published: Option<bool>,
    },
    /// Delete page by ID.
    Delete {
        /// Page ID.
        id: String,
        /// Website the page belongs to.
        #[arg(long)]
        website: String,
    },
    /// Set the navigation order of a website's pages.
    Reorder {
        /// Website ID.
        website_id: String,
        /// Page IDs in their new order.
        #[arg(required = true)]
        page_ids: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    use super::PagesAction;

    #[test]
    fn test_reorder_collects_ids_in_order() {
        let cli =
            Cli::try_parse_from(["hostly-client", "pages", "reorder", "w1", "p3", "p1", "p2"])
                .unwrap();
        let Commands::Pages(cmd) = cli.command else {
            panic!("expected pages command");
        };
        match cmd.action {
            PagesAction::Reorder {
                website_id,
                page_ids,
            } => {
                assert_eq!(website_id, "w1");
                assert_eq!(page_ids, vec!["p3", "p1", "p2"]);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_reorder_requires_ids() {
        assert!(Cli::try_parse_from(["hostly-client", "pages", "reorder", "w1"]).is_err());
    }
}
