//! hostly-client CLI entry point.

use anyhow::{bail, Context, Result};
use clap::Parser;
use hostly_client::cli::account::AccountAction;
use hostly_client::cli::orders::OrdersAction;
use hostly_client::cli::pages::PagesAction;
use hostly_client::cli::restaurants::RestaurantsAction;
use hostly_client::cli::settings::SettingsAction;
use hostly_client::cli::tenant::TenantAction;
use hostly_client::cli::websites::WebsitesAction;
use hostly_client::cli::{Cli, Commands, OutputFormat};
use hostly_client::output::{format_output, pretty};
use hostly_client::{ClientConfig, SyncClient};
use hostly_core::models::{
    CreateOrderRequest, CreatePageRequest, CreateRestaurantRequest, CreateWebsiteRequest,
    ReorderPagesRequest, UpdateMeRequest, UpdatePageRequest, UpdateRestaurantRequest,
    UpdateSettingsRequest, UpdateWebsiteRequest,
};
use hostly_core::tenant::subdomain_from_host;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable.
    let default_filter = if cli.quiet {
        "hostly_client=warn"
    } else {
        "hostly_client=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ClientConfig::from_env();
    if let Some(api_url) = &cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }
    if let Some(token) = cli.token.as_ref().filter(|t| !t.trim().is_empty()) {
        config.token = Some(token.clone());
    }

    let sync = SyncClient::from_config(&config).context("failed to build API client")?;
    run(cli, &config, &sync).await
}

/// Print `value` as JSON or through its pretty formatter.
fn emit<T: Serialize>(format: OutputFormat, value: &T, pretty: impl FnOnce(&T) -> String) {
    match format {
        OutputFormat::Json => println!("{}", format_output(value, format)),
        OutputFormat::Pretty => println!("{}", pretty(value)),
    }
}

/// Resolve a restaurant id from the flag or the persisted selection.
async fn restaurant_id(sync: &SyncClient, explicit: Option<String>) -> Result<String> {
    if let Some(id) = explicit {
        return Ok(id);
    }
    sync.selected_restaurant()
        .await?
        .context("no restaurant selected; pass --restaurant or run `restaurants use <id>`")
}

async fn run(cli: Cli, config: &ClientConfig, sync: &SyncClient) -> Result<()> {
    let format = cli.format;

    match cli.command {
        Commands::Restaurants(cmd) => match cmd.action {
            RestaurantsAction::List => {
                let restaurants = sync.user_restaurants().await?;
                let selected = sync.selected_restaurant().await?;
                emit(format, &restaurants, |r| {
                    pretty::format_restaurants(r, selected.as_deref())
                });
            }
            RestaurantsAction::Get { id } => {
                let restaurant = sync.restaurant(&id).await?;
                emit(format, &restaurant, pretty::format_restaurant);
            }
            RestaurantsAction::Create {
                name,
                subdomain,
                description,
                currency,
            } => {
                let mut req = CreateRestaurantRequest::new(name, subdomain);
                if let Some(description) = description {
                    req = req.with_description(description);
                }
                if let Some(currency) = currency {
                    req = req.with_currency(currency);
                }
                let restaurant = sync.create_restaurant(&req).await?;
                emit(format, &restaurant, |r| {
                    format!("Created:\n{}", pretty::format_restaurant(r))
                });
            }
            RestaurantsAction::Update {
                id,
                name,
                description,
                address,
                phone,
                currency,
            } => {
                let req = UpdateRestaurantRequest {
                    name,
                    description,
                    address,
                    phone,
                    currency,
                };
                let restaurant = sync.update_restaurant(&id, &req).await?;
                emit(format, &restaurant, |r| {
                    format!("Updated:\n{}", pretty::format_restaurant(r))
                });
            }
            RestaurantsAction::Delete { id } => {
                sync.delete_restaurant(&id).await?;
                if !cli.quiet {
                    println!("Deleted restaurant {}", id);
                }
            }
            RestaurantsAction::Use { id } => {
                // Confirms the restaurant exists before persisting the choice.
                let restaurant = sync.restaurant(&id).await?;
                sync.select_restaurant(&restaurant.id).await?;
                if !cli.quiet {
                    println!("Using {} ({})", restaurant.name, restaurant.id);
                }
            }
            RestaurantsAction::Current => match sync.selected_restaurant().await? {
                Some(id) => println!("{}", id),
                None => bail!("no restaurant selected"),
            },
        },

        Commands::Websites(cmd) => match cmd.action {
            WebsitesAction::List { restaurant } => {
                let restaurant = restaurant_id(sync, restaurant).await?;
                let websites = sync.websites(&restaurant).await?;
                emit(format, &websites, |w| pretty::format_websites(w));
            }
            WebsitesAction::Get { id } => {
                let website = sync.website(&id).await?;
                emit(format, &website, pretty::format_website);
            }
            WebsitesAction::Create {
                restaurant,
                name,
                subdomain,
                theme,
            } => {
                let restaurant = restaurant_id(sync, restaurant).await?;
                let mut req = CreateWebsiteRequest::new(restaurant, name, subdomain);
                if let Some(theme) = theme {
                    req = req.with_theme(theme);
                }
                let website = sync.create_website(&req).await?;
                emit(format, &website, |w| {
                    format!("Created:\n{}", pretty::format_website(w))
                });
            }
            WebsitesAction::Update {
                id,
                restaurant,
                name,
                theme,
            } => {
                let restaurant = restaurant_id(sync, restaurant).await?;
                let req = UpdateWebsiteRequest { name, theme };
                let website = sync.update_website(&restaurant, &id, &req).await?;
                emit(format, &website, |w| {
                    format!("Updated:\n{}", pretty::format_website(w))
                });
            }
            WebsitesAction::Publish { id, restaurant } => {
                let restaurant = restaurant_id(sync, restaurant).await?;
                let website = sync.publish_website(&restaurant, &id).await?;
                let url = config.tenant_url(&website.subdomain)?;
                emit(format, &website, |w| {
                    format!("Published:\n{}\n  URL: {}", pretty::format_website(w), url)
                });
            }
            WebsitesAction::Delete { id, restaurant } => {
                let restaurant = restaurant_id(sync, restaurant).await?;
                sync.delete_website(&restaurant, &id).await?;
                if !cli.quiet {
                    println!("Deleted website {}", id);
                }
            }
        },

        Commands::Pages(cmd) => match cmd.action {
            PagesAction::List { website_id } => {
                let pages = sync.pages(&website_id).await?;
                emit(format, &pages, |p| pretty::format_pages(p));
            }
            PagesAction::Get { id } => {
                let page = sync.page(&id).await?;
                emit(format, &page, pretty::format_page);
            }
            PagesAction::Create {
                website_id,
                title,
                slug,
            } => {
                let mut req = CreatePageRequest::new(website_id, title);
                if let Some(slug) = slug {
                    req = req.with_slug(slug);
                }
                let page = sync.create_page(req).await?;
                emit(format, &page, |p| {
                    format!("Created:\n{}", pretty::format_page(p))
                });
            }
            PagesAction::Update {
                id,
                website,
                title,
                slug,
                published,
            } => {
                let req = UpdatePageRequest {
                    title,
                    slug,
                    sections: None,
                    published,
                };
                let page = sync.update_page(&website, &id, &req).await?;
                emit(format, &page, |p| {
                    format!("Updated:\n{}", pretty::format_page(p))
                });
            }
            PagesAction::Delete { id, website } => {
                sync.delete_page(&website, &id).await?;
                if !cli.quiet {
                    println!("Deleted page {}", id);
                }
            }
            PagesAction::Reorder {
                website_id,
                page_ids,
            } => {
                let pages = sync
                    .reorder_pages(&website_id, &ReorderPagesRequest { page_ids })
                    .await?;
                emit(format, &pages, |p| pretty::format_pages(p));
            }
        },

        Commands::Orders(cmd) => match cmd.action {
            OrdersAction::List { restaurant, status } => {
                let restaurant = restaurant_id(sync, restaurant).await?;
                let orders = sync.orders(&restaurant, status).await?;
                emit(format, &orders, |o| pretty::format_orders(o));
            }
            OrdersAction::Get { id } => {
                let order = sync.order(&id).await?;
                emit(format, &order, pretty::format_order);
            }
            OrdersAction::Create {
                restaurant,
                customer,
                phone,
                items,
                payment,
            } => {
                let restaurant = restaurant_id(sync, restaurant).await?;
                let mut req = CreateOrderRequest::new(restaurant, customer, payment.into());
                if let Some(phone) = phone {
                    req = req.with_phone(phone);
                }
                req.items = items;
                let order = sync.create_order(&req).await?;
                emit(format, &order, |o| {
                    format!("Created:\n{}", pretty::format_order(o))
                });
            }
            OrdersAction::Status {
                id,
                status,
                restaurant,
            } => {
                let restaurant = restaurant_id(sync, restaurant).await?;
                let order = sync.update_order_status(&restaurant, &id, status).await?;
                emit(format, &order, |o| {
                    format!("Updated:\n{}", pretty::format_order(o))
                });
            }
        },

        Commands::Dashboard { restaurant } => {
            let restaurant = restaurant_id(sync, restaurant).await?;
            let (stats, details) =
                tokio::try_join!(sync.dashboard_stats(&restaurant), sync.restaurant(&restaurant))?;
            emit(format, &stats, |s| {
                pretty::format_dashboard(s, &details.currency)
            });
        }

        Commands::Settings(cmd) => match cmd.action {
            SettingsAction::Get => {
                let settings = sync.settings().await?;
                emit(format, &settings, pretty::format_settings);
            }
            SettingsAction::Update {
                language,
                timezone,
                notifications,
                currency,
            } => {
                let req = UpdateSettingsRequest {
                    language,
                    timezone,
                    notifications_enabled: notifications,
                    currency,
                };
                let settings = sync.update_settings(&req).await?;
                emit(format, &settings, |s| {
                    format!("Updated:\n{}", pretty::format_settings(s))
                });
            }
        },

        Commands::Account(cmd) => match cmd.action {
            AccountAction::Me => {
                let user = sync.me().await?;
                emit(format, &user, pretty::format_user);
            }
            AccountAction::Update { name, email } => {
                let user = sync.update_me(&UpdateMeRequest { name, email }).await?;
                emit(format, &user, |u| {
                    format!("Updated:\n{}", pretty::format_user(u))
                });
            }
            AccountAction::Delete { yes } => {
                if !yes {
                    bail!("refusing to delete the account without --yes");
                }
                sync.delete_me().await?;
                if !cli.quiet {
                    println!("Account deleted");
                }
            }
        },

        Commands::Search { term } => {
            let results = sync.search(&term).await?;
            emit(format, &results, pretty::format_search);
        }

        Commands::Tenant(cmd) => match cmd.action {
            TenantAction::Url { subdomain } => {
                println!("{}", config.tenant_url(&subdomain)?);
            }
            TenantAction::Resolve { host } => match subdomain_from_host(&host, &config.base_domain)
            {
                Some(subdomain) => println!("{}", subdomain),
                None => bail!("{} is not a tenant of {}", host, config.base_domain),
            },
        },
    }

    Ok(())
}
