//! Pretty output formatting.

use hostly_core::models::{
    DashboardStats, Order, Restaurant, SearchResults, Settings, User, Website, WebsitePage,
    WebsiteSection,
};

/// Format an amount in cents, e.g. `12.50`.
pub fn format_amount(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Format an amount in cents with its currency, e.g. `12.50 USD`.
pub fn format_money(cents: u64, currency: &str) -> String {
    format!("{} {}", format_amount(cents), currency)
}

/// Format a titled list, or `empty` when there is nothing to show.
fn format_list<T>(title: &str, empty: &str, items: &[T], format: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let mut output = format!("{} ({})\n", title, items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format(item)));
        output.push('\n');
    }
    output
}

/// Format a restaurant for display.
pub fn format_restaurant(restaurant: &Restaurant) -> String {
    let mut output = format!(
        "{} ({})\n  ID: {}\n  Currency: {}",
        restaurant.name, restaurant.subdomain, restaurant.id, restaurant.currency
    );
    if let Some(desc) = &restaurant.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    if let Some(address) = &restaurant.address {
        output.push_str(&format!("\n  Address: {}", address));
    }
    if let Some(phone) = &restaurant.phone {
        output.push_str(&format!("\n  Phone: {}", phone));
    }
    output
}

/// Format restaurants for display, marking the selected one.
pub fn format_restaurants(restaurants: &[Restaurant], selected: Option<&str>) -> String {
    format_list("RESTAURANTS", "No restaurants found.", restaurants, |r| {
        let formatted = format_restaurant(r);
        if selected == Some(r.id.as_str()) {
            format!("* {}", formatted)
        } else {
            formatted
        }
    })
}

/// Format a website for display.
pub fn format_website(website: &Website) -> String {
    let state = if website.published { "published" } else { "draft" };
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Restaurant: {}\n  Subdomain: {}",
        website.name, state, website.id, website.restaurant_id, website.subdomain
    );
    if let Some(theme) = &website.theme {
        output.push_str(&format!("\n  Theme: {}", theme));
    }
    output
}

/// Format websites for display.
pub fn format_websites(websites: &[Website]) -> String {
    format_list("WEBSITES", "No websites found.", websites, format_website)
}

fn format_section(section: &WebsiteSection) -> String {
    match section {
        WebsiteSection::Hero { title, variant, .. } => {
            format!("hero \"{}\" ({})", title, variant.as_str())
        }
        WebsiteSection::MenuSection { title, categories } => {
            let items: usize = categories.iter().map(|c| c.items.len()).sum();
            format!(
                "menu \"{}\" ({} categories, {} items)",
                title,
                categories.len(),
                items
            )
        }
    }
}

/// Format a page for display.
pub fn format_page(page: &WebsitePage) -> String {
    let state = if page.published { "published" } else { "draft" };
    let mut output = format!(
        "{}. {} /{} [{}]\n  ID: {}",
        page.position + 1,
        page.title,
        page.slug,
        state,
        page.id
    );
    for section in &page.sections {
        output.push_str(&format!("\n  - {}", format_section(section)));
    }
    output
}

/// Format pages for display.
pub fn format_pages(pages: &[WebsitePage]) -> String {
    format_list("PAGES", "No pages found.", pages, format_page)
}

/// Format an order for display.
pub fn format_order(order: &Order) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Placed: {}\n  Payment: {}",
        order.customer_name,
        order.status,
        order.id,
        order.created_at.format("%Y-%m-%d %H:%M"),
        order.payment_method.label()
    );
    if let Some(phone) = &order.customer_phone {
        output.push_str(&format!("\n  Phone: {}", phone));
    }
    for item in &order.items {
        output.push_str(&format!(
            "\n  {} x {} @ {}",
            item.quantity,
            item.name,
            format_amount(item.unit_price_cents)
        ));
    }
    output.push_str(&format!(
        "\n  Total: {}",
        format_amount(order.total_cents)
    ));
    output
}

/// Format orders for display.
pub fn format_orders(orders: &[Order]) -> String {
    format_list("ORDERS", "No orders found.", orders, format_order)
}

/// Format dashboard numbers for display.
pub fn format_dashboard(stats: &DashboardStats, currency: &str) -> String {
    format!(
        "DASHBOARD ({})\n  Orders today: {}\n  Pending: {}\n  Revenue today: {}\n  Average order: {}",
        stats.restaurant_id,
        stats.orders_today,
        stats.pending_orders,
        format_money(stats.revenue_today_cents, currency),
        format_money(stats.average_order_cents, currency)
    )
}

/// Format settings for display.
pub fn format_settings(settings: &Settings) -> String {
    format!(
        "SETTINGS\n  Language: {}\n  Timezone: {}\n  Notifications: {}\n  Currency: {}",
        settings.language,
        settings.timezone,
        if settings.notifications_enabled { "on" } else { "off" },
        settings.currency
    )
}

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    format!("{}\n  ID: {}\n  Email: {}", user.name, user.id, user.email)
}

/// Format search results grouped by kind.
pub fn format_search(results: &SearchResults) -> String {
    if results.is_empty() {
        return "No matches.".to_string();
    }
    let mut sections = Vec::new();
    if !results.restaurants.is_empty() {
        sections.push(format_restaurants(&results.restaurants, None));
    }
    if !results.orders.is_empty() {
        sections.push(format_orders(&results.orders));
    }
    if !results.pages.is_empty() {
        sections.push(format_pages(&results.pages));
    }
    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostly_core::models::{HeroVariant, OrderItem, OrderStatus, PaymentMethod};

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1250, "USD"), "12.50 USD");
        assert_eq!(format_money(5, "EUR"), "0.05 EUR");
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_restaurants(&[], None), "No restaurants found.");
        assert_eq!(format_pages(&[]), "No pages found.");
        assert_eq!(format_search(&SearchResults::default()), "No matches.");
    }

    #[test]
    fn test_selected_restaurant_marked() {
        let restaurants = vec![
            Restaurant::new("r1", "Trattoria", "trattoria"),
            Restaurant::new("r2", "Cantina", "cantina"),
        ];
        let output = format_restaurants(&restaurants, Some("r2"));
        assert!(output.starts_with("RESTAURANTS (2)"));
        assert!(output.contains("* Cantina (cantina)"));
        assert!(!output.contains("* Trattoria"));
    }

    #[test]
    fn test_page_lists_sections() {
        let page = WebsitePage::new("p1", "w1", "Home", "home")
            .with_position(0)
            .with_section(WebsiteSection::Hero {
                title: "Welcome".to_string(),
                subtitle: None,
                image_url: None,
                variant: HeroVariant::BackgroundImage,
            });
        let output = format_page(&page);
        assert!(output.starts_with("1. Home /home [draft]"));
        assert!(output.contains("hero \"Welcome\" (background_image)"));
    }

    #[test]
    fn test_order_shows_status_payment_and_total() {
        let items = vec![OrderItem::new("Margherita", 2, 1200)];
        let order = Order {
            id: "o1".to_string(),
            restaurant_id: "r1".to_string(),
            customer_name: "Ana".to_string(),
            customer_phone: Some("555-0100".to_string()),
            total_cents: 2400,
            items,
            status: OrderStatus::Ready,
            payment_method: PaymentMethod::PayNow,
            created_at: chrono::Utc::now(),
        };
        let output = format_order(&order);
        assert!(output.starts_with("Ana [ready]"));
        assert!(output.contains(PaymentMethod::PayNow.label()));
        assert!(output.contains("2 x Margherita @ 12.00"));
        assert!(output.contains("Total: 24.00"));
    }

    #[test]
    fn test_settings_toggle_words() {
        let settings = Settings {
            notifications_enabled: false,
            ..Settings::default()
        };
        assert!(format_settings(&settings).contains("Notifications: off"));
    }
}
