//! Order CLI commands.

use clap::{Parser, Subcommand, ValueEnum};
use hostly_core::models::{OrderItem, OrderStatus, PaymentMethod};

/// Order management commands.
#[derive(Debug, Parser)]
pub struct OrdersCommand {
    #[command(subcommand)]
    pub action: OrdersAction,
}

/// CLI payment method (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Payment {
    PayNow,
    PayOnPickup,
}

impl From<Payment> for PaymentMethod {
    fn from(p: Payment) -> Self {
        match p {
            Payment::PayNow => PaymentMethod::PayNow,
            Payment::PayOnPickup => PaymentMethod::PayOnPickup,
        }
    }
}

/// Available order actions.
#[derive(Debug, Subcommand)]
pub enum OrdersAction {
    /// List the orders of a restaurant.
    List {
        /// Restaurant ID. Defaults to the selected restaurant.
        #[arg(long)]
        restaurant: Option<String>,
        /// Only orders in this status.
        #[arg(long)]
        status: Option<OrderStatus>,
    },
    /// Get order by ID.
    Get {
        /// Order ID.
        id: String,
    },
    /// Place a new order.
    Create {
        /// Restaurant ID. Defaults to the selected restaurant.
        #[arg(long)]
        restaurant: Option<String>,
        /// Customer name.
        #[arg(long)]
        customer: String,
        /// Customer phone number.
        #[arg(long)]
        phone: Option<String>,
        /// Order line as NAME:QUANTITY:UNIT_PRICE_CENTS. Repeatable.
        #[arg(long = "item", value_parser = parse_item, required = true)]
        items: Vec<OrderItem>,
        /// How the customer pays.
        #[arg(long, value_enum, default_value = "pay-on-pickup")]
        payment: Payment,
    },
    /// Move an order to a new status.
    Status {
        /// Order ID.
        id: String,
        /// New status.
        status: OrderStatus,
        /// Restaurant ID. Defaults to the selected restaurant.
        #[arg(long)]
        restaurant: Option<String>,
    },
}

/// Parses `NAME:QUANTITY:UNIT_PRICE_CENTS`. The name may itself contain `:`.
pub fn parse_item(s: &str) -> Result<OrderItem, String> {
    let mut parts = s.rsplitn(3, ':');
    let (Some(price), Some(quantity), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected NAME:QUANTITY:PRICE_CENTS, got '{}'", s));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err("item name is empty".to_string());
    }
    let quantity = quantity
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity '{}'", quantity))?;
    let price = price
        .trim()
        .parse()
        .map_err(|_| format!("invalid price '{}'", price))?;

    Ok(OrderItem::new(name, quantity, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};

    #[test]
    fn test_parse_item() {
        let item = parse_item("Margherita:2:1200").unwrap();
        assert_eq!(item.name, "Margherita");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price_cents, 1200);
    }

    #[test]
    fn test_parse_item_name_with_colon() {
        let item = parse_item("Combo: pasta + wine:1:1850").unwrap();
        assert_eq!(item.name, "Combo: pasta + wine");
        assert_eq!(item.line_total_cents(), 1850);
    }

    #[test]
    fn test_parse_item_errors() {
        assert!(parse_item("Margherita").is_err());
        assert!(parse_item("Margherita:two:1200").is_err());
        assert!(parse_item("Margherita:2:-5").is_err());
        assert!(parse_item(" :2:100").is_err());
    }

    #[test]
    fn test_status_parsed_from_wire_name() {
        let cli = Cli::try_parse_from(["hostly-client", "orders", "status", "o1", "ready"]).unwrap();
        let Commands::Orders(cmd) = cli.command else {
            panic!("expected orders command");
        };
        assert!(matches!(
            cmd.action,
            OrdersAction::Status {
                status: OrderStatus::Ready,
                ..
            }
        ));

        assert!(Cli::try_parse_from(["hostly-client", "orders", "status", "o1", "eaten"]).is_err());
    }

    #[test]
    fn test_create_collects_items() {
        let cli = Cli::try_parse_from([
            "hostly-client",
            "orders",
            "create",
            "--customer",
            "Ana",
            "--item",
            "Margherita:2:1200",
            "--item",
            "Tiramisu:1:650",
            "--payment",
            "pay-now",
        ])
        .unwrap();
        let Commands::Orders(cmd) = cli.command else {
            panic!("expected orders command");
        };
        match cmd.action {
            OrdersAction::Create { items, payment, .. } => {
                assert_eq!(items.len(), 2);
                assert_eq!(PaymentMethod::from(payment), PaymentMethod::PayNow);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
