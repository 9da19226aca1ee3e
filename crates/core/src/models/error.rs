use thiserror::Error;

use super::OrderStatus;

/// Errors raised when validating request payloads before they are sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
    #[error("{field} too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },
    #[error("Invalid slug: {0}")]
    InvalidSlug(String),
    #[error("Invalid subdomain: {0}")]
    InvalidSubdomain(String),
    #[error("Search term must be at least {min} characters")]
    SearchTooShort { min: usize },
}

/// Errors raised by order rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order must contain at least one item")]
    NoItems,
    #[error("Quantity for {item} must be at least 1")]
    ZeroQuantity { item: String },
    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::Empty { field: "title" }.to_string(),
            "title cannot be empty"
        );
        assert_eq!(
            ValidationError::TooLong {
                field: "name",
                max: 100
            }
            .to_string(),
            "name too long (max 100 characters)"
        );
        assert_eq!(
            ValidationError::InvalidSlug("About Us".to_string()).to_string(),
            "Invalid slug: About Us"
        );
    }

    #[test]
    fn test_order_error_display() {
        assert_eq!(
            OrderError::NoItems.to_string(),
            "Order must contain at least one item"
        );
        assert_eq!(
            OrderError::ZeroQuantity {
                item: "Soup".to_string()
            }
            .to_string(),
            "Quantity for Soup must be at least 1"
        );
    }
}
