use super::error::{OrderError, ValidationError};
use super::requests::{
    CreateOrderRequest, CreatePageRequest, CreateRestaurantRequest, CreateWebsiteRequest,
};
use crate::tenant::validate_subdomain;

/// Maximum length of restaurant and website names.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum length of page titles.
pub const MAX_TITLE_LEN: usize = 200;
/// Minimum length of a search term.
pub const MIN_SEARCH_LEN: usize = 2;

/// Validates a required, length-limited text field.
pub fn validate_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Derives a URL slug from a page title.
///
/// Lowercases ASCII letters, keeps digits, and collapses every other run of
/// characters into a single `-`.
///
/// ```
/// use hostly_core::models::slugify;
///
/// assert_eq!(slugify("Our Menu & Drinks"), "our-menu-drinks");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Validates a slug: non-empty, lowercase alphanumerics separated by single dashes.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let valid = !slug.is_empty()
        && slug
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidSlug(slug.to_string()))
    }
}

/// Validates a restaurant creation request.
pub fn validate_create_restaurant(req: &CreateRestaurantRequest) -> Result<(), ValidationError> {
    validate_text("name", &req.name, MAX_NAME_LEN)?;
    validate_subdomain(&req.subdomain)
        .map_err(|_| ValidationError::InvalidSubdomain(req.subdomain.clone()))
}

/// Validates a website creation request.
pub fn validate_create_website(req: &CreateWebsiteRequest) -> Result<(), ValidationError> {
    validate_text("restaurant id", &req.restaurant_id, MAX_NAME_LEN)?;
    validate_text("name", &req.name, MAX_NAME_LEN)?;
    validate_subdomain(&req.subdomain)
        .map_err(|_| ValidationError::InvalidSubdomain(req.subdomain.clone()))
}

/// Validates a page creation request, filling in the slug from the title
/// when none was given.
pub fn prepare_create_page(mut req: CreatePageRequest) -> Result<CreatePageRequest, ValidationError> {
    validate_text("website id", &req.website_id, MAX_NAME_LEN)?;
    validate_text("title", &req.title, MAX_TITLE_LEN)?;
    let slug = match req.slug.take() {
        Some(slug) => slug,
        None => slugify(&req.title),
    };
    validate_slug(&slug)?;
    req.slug = Some(slug);
    Ok(req)
}

/// Validates an order before it is placed.
pub fn validate_create_order(req: &CreateOrderRequest) -> Result<(), OrderError> {
    if req.items.is_empty() {
        return Err(OrderError::NoItems);
    }
    if let Some(item) = req.items.iter().find(|item| item.quantity == 0) {
        return Err(OrderError::ZeroQuantity {
            item: item.name.clone(),
        });
    }
    Ok(())
}

/// Validates a search term, returning it trimmed.
pub fn validate_search_term(term: &str) -> Result<&str, ValidationError> {
    let term = term.trim();
    if term.chars().count() < MIN_SEARCH_LEN {
        return Err(ValidationError::SearchTooShort {
            min: MIN_SEARCH_LEN,
        });
    }
    Ok(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderItem, PaymentMethod};

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Home"), "home");
        assert_eq!(slugify("  About   Us  "), "about-us");
        assert_eq!(slugify("Menú 2024!"), "men-2024");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("home").is_ok());
        assert!(validate_slug("about-us-2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("About").is_err());
        assert!(validate_slug("a--b").is_err());
        assert!(validate_slug("-a").is_err());
    }

    #[test]
    fn test_prepare_create_page_derives_slug() {
        let req = prepare_create_page(CreatePageRequest::new("w1", "Home")).unwrap();
        assert_eq!(req.slug.as_deref(), Some("home"));
    }

    #[test]
    fn test_prepare_create_page_keeps_explicit_slug() {
        let req =
            prepare_create_page(CreatePageRequest::new("w1", "Home").with_slug("start")).unwrap();
        assert_eq!(req.slug.as_deref(), Some("start"));
    }

    #[test]
    fn test_prepare_create_page_rejects_unsluggable_title() {
        let err = prepare_create_page(CreatePageRequest::new("w1", "!!!")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSlug(String::new()));
    }

    #[test]
    fn test_prepare_create_page_rejects_empty_title() {
        let err = prepare_create_page(CreatePageRequest::new("w1", "  ")).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "title" });
    }

    #[test]
    fn test_validate_create_restaurant() {
        assert!(validate_create_restaurant(&CreateRestaurantRequest::new("Trattoria", "trattoria")).is_ok());
        assert_eq!(
            validate_create_restaurant(&CreateRestaurantRequest::new("Trattoria", "Trattoria")),
            Err(ValidationError::InvalidSubdomain("Trattoria".to_string()))
        );
        assert_eq!(
            validate_create_restaurant(&CreateRestaurantRequest::new(
                "x".repeat(101),
                "ok"
            )),
            Err(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN
            })
        );
    }

    #[test]
    fn test_validate_create_website() {
        assert!(validate_create_website(&CreateWebsiteRequest::new("r1", "Main site", "main")).is_ok());
        assert_eq!(
            validate_create_website(&CreateWebsiteRequest::new("", "Main site", "main")),
            Err(ValidationError::Empty {
                field: "restaurant id"
            })
        );
    }

    #[test]
    fn test_validate_create_order() {
        let empty = CreateOrderRequest::new("r1", "Ana", PaymentMethod::PayNow);
        assert_eq!(validate_create_order(&empty), Err(OrderError::NoItems));

        let zero = empty.clone().with_item(OrderItem::new("Soup", 0, 500));
        assert_eq!(
            validate_create_order(&zero),
            Err(OrderError::ZeroQuantity {
                item: "Soup".to_string()
            })
        );

        let ok = empty.with_item(OrderItem::new("Soup", 1, 500));
        assert!(validate_create_order(&ok).is_ok());
    }

    #[test]
    fn test_validate_search_term() {
        assert_eq!(validate_search_term("  pizza "), Ok("pizza"));
        assert_eq!(
            validate_search_term(" a "),
            Err(ValidationError::SearchTooShort { min: 2 })
        );
    }
}
