//! Multi-tenant URL construction.
//!
//! Every restaurant site is served from `{subdomain}.{base_domain}`. These
//! functions validate the pieces and assemble the URL without any I/O.

use thiserror::Error;
use url::Url;

/// Maximum length of a DNS label.
pub const MAX_SUBDOMAIN_LEN: usize = 63;

/// Errors that can occur when building a tenant URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TenantError {
    #[error("Subdomain cannot be empty")]
    EmptySubdomain,
    #[error("Subdomain too long (max 63 characters): {0}")]
    SubdomainTooLong(String),
    #[error("Subdomain may only contain lowercase letters, digits and '-': {0}")]
    InvalidSubdomain(String),
    #[error("Invalid base domain: {0}")]
    InvalidBaseDomain(String),
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),
}

/// Validates a subdomain as a single lowercase DNS label.
///
/// # Examples
///
/// ```
/// use hostly_core::tenant::validate_subdomain;
///
/// assert!(validate_subdomain("la-trattoria").is_ok());
/// assert!(validate_subdomain("-bad").is_err());
/// assert!(validate_subdomain("Upper").is_err());
/// ```
pub fn validate_subdomain(subdomain: &str) -> Result<(), TenantError> {
    if subdomain.is_empty() {
        return Err(TenantError::EmptySubdomain);
    }
    if subdomain.len() > MAX_SUBDOMAIN_LEN {
        return Err(TenantError::SubdomainTooLong(subdomain.to_string()));
    }
    let valid_chars = subdomain
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    if !valid_chars || subdomain.starts_with('-') || subdomain.ends_with('-') {
        return Err(TenantError::InvalidSubdomain(subdomain.to_string()));
    }
    Ok(())
}

/// Builds the public URL of a tenant site.
///
/// `base_domain` may carry a port (`localhost:3000`) but no scheme or path.
///
/// # Examples
///
/// ```
/// use hostly_core::tenant::tenant_url;
///
/// let url = tenant_url("trattoria", "hostly.app", "https").unwrap();
/// assert_eq!(url, "https://trattoria.hostly.app");
/// ```
pub fn tenant_url(subdomain: &str, base_domain: &str, scheme: &str) -> Result<String, TenantError> {
    validate_subdomain(subdomain)?;

    if scheme != "http" && scheme != "https" {
        return Err(TenantError::UnsupportedScheme(scheme.to_string()));
    }

    let base = base_domain.trim().trim_end_matches('/');
    if base.is_empty() || base.contains("://") || base.contains('/') {
        return Err(TenantError::InvalidBaseDomain(base_domain.to_string()));
    }

    let candidate = format!("{}://{}.{}", scheme, subdomain, base);
    let parsed =
        Url::parse(&candidate).map_err(|_| TenantError::InvalidBaseDomain(base_domain.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(TenantError::InvalidBaseDomain(base_domain.to_string()));
    }

    Ok(candidate)
}

/// Extracts the tenant subdomain from a host header value.
///
/// Returns `None` when the host is the base domain itself or belongs to a
/// different domain.
pub fn subdomain_from_host<'a>(host: &'a str, base_domain: &str) -> Option<&'a str> {
    let host = host.split(':').next()?;
    let base = base_domain.split(':').next()?;
    let label = host.strip_suffix(base)?.strip_suffix('.')?;
    if label.is_empty() || label.contains('.') {
        return None;
    }
    Some(label)
}
