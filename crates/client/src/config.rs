use std::{env, path::PathBuf, time::Duration};

use hostly_core::cache::QueryOptions;
use hostly_core::tenant::{tenant_url, TenantError};

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL (default: "http://localhost:4000")
    pub api_url: String,
    /// Domain tenant sites are served under (default: "localhost:3000")
    pub base_domain: String,
    /// Bearer token sent with every request (default: none)
    pub token: Option<String>,
    /// Seconds a fetched query stays fresh (default: 30)
    pub stale_time_seconds: u64,
    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,
    /// Directory for persisted local state (default: "$HOME/.hostly")
    pub state_dir: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HOSTLY_API_URL` - API base URL (default: "http://localhost:4000")
    /// - `HOSTLY_BASE_DOMAIN` - Tenant base domain (default: "localhost:3000")
    /// - `HOSTLY_TOKEN` - Bearer token (default: unset)
    /// - `HOSTLY_STALE_TIME_SECONDS` - Query stale time (default: 30)
    /// - `HOSTLY_REQUEST_TIMEOUT_SECONDS` - Request timeout, 0 means default (default: 30)
    /// - `HOSTLY_STATE_DIR` - Local state directory (default: "$HOME/.hostly")
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |name: &str, default: u64| {
            lookup(name)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        let state_dir = lookup("HOSTLY_STATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                lookup("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".hostly")
            });

        Self {
            api_url: lookup("HOSTLY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| "http://localhost:4000".to_string()),
            base_domain: lookup("HOSTLY_BASE_DOMAIN")
                .unwrap_or_else(|| "localhost:3000".to_string()),
            token: lookup("HOSTLY_TOKEN").filter(|t| !t.trim().is_empty()),
            stale_time_seconds: number("HOSTLY_STALE_TIME_SECONDS", 30),
            request_timeout_seconds: match number("HOSTLY_REQUEST_TIMEOUT_SECONDS", 30) {
                0 => 30,
                seconds => seconds,
            },
            state_dir,
        }
    }

    /// Get the stale time as a Duration.
    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(self.stale_time_seconds)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Default options for cached queries.
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions::new(self.stale_time())
    }

    /// Public URL of a tenant site. Uses plain HTTP for local domains.
    pub fn tenant_url(&self, subdomain: &str) -> Result<String, TenantError> {
        let scheme = if self.base_domain.starts_with("localhost") {
            "http"
        } else {
            "https"
        };
        tenant_url(subdomain, &self.base_domain, scheme)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
