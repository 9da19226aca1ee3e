//! HTTP client for the hostly API.
//!
//! One module per resource. Every endpoint answers with an
//! [`ApiEnvelope`]; the helpers here unwrap it into `Result<T>`.

pub mod dashboard;
pub mod orders;
pub mod pages;
pub mod restaurants;
pub mod search;
pub mod settings;
pub mod users;
pub mod websites;

use hostly_core::models::ApiEnvelope;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Header carrying a per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for the hostly API.
#[derive(Debug, Clone)]
pub struct HostlyClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HostlyClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Create a client from configuration, applying the request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Authenticate every request with a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request with auth and correlation headers attached.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request_id = Uuid::new_v4();
        tracing::debug!(%method, path, %request_id, "Sending API request");

        let builder = self
            .client
            .request(method, self.url(path))
            .header(REQUEST_ID_HEADER, request_id.to_string());
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and unwrap the envelope payload.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let path = response.url().path().to_string();
        let envelope: ApiEnvelope<T> = self.handle_response(response).await?;
        match envelope.into_result() {
            Ok(Some(data)) => Ok(data),
            Ok(None) => Err(ClientError::InvalidResponse(format!(
                "missing data in response from {}",
                path
            ))),
            Err(message) => Err(ClientError::Api {
                status: StatusCode::OK.as_u16(),
                message,
            }),
        }
    }

    /// Send a request whose envelope carries no payload.
    async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let envelope: ApiEnvelope<serde_json::Value> = self.handle_response(response).await?;
        envelope
            .into_result()
            .map(|_| ())
            .map_err(|message| ClientError::Api {
                status: StatusCode::OK.as_u16(),
                message,
            })
    }

    /// Handle error responses and decode the envelope.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<ApiEnvelope<T>> {
        let status = response.status();
        let path = response.url().path().to_string();

        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice(&body).map_err(|e| {
                ClientError::InvalidResponse(format!("{} returned malformed JSON: {}", path, e))
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        tracing::warn!(status = status.as_u16(), %path, %message, "API request failed");

        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound { resource: path }),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ClientError::Unauthorized(message))
            }
            _ => Err(ClientError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

/// Extract the most useful message from an error body.
///
/// Prefers the envelope `message`, then the raw body, then a placeholder.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}
