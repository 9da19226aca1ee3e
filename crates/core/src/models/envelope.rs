//! The response envelope every backend endpoint returns.

use serde::{Deserialize, Serialize};

/// `{ success, message?, data? }` wrapper around a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Wraps a successful payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Builds a failed envelope with a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Converts the envelope into its payload or the failure message.
    ///
    /// A successful envelope without data is reported as `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "Request was not successful".to_string()))
        }
    }
}
