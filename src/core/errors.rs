use crate::core::types::Meta;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KatapultError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] crate::core::config::ConfigError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl KatapultError {
    /// Borrow the API error if the remote system reported the failure
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status code of an API error, `None` for local failures
    pub fn status_code(&self) -> Option<u16> {
        self.as_api_error().map(|err| err.status_code)
    }
}

/// Error reported by the Katapult Pro API.
///
/// Returned for non-2xx responses and for 2xx responses whose envelope carries
/// `status: "error"`. Branch on [`ApiError::error_type`] rather than the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub error_type: String,
    /// Token bucket state at the time of the failure. Never promoted to
    /// [`crate::KatapultClient::last_meta`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl ApiError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            error_type: String::new(),
            meta: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = error_type.into();
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: Option<Meta>) -> Self {
        self.meta = meta;
        self
    }

    /// Check the machine-readable error category, e.g. `"not_found"`
    pub fn is_type(&self, error_type: &str) -> bool {
        self.error_type == error_type
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == 404 || self.is_type("not_found")
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status_code == 429
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error_type.is_empty() {
            write!(
                f,
                "katapultpro api error {}: {}",
                self.status_code, self.message
            )
        } else {
            write!(
                f,
                "katapultpro api error {} ({}): {}",
                self.status_code, self.error_type, self.message
            )
        }
    }
}

impl std::error::Error for ApiError {}
