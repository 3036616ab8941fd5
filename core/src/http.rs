//! HTTP transport seam for the user service.
//!
//! # Design
//! The service talks to the network only through [`Transport`], a verb-based
//! trait taking resource paths relative to the configured base URL. A call
//! resolves to an [`HttpResponse`] on a 2xx status and to an `ApiError`
//! otherwise, so callers decide success purely on `Ok` vs `Err` and never
//! inspect status codes themselves.
//!
//! Request bodies are `serde_json::Value` so the trait stays object-safe and
//! mockable; the service serializes its typed DTOs before calling in.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A successful HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Verb-based HTTP client bound to a base URL.
///
/// Every method rejects non-2xx responses with `ApiError::Http` and network
/// failures with `ApiError::Transport`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<HttpResponse, ApiError>;

    async fn post(&self, path: &str, body: Value) -> Result<HttpResponse, ApiError>;

    async fn put(&self, path: &str, body: Value) -> Result<HttpResponse, ApiError>;

    async fn delete(&self, path: &str) -> Result<HttpResponse, ApiError>;
}
