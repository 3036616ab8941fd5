//! reqwest-backed implementation of [`Transport`].

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpResponse, Transport};

/// HTTP client bound to a fixed base URL.
///
/// Paths passed to the verb methods are appended to the base URL as-is,
/// so `"/user/42"` against `https://example.com/api` hits
/// `https://example.com/api/user/42`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[instrument(skip(self, body))]
    async fn send(&self, method: HttpMethod, path: &str, body: Option<Value>) -> Result<HttpResponse, ApiError> {
        let url = self.url(path);
        let request = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        let request = match body {
            Some(body) => request.json(&body),
            None => request,
        };

        let response = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(status, &body);
            warn!(status = status.as_u16(), %message, "request rejected");
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        debug!(status = status.as_u16(), "request completed");
        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Get, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Post, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Put, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.send(HttpMethod::Delete, path, None).await
    }
}

/// Pick the most useful message from a rejected response: a JSON `message`
/// field or bare JSON string, then the raw body, then the canonical reason
/// phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => {
            if let Some(Value::String(message)) = fields.get("message") {
                return message.clone();
            }
        }
        Ok(Value::String(message)) => return message,
        _ => {}
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status.canonical_reason().unwrap_or("request failed").to_string()
}
