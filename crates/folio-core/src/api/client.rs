//! API client for the portfolio backend.
//!
//! Every request goes through `ApiClient`, which reads the token store at send
//! time and attaches the bearer token when one is present. The client never
//! retries, caches, or redirects; failures are returned to the caller.

use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::Form;
use reqwest::{header, Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::TokenStore;
use crate::models::RecordId;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Base URL used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the portfolio backend.
/// Clone is cheap - reqwest::Client and the token store are shared.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client for `base_url` that authenticates from `tokens`
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token store this client reads from
    pub fn tokens(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.tokens)
    }

    /// Path of one record under `collection`; an empty id never reaches the server
    pub(crate) fn record_path(collection: &str, id: &RecordId) -> Result<String, ApiError> {
        if id.as_str().trim().is_empty() {
            return Err(ApiError::invalid_input("Record id is required"));
        }
        Ok(format!("{}/{}", collection.trim_end_matches('/'), id))
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Authorization header from the token currently in the store
    fn auth_headers(&self) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = self.tokens.get_token() {
            let value = header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ApiError::InvalidRequest("Stored token is not a valid header value".to_string()))?;
            headers.insert(header::AUTHORIZATION, value);
        }
        Ok(headers)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self
            .client
            .request(method, self.url(path))
            .header(header::ACCEPT, "application/json")
            .headers(self.auth_headers()?))
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(operation: &str, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_status(operation, status, &body);
            warn!(operation, status = status.as_u16(), error = %err, "Request failed");
            Err(err)
        }
    }

    /// Send a request and decode the body, treating an empty body as `null`
    async fn send(&self, operation: &str, builder: RequestBuilder) -> Result<Value, ApiError> {
        let response = builder.send().await.map_err(|e| {
            warn!(operation, error = %e, "Request could not be sent");
            ApiError::Network(e)
        })?;

        let response = Self::check_response(operation, response).await?;
        let text = response.text().await?;
        debug!(operation, bytes = text.len(), "Response received");

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse {} response: {}", operation, e))
        })
    }

    // ===== Verb helpers =====

    pub(crate) async fn get_value(&self, operation: &str, path: &str) -> Result<Value, ApiError> {
        debug!(operation, path, "GET");
        let builder = self.request(Method::GET, path)?;
        self.send(operation, builder).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        debug!(operation, path, "POST");
        let builder = self.request(Method::POST, path)?.json(body);
        self.send(operation, builder).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        debug!(operation, path, "PUT");
        let builder = self.request(Method::PUT, path)?.json(body);
        self.send(operation, builder).await
    }

    pub(crate) async fn post_multipart(&self, operation: &str, path: &str, form: Form) -> Result<Value, ApiError> {
        debug!(operation, path, "POST multipart");
        let builder = self.request(Method::POST, path)?.multipart(form);
        self.send(operation, builder).await
    }

    pub(crate) async fn put_multipart(&self, operation: &str, path: &str, form: Form) -> Result<Value, ApiError> {
        debug!(operation, path, "PUT multipart");
        let builder = self.request(Method::PUT, path)?.multipart(form);
        self.send(operation, builder).await
    }

    pub(crate) async fn delete(&self, operation: &str, path: &str) -> Result<Value, ApiError> {
        debug!(operation, path, "DELETE");
        let builder = self.request(Method::DELETE, path)?;
        self.send(operation, builder).await
    }
}
