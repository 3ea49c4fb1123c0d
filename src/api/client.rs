//! HTTP client for notes service requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the notes service, handling bearer authentication and response
//! classification.

use super::error::ApiError;
use log::*;
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Makes requests to the notes service and classifies every exchange into
/// an explicit success or failure before callers see it.
///
pub struct Client {
    base_url: String,
    access_token: Option<String>,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new unauthenticated instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            access_token: None,
            http_client: reqwest::Client::new(),
        }
    }

    /// Attach a bearer token to all subsequent requests.
    ///
    pub fn set_access_token(&mut self, token: &str) {
        self.access_token = Some(token.to_owned());
    }

    /// Drop the bearer token from subsequent requests.
    ///
    pub fn clear_access_token(&mut self) {
        self.access_token = None;
    }

    /// Issue a GET request and parse the response body into the given type.
    ///
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.call(Method::GET, path, None).await
    }

    /// Issue a POST request with a JSON body.
    ///
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        self.call(Method::POST, path, Some(body)).await
    }

    /// Issue a PUT request with a JSON body.
    ///
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        self.call(Method::PUT, path, Some(body)).await
    }

    /// Make one request/response exchange. A non-success status becomes an
    /// `ApiError::Api` carrying the server's `message` field when the body
    /// contains one; transport failures become `ApiError::Http`.
    ///
    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T, ApiError> {
        let request_url = format!("{}{}", self.base_url, path);
        debug!("Requesting {} {}...", method, request_url);

        let mut request = self.http_client.request(method, &request_url);
        if let Some(token) = &self.access_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<serde_json::Value>(&bytes)
                .ok()
                .and_then(|value| {
                    value
                        .get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_owned)
                });
            warn!(
                "API request to {} failed with status {}",
                request_url, status
            );
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice::<T>(&bytes)?)
    }
}
