//! HTTP client shared by the remote port implementations.

use std::time::Duration;

use hauler_core::error::{HaulerError, Result};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared connection to the Hauler backend.
///
/// Wraps a `reqwest::Client` with the base URL and optional bearer token,
/// and maps transport, status, and decode failures onto the application
/// error kinds. One instance is shared across all remote ports.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl BackendClient {
    /// Creates a client for the given backend.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, self.url(path))
            .timeout(REQUEST_TIMEOUT);
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }
        request
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| HaulerError::persistence(format!("request to {} failed: {}", path, e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(HaulerError::persistence(format!(
                "backend error ({}) on {}: {}",
                status, path, error_text
            )));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| HaulerError::Serialization {
                format: "JSON".to_string(),
                message: format!("failed to parse response from {}: {}", path, e),
            })
    }

    /// GET returning a decoded body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let request = self.request(Method::GET, path).query(query);
        let response = self.send(path, request).await?;
        Self::decode(path, response).await
    }

    /// GET where a 404 means "does not exist" rather than an error.
    pub(crate) async fn get_json_opt<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let request = self.request(Method::GET, path);
        let response = request
            .send()
            .await
            .map_err(|e| HaulerError::persistence(format!("request to {} failed: {}", path, e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(HaulerError::persistence(format!(
                "backend error ({}) on {}: {}",
                status, path, error_text
            )));
        }
        Ok(Some(Self::decode(path, response).await?))
    }

    /// POST with a JSON body, discarding the response body.
    pub(crate) async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.request(Method::POST, path).json(body);
        self.send(path, request).await?;
        Ok(())
    }

    /// POST with a JSON body, returning the decoded response.
    pub(crate) async fn post_json_response<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.request(Method::POST, path).json(body);
        let response = self.send(path, request).await?;
        Self::decode(path, response).await
    }

    /// PUT with a JSON body, discarding the response body.
    pub(crate) async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.request(Method::PUT, path).json(body);
        self.send(path, request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slashes() {
        let client = BackendClient::new("http://localhost:8787/", None);
        assert_eq!(
            client.url("/v1/providers"),
            "http://localhost:8787/v1/providers"
        );
    }
}
