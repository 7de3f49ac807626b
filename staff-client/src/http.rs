//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::ApiResponse;

/// HTTP client for making network requests to the staff server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Build an endpoint URL from path segments
    ///
    /// Each segment is percent-encoded, so an id containing `/`, `?` or `#`
    /// stays a single segment.
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let invalid = || ClientError::InvalidUrl(self.base_url.clone());
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: Url,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: Url,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    ///
    /// Any 2xx counts as success; the body, empty or a confirmation, is not read.
    pub async fn delete(&self, url: Url) -> ClientResult<()> {
        let response = self.client.delete(url).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await?;
        Err(Self::status_error(status, &text))
    }

    /// Handle the HTTP response
    ///
    /// Error bodies are `{ "code", "message", ... }`; the `message` is kept
    /// so it can be shown to the user as-is.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        let text = response.text().await?;
        if !status.is_success() {
            return Err(Self::status_error(status, &text));
        }

        serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    fn status_error(status: StatusCode, body: &str) -> ClientError {
        let message = error_message(status, body);
        tracing::debug!(status = status.as_u16(), %message, "Request failed");
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Server {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Pull the `message` field out of an error body, falling back to the raw text
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
        && !parsed.message.is_empty()
    {
        return parsed.message;
    }
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    } else {
        body.to_string()
    }
}
