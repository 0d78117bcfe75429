//! HTTP transport for the catalog API
//!
//! [`HttpClient`] is the seam the rest of the crate talks to;
//! [`NetworkHttpClient`] implements it on top of reqwest.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// Error body returned by the backend for non-2xx responses
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    message: String,
}

/// A GET request relative to the configured base URL.
///
/// Path segments are kept unencoded here and percent-encoded when the
/// final URL is built, so a category name with spaces or slashes stays a
/// single segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiRequest {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, request: &ApiRequest) -> ClientResult<T>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| ClientError::InvalidConfig(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidConfig(format!(
                "{} cannot be used as a base URL",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self {
            client,
            base_url,
            timeout: config.timeout,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request against the base URL
    pub fn url_for(&self, request: &ApiRequest) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidConfig(format!("{} has no path", self.base_url)))?
            .pop_if_empty()
            .extend(request.segments());
        if !request.query_pairs().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query_pairs());
        }
        Ok(url)
    }

    fn transport_error(&self, request: &ApiRequest, err: reqwest::Error) -> ClientError {
        tracing::error!(request = %request, error = %err, "API error");
        if err.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else {
            ClientError::Http(err)
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| self.transport_error(request, e))?;
            tracing::error!(request = %request, status = %status, "API error");
            // Prefer the backend's own message when it sends one
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            return Err(match status {
                StatusCode::NOT_FOUND => ClientError::NotFound(message),
                _ => ClientError::Status {
                    status: status.as_u16(),
                    body: message,
                },
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(request, e))?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(request = %request, error = %e, "Undecodable response body");
            ClientError::Serialization(e)
        })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, request: &ApiRequest) -> ClientResult<T> {
        let url = self.url_for(request)?;
        tracing::debug!(url = %url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(request, e))?;
        self.handle_response(request, response).await
    }
}
