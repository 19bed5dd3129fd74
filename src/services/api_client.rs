use std::fmt;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::ClientError;
use crate::validators;

/// A same-origin GET request: an absolute path plus query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    path: String,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(path: impl Into<String>) -> Self {
        ApiRequest {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, urlencoding::encode(key), urlencoding::encode(value))?;
        }
        Ok(())
    }
}

/// Status and raw body of a settled request.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Issue one GET. Only transport failures are errors; any status is a response.
    async fn get(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError>;
}

pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self, ClientError> {
        if !validators::is_str_http_url(base_url) {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(HttpApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = format!("{}{}", self.base_url, request);
        log::info!("Making request to {}...", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            log::warn!("{} answered {}", request, status);
        }
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}
