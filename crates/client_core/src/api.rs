//! HTTP client for the admin product endpoints.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use shared::{
    domain::{ProductId, ProductSummary},
    error::ErrorBody,
    protocol::{ProductListQuery, ProductListResponse, ProductPayload, ProductResponse},
};
use thiserror::Error;
use tracing::debug;
use url::Url;

const PRODUCTS_PATH: [&str; 3] = ["api", "admin", "products"];

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("base url cannot address admin endpoints: {0}")]
    BaseUrl(String),
    #[error("request did not complete: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected request with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Status of a mutation plus, for rejected creates, the raw response body.
/// Update and delete responses are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn update(&self, id: &str, payload: &ProductPayload) -> Result<ApiResponse, ApiError>;
    async fn delete(&self, id: &str) -> Result<ApiResponse, ApiError>;
    async fn create(&self, payload: &ProductPayload) -> Result<ApiResponse, ApiError>;
    async fn list(&self, query: ProductListQuery) -> Result<Vec<ProductSummary>, ApiError>;
    async fn get(&self, id: ProductId) -> Result<ProductSummary, ApiError>;
}

pub struct HttpProductApi {
    http: Client,
    base_url: Url,
}

impl HttpProductApi {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/admin/products[/{id}]`, keeping any path prefix of the base.
    pub fn products_url(&self, id: Option<&str>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ApiError::BaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().extend(PRODUCTS_PATH);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        payload: Option<&ProductPayload>,
    ) -> Result<reqwest::Response, ApiError> {
        debug!(%method, %url, "sending admin product request");
        let mut request = self.http.request(method, url);
        if let Some(payload) = payload {
            request = request.json(payload);
        }
        Ok(request.send().await?)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self.send(Method::GET, url, None).await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: ErrorBody::detail_from_bytes(&body),
            });
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn update(&self, id: &str, payload: &ProductPayload) -> Result<ApiResponse, ApiError> {
        let url = self.products_url(Some(id))?;
        let response = self.send(Method::PUT, url, Some(payload)).await?;
        Ok(ApiResponse::new(response.status().as_u16()))
    }

    async fn delete(&self, id: &str) -> Result<ApiResponse, ApiError> {
        let url = self.products_url(Some(id))?;
        let response = self.send(Method::DELETE, url, None).await?;
        Ok(ApiResponse::new(response.status().as_u16()))
    }

    async fn create(&self, payload: &ProductPayload) -> Result<ApiResponse, ApiError> {
        let url = self.products_url(None)?;
        let response = self.send(Method::POST, url, Some(payload)).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(ApiResponse::new(status.as_u16()));
        }
        // A body that fails to arrive is treated like one that fails to parse.
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(err) => {
                debug!(error = %err, "rejected create body unreadable");
                Vec::new()
            }
        };
        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }

    async fn list(&self, query: ProductListQuery) -> Result<Vec<ProductSummary>, ApiError> {
        let mut url = self.products_url(None)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("order_by", query.order_by.as_str())
                .append_pair("desc", if query.desc { "true" } else { "false" });
            if let Some(category_id) = query.category_id {
                pairs.append_pair("category_id", &category_id.to_string());
            }
        }
        let listing: ProductListResponse = self.fetch(url).await?;
        Ok(listing.products)
    }

    async fn get(&self, id: ProductId) -> Result<ProductSummary, ApiError> {
        let url = self.products_url(Some(&id.to_string()))?;
        let found: ProductResponse = self.fetch(url).await?;
        Ok(found.product)
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
