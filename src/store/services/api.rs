//! # Shop API Client
//!
//! Thin REST client for the storefront backend: one GET for the product
//! list, one POST for order submission. Callers treat every failure the
//! same way: surface the message, leave model state alone, allow retry.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::store::models::{CheckoutSubmission, Product};

/// API failure taxonomy
///
/// `Network` covers transport-level failures; `Api` carries the message the
/// server put in its error body (or the HTTP status text when it sent
/// none). The core treats both identically.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{0}")]
    Api(String),
}

/// List envelope the backend wraps collection responses in
#[derive(Debug, Deserialize)]
pub struct ApiListResponse<T> {
    pub total: u64,
    pub items: Vec<T>,
}

/// Server confirmation of an accepted order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderReceipt {
    pub id: String,
    pub total: u64,
}

pub struct ShopApi {
    client: Client,
    base_url: String,
    cdn_url: String,
}

impl ShopApi {
    pub fn new(base_url: impl Into<String>, cdn_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            cdn_url: cdn_url.into(),
        }
    }

    /// Fetch the product list, rewriting relative image paths to the CDN
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/product", self.base_url);
        tracing::debug!(%url, "fetching catalog");

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        let list: ApiListResponse<Product> = response.json().await?;

        tracing::info!(count = list.items.len(), "catalog fetched");
        Ok(list
            .items
            .into_iter()
            .map(|mut product| {
                product.image = resolve_image(&self.cdn_url, &product.image);
                product
            })
            .collect())
    }

    /// Submit a completed order
    pub async fn submit_order(
        &self,
        order: &CheckoutSubmission,
    ) -> Result<OrderReceipt, ApiError> {
        let url = format!("{}/order", self.base_url);
        tracing::debug!(%url, total = order.total, "submitting order");

        let response = self.client.post(&url).json(order).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<OrderReceipt>().await?)
    }

    /// Turn a non-2xx response into the server's error message
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|e| e.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        Err(ApiError::Api(message))
    }
}

/// CDN-prefix a relative image path; absolute URLs pass through
fn resolve_image(cdn_url: &str, image: &str) -> String {
    if image.starts_with("http") {
        image.to_string()
    } else {
        format!("{cdn_url}{image}")
    }
}
