use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::{Product, PAGE_SIZE};

/// Errors from fetching a catalog page.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed catalog response: {0}")]
    Body(#[source] reqwest::Error),

    #[error("invalid catalog URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Wire shape of the products endpoint.
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

/// A paginated source of products.
///
/// The run loop only ever talks to this trait, so tests can drive the
/// pagination state machine with a scripted source instead of a network.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch one page of products. An empty batch means the source is
    /// exhausted.
    async fn fetch_page(&self, page: u32) -> Result<Vec<Product>, CatalogError>;
}

/// HTTP client for a Shopify-style `products.json` collection endpoint.
pub struct CatalogClient {
    client: reqwest::Client,
    site_base: String,
    collection: String,
}

impl CatalogClient {
    pub fn new(site_base: String, collection: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            site_base,
            collection,
        }
    }

    /// Base site URL, used for building product detail links.
    pub fn site_base(&self) -> &str {
        &self.site_base
    }

    fn page_url(&self, page: u32) -> Result<Url, CatalogError> {
        let mut url = Url::parse(&self.site_base)?;
        url.set_path(&format!("/collections/{}/products.json", self.collection));
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &PAGE_SIZE.to_string());
        Ok(url)
    }
}

#[async_trait]
impl ProductSource for CatalogClient {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Product>, CatalogError> {
        let url = self.page_url(page)?;
        tracing::debug!(%url, "requesting catalog page");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let body: ProductsResponse = response.json().await.map_err(CatalogError::Body)?;
        Ok(body.products)
    }
}
