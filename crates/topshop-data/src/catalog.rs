//! Product catalog client for the store API.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use topshop_commerce::prelude::{Category, Product, ProductId, ProductRecord};

use crate::{FetchClient, FetchError, Response};

/// Public store API the catalog is served from.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Errors surfaced by catalog fetches.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The API answered with a non-success status.
    #[error("Failed to fetch products")]
    Unavailable { status: u16 },

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] FetchError),

    /// The API answered without a product for this id.
    #[error("Product {0} not found")]
    NotFound(ProductId),

    /// The body was not the JSON shape we expect.
    #[error("Malformed catalog response: {0}")]
    Malformed(String),
}

/// Reads products and categories through a [`FetchClient`].
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: FetchClient,
}

impl CatalogClient {
    /// Wrap a client. Endpoints resolve against the client's base URL, or
    /// [`DEFAULT_BASE_URL`] when it has none.
    pub fn new(client: FetchClient) -> Self {
        let client = if client.base_url().is_some() {
            client
        } else {
            client.with_base_url(DEFAULT_BASE_URL)
        };
        Self { client }
    }

    /// Fetch the full product list.
    ///
    /// Records that fail validation are skipped; the rest keep API order.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.get_ok(&["products"]).await?;
        decode_products(&response)
    }

    /// Fetch a single product.
    pub async fn fetch_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let id_segment = id.to_string();
        let response = self.get_ok(&["products", id_segment.as_str()]).await?;
        if response.is_empty() {
            return Err(CatalogError::NotFound(id));
        }

        let value: Value = response
            .json()
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;
        if value.is_null() {
            return Err(CatalogError::NotFound(id));
        }

        let record: ProductRecord =
            serde_json::from_value(value).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Product::try_from(record).map_err(|e| CatalogError::Malformed(e.to_string()))
    }

    /// Fetch the category labels the API knows about.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let response = self.get_ok(&["products", "categories"]).await?;
        let labels: Vec<String> = response
            .json()
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Ok(labels.into_iter().map(Category::from).collect())
    }

    /// Fetch the products in one category.
    pub async fn fetch_category(&self, category: &Category) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .get_ok(&["products", "category", category.as_str()])
            .await?;
        decode_products(&response)
    }

    async fn get_ok(&self, segments: &[&str]) -> Result<Response, CatalogError> {
        let url = self.client.endpoint(segments)?;
        let response = self.client.get(&url).send().await?;
        if !response.is_success() {
            warn!(%url, status = response.status, "catalog request failed");
            return Err(CatalogError::Unavailable {
                status: response.status,
            });
        }
        Ok(response)
    }
}

fn decode_products(response: &Response) -> Result<Vec<Product>, CatalogError> {
    let values: Vec<Value> = response
        .json()
        .map_err(|e| CatalogError::Malformed(e.to_string()))?;
    let total = values.len();

    let products: Vec<Product> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let parsed = serde_json::from_value::<ProductRecord>(value)
                .map_err(|e| e.to_string())
                .and_then(|record| Product::try_from(record).map_err(|e| e.to_string()));
            match parsed {
                Ok(product) => Some(product),
                Err(reason) => {
                    warn!(index, %reason, "skipping invalid product record");
                    None
                }
            }
        })
        .collect();

    debug!(total, kept = products.len(), "decoded product list");
    Ok(products)
}

/// Lifecycle of a catalog load as a view sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogLoad {
    /// Request in flight.
    Loading,
    /// Products arrived (possibly none).
    Loaded(Vec<Product>),
    /// The load failed; holds the reason shown to the user.
    Failed(String),
}

impl CatalogLoad {
    /// Settle a load from a fetch result.
    pub fn from_result(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => Self::Loaded(products),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// Whether the request is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded products, if any.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            Self::Loaded(products) => Some(products),
            _ => None,
        }
    }
}
