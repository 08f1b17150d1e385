//! HTTP fetch client and product catalog client for TOP Shopping.
//!
//! [`FetchClient`] wraps a [`Transport`] with a base URL, default headers and
//! a [`RetryPolicy`]. [`CatalogClient`] sits on top of it and turns the store
//! API's JSON into validated [`topshop_commerce::prelude::Product`]s.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use topshop_data::{CatalogClient, FetchClient};
//!
//! # async fn run() -> Result<(), topshop_data::CatalogError> {
//! let client = FetchClient::http(Duration::from_secs(10))?
//!     .with_base_url(topshop_data::DEFAULT_BASE_URL);
//! let catalog = CatalogClient::new(client);
//!
//! for product in catalog.fetch_products().await? {
//!     println!("{} {}", product.title, product.price);
//! }
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
mod request;
mod response;
mod retry;
mod transport;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tracing::{debug, warn};

pub use catalog::{CatalogClient, CatalogError, CatalogLoad, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;
pub use retry::{BackoffStrategy, RetryCondition, RetryPolicy};
pub use transport::{ReqwestTransport, Transport};

/// HTTP client for making outbound requests.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    transport: Arc<dyn Transport>,
    retry: RetryPolicy,
}

impl FetchClient {
    /// Create a client that sends requests through `transport`.
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            transport: Arc::new(transport),
            retry: RetryPolicy::default(),
        }
    }

    /// Create a client backed by a real HTTP connection pool.
    pub fn http(timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self::with_transport(ReqwestTransport::new(timeout)?)
            .with_default_header("Accept", "application/json"))
    }

    /// Set the base URL that [`FetchClient::endpoint`] resolves against.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Replace the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Build an absolute URL by appending path segments to the base URL.
    ///
    /// Each segment is percent-encoded on its own, so a `/` or space inside
    /// one never changes the path structure.
    ///
    /// ```
    /// use topshop_data::{FetchClient, ReqwestTransport};
    /// # use std::time::Duration;
    /// # let transport = ReqwestTransport::new(Duration::from_secs(1)).unwrap();
    /// let client = FetchClient::with_transport(transport).with_base_url("https://fakestoreapi.com");
    /// let url = client.endpoint(&["products", "category", "men's clothing"]).unwrap();
    /// assert_eq!(url, "https://fakestoreapi.com/products/category/men's%20clothing");
    /// ```
    pub fn endpoint(&self, segments: &[&str]) -> Result<String, FetchError> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| FetchError::InvalidUrl("no base URL configured".to_string()))?;
        let mut url =
            Url::parse(base).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl(format!("{} cannot be a base", base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }

    /// Create a GET request for an absolute URL.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        let mut builder = RequestBuilder::new(url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            client: self,
            builder,
        }
    }
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder<'a> {
    client: &'a FetchClient,
    builder: RequestBuilder,
}

impl ClientRequestBuilder<'_> {
    /// Send the request, retrying according to the client's policy.
    ///
    /// A non-2xx response that is not retried is returned as-is; callers
    /// decide whether it is an error.
    pub async fn send(self) -> Result<Response, FetchError> {
        let Self { client, builder } = self;
        let policy = &client.retry;
        let mut attempt = 0;

        loop {
            debug!(url = %builder.url, attempt, "sending request");
            let result = client.transport.send(builder.clone()).await;

            let retry = match &result {
                Ok(response) => policy.should_retry_status(response.status, attempt),
                Err(error) => policy.should_retry_error(error, attempt),
            };
            if !retry {
                return result;
            }

            let delay = policy.backoff.delay_for_attempt(attempt);
            match &result {
                Ok(response) => warn!(
                    url = %builder.url,
                    status = response.status,
                    delay_ms = delay.as_millis() as u64,
                    "retrying request"
                ),
                Err(error) => warn!(
                    url = %builder.url,
                    %error,
                    delay_ms = delay.as_millis() as u64,
                    "retrying request"
                ),
            }
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            attempt += 1;
        }
    }
}
