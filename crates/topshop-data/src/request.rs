//! Outbound GET request.

use std::collections::HashMap;

/// A GET request as handed to a [`crate::Transport`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Create a request for an absolute URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// The full request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request headers.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}
