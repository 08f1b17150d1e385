//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// An HTTP response, fully buffered.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the body is empty or only whitespace.
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, body.to_vec())
    }

    #[test]
    fn test_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(304, b"").is_success());
        assert!(!make_response(503, b"").is_success());
    }

    #[test]
    fn test_is_empty() {
        assert!(make_response(200, b"").is_empty());
        assert!(make_response(200, b" \n").is_empty());
        assert!(!make_response(200, b"null").is_empty());
    }

    #[test]
    fn test_json() {
        let resp = make_response(200, br#"["electronics", "jewelery"]"#);
        let categories: Vec<String> = resp.json().unwrap();
        assert_eq!(categories, vec!["electronics", "jewelery"]);

        let resp = make_response(200, b"<html>");
        assert!(matches!(
            resp.json::<Vec<String>>(),
            Err(FetchError::JsonError(_))
        ));
    }
}
