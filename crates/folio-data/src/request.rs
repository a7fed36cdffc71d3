//! HTTP request builder.

use crate::FetchError;
use serde::Serialize;
use std::collections::HashMap;

/// HTTP methods the backend endpoints use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    #[allow(dead_code)] // Used in wasm32 target
    pub(crate) method: Method,
    #[allow(dead_code)] // Used in wasm32 target
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }
}
