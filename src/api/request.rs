//
//  harbor-cli
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request descriptions
//!
//! A [`RequestSpec`] describes one call to the Harbor API before it is turned
//! into an HTTP request by [`HarborClient`](super::HarborClient). It is built
//! per call, owned by that call and consumed when the call is made, so
//! concurrent calls never share query parameters or headers.
//!
//! ## Example
//!
//! ```rust
//! use harbor_cli::api::request::{Method, RequestSpec};
//!
//! let spec = RequestSpec::get("/projects")
//!     .query_param("page", 1u32)
//!     .query_param_opt("name", None::<String>)
//!     .header("X-Trace", "abc");
//!
//! assert_eq!(spec.method(), Method::Get);
//! assert_eq!(spec.path(), "/projects");
//! assert_eq!(spec.query_params().to_query_string(), "page=1");
//! ```

use std::fmt;

use rand::distr::Alphanumeric;
use rand::Rng;
use serde::Serialize;

use super::common::{ApiError, QueryParams, QueryValue};

/// Header carrying the per-call request id.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Length of generated request ids.
pub const REQUEST_ID_LEN: usize = 26;

/// The HTTP verbs used by the Harbor API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Returns the upper-case verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Err(format!("unsupported HTTP method: {other}")),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Description of a single API call.
///
/// # Fields
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `path` | - | Path appended to the base address, already percent-encoded |
/// | `method` | `GET` | HTTP verb |
/// | `query` | empty | Ordered query parameters |
/// | `body` | `None` | JSON text, never sent with `GET` |
/// | `headers` | empty | Extra headers, overriding the defaults |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSpec {
    path: String,
    method: Method,
    query: QueryParams,
    body: Option<String>,
    headers: Vec<(String, String)>,
}

impl RequestSpec {
    /// Creates a request for `path` with the given method.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            ..Self::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Replaces the query parameters.
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Appends one query parameter.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.push(key, value);
        self
    }

    /// Appends one query parameter when `value` is `Some`.
    pub fn query_param_opt<V: Into<QueryValue>>(
        mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        self.query.push_opt(key, value);
        self
    }

    /// Serializes `body` to JSON and attaches it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] when `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_string(body).map_err(ApiError::Encode)?);
        Ok(self)
    }

    /// Attaches pre-serialized JSON text as the body.
    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a header. Later values for the same name win.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Tags the call with a fresh `X-Request-Id`.
    pub fn with_request_id(self) -> Self {
        self.header(REQUEST_ID_HEADER, generate_request_id())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn query_params(&self) -> &QueryParams {
        &self.query
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Generates a random alphanumeric request id.
pub fn generate_request_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(REQUEST_ID_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_method_is_get() {
        assert_eq!(RequestSpec::default().method(), Method::Get);
        assert_eq!(Method::default().as_str(), "GET");
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("patch".parse::<Method>().unwrap(), Method::Patch);
        assert!("TRACE".parse::<Method>().is_err());
    }

    #[test]
    fn test_json_body() {
        let spec = RequestSpec::post("/projects")
            .json(&serde_json::json!({"project_name": "demo"}))
            .unwrap();
        assert_eq!(spec.body(), Some(r#"{"project_name":"demo"}"#));
    }

    #[test]
    fn test_request_id_shape() {
        let a = generate_request_id();
        let b = generate_request_id();
        assert_eq!(a.len(), REQUEST_ID_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_with_request_id_adds_header() {
        let spec = RequestSpec::get("/health").with_request_id();
        let (name, value) = &spec.headers()[0];
        assert_eq!(name, REQUEST_ID_HEADER);
        assert_eq!(value.len(), REQUEST_ID_LEN);
    }
}
