//
//  harbor-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Harbor client
//!
//! This module provides the vocabulary shared by the transport and every
//! resource group: the error type, query parameter containers, the typed
//! option structs used by list endpoints, and path-segment encoding.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`QueryParams`] / [`QueryValue`] - Ordered query parameters that drop unset values
//! - [`Pagination`] / [`ListParams`] - Paging, search and sort options (re-exported from [`pagination`])
//! - [`encode_segment`] / [`encode_repository`] - Path segment encoding (re-exported from [`path`])
//!
//! # Example
//!
//! ```rust
//! use harbor_cli::api::common::ApiError;
//!
//! fn describe(result: Result<(), ApiError>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(e) if e.is_not_found() => "missing".to_string(),
//!         Err(e) => e.to_string(),
//!     }
//! }
//! ```

use thiserror::Error;

mod pagination;
mod path;
mod query;

pub use pagination::*;
pub use path::*;
pub use query::*;

/// Message used when an error response carries no usable `message` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// Unified error type for all Harbor API operations.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `Transport` | The HTTP exchange could not complete (DNS, connect, TLS) |
/// | `Api` | The server answered with a non-success status |
/// | `Decode` | A success response body was not valid JSON |
/// | `Encode` | A request body could not be serialized |
/// | `InvalidHeader` | A caller supplied header is not a valid HTTP header |
///
/// # Example
///
/// ```rust
/// use harbor_cli::api::common::ApiError;
///
/// let err = ApiError::Api {
///     status: 404,
///     message: "project not found".to_string(),
///     body: r#"{"message":"project not found"}"#.to_string(),
/// };
/// assert_eq!(err.to_string(), "project not found");
/// assert_eq!(err.status(), Some(404));
/// assert!(err.is_not_found());
/// ```
///
/// # Notes
///
/// - `Transport` displays the underlying `reqwest::Error` unchanged
/// - `Api` displays only the server message so callers can show it verbatim
#[derive(Error, Debug)]
pub enum ApiError {
    /// The underlying HTTP client could not complete the exchange.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server responded with a status outside the success range.
    ///
    /// `message` is the top-level `message` field of the JSON error body, or
    /// [`FALLBACK_ERROR_MESSAGE`] when the body has none. `body` keeps the raw
    /// text so callers can inspect Harbor's `errors` array.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Human-readable message extracted from the error body.
        message: String,
        /// Raw response body.
        body: String,
    },

    /// A success response body could not be decoded as JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A caller supplied header name or value is not valid HTTP.
    #[error("Invalid header: {name}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

impl ApiError {
    /// Returns the HTTP status for application errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the server message for application errors.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

/// Extracts the message carried by a Harbor error response body.
///
/// Only a non-empty string at the top-level `message` key is used. Anything
/// else, including bodies that are empty or not JSON, yields
/// [`FALLBACK_ERROR_MESSAGE`].
///
/// # Example
///
/// ```rust
/// use harbor_cli::api::common::extract_error_message;
///
/// assert_eq!(extract_error_message(r#"{"message":"project not found"}"#), "project not found");
/// assert_eq!(extract_error_message("<html>502</html>"), "Request failed");
/// ```
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .as_ref()
        .and_then(|json| json.get("message"))
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_from_message_field() {
        assert_eq!(
            extract_error_message(r#"{"message":"project not found"}"#),
            "project not found"
        );
    }

    #[test]
    fn test_extract_error_message_fallbacks() {
        assert_eq!(extract_error_message(""), FALLBACK_ERROR_MESSAGE);
        assert_eq!(extract_error_message("upstream timeout"), FALLBACK_ERROR_MESSAGE);
        assert_eq!(extract_error_message(r#"{"message":""}"#), FALLBACK_ERROR_MESSAGE);
        assert_eq!(extract_error_message(r#"{"message":42}"#), FALLBACK_ERROR_MESSAGE);
        assert_eq!(extract_error_message("[1,2,3]"), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_harbor_errors_array_is_not_a_message() {
        let body = r#"{"errors":[{"code":"NOT_FOUND","message":"artifact not found"}]}"#;
        assert_eq!(extract_error_message(body), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_api_error_display_is_message() {
        let err = ApiError::Api {
            status: 409,
            message: "conflict".to_string(),
            body: String::new(),
        };
        assert_eq!(err.to_string(), "conflict");
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
        assert_eq!(err.message(), Some("conflict"));
    }
}
