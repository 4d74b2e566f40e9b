//
//  harbor-cli
//  api/common/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query parameter containers
//!
//! Harbor list endpoints take a mix of optional string, integer and boolean
//! filters. [`QueryParams`] keeps them in insertion order and drops any value
//! that was never set, so an absent filter never reaches the wire as an empty
//! or placeholder string.
//!
//! # Example
//!
//! ```rust
//! use harbor_cli::api::common::QueryParams;
//!
//! let mut query = QueryParams::new();
//! query.push("page", 1u32);
//! query.push_opt("name", None::<String>);
//! query.push_opt("public", Some(true));
//!
//! assert_eq!(query.to_query_string(), "page=1&public=true");
//! ```

use std::fmt;

use url::form_urlencoded;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Free-form text, form-urlencoded on the wire
    Str(String),
    /// Integer value
    Int(i64),
    /// Boolean rendered as `true` / `false`
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered list of query parameters for one request.
///
/// Keys may repeat; pairs are serialized in the order they were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Appends a parameter only when `value` is `Some`.
    pub fn push_opt<V: Into<QueryValue>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key.into(), value.into()));
        }
        self
    }

    /// Returns `true` when no parameter has been set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Looks up the first value set for `key`.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Serializes the parameters as an `application/x-www-form-urlencoded`
    /// string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, &value.to_string());
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_opt_drops_none() {
        let mut query = QueryParams::new();
        query.push_opt("q", None::<&str>);
        query.push_opt("sort", None::<String>);
        query.push_opt("page", None::<u32>);
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut query = QueryParams::new();
        query.push("page", 2u32).push("page_size", 50u32).push("q", "name=~nginx");
        assert_eq!(query.to_query_string(), "page=2&page_size=50&q=name%3D%7Enginx");
    }

    #[test]
    fn test_values_render() {
        assert_eq!(QueryValue::from(true).to_string(), "true");
        assert_eq!(QueryValue::from(-3i64).to_string(), "-3");
        assert_eq!(QueryValue::from("a b").to_string(), "a b");
    }

    #[test]
    fn test_get_returns_first_value() {
        let mut query = QueryParams::new();
        query.push("with_detail", false);
        assert_eq!(query.get("with_detail"), Some(&QueryValue::Bool(false)));
        assert_eq!(query.get("missing"), None);
        assert_eq!(query.len(), 1);
    }
}
