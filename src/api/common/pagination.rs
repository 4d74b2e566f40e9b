//
//  harbor-cli
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination and listing options for Harbor list endpoints
//!
//! Harbor pages every collection with 1-indexed `page` and `page_size` query
//! parameters. Most collections also accept a `q` search expression and a
//! `sort` field list.
//!
//! # Overview
//!
//! | Type | Query keys |
//! |------|------------|
//! | [`Pagination`] | `page`, `page_size` |
//! | [`ListParams`] | `q`, `sort`, `page`, `page_size` |
//!
//! # Example
//!
//! ```rust
//! use harbor_cli::api::common::ListParams;
//!
//! let params = ListParams::default().query("name=~nginx").page_size(50);
//! assert_eq!(
//!     params.to_query().to_query_string(),
//!     "q=name%3D%7Enginx&page=1&page_size=50"
//! );
//! ```
//!
//! # Notes
//!
//! - Page values are always sent, so the server never falls back to its own defaults
//! - Walking every page is left to the caller

use super::QueryParams;

/// Default page number sent with list requests.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size sent with list requests.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page selection for a list request.
///
/// # Fields
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `page` | `1` | Page number (1-indexed) |
/// | `page_size` | `10` | Items per page |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Creates a page selection.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Appends `page` and `page_size` to `query`.
    pub fn apply(&self, query: &mut QueryParams) {
        query.push("page", self.page).push("page_size", self.page_size);
    }

    /// Builds a fresh parameter list holding only the page selection.
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        self.apply(&mut query);
        query
    }
}

/// Search, sort and page options shared by most list endpoints.
///
/// `query` is a Harbor search expression such as `name=~nginx` or
/// `creation_time=[2024-01-01~2024-02-01]`; `sort` is a comma separated field
/// list where a leading `-` sorts descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub pagination: Pagination,
    pub query: Option<String>,
    pub sort: Option<String>,
}

impl ListParams {
    /// Sets the search expression sent as `q`.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the sort expression.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.pagination.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.pagination.page_size = page_size;
        self
    }

    /// Appends `q`, `sort`, `page` and `page_size` to `query`.
    pub fn apply(&self, query: &mut QueryParams) {
        query.push_opt("q", self.query.as_deref());
        query.push_opt("sort", self.sort.as_deref());
        self.pagination.apply(query);
    }

    /// Builds a fresh parameter list from these options.
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        self.apply(&mut query);
        query
    }
}

impl From<Pagination> for ListParams {
    fn from(pagination: Pagination) -> Self {
        Self {
            pagination,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, 10);
        assert_eq!(pagination.to_query().to_query_string(), "page=1&page_size=10");
    }

    #[test]
    fn test_list_params_skip_unset_filters() {
        let params = ListParams::default();
        assert_eq!(params.to_query().to_query_string(), "page=1&page_size=10");
    }

    #[test]
    fn test_list_params_order() {
        let params = ListParams::default().sort("-creation_time").query("name=foo").page(3);
        assert_eq!(
            params.to_query().to_query_string(),
            "q=name%3Dfoo&sort=-creation_time&page=3&page_size=10"
        );
    }

    #[test]
    fn test_from_pagination() {
        let params = ListParams::from(Pagination::new(2, 25));
        assert_eq!(params.pagination.page, 2);
        assert!(params.query.is_none());
    }
}
