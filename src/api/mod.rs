//
//  harbor-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the client for Harbor's REST API (`/api/v2.0`).
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: The single HTTP transport, authentication and response mapping
//! - [`request`]: Per-call request descriptions
//! - [`resources`]: One handle per resource group (projects, artifacts, ...)
//! - [`common`]: Shared types (errors, query parameters, paging, path encoding)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use harbor_cli::api::{ClientConfig, HarborClient};
//! use harbor_cli::api::resources::ListProjectsParams;
//!
//! # async fn example() -> Result<(), harbor_cli::api::ApiError> {
//! let client = HarborClient::new(
//!     ClientConfig::new("admin", "Harbor12345")
//!         .with_base_address("https://harbor.example.com/api/v2.0"),
//! )?;
//!
//! let projects = client.projects().list(&ListProjectsParams::default()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`ApiError`]:
//!
//! - `Transport`: the exchange failed (DNS, connect, TLS)
//! - `Api`: non-2xx status with Harbor's `message`
//! - `Decode`: a 2xx body that is not JSON
//! - `Encode` / `InvalidHeader`: the request could not be built

/// HTTP transport for the Harbor API.
///
/// Provides [`HarborClient`] and [`ClientConfig`].
pub mod client;

/// Shared request vocabulary and the [`ApiError`] type.
pub mod common;

/// Request descriptions consumed by [`HarborClient::execute`].
pub mod request;

/// Resource group handles.
pub mod resources;

pub use client::{ClientConfig, HarborClient, DEFAULT_BASE_ADDRESS};
pub use common::ApiError;
pub use request::{Method, RequestSpec};
