//
//  harbor-cli
//  api/resources/system.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! System Information
//!
//! Instance-level endpoints: version and feature information, storage
//! volumes, component health, statistics and global search. Each call
//! carries an `X-Request-Id`.
//!
//! # Endpoints
//!
//! | Method | HTTP | Path |
//! |--------|------|------|
//! | [`System::info`] | GET | `/systeminfo` |
//! | [`System::volumes`] | GET | `/systeminfo/volumes` |
//! | [`System::cert`] | GET | `/systeminfo/getcert` |
//! | [`System::health`] | GET | `/health` |
//! | [`System::ping`] | GET | `/ping` |
//! | [`System::statistics`] | GET | `/statistics` |
//! | [`System::search`] | GET | `/search?q=` |
//! | [`System::ping_oidc`] | POST | `/system/oidc/ping` |

use serde::Serialize;
use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::ApiError;
use crate::api::request::RequestSpec;

/// Handle for the system endpoints.
#[derive(Debug, Clone, Copy)]
pub struct System<'a> {
    client: &'a HarborClient,
}

impl<'a> System<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Returns the Harbor version, auth mode and enabled features.
    ///
    /// Works anonymously, but more fields are returned to authenticated
    /// callers.
    pub async fn info(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/systeminfo").with_request_id())
            .await
    }

    /// Returns total and free storage of the registry volume.
    pub async fn volumes(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/systeminfo/volumes").with_request_id())
            .await
    }

    /// Returns the default root certificate as text.
    pub async fn cert(&self) -> Result<String, ApiError> {
        self.client
            .execute_text(RequestSpec::get("/systeminfo/getcert").with_request_id())
            .await
    }

    /// Returns overall and per-component health.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use harbor_cli::api::{ClientConfig, HarborClient};
    ///
    /// # async fn example() -> Result<(), harbor_cli::api::ApiError> {
    /// let client = HarborClient::new(ClientConfig::new("admin", "Harbor12345"))?;
    /// let health = client.system().health().await?;
    /// println!("{}", health["status"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn health(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/health").with_request_id())
            .await
    }

    /// Pings the core service; Harbor answers with the text `Pong`.
    pub async fn ping(&self) -> Result<String, ApiError> {
        self.client
            .execute_text(RequestSpec::get("/ping").with_request_id())
            .await
    }

    /// Returns project and repository counts and total storage.
    pub async fn statistics(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/statistics").with_request_id())
            .await
    }

    /// Searches projects and repositories by name.
    pub async fn search(&self, query: &str) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get("/search")
                    .query_param("q", query)
                    .with_request_id(),
            )
            .await
    }

    /// Tests an OIDC endpoint before saving it to the configuration.
    pub async fn ping_oidc<B: Serialize + ?Sized>(&self, endpoint: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::post("/system/oidc/ping")
                    .json(endpoint)?
                    .with_request_id(),
            )
            .await
    }
}
