//
//  harbor-cli
//  api/resources/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User Operations
//!
//! Local database users. Most write operations require system administrator
//! privileges; [`Users::current`] and [`Users::current_permissions`] work for
//! any authenticated principal.
//!
//! # Example
//!
//! ```rust,no_run
//! use harbor_cli::api::{ClientConfig, HarborClient};
//!
//! # async fn example() -> Result<(), harbor_cli::api::ApiError> {
//! let client = HarborClient::new(ClientConfig::new("admin", "Harbor12345"))?;
//! let me = client.users().current().await?;
//! client.users().set_sysadmin(42, true).await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams, Pagination, QueryParams};
use crate::api::request::RequestSpec;

/// Handle for the user endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a HarborClient,
}

impl<'a> Users<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Lists users. Requires system administrator privileges.
    pub async fn list(&self, params: &ListParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/users").query(params.to_query()))
            .await
    }

    /// Creates a local user from a `UserCreationReq` body.
    pub async fn create<B: Serialize + ?Sized>(&self, user: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/users").json(user)?)
            .await
    }

    /// Returns the authenticated user.
    pub async fn current(&self) -> Result<Value, ApiError> {
        self.client.execute(RequestSpec::get("/users/current")).await
    }

    /// Returns the permissions of the authenticated user.
    ///
    /// # Parameters
    ///
    /// * `scope` - Resource scope such as `/project/1`; all scopes when `None`
    /// * `relative` - Return resources relative to `scope`
    pub async fn current_permissions(
        &self,
        scope: Option<&str>,
        relative: Option<bool>,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get("/users/current/permissions")
                    .query_param_opt("scope", scope)
                    .query_param_opt("relative", relative),
            )
            .await
    }

    /// Searches users by username prefix.
    pub async fn search(&self, username: &str, pagination: &Pagination) -> Result<Value, ApiError> {
        let mut query = QueryParams::new();
        query.push("username", username);
        pagination.apply(&mut query);
        self.client
            .execute(RequestSpec::get("/users/search").query(query))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/users/{id}")))
            .await
    }

    /// Updates email, realname and comment.
    pub async fn update_profile<B: Serialize + ?Sized>(
        &self,
        id: i64,
        profile: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(format!("/users/{id}")).json(profile)?)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(format!("/users/{id}")))
            .await
    }

    /// Grants or revokes system administrator privileges.
    pub async fn set_sysadmin(&self, id: i64, sysadmin: bool) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::put(format!("/users/{id}/sysadmin"))
                    .json(&json!({ "sysadmin_flag": sysadmin }))?,
            )
            .await
    }

    /// Changes a password, body `{"old_password": .., "new_password": ..}`.
    pub async fn update_password<B: Serialize + ?Sized>(
        &self,
        id: i64,
        password: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(format!("/users/{id}/password")).json(password)?)
            .await
    }

    /// Sets the CLI secret used with OIDC authentication.
    pub async fn set_cli_secret<B: Serialize + ?Sized>(
        &self,
        id: i64,
        secret: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(format!("/users/{id}/cli_secret")).json(secret)?)
            .await
    }
}
