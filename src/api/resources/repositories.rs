//
//  harbor-cli
//  api/resources/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository Operations
//!
//! Repository names are given relative to their project (`nginx`, not
//! `library/nginx`) and may themselves contain slashes.

use serde::Serialize;
use serde_json::Value;

use super::{project_path, repository_path};
use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams};
use crate::api::request::RequestSpec;

/// Handle for the repository endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Repositories<'a> {
    client: &'a HarborClient,
}

impl<'a> Repositories<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Lists repositories in a project.
    ///
    /// # Parameters
    ///
    /// * `project` - Project name or id
    /// * `params` - Search (`q=name=~nginx`), sort and paging options
    pub async fn list(&self, project: &str, params: &ListParams) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get(format!("{}/repositories", project_path(project)))
                    .query(params.to_query()),
            )
            .await
    }

    /// Lists repositories across every project the caller can see.
    pub async fn list_all(&self, params: &ListParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/repositories").query(params.to_query()))
            .await
    }

    /// Fetches a repository.
    pub async fn get(&self, project: &str, repository: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(repository_path(project, repository)))
            .await
    }

    /// Updates a repository, typically its `description`.
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        project: &str,
        repository: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(repository_path(project, repository)).json(body)?)
            .await
    }

    /// Deletes a repository and every artifact in it.
    pub async fn delete(&self, project: &str, repository: &str) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(repository_path(project, repository)))
            .await
    }
}
