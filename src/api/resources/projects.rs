//
//  harbor-cli
//  api/resources/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project Operations
//!
//! Projects are Harbor's top-level namespace: every repository lives in one,
//! and membership, quotas, scanners and policies are attached to them. All
//! project-scoped methods accept either the project name or its numeric id.
//!
//! # Endpoints
//!
//! | Method | HTTP | Path |
//! |--------|------|------|
//! | [`Projects::list`] | GET | `/projects` |
//! | [`Projects::create`] | POST | `/projects` |
//! | [`Projects::get`] | GET | `/projects/{project}` |
//! | [`Projects::update`] | PUT | `/projects/{project}` |
//! | [`Projects::delete`] | DELETE | `/projects/{project}` |
//! | [`Projects::deletable`] | GET | `/projects/{project}/_deletable` |
//! | [`Projects::summary`] | GET | `/projects/{project}/summary` |
//! | [`Projects::scanner`] | GET | `/projects/{project}/scanner` |
//! | [`Projects::set_scanner`] | PUT | `/projects/{project}/scanner` |
//! | [`Projects::scanner_candidates`] | GET | `/projects/{project}/scanner/candidates` |

use serde::Serialize;
use serde_json::Value;

use super::project_path;
use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams, QueryParams};
use crate::api::request::RequestSpec;

/// Filters for [`Projects::list`].
///
/// # Example
///
/// ```rust
/// use harbor_cli::api::resources::ListProjectsParams;
///
/// let params = ListProjectsParams::default().public(true).with_detail(false);
/// assert_eq!(
///     params.to_query().to_query_string(),
///     "page=1&page_size=10&public=true&with_detail=false"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProjectsParams {
    pub list: ListParams,
    /// Exact project name
    pub name: Option<String>,
    /// Only public (`true`) or only private (`false`) projects
    pub public: Option<bool>,
    /// Owner username
    pub owner: Option<String>,
    /// Include owner, role and repository counts
    pub with_detail: Option<bool>,
}

impl ListProjectsParams {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_detail(mut self, with_detail: bool) -> Self {
        self.with_detail = Some(with_detail);
        self
    }

    /// Builds the query: `q`, `sort`, `page`, `page_size`, then the project filters.
    pub fn to_query(&self) -> QueryParams {
        let mut query = self.list.to_query();
        query.push_opt("name", self.name.as_deref());
        query.push_opt("public", self.public);
        query.push_opt("owner", self.owner.as_deref());
        query.push_opt("with_detail", self.with_detail);
        query
    }
}

impl From<ListParams> for ListProjectsParams {
    fn from(list: ListParams) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Handle for the project endpoints.
///
/// Obtained from [`HarborClient::projects`].
#[derive(Debug, Clone, Copy)]
pub struct Projects<'a> {
    client: &'a HarborClient,
}

impl<'a> Projects<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Lists projects visible to the caller.
    ///
    /// # Parameters
    ///
    /// * `params` - Search, paging and project filters
    ///
    /// # Returns
    ///
    /// The JSON array of projects for the requested page.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use harbor_cli::api::{ClientConfig, HarborClient};
    /// use harbor_cli::api::resources::ListProjectsParams;
    ///
    /// # async fn example() -> Result<(), harbor_cli::api::ApiError> {
    /// let client = HarborClient::new(ClientConfig::new("admin", "Harbor12345"))?;
    /// let public = client
    ///     .projects()
    ///     .list(&ListProjectsParams::default().public(true))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, params: &ListProjectsParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/projects").query(params.to_query()))
            .await
    }

    /// Creates a project.
    ///
    /// The body follows Harbor's `ProjectReq` schema, e.g.
    /// `{"project_name": "demo", "metadata": {"public": "false"}}`.
    /// Harbor replies `201 Created` with an empty body, so the result is
    /// usually `null`.
    pub async fn create<B: Serialize + ?Sized>(&self, project: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/projects").json(project)?)
            .await
    }

    /// Fetches a project by name or id.
    pub async fn get(&self, project: &str) -> Result<Value, ApiError> {
        self.client.execute(RequestSpec::get(project_path(project))).await
    }

    /// Replaces a project's settings.
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        project: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::put(project_path(project)).json(body)?)
            .await
    }

    /// Deletes a project. Harbor refuses while it still holds repositories.
    pub async fn delete(&self, project: &str) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(project_path(project)))
            .await
    }

    /// Reports whether the project can be deleted, with the reason if not.
    pub async fn deletable(&self, project: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("{}/_deletable", project_path(project))))
            .await
    }

    /// Returns repository, chart and quota counts for a project.
    pub async fn summary(&self, project: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("{}/summary", project_path(project))))
            .await
    }

    /// Returns the scanner bound to the project.
    pub async fn scanner(&self, project: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("{}/scanner", project_path(project))))
            .await
    }

    /// Binds a scanner to the project, body `{"uuid": "<scanner uuid>"}`.
    pub async fn set_scanner<B: Serialize + ?Sized>(
        &self,
        project: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(format!("{}/scanner", project_path(project))).json(body)?)
            .await
    }

    /// Lists scanners that may be bound to the project.
    pub async fn scanner_candidates(
        &self,
        project: &str,
        params: &ListParams,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get(format!("{}/scanner/candidates", project_path(project)))
                    .query(params.to_query()),
            )
            .await
    }
}
