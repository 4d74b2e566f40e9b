//
//  harbor-cli
//  api/resources/artifacts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Artifact Operations
//!
//! An artifact is addressed by project, repository and a reference, which is
//! either a digest (`sha256:...`) or a tag name.
//!
//! # Example
//!
//! ```rust,no_run
//! use harbor_cli::api::{ClientConfig, HarborClient};
//! use harbor_cli::api::resources::{ArtifactDetail, ListArtifactsParams};
//!
//! # async fn example() -> Result<(), harbor_cli::api::ApiError> {
//! let client = HarborClient::new(ClientConfig::new("admin", "Harbor12345"))?;
//! let params = ListArtifactsParams {
//!     detail: ArtifactDetail::default().with_tag(true).with_scan_overview(true),
//!     ..Default::default()
//! };
//! let artifacts = client.artifacts().list("library", "nginx", &params).await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::Value;

use super::{artifact_path, repository_path};
use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams, QueryParams};
use crate::api::request::RequestSpec;

/// Extra data Harbor can embed in artifact responses.
///
/// Unset flags are not sent, leaving Harbor's own defaults in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtifactDetail {
    pub with_tag: Option<bool>,
    pub with_label: Option<bool>,
    pub with_scan_overview: Option<bool>,
    pub with_signature: Option<bool>,
    pub with_immutable_status: Option<bool>,
    pub with_accessory: Option<bool>,
}

impl ArtifactDetail {
    pub fn with_tag(mut self, value: bool) -> Self {
        self.with_tag = Some(value);
        self
    }

    pub fn with_label(mut self, value: bool) -> Self {
        self.with_label = Some(value);
        self
    }

    pub fn with_scan_overview(mut self, value: bool) -> Self {
        self.with_scan_overview = Some(value);
        self
    }

    pub fn with_signature(mut self, value: bool) -> Self {
        self.with_signature = Some(value);
        self
    }

    pub fn with_immutable_status(mut self, value: bool) -> Self {
        self.with_immutable_status = Some(value);
        self
    }

    pub fn with_accessory(mut self, value: bool) -> Self {
        self.with_accessory = Some(value);
        self
    }

    /// Appends the set flags to `query`.
    pub fn apply(&self, query: &mut QueryParams) {
        query.push_opt("with_tag", self.with_tag);
        query.push_opt("with_label", self.with_label);
        query.push_opt("with_scan_overview", self.with_scan_overview);
        query.push_opt("with_signature", self.with_signature);
        query.push_opt("with_immutable_status", self.with_immutable_status);
        query.push_opt("with_accessory", self.with_accessory);
    }
}

/// Options for [`Artifacts::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArtifactsParams {
    pub list: ListParams,
    pub detail: ArtifactDetail,
}

impl ListArtifactsParams {
    pub fn to_query(&self) -> QueryParams {
        let mut query = self.list.to_query();
        self.detail.apply(&mut query);
        query
    }
}

impl From<ListParams> for ListArtifactsParams {
    fn from(list: ListParams) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Handle for the artifact endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Artifacts<'a> {
    client: &'a HarborClient,
}

impl<'a> Artifacts<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Lists artifacts in a repository.
    pub async fn list(
        &self,
        project: &str,
        repository: &str,
        params: &ListArtifactsParams,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get(format!("{}/artifacts", repository_path(project, repository)))
                    .query(params.to_query()),
            )
            .await
    }

    /// Fetches one artifact by digest or tag.
    pub async fn get(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
        detail: &ArtifactDetail,
    ) -> Result<Value, ApiError> {
        let mut query = QueryParams::new();
        detail.apply(&mut query);
        self.client
            .execute(RequestSpec::get(artifact_path(project, repository, reference)).query(query))
            .await
    }

    pub async fn delete(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(artifact_path(project, repository, reference)))
            .await
    }

    /// Copies an artifact into this repository.
    ///
    /// `from` names the source as `project/repository:tag` or
    /// `project/repository@digest`.
    pub async fn copy(&self, project: &str, repository: &str, from: &str) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::post(format!("{}/artifacts", repository_path(project, repository)))
                    .query_param("from", from),
            )
            .await
    }

    /// Attaches an existing label, body `{"id": <label id>}`.
    pub async fn add_label<B: Serialize + ?Sized>(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
        label: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::post(format!(
                    "{}/labels",
                    artifact_path(project, repository, reference)
                ))
                .json(label)?,
            )
            .await
    }

    pub async fn remove_label(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
        label_id: i64,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(format!(
                "{}/labels/{}",
                artifact_path(project, repository, reference),
                label_id
            )))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_artifacts_query() {
        let params = ListArtifactsParams {
            detail: ArtifactDetail::default().with_tag(true).with_label(false),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().to_query_string(),
            "page=1&page_size=10&with_tag=true&with_label=false"
        );
    }

    #[test]
    fn test_detail_empty_by_default() {
        let mut query = QueryParams::new();
        ArtifactDetail::default().apply(&mut query);
        assert!(query.is_empty());
    }
}
