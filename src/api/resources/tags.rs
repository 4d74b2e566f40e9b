//
//  harbor-cli
//  api/resources/tags.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tag Operations
//!
//! Tags hang off an artifact: creating a tag points a new name at an existing
//! digest, and deleting one leaves the artifact in place.

use serde::Serialize;
use serde_json::Value;

use super::artifact_path;
use crate::api::client::HarborClient;
use crate::api::common::{encode_segment, ApiError, ListParams, QueryParams};
use crate::api::request::RequestSpec;

/// Options for [`Tags::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTagsParams {
    pub list: ListParams,
    pub with_immutable_status: Option<bool>,
}

impl ListTagsParams {
    pub fn to_query(&self) -> QueryParams {
        let mut query = self.list.to_query();
        query.push_opt("with_immutable_status", self.with_immutable_status);
        query
    }
}

/// Handle for the tag endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Tags<'a> {
    client: &'a HarborClient,
}

impl<'a> Tags<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Lists the tags of an artifact.
    pub async fn list(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
        params: &ListTagsParams,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get(format!("{}/tags", artifact_path(project, repository, reference)))
                    .query(params.to_query()),
            )
            .await
    }

    /// Creates a tag, body `{"name": "v1.2.3"}`.
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
        tag: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::post(format!("{}/tags", artifact_path(project, repository, reference)))
                    .json(tag)?,
            )
            .await
    }

    pub async fn delete(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
        tag: &str,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(format!(
                "{}/tags/{}",
                artifact_path(project, repository, reference),
                encode_segment(tag)
            )))
            .await
    }
}
