//
//  harbor-cli
//  api/resources/additions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Artifact additions
//!
//! Additions are derived documents Harbor stores next to an artifact:
//! `build_history`, `values.yaml`, `readme.md`, `dependencies` and the
//! vulnerability report. `build_history`, `dependencies` and the
//! vulnerability report are JSON; `readme.md` and `values.yaml` are text and
//! go through [`Additions::get_text`].

use serde_json::Value;

use super::artifact_path;
use crate::api::client::HarborClient;
use crate::api::common::{encode_segment, ApiError};
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, Copy)]
pub struct Additions<'a> {
    client: &'a HarborClient,
}

impl<'a> Additions<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Returns the vulnerability report of an artifact.
    pub async fn vulnerabilities(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
    ) -> Result<Value, ApiError> {
        self.get(project, repository, reference, "vulnerabilities").await
    }

    /// Returns a JSON addition such as `build_history` or `dependencies`.
    pub async fn get(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
        addition: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(addition_path(
                project, repository, reference, addition,
            )))
            .await
    }

    /// Returns a text addition (`readme.md` or `values.yaml`) verbatim.
    pub async fn get_text(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
        addition: &str,
    ) -> Result<String, ApiError> {
        self.client
            .execute_text(RequestSpec::get(addition_path(
                project, repository, reference, addition,
            )))
            .await
    }
}

fn addition_path(project: &str, repository: &str, reference: &str, addition: &str) -> String {
    format!(
        "{}/additions/{}",
        artifact_path(project, repository, reference),
        encode_segment(addition)
    )
}
