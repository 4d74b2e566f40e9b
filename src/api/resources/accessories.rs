//
//  harbor-cli
//  api/resources/accessories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Artifact accessories (signatures, SBOMs and other referrers).

use serde_json::Value;

use super::artifact_path;
use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams};
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, Copy)]
pub struct Accessories<'a> {
    client: &'a HarborClient,
}

impl<'a> Accessories<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Lists the accessories attached to an artifact.
    pub async fn list(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
        params: &ListParams,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get(format!(
                    "{}/accessories",
                    artifact_path(project, repository, reference)
                ))
                .query(params.to_query()),
            )
            .await
    }
}
