//
//  harbor-cli
//  api/resources/immutable_tag_rules.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Immutable tag rules: tags matching a rule can be neither overwritten nor deleted.

use serde::Serialize;
use serde_json::Value;

use super::project_path;
use crate::api::client::HarborClient;
use crate::api::common::{ApiError, Pagination};
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, Copy)]
pub struct ImmutableTagRules<'a> {
    client: &'a HarborClient,
}

impl<'a> ImmutableTagRules<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    fn rules_path(project: &str) -> String {
        format!("{}/immutabletagrules", project_path(project))
    }

    pub async fn list(&self, project: &str, pagination: &Pagination) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(Self::rules_path(project)).query(pagination.to_query()))
            .await
    }

    pub async fn create<B: Serialize + ?Sized>(
        &self,
        project: &str,
        rule: &B,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post(Self::rules_path(project)).json(rule)?)
            .await
    }

    /// Replaces a rule. Setting `"disabled": true` in the body pauses it.
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        project: &str,
        rule_id: i64,
        rule: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::put(format!("{}/{}", Self::rules_path(project), rule_id)).json(rule)?,
            )
            .await
    }

    pub async fn delete(&self, project: &str, rule_id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(format!(
                "{}/{}",
                Self::rules_path(project),
                rule_id
            )))
            .await
    }
}
