//
//  harbor-cli
//  api/resources/retention.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tag Retention
//!
//! A retention policy is bound to one project and decides which artifacts
//! survive a run. Runs can be dry runs, in which case nothing is deleted.

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::client::HarborClient;
use crate::api::common::{ApiError, Pagination};
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, Copy)]
pub struct Retention<'a> {
    client: &'a HarborClient,
}

impl<'a> Retention<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Returns the rule templates and scope selectors Harbor supports.
    pub async fn metadata(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/retentions/metadatas"))
            .await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, policy: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/retentions").json(policy)?)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/retentions/{id}")))
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, policy: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(format!("/retentions/{id}")).json(policy)?)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(format!("/retentions/{id}")))
            .await
    }

    /// Runs the policy now.
    pub async fn trigger(&self, id: i64, dry_run: bool) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::post(format!("/retentions/{id}/executions"))
                    .json(&json!({ "dry_run": dry_run }))?,
            )
            .await
    }

    pub async fn executions(&self, id: i64, pagination: &Pagination) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get(format!("/retentions/{id}/executions"))
                    .query(pagination.to_query()),
            )
            .await
    }

    /// Stops a running execution.
    pub async fn stop(&self, id: i64, execution_id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::patch(format!("/retentions/{id}/executions/{execution_id}"))
                    .json(&json!({ "action": "stop" }))?,
            )
            .await
    }

    pub async fn tasks(
        &self,
        id: i64,
        execution_id: i64,
        pagination: &Pagination,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get(format!("/retentions/{id}/executions/{execution_id}/tasks"))
                    .query(pagination.to_query()),
            )
            .await
    }

    pub async fn task_log(
        &self,
        id: i64,
        execution_id: i64,
        task_id: i64,
    ) -> Result<String, ApiError> {
        self.client
            .execute_text(RequestSpec::get(format!(
                "/retentions/{id}/executions/{execution_id}/tasks/{task_id}/log"
            )))
            .await
    }
}
