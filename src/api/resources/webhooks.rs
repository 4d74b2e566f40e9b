//
//  harbor-cli
//  api/resources/webhooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project Webhook Operations
//!
//! Webhook policies belong to a project. Each policy delivery is recorded as
//! an execution made of one task per target, and every task keeps a log.
//!
//! # Endpoints
//!
//! | Method | HTTP | Path (under `/projects/{project}`) |
//! |--------|------|------|
//! | [`Webhooks::list`] | GET | `/webhook/policies` |
//! | [`Webhooks::create`] | POST | `/webhook/policies` |
//! | [`Webhooks::get`] | GET | `/webhook/policies/{id}` |
//! | [`Webhooks::update`] | PUT | `/webhook/policies/{id}` |
//! | [`Webhooks::delete`] | DELETE | `/webhook/policies/{id}` |
//! | [`Webhooks::executions`] | GET | `/webhook/policies/{id}/executions` |
//! | [`Webhooks::tasks`] | GET | `.../executions/{execution}/tasks` |
//! | [`Webhooks::task_log`] | GET | `.../tasks/{task}/log` |
//! | [`Webhooks::last_trigger`] | GET | `/webhook/lasttrigger` |
//! | [`Webhooks::event_types`] | GET | `/webhook/events` |

use serde::Serialize;
use serde_json::Value;

use super::project_path;
use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams};
use crate::api::request::RequestSpec;

/// Handle for the webhook endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a HarborClient,
}

impl<'a> Webhooks<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    fn policies_path(project: &str) -> String {
        format!("{}/webhook/policies", project_path(project))
    }

    fn policy_path(project: &str, policy_id: i64) -> String {
        format!("{}/{}", Self::policies_path(project), policy_id)
    }

    pub async fn list(&self, project: &str, params: &ListParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(Self::policies_path(project)).query(params.to_query()))
            .await
    }

    /// Creates a webhook policy from a `WebhookPolicy` body.
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        project: &str,
        policy: &B,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post(Self::policies_path(project)).json(policy)?)
            .await
    }

    pub async fn get(&self, project: &str, policy_id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(Self::policy_path(project, policy_id)))
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        project: &str,
        policy_id: i64,
        policy: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(Self::policy_path(project, policy_id)).json(policy)?)
            .await
    }

    pub async fn delete(&self, project: &str, policy_id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(Self::policy_path(project, policy_id)))
            .await
    }

    /// Lists the deliveries of a policy.
    pub async fn executions(
        &self,
        project: &str,
        policy_id: i64,
        params: &ListParams,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get(format!("{}/executions", Self::policy_path(project, policy_id)))
                    .query(params.to_query()),
            )
            .await
    }

    /// Lists the per-target tasks of one delivery.
    pub async fn tasks(
        &self,
        project: &str,
        policy_id: i64,
        execution_id: i64,
        params: &ListParams,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get(format!(
                    "{}/executions/{}/tasks",
                    Self::policy_path(project, policy_id),
                    execution_id
                ))
                .query(params.to_query()),
            )
            .await
    }

    pub async fn task_log(
        &self,
        project: &str,
        policy_id: i64,
        execution_id: i64,
        task_id: i64,
    ) -> Result<String, ApiError> {
        self.client
            .execute_text(RequestSpec::get(format!(
                "{}/executions/{}/tasks/{}/log",
                Self::policy_path(project, policy_id),
                execution_id,
                task_id
            )))
            .await
    }

    /// Returns the last trigger time of each event type in the project.
    pub async fn last_trigger(&self, project: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!(
                "{}/webhook/lasttrigger",
                project_path(project)
            )))
            .await
    }

    /// Returns the supported event types and notify types.
    pub async fn event_types(&self, project: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("{}/webhook/events", project_path(project))))
            .await
    }
}
