//
//  harbor-cli
//  api/resources/replication.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Replication Operations
//!
//! Replication policies push to or pull from a remote registry (see
//! [`Registries`](super::Registries)). Running a policy creates an execution;
//! each copied resource becomes a task with its own log.
//!
//! # Endpoints
//!
//! | Method | HTTP | Path |
//! |--------|------|------|
//! | [`Replication::list_policies`] | GET | `/replication/policies` |
//! | [`Replication::create_policy`] | POST | `/replication/policies` |
//! | [`Replication::get_policy`] | GET | `/replication/policies/{id}` |
//! | [`Replication::update_policy`] | PUT | `/replication/policies/{id}` |
//! | [`Replication::delete_policy`] | DELETE | `/replication/policies/{id}` |
//! | [`Replication::list_executions`] | GET | `/replication/executions` |
//! | [`Replication::start`] | POST | `/replication/executions` |
//! | [`Replication::get_execution`] | GET | `/replication/executions/{id}` |
//! | [`Replication::stop`] | PUT | `/replication/executions/{id}` |
//! | [`Replication::list_tasks`] | GET | `/replication/executions/{id}/tasks` |
//! | [`Replication::task_log`] | GET | `/replication/executions/{id}/tasks/{task}/log` |

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams, Pagination, QueryParams};
use crate::api::request::RequestSpec;

/// Filters for [`Replication::list_policies`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPoliciesParams {
    pub list: ListParams,
    pub name: Option<String>,
}

impl ListPoliciesParams {
    pub fn to_query(&self) -> QueryParams {
        let mut query = self.list.to_query();
        query.push_opt("name", self.name.as_deref());
        query
    }
}

/// Filters for [`Replication::list_executions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListExecutionsParams {
    pub pagination: Pagination,
    pub policy_id: Option<i64>,
    /// `InProgress`, `Succeed`, `Failed` or `Stopped`
    pub status: Option<String>,
    /// `manual`, `scheduled` or `event_based`
    pub trigger: Option<String>,
    pub sort: Option<String>,
}

impl ListExecutionsParams {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("policy_id", self.policy_id);
        query.push_opt("status", self.status.as_deref());
        query.push_opt("trigger", self.trigger.as_deref());
        query.push_opt("sort", self.sort.as_deref());
        self.pagination.apply(&mut query);
        query
    }
}

/// Filters for [`Replication::list_tasks`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksParams {
    pub pagination: Pagination,
    pub status: Option<String>,
    /// `image` or `chart`
    pub resource_type: Option<String>,
    pub sort: Option<String>,
}

impl ListTasksParams {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("status", self.status.as_deref());
        query.push_opt("resource_type", self.resource_type.as_deref());
        query.push_opt("sort", self.sort.as_deref());
        self.pagination.apply(&mut query);
        query
    }
}

/// Handle for the replication endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Replication<'a> {
    client: &'a HarborClient,
}

impl<'a> Replication<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    pub async fn list_policies(&self, params: &ListPoliciesParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/replication/policies").query(params.to_query()))
            .await
    }

    pub async fn create_policy<B: Serialize + ?Sized>(&self, policy: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/replication/policies").json(policy)?)
            .await
    }

    pub async fn get_policy(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/replication/policies/{id}")))
            .await
    }

    pub async fn update_policy<B: Serialize + ?Sized>(
        &self,
        id: i64,
        policy: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(format!("/replication/policies/{id}")).json(policy)?)
            .await
    }

    pub async fn delete_policy(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(format!("/replication/policies/{id}")))
            .await
    }

    pub async fn list_executions(&self, params: &ListExecutionsParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/replication/executions").query(params.to_query()))
            .await
    }

    /// Runs a policy manually, body `{"policy_id": <id>}`.
    pub async fn start<B: Serialize + ?Sized>(&self, execution: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/replication/executions").json(execution)?)
            .await
    }

    pub async fn get_execution(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/replication/executions/{id}")))
            .await
    }

    /// Stops a running execution.
    pub async fn stop(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::put(format!("/replication/executions/{id}"))
                    .json(&json!({ "action": "stop" }))?,
            )
            .await
    }

    pub async fn list_tasks(&self, id: i64, params: &ListTasksParams) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get(format!("/replication/executions/{id}/tasks"))
                    .query(params.to_query()),
            )
            .await
    }

    pub async fn task_log(&self, id: i64, task_id: i64) -> Result<String, ApiError> {
        self.client
            .execute_text(RequestSpec::get(format!(
                "/replication/executions/{id}/tasks/{task_id}/log"
            )))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_filters_come_before_paging() {
        let params = ListExecutionsParams {
            policy_id: Some(3),
            status: Some("Failed".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().to_query_string(),
            "policy_id=3&status=Failed&page=1&page_size=10"
        );
    }

    #[test]
    fn test_task_filters() {
        let params = ListTasksParams {
            resource_type: Some("image".to_string()),
            pagination: Pagination::new(2, 5),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().to_query_string(),
            "resource_type=image&page=2&page_size=5"
        );
    }
}
