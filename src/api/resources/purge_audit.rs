//
//  harbor-cli
//  api/resources/purge_audit.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Audit log purge jobs and their schedule.

use serde::Serialize;
use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams};
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, Copy)]
pub struct PurgeAudit<'a> {
    client: &'a HarborClient,
}

impl<'a> PurgeAudit<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    pub async fn history(&self, params: &ListParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/system/purgeaudit").query(params.to_query()))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/system/purgeaudit/{id}")))
            .await
    }

    pub async fn stop(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(format!("/system/purgeaudit/{id}")))
            .await
    }

    pub async fn log(&self, id: i64) -> Result<String, ApiError> {
        self.client
            .execute_text(RequestSpec::get(format!("/system/purgeaudit/{id}/log")))
            .await
    }

    pub async fn schedule(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/system/purgeaudit/schedule"))
            .await
    }

    /// Creates the schedule; `parameters.audit_retention_hour` controls what is kept.
    pub async fn create_schedule<B: Serialize + ?Sized>(&self, schedule: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::post("/system/purgeaudit/schedule").json(schedule)?)
            .await
    }

    pub async fn update_schedule<B: Serialize + ?Sized>(&self, schedule: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put("/system/purgeaudit/schedule").json(schedule)?)
            .await
    }
}
