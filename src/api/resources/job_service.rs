//
//  harbor-cli
//  api/resources/job_service.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Jobservice dashboard: worker pools, queues and individual jobs.

use serde_json::{json, Value};

use crate::api::client::HarborClient;
use crate::api::common::{encode_segment, ApiError};
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, Copy)]
pub struct JobService<'a> {
    client: &'a HarborClient,
}

impl<'a> JobService<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    pub async fn pools(&self) -> Result<Value, ApiError> {
        self.client.execute(RequestSpec::get("/jobservice/pools")).await
    }

    /// Lists workers of a pool; `"all"` lists every worker.
    pub async fn pool_workers(&self, pool_id: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!(
                "/jobservice/pools/{}/workers",
                encode_segment(pool_id)
            )))
            .await
    }

    pub async fn queues(&self) -> Result<Value, ApiError> {
        self.client.execute(RequestSpec::get("/jobservice/queues")).await
    }

    pub async fn job_log(&self, job_id: &str) -> Result<String, ApiError> {
        self.client
            .execute_text(RequestSpec::get(format!(
                "/jobservice/jobs/{}/log",
                encode_segment(job_id)
            )))
            .await
    }

    /// Stops a running job; `"ALL"` stops every running job.
    pub async fn stop_job(&self, job_id: &str) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::put(format!("/jobservice/jobs/{}", encode_segment(job_id)))
                    .json(&json!({ "action": "stop" }))?,
            )
            .await
    }
}
