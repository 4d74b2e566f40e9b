//
//  harbor-cli
//  api/resources/garbage_collection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Garbage Collection
//!
//! Garbage collection reclaims blob storage no longer referenced by any
//! artifact. Every call here is tagged with an `X-Request-Id` so runs can be
//! correlated with Harbor's core and jobservice logs.
//!
//! # Example
//!
//! ```rust,no_run
//! use harbor_cli::api::{ClientConfig, HarborClient};
//! use harbor_cli::api::common::ListParams;
//!
//! # async fn example() -> Result<(), harbor_cli::api::ApiError> {
//! let client = HarborClient::new(ClientConfig::new("admin", "Harbor12345"))?;
//! let gc = client.garbage_collection();
//! let history = gc.history(&ListParams::default().sort("-creation_time")).await?;
//! let log = gc.log(12).await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams};
use crate::api::request::RequestSpec;

/// Handle for the garbage collection endpoints.
#[derive(Debug, Clone, Copy)]
pub struct GarbageCollection<'a> {
    client: &'a HarborClient,
}

impl<'a> GarbageCollection<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Lists past and running garbage collection jobs.
    pub async fn history(&self, params: &ListParams) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get("/system/gc")
                    .query(params.to_query())
                    .with_request_id(),
            )
            .await
    }

    /// Returns one garbage collection job.
    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/system/gc/{id}")).with_request_id())
            .await
    }

    /// Returns the plain-text log of a job.
    pub async fn log(&self, id: i64) -> Result<String, ApiError> {
        self.client
            .execute_text(RequestSpec::get(format!("/system/gc/{id}/log")).with_request_id())
            .await
    }

    /// Stops a running job.
    pub async fn stop(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(format!("/system/gc/{id}")).with_request_id())
            .await
    }

    /// Returns the schedule and parameters of periodic runs.
    pub async fn schedule(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/system/gc/schedule").with_request_id())
            .await
    }

    /// Creates the schedule.
    ///
    /// The body is a `Schedule`, e.g.
    /// `{"schedule": {"type": "Weekly"}, "parameters": {"delete_untagged": true}}`.
    /// A `"Manual"` schedule type triggers a single run immediately.
    pub async fn create_schedule<B: Serialize + ?Sized>(&self, schedule: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::post("/system/gc/schedule")
                    .json(schedule)?
                    .with_request_id(),
            )
            .await
    }

    pub async fn update_schedule<B: Serialize + ?Sized>(&self, schedule: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::put("/system/gc/schedule")
                    .json(schedule)?
                    .with_request_id(),
            )
            .await
    }
}
