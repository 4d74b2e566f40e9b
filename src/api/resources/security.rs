//
//  harbor-cli
//  api/resources/security.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! System-wide CVE allowlist and the scan-all schedule.

use serde::Serialize;
use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::ApiError;
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, Copy)]
pub struct Security<'a> {
    client: &'a HarborClient,
}

impl<'a> Security<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    pub async fn cve_allowlist(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/system/CVEAllowlist"))
            .await
    }

    /// Replaces the allowlist, body `{"items": [{"cve_id": ..}], "expires_at": ..}`.
    pub async fn update_cve_allowlist<B: Serialize + ?Sized>(
        &self,
        allowlist: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put("/system/CVEAllowlist").json(allowlist)?)
            .await
    }

    pub async fn scan_all_schedule(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/system/scanAll/schedule"))
            .await
    }

    pub async fn create_scan_all_schedule<B: Serialize + ?Sized>(
        &self,
        schedule: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::post("/system/scanAll/schedule").json(schedule)?)
            .await
    }

    pub async fn update_scan_all_schedule<B: Serialize + ?Sized>(
        &self,
        schedule: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put("/system/scanAll/schedule").json(schedule)?)
            .await
    }

    /// Stops a running scan-all job.
    pub async fn stop_scan_all(&self) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::post("/system/scanAll/stop"))
            .await
    }
}
