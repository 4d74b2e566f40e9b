//
//  harbor-cli
//  api/resources/scans.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Vulnerability and SBOM scans of single artifacts, plus scan-all metrics.

use serde::Serialize;
use serde_json::Value;

use super::artifact_path;
use crate::api::client::HarborClient;
use crate::api::common::{encode_segment, ApiError};
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, Copy)]
pub struct Scans<'a> {
    client: &'a HarborClient,
}

impl<'a> Scans<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Starts a scan. The body selects the scan type, e.g.
    /// `{"scan_type": "vulnerability"}`.
    pub async fn scan<B: Serialize + ?Sized>(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
        scan_type: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::post(format!("{}/scan", artifact_path(project, repository, reference)))
                    .json(scan_type)?,
            )
            .await
    }

    /// Stops a running scan of the given type.
    pub async fn stop<B: Serialize + ?Sized>(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
        scan_type: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::post(format!(
                    "{}/scan/stop",
                    artifact_path(project, repository, reference)
                ))
                .json(scan_type)?,
            )
            .await
    }

    /// Returns the plain-text log of a scan report.
    pub async fn report_log(
        &self,
        project: &str,
        repository: &str,
        reference: &str,
        report_id: &str,
    ) -> Result<String, ApiError> {
        self.client
            .execute_text(RequestSpec::get(format!(
                "{}/scan/{}/log",
                artifact_path(project, repository, reference),
                encode_segment(report_id)
            )))
            .await
    }

    /// Metrics of the latest scan-all run.
    pub async fn scan_all_metrics(&self) -> Result<Value, ApiError> {
        self.client.execute(RequestSpec::get("/scans/all/metrics")).await
    }

    /// Metrics of the latest scheduled scan-all run.
    pub async fn schedule_metrics(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/scans/schedule/metrics"))
            .await
    }
}
