//
//  harbor-cli
//  api/resources/scan_data_export.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CVE Export
//!
//! Exports vulnerability data of selected projects as CSV. An export runs as
//! an asynchronous job; poll [`ScanDataExport::execution`] until it reports
//! success, then fetch the file with [`ScanDataExport::download`].

use serde::Serialize;
use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::ApiError;
use crate::api::request::RequestSpec;

/// File format used when none is given to [`ScanDataExport::download`].
pub const DEFAULT_EXPORT_FORMAT: &str = "CSV";

#[derive(Debug, Clone, Copy)]
pub struct ScanDataExport<'a> {
    client: &'a HarborClient,
}

impl<'a> ScanDataExport<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Starts an export; the reply carries the execution `id`.
    pub async fn export<B: Serialize + ?Sized>(&self, criteria: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/export/cve").json(criteria)?)
            .await
    }

    pub async fn execution(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/export/cve/execution/{id}")))
            .await
    }

    pub async fn executions(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/export/cve/executions"))
            .await
    }

    /// Downloads the exported file as text.
    pub async fn download(&self, id: i64, format: Option<&str>) -> Result<String, ApiError> {
        self.client
            .execute_text(
                RequestSpec::get(format!("/export/cve/download/{id}"))
                    .query_param("format", format.unwrap_or(DEFAULT_EXPORT_FORMAT)),
            )
            .await
    }
}
