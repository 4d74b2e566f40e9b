//
//  harbor-cli
//  api/resources/audit_logs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams};
use crate::api::request::RequestSpec;

/// Audit log entries visible to the caller.
#[derive(Debug, Clone, Copy)]
pub struct AuditLogs<'a> {
    client: &'a HarborClient,
}

impl<'a> AuditLogs<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Lists entries. `q` accepts e.g. `operation=delete,resource_type=artifact`.
    pub async fn list(&self, params: &ListParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/audit-logs").query(params.to_query()))
            .await
    }
}
