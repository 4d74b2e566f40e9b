//
//  harbor-cli
//  api/resources/quotas.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Storage quotas attached to projects.

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::client::HarborClient;
use crate::api::common::{ApiError, Pagination, QueryParams};
use crate::api::request::RequestSpec;

/// Filters for [`Quotas::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuotasParams {
    pub pagination: Pagination,
    /// Reference type, `project` for project quotas
    pub reference: Option<String>,
    pub reference_id: Option<String>,
    pub sort: Option<String>,
}

impl ListQuotasParams {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("reference", self.reference.as_deref());
        query.push_opt("reference_id", self.reference_id.as_deref());
        query.push_opt("sort", self.sort.as_deref());
        self.pagination.apply(&mut query);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Quotas<'a> {
    client: &'a HarborClient,
}

impl<'a> Quotas<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ListQuotasParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/quotas").query(params.to_query()))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/quotas/{id}")))
            .await
    }

    /// Sets the hard limits, e.g. `{"storage": 10737418240}`; `-1` means unlimited.
    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, hard: &B) -> Result<(), ApiError> {
        let hard = serde_json::to_value(hard).map_err(ApiError::Encode)?;
        self.client
            .execute_unit(RequestSpec::put(format!("/quotas/{id}")).json(&json!({ "hard": hard }))?)
            .await
    }
}
