//
//  harbor-cli
//  api/resources/labels.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Label Operations
//!
//! Labels are either global (`scope = "g"`, managed by administrators) or
//! project scoped (`scope = "p"` together with a `project_id`). Attaching a
//! label to an artifact is done through
//! [`Artifacts::add_label`](super::Artifacts::add_label).

use serde::Serialize;
use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams, QueryParams};
use crate::api::request::RequestSpec;

/// Filters for [`Labels::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLabelsParams {
    pub list: ListParams,
    pub name: Option<String>,
    /// `g` for global labels, `p` for project labels
    pub scope: Option<String>,
    pub project_id: Option<i64>,
}

impl ListLabelsParams {
    pub fn to_query(&self) -> QueryParams {
        let mut query = self.list.to_query();
        query.push_opt("name", self.name.as_deref());
        query.push_opt("scope", self.scope.as_deref());
        query.push_opt("project_id", self.project_id);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    client: &'a HarborClient,
}

impl<'a> Labels<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ListLabelsParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/labels").query(params.to_query()))
            .await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, label: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/labels").json(label)?)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/labels/{id}")))
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, label: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(format!("/labels/{id}")).json(label)?)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(format!("/labels/{id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_filters() {
        let params = ListLabelsParams {
            scope: Some("p".to_string()),
            project_id: Some(7),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().to_query_string(),
            "page=1&page_size=10&scope=p&project_id=7"
        );
    }
}
