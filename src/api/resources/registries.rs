//
//  harbor-cli
//  api/resources/registries.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Remote registry endpoints used by replication and proxy-cache projects.

use serde::Serialize;
use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams, QueryParams};
use crate::api::request::RequestSpec;

/// Filters for [`Registries::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRegistriesParams {
    pub list: ListParams,
    pub name: Option<String>,
}

impl ListRegistriesParams {
    pub fn to_query(&self) -> QueryParams {
        let mut query = self.list.to_query();
        query.push_opt("name", self.name.as_deref());
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Registries<'a> {
    client: &'a HarborClient,
}

impl<'a> Registries<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ListRegistriesParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/registries").query(params.to_query()))
            .await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, registry: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/registries").json(registry)?)
            .await
    }

    /// Checks connectivity and credentials of a registry endpoint.
    pub async fn ping<B: Serialize + ?Sized>(&self, registry: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::post("/registries/ping").json(registry)?)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/registries/{id}")))
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, registry: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(format!("/registries/{id}")).json(registry)?)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(format!("/registries/{id}")))
            .await
    }

    /// Returns the supported resource filters and triggers of a registry.
    pub async fn info(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/registries/{id}/info")))
            .await
    }

    /// Lists the registry adapter types Harbor can replicate with.
    pub async fn adapters(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/replication/adapters"))
            .await
    }

    pub async fn adapter_infos(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/replication/adapterinfos"))
            .await
    }
}
