//
//  harbor-cli
//  api/resources/p2p_preheat.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! P2P Preheat
//!
//! Provider instances (Dragonfly, Kraken) are system level and addressed by
//! name; preheat policies belong to a project and are also addressed by name.

use serde::Serialize;
use serde_json::Value;

use super::project_path;
use crate::api::client::HarborClient;
use crate::api::common::{encode_segment, ApiError, ListParams, Pagination};
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, Copy)]
pub struct P2pPreheat<'a> {
    client: &'a HarborClient,
}

impl<'a> P2pPreheat<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    fn instance_path(name: &str) -> String {
        format!("/p2p/preheat/instances/{}", encode_segment(name))
    }

    fn policy_path(project: &str, name: &str) -> String {
        format!(
            "{}/preheat/policies/{}",
            project_path(project),
            encode_segment(name)
        )
    }

    pub async fn list_instances(&self, pagination: &Pagination) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/p2p/preheat/instances").query(pagination.to_query()))
            .await
    }

    pub async fn create_instance<B: Serialize + ?Sized>(&self, instance: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/p2p/preheat/instances").json(instance)?)
            .await
    }

    pub async fn get_instance(&self, name: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(Self::instance_path(name)))
            .await
    }

    pub async fn update_instance<B: Serialize + ?Sized>(
        &self,
        name: &str,
        instance: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(Self::instance_path(name)).json(instance)?)
            .await
    }

    pub async fn delete_instance(&self, name: &str) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(Self::instance_path(name)))
            .await
    }

    /// Lists the supported preheat providers.
    pub async fn list_providers(&self) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/p2p/preheat/providers"))
            .await
    }

    pub async fn list_policies(&self, project: &str, params: &ListParams) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get(format!("{}/preheat/policies", project_path(project)))
                    .query(params.to_query()),
            )
            .await
    }

    pub async fn create_policy<B: Serialize + ?Sized>(
        &self,
        project: &str,
        policy: &B,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::post(format!("{}/preheat/policies", project_path(project)))
                    .json(policy)?,
            )
            .await
    }

    pub async fn get_policy(&self, project: &str, name: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(Self::policy_path(project, name)))
            .await
    }

    pub async fn update_policy<B: Serialize + ?Sized>(
        &self,
        project: &str,
        name: &str,
        policy: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(Self::policy_path(project, name)).json(policy)?)
            .await
    }

    pub async fn delete_policy(&self, project: &str, name: &str) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(Self::policy_path(project, name)))
            .await
    }
}
