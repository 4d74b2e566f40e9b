//
//  harbor-cli
//  api/resources/robots.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Robot Account Operations
//!
//! Robot accounts authenticate with `robot$<name>` and a generated secret.
//! The secret is only returned by [`Robots::create`] and
//! [`Robots::refresh_secret`].

use serde::Serialize;
use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::{ApiError, ListParams};
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, Copy)]
pub struct Robots<'a> {
    client: &'a HarborClient,
}

impl<'a> Robots<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/robots").query(params.to_query()))
            .await
    }

    /// Creates a robot account and returns its name and secret.
    pub async fn create<B: Serialize + ?Sized>(&self, robot: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/robots").json(robot)?)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/robots/{id}")))
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, robot: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(format!("/robots/{id}")).json(robot)?)
            .await
    }

    /// Rotates the secret. An empty `{"secret": ""}` body asks Harbor to
    /// generate one.
    pub async fn refresh_secret<B: Serialize + ?Sized>(
        &self,
        id: i64,
        body: &B,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::patch(format!("/robots/{id}")).json(body)?)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(format!("/robots/{id}")))
            .await
    }
}
