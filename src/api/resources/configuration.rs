//
//  harbor-cli
//  api/resources/configuration.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::Serialize;
use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::ApiError;
use crate::api::request::RequestSpec;

/// System configuration (auth mode, email, project creation restriction, ...).
#[derive(Debug, Clone, Copy)]
pub struct Configuration<'a> {
    client: &'a HarborClient,
}

impl<'a> Configuration<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<Value, ApiError> {
        self.client.execute(RequestSpec::get("/configurations")).await
    }

    /// Updates the keys present in `settings`; others are left unchanged.
    pub async fn update<B: Serialize + ?Sized>(&self, settings: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put("/configurations").json(settings)?)
            .await
    }
}
