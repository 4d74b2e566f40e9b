//
//  harbor-cli
//  api/resources/permissions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::ApiError;
use crate::api::request::RequestSpec;

/// The permission catalogue used when creating robot accounts.
#[derive(Debug, Clone, Copy)]
pub struct Permissions<'a> {
    client: &'a HarborClient,
}

impl<'a> Permissions<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Returns the system and project level permissions.
    pub async fn get(&self) -> Result<Value, ApiError> {
        self.client.execute(RequestSpec::get("/permissions")).await
    }
}
