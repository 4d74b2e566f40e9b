//
//  harbor-cli
//  api/resources/icons.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::{encode_segment, ApiError};
use crate::api::request::RequestSpec;

/// Artifact type icons, returned as `{"content_type": .., "content": <base64>}`.
#[derive(Debug, Clone, Copy)]
pub struct Icons<'a> {
    client: &'a HarborClient,
}

impl<'a> Icons<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, digest: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/icons/{}", encode_segment(digest))))
            .await
    }
}
