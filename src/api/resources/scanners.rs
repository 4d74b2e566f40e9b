//
//  harbor-cli
//  api/resources/scanners.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Scanner Registrations
//!
//! Pluggable vulnerability scanners (Trivy and others) are registered by
//! endpoint URL and addressed by their registration uuid.

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::client::HarborClient;
use crate::api::common::{encode_segment, ApiError, ListParams};
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, Copy)]
pub struct Scanners<'a> {
    client: &'a HarborClient,
}

impl<'a> Scanners<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    fn scanner_path(registration_id: &str) -> String {
        format!("/scanners/{}", encode_segment(registration_id))
    }

    pub async fn list(&self, params: &ListParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/scanners").query(params.to_query()))
            .await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, registration: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/scanners").json(registration)?)
            .await
    }

    /// Checks that a scanner endpoint is reachable before registering it.
    pub async fn ping<B: Serialize + ?Sized>(&self, settings: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::post("/scanners/ping").json(settings)?)
            .await
    }

    pub async fn get(&self, registration_id: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(Self::scanner_path(registration_id)))
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        registration_id: &str,
        registration: &B,
    ) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(Self::scanner_path(registration_id)).json(registration)?)
            .await
    }

    pub async fn delete(&self, registration_id: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::delete(Self::scanner_path(registration_id)))
            .await
    }

    /// Makes the scanner the system default.
    pub async fn set_default(&self, registration_id: &str) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::patch(Self::scanner_path(registration_id))
                    .json(&json!({ "is_default": true }))?,
            )
            .await
    }

    /// Returns the adapter metadata reported by the scanner.
    pub async fn metadata(&self, registration_id: &str) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!(
                "{}/metadata",
                Self::scanner_path(registration_id)
            )))
            .await
    }
}
