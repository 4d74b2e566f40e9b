//
//  harbor-cli
//  api/resources/ldap.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! LDAP connectivity checks, searches and user import.

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::client::HarborClient;
use crate::api::common::ApiError;
use crate::api::request::RequestSpec;

#[derive(Debug, Clone, Copy)]
pub struct Ldap<'a> {
    client: &'a HarborClient,
}

impl<'a> Ldap<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    /// Tests an LDAP configuration; an empty object tests the saved one.
    pub async fn ping<B: Serialize + ?Sized>(&self, settings: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/ldap/ping").json(settings)?)
            .await
    }

    pub async fn search_users(&self, username: Option<&str>) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/ldap/users/search").query_param_opt("username", username))
            .await
    }

    /// Imports LDAP users by uid.
    pub async fn import_users(&self, uids: &[&str]) -> Result<(), ApiError> {
        self.client
            .execute_unit(
                RequestSpec::post("/ldap/users/import").json(&json!({ "ldap_uid_list": uids }))?,
            )
            .await
    }

    pub async fn search_groups(
        &self,
        groupname: Option<&str>,
        groupdn: Option<&str>,
    ) -> Result<Value, ApiError> {
        self.client
            .execute(
                RequestSpec::get("/ldap/groups/search")
                    .query_param_opt("groupname", groupname)
                    .query_param_opt("groupdn", groupdn),
            )
            .await
    }
}
