//
//  harbor-cli
//  api/resources/user_groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User groups backed by LDAP, HTTP or OIDC.

use serde::Serialize;
use serde_json::Value;

use crate::api::client::HarborClient;
use crate::api::common::{ApiError, Pagination, QueryParams};
use crate::api::request::RequestSpec;

/// Filters for [`UserGroups::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUserGroupsParams {
    pub pagination: Pagination,
    pub group_name: Option<String>,
    pub ldap_group_dn: Option<String>,
}

impl ListUserGroupsParams {
    pub fn to_query(&self) -> QueryParams {
        let mut query = self.pagination.to_query();
        query.push_opt("group_name", self.group_name.as_deref());
        query.push_opt("ldap_group_dn", self.ldap_group_dn.as_deref());
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UserGroups<'a> {
    client: &'a HarborClient,
}

impl<'a> UserGroups<'a> {
    pub fn new(client: &'a HarborClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: &ListUserGroupsParams) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get("/usergroups").query(params.to_query()))
            .await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, group: &B) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::post("/usergroups").json(group)?)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Value, ApiError> {
        self.client
            .execute(RequestSpec::get(format!("/usergroups/{id}")))
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, group: &B) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::put(format!("/usergroups/{id}")).json(group)?)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .execute_unit(RequestSpec::delete(format!("/usergroups/{id}")))
            .await
    }

    /// Searches groups by name.
    pub async fn search(&self, groupname: &str, pagination: &Pagination) -> Result<Value, ApiError> {
        let mut query = QueryParams::new();
        query.push("groupname", groupname);
        pagination.apply(&mut query);
        self.client
            .execute(RequestSpec::get("/usergroups/search").query(query))
            .await
    }
}
