//
//  harbor-cli
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Harbor Resource Groups
//!
//! One handle type per area of the Harbor `/api/v2.0` surface. Each handle
//! borrows a [`HarborClient`] and exposes one async method per endpoint; the
//! method builds the path, the query and the body and hands them to
//! [`HarborClient::execute`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use harbor_cli::api::{ClientConfig, HarborClient};
//! use harbor_cli::api::common::ListParams;
//!
//! # async fn example() -> Result<(), harbor_cli::api::ApiError> {
//! let client = HarborClient::new(ClientConfig::new("admin", "Harbor12345"))?;
//!
//! let repos = client
//!     .repositories()
//!     .list("library", &ListParams::default().page_size(50))
//!     .await?;
//! let artifact = client
//!     .artifacts()
//!     .get("library", "nginx", "latest", &Default::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Path Encoding
//!
//! Project names, references and ids are percent-encoded once; repository
//! names are encoded twice (see [`encode_repository`]).

use super::client::HarborClient;
use super::common::{encode_repository, encode_segment};

pub mod accessories;
pub mod additions;
pub mod artifacts;
pub mod audit_logs;
pub mod configuration;
pub mod garbage_collection;
pub mod icons;
pub mod immutable_tag_rules;
pub mod job_service;
pub mod labels;
pub mod ldap;
pub mod p2p_preheat;
pub mod permissions;
pub mod projects;
pub mod purge_audit;
pub mod quotas;
pub mod registries;
pub mod replication;
pub mod repositories;
pub mod retention;
pub mod robots;
pub mod scan_data_export;
pub mod scanners;
pub mod scans;
pub mod security;
pub mod system;
pub mod tags;
pub mod user_groups;
pub mod users;
pub mod webhooks;

pub use accessories::Accessories;
pub use additions::Additions;
pub use artifacts::{ArtifactDetail, Artifacts, ListArtifactsParams};
pub use audit_logs::AuditLogs;
pub use configuration::Configuration;
pub use garbage_collection::GarbageCollection;
pub use icons::Icons;
pub use immutable_tag_rules::ImmutableTagRules;
pub use job_service::JobService;
pub use labels::{Labels, ListLabelsParams};
pub use ldap::Ldap;
pub use p2p_preheat::P2pPreheat;
pub use permissions::Permissions;
pub use projects::{ListProjectsParams, Projects};
pub use purge_audit::PurgeAudit;
pub use quotas::{ListQuotasParams, Quotas};
pub use registries::{ListRegistriesParams, Registries};
pub use replication::{ListExecutionsParams, ListPoliciesParams, ListTasksParams, Replication};
pub use repositories::Repositories;
pub use retention::Retention;
pub use robots::Robots;
pub use scan_data_export::ScanDataExport;
pub use scanners::Scanners;
pub use scans::Scans;
pub use security::Security;
pub use system::System;
pub use tags::{ListTagsParams, Tags};
pub use user_groups::{ListUserGroupsParams, UserGroups};
pub use users::Users;
pub use webhooks::Webhooks;

/// `/projects/{project}`
pub(crate) fn project_path(project: &str) -> String {
    format!("/projects/{}", encode_segment(project))
}

/// `/projects/{project}/repositories/{repository}`
pub(crate) fn repository_path(project: &str, repository: &str) -> String {
    format!(
        "{}/repositories/{}",
        project_path(project),
        encode_repository(repository)
    )
}

/// `/projects/{project}/repositories/{repository}/artifacts/{reference}`
pub(crate) fn artifact_path(project: &str, repository: &str, reference: &str) -> String {
    format!(
        "{}/artifacts/{}",
        repository_path(project, repository),
        encode_segment(reference)
    )
}

macro_rules! accessor {
    ($(#[$meta:meta])* $name:ident => $ty:ident) => {
        $(#[$meta])*
        pub fn $name(&self) -> $ty<'_> {
            $ty::new(self)
        }
    };
}

impl HarborClient {
    accessor!(
        /// Projects, their summaries and scanner bindings.
        projects => Projects
    );
    accessor!(
        /// Repositories within projects.
        repositories => Repositories
    );
    accessor!(
        /// Artifacts (images, charts, bundles) and their labels.
        artifacts => Artifacts
    );
    accessor!(tags => Tags);
    accessor!(accessories => Accessories);
    accessor!(
        /// Build history, vulnerabilities and other artifact additions.
        additions => Additions
    );
    accessor!(scans => Scans);
    accessor!(icons => Icons);
    accessor!(labels => Labels);
    accessor!(users => Users);
    accessor!(user_groups => UserGroups);
    accessor!(
        /// Robot accounts.
        robots => Robots
    );
    accessor!(webhooks => Webhooks);
    accessor!(immutable_tag_rules => ImmutableTagRules);
    accessor!(
        /// Vulnerability scanner registrations.
        scanners => Scanners
    );
    accessor!(registries => Registries);
    accessor!(replication => Replication);
    accessor!(
        /// Tag retention policies and executions.
        retention => Retention
    );
    accessor!(quotas => Quotas);
    accessor!(garbage_collection => GarbageCollection);
    accessor!(purge_audit => PurgeAudit);
    accessor!(
        /// CVE allowlist and scan-all schedule.
        security => Security
    );
    accessor!(
        /// System information, health, statistics and search.
        system => System
    );
    accessor!(configuration => Configuration);
    accessor!(audit_logs => AuditLogs);
    accessor!(ldap => Ldap);
    accessor!(job_service => JobService);
    accessor!(p2p_preheat => P2pPreheat);
    accessor!(permissions => Permissions);
    accessor!(scan_data_export => ScanDataExport);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_paths() {
        assert_eq!(project_path("library"), "/projects/library");
        assert_eq!(
            repository_path("library", "team/nginx"),
            "/projects/library/repositories/team%252Fnginx"
        );
        assert_eq!(
            artifact_path("library", "nginx", "sha256:abc"),
            "/projects/library/repositories/nginx/artifacts/sha256%3Aabc"
        );
    }
}
