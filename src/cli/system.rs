//
//  harbor-cli
//  cli/system.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! System commands
//!
//! Read-only views of the Harbor instance: version and auth mode, component
//! health, storage and global counts, plus the global name search.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::output::{print_header, Column, OutputFormat};

use super::GlobalOptions;

const INFO_FIELDS: &[Column] = &[
    Column::new("Version", "harbor_version"),
    Column::new("Auth mode", "auth_mode"),
    Column::new("Registry URL", "registry_url"),
    Column::new("External URL", "external_url"),
    Column::new("Project creation", "project_creation_restriction"),
    Column::new("Self registration", "self_registration"),
    Column::new("Read only", "read_only"),
];

const COMPONENT_COLUMNS: &[Column] = &[
    Column::new("COMPONENT", "name"),
    Column::status("STATUS", "status"),
    Column::new("ERROR", "error"),
];

const STATS_FIELDS: &[Column] = &[
    Column::new("Projects", "total_project_count"),
    Column::new("Public projects", "public_project_count"),
    Column::new("Private projects", "private_project_count"),
    Column::new("Repositories", "total_repo_count"),
    Column::new("Public repositories", "public_repo_count"),
    Column::new("Private repositories", "private_repo_count"),
    Column::size("Storage", "total_storage_consumption"),
];

const STORAGE_COLUMNS: &[Column] = &[
    Column::size("TOTAL", "total"),
    Column::size("FREE", "free"),
];

const SEARCH_PROJECT_COLUMNS: &[Column] = &[
    Column::new("PROJECT", "name"),
    Column::new("REPOS", "repo_count"),
];

const SEARCH_REPO_COLUMNS: &[Column] = &[
    Column::new("REPOSITORY", "repository_name"),
    Column::new("ARTIFACTS", "artifact_count"),
    Column::new("PULLS", "pull_count"),
];

/// System information, health and search
#[derive(Args, Debug)]
pub struct SystemCommand {
    #[command(subcommand)]
    pub command: SystemSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SystemSubcommand {
    /// Show version and configuration summary
    Info,

    /// Show component health
    Health,

    /// Show project, repository and storage counts
    Stats,

    /// Show registry storage capacity
    Volumes,

    /// Search projects and repositories by name
    Search(SearchArgs),

    /// Check that the API answers
    Ping,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Name fragment to search for
    pub query: String,
}

impl SystemCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, output) = global.session()?;
        let system = client.system();

        match &self.command {
            SystemSubcommand::Info => {
                let info = system.info().await?;
                output.write_record(&info, INFO_FIELDS)
            }
            SystemSubcommand::Health => {
                let health = system.health().await?;
                if output.format() == OutputFormat::Json {
                    return output.write_raw(&health);
                }
                let overall = Column::status("Overall", "status");
                println!("Overall: {}", overall.render(&health, output.color_enabled()));
                output.write_list(
                    health.get("components").unwrap_or(&Value::Null),
                    COMPONENT_COLUMNS,
                )
            }
            SystemSubcommand::Stats => {
                let stats = system.statistics().await?;
                output.write_record(&stats, STATS_FIELDS)
            }
            SystemSubcommand::Volumes => {
                let volumes = system.volumes().await?;
                if output.format() == OutputFormat::Json {
                    return output.write_raw(&volumes);
                }
                output.write_list(
                    volumes.get("storage").unwrap_or(&Value::Null),
                    STORAGE_COLUMNS,
                )
            }
            SystemSubcommand::Search(args) => {
                let results = system.search(&args.query).await?;
                if output.format() == OutputFormat::Json {
                    return output.write_raw(&results);
                }
                print_header("Projects");
                output.write_list(
                    results.get("project").unwrap_or(&Value::Null),
                    SEARCH_PROJECT_COLUMNS,
                )?;
                println!();
                print_header("Repositories");
                output.write_list(
                    results.get("repository").unwrap_or(&Value::Null),
                    SEARCH_REPO_COLUMNS,
                )
            }
            SystemSubcommand::Ping => {
                let pong = system.ping().await?;
                output.write_success(pong.trim());
                Ok(())
            }
        }
    }
}
