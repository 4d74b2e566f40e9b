//
//  harbor-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod artifact;
mod config;
mod gc;
mod project;
mod repo;
mod system;
mod tag;
mod user;

pub use api::ApiCommand;
pub use artifact::ArtifactCommand;
pub use config::ConfigCommand;
pub use gc::GcCommand;
pub use project::ProjectCommand;
pub use repo::RepoCommand;
pub use system::SystemCommand;
pub use tag::TagCommand;
pub use user::UserCommand;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::common::ListParams;
use crate::api::HarborClient;
use crate::config::{resolve_client_config, Config, ConnectionOverrides};
use crate::output::{OutputFormat, OutputWriter};

/// Harbor CLI - manage a Harbor container registry from the command line
#[derive(Parser, Debug)]
#[command(
    name = "harbor",
    version,
    about = "Work with a Harbor container registry from the command line",
    long_about = "harbor is a CLI for the Harbor registry management API (/api/v2.0).\n\n\
                  It brings projects, repositories, artifacts, users and system administration to your terminal.",
    propagate_version = true,
    after_help = "Use 'harbor <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
///
/// Connection values take precedence over the selected config profile.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Harbor API base URL, e.g. https://harbor.example.com/api/v2.0
    #[arg(long, global = true, env = "HARBOR_URL")]
    pub url: Option<String>,

    /// Username or robot account name
    #[arg(long, short = 'u', global = true, env = "HARBOR_USERNAME")]
    pub username: Option<String>,

    /// Password or robot secret
    #[arg(long, global = true, env = "HARBOR_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Config profile to use
    #[arg(long, short = 'P', global = true, env = "HARBOR_PROFILE")]
    pub profile: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "HARBOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Returns the config file path in effect.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from(&self.config_path()?)
    }

    /// Builds an API client from flags, environment and the config profile.
    pub fn client(&self, config: &Config) -> Result<HarborClient> {
        let overrides = ConnectionOverrides {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            profile: self.profile.clone(),
        };
        let client_config = resolve_client_config(&overrides, config)?;
        Ok(HarborClient::new(client_config)?)
    }

    /// Returns the output writer: `--json` wins over the configured format.
    pub fn output(&self, config: &Config) -> OutputWriter {
        let format = if self.json {
            OutputFormat::Json
        } else {
            config.core.output.parse().unwrap_or_default()
        };
        OutputWriter::new(format)
    }

    /// Loads the config and builds both the client and the output writer.
    pub fn session(&self) -> Result<(HarborClient, OutputWriter)> {
        let config = self.load_config()?;
        Ok((self.client(&config)?, self.output(&config)))
    }
}

/// Paging and search flags shared by list commands.
#[derive(clap::Args, Debug, Clone)]
pub struct ListFlags {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Items per page
    #[arg(long, short = 'L', default_value = "10")]
    pub limit: u32,

    /// Harbor search expression, e.g. name=~nginx
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Sort fields, e.g. -creation_time
    #[arg(long)]
    pub sort: Option<String>,
}

impl ListFlags {
    pub fn to_params(&self) -> ListParams {
        ListParams {
            query: self.query.clone(),
            sort: self.sort.clone(),
            ..ListParams::default()
        }
        .page(self.page)
        .page_size(self.limit)
    }
}

/// Splits `project/repository` into its parts at the first `/`.
///
/// The repository part may itself contain slashes.
pub(crate) fn split_repository(full: &str) -> Result<(&str, &str)> {
    match full.split_once('/') {
        Some((project, repository)) if !project.is_empty() && !repository.is_empty() => {
            Ok((project, repository))
        }
        _ => anyhow::bail!(
            "Invalid repository '{}'. Expected <project>/<repository>",
            full
        ),
    }
}

/// Splits `project/repository:tag` or `project/repository@digest`.
///
/// A reference without `:` or `@` defaults to `latest`.
pub(crate) fn split_reference(full: &str) -> Result<(&str, &str, &str)> {
    let (name, reference) = if let Some((name, digest)) = full.split_once('@') {
        (name, digest)
    } else {
        match full.rsplit_once(':') {
            Some((name, tag)) if !tag.contains('/') => (name, tag),
            _ => (full, "latest"),
        }
    };
    let (project, repository) = split_repository(name)?;
    Ok((project, repository, reference))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make an authenticated request to any Harbor API endpoint
    Api(ApiCommand),

    /// Manage projects
    #[command(visible_alias = "proj")]
    Project(ProjectCommand),

    /// Manage repositories
    #[command(visible_alias = "r")]
    Repo(RepoCommand),

    /// Manage artifacts
    Artifact(ArtifactCommand),

    /// Manage artifact tags
    Tag(TagCommand),

    /// Manage users
    User(UserCommand),

    /// System information, health and search
    System(SystemCommand),

    /// Garbage collection
    Gc(GcCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_repository() {
        assert_eq!(split_repository("library/nginx").unwrap(), ("library", "nginx"));
        assert_eq!(
            split_repository("library/team/nginx").unwrap(),
            ("library", "team/nginx")
        );
        assert!(split_repository("nginx").is_err());
        assert!(split_repository("library/").is_err());
    }

    #[test]
    fn test_split_reference() {
        assert_eq!(
            split_reference("library/nginx:1.25").unwrap(),
            ("library", "nginx", "1.25")
        );
        assert_eq!(
            split_reference("library/nginx@sha256:abc").unwrap(),
            ("library", "nginx", "sha256:abc")
        );
        assert_eq!(
            split_reference("library/nginx").unwrap(),
            ("library", "nginx", "latest")
        );
    }

    #[test]
    fn test_list_flags_to_params() {
        let flags = ListFlags {
            page: 2,
            limit: 50,
            query: Some("name=~nginx".to_string()),
            sort: None,
        };
        let params = flags.to_params();
        assert_eq!(params.pagination.page, 2);
        assert_eq!(params.pagination.page_size, 50);
        assert_eq!(params.query.as_deref(), Some("name=~nginx"));
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "harbor",
            "--url",
            "http://localhost/api/v2.0",
            "--json",
            "project",
            "list",
        ])
        .unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.url.as_deref(), Some("http://localhost/api/v2.0"));
    }
}
