//
//  harbor-cli
//  cli/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project commands
//!
//! Projects are Harbor's top-level namespace. Every repository lives in a
//! project, and access control, quotas and policies hang off it.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::{json, Value};

use crate::api::resources::ListProjectsParams;
use crate::output::Column;

use super::{GlobalOptions, ListFlags};

const PROJECT_COLUMNS: &[Column] = &[
    Column::new("ID", "project_id"),
    Column::new("NAME", "name"),
    Column::new("PUBLIC", "metadata.public"),
    Column::new("REPOS", "repo_count"),
    Column::new("CREATED", "creation_time"),
];

const PROJECT_FIELDS: &[Column] = &[
    Column::new("ID", "project_id"),
    Column::new("Name", "name"),
    Column::new("Owner", "owner_name"),
    Column::new("Public", "metadata.public"),
    Column::new("Repositories", "repo_count"),
    Column::new("Registry", "registry_id"),
    Column::new("Created", "creation_time"),
    Column::new("Updated", "update_time"),
];

const SUMMARY_FIELDS: &[Column] = &[
    Column::new("Repositories", "repo_count"),
    Column::new("Admins", "project_admin_count"),
    Column::new("Maintainers", "maintainer_count"),
    Column::new("Developers", "developer_count"),
    Column::new("Guests", "guest_count"),
    Column::size("Quota used", "quota.used.storage"),
    Column::size("Quota limit", "quota.hard.storage"),
];

/// Manage projects
#[derive(Args, Debug)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectSubcommand {
    /// List projects
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View project details
    View(ViewArgs),

    /// Create a project
    Create(CreateArgs),

    /// Delete a project
    Delete(DeleteArgs),

    /// Show repository, member and quota counts
    Summary(ViewArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub list: ListFlags,

    /// Only public projects
    #[arg(long, conflicts_with = "private")]
    pub public: bool,

    /// Only private projects
    #[arg(long)]
    pub private: bool,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Project name or ID
    pub project: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Project name
    pub name: String,

    /// Make the project public
    #[arg(long)]
    pub public: bool,

    /// Storage limit in bytes (-1 for unlimited)
    #[arg(long, allow_hyphen_values = true)]
    pub storage_limit: Option<i64>,

    /// Create a proxy cache project backed by this registry endpoint ID
    #[arg(long)]
    pub registry_id: Option<i64>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Project name or ID
    pub project: String,

    /// Skip the confirmation check
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl ProjectCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ProjectSubcommand::List(args) => self.list(args, global).await,
            ProjectSubcommand::View(args) => self.view(args, global).await,
            ProjectSubcommand::Create(args) => self.create(args, global).await,
            ProjectSubcommand::Delete(args) => self.delete(args, global).await,
            ProjectSubcommand::Summary(args) => self.summary(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let (client, output) = global.session()?;

        let mut params = ListProjectsParams::from(args.list.to_params());
        if args.public {
            params = params.public(true);
        } else if args.private {
            params = params.public(false);
        }

        let projects = client.projects().list(&params).await?;
        output.write_list(&projects, PROJECT_COLUMNS)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let (client, output) = global.session()?;
        let project = client.projects().get(&args.project).await?;
        output.write_record(&project, PROJECT_FIELDS)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let (client, output) = global.session()?;
        client.projects().create(&create_body(args)).await?;
        output.write_success(&format!("Created project {}", args.name));
        Ok(())
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        if !args.yes {
            bail!(
                "Refusing to delete project '{}' without --yes",
                args.project
            );
        }

        let (client, output) = global.session()?;
        client.projects().delete(&args.project).await?;
        output.write_success(&format!("Deleted project {}", args.project));
        Ok(())
    }

    async fn summary(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let (client, output) = global.session()?;
        let summary = client.projects().summary(&args.project).await?;
        output.write_record(&summary, SUMMARY_FIELDS)
    }
}

/// Builds a `ProjectReq` body. Harbor expects metadata values as strings.
fn create_body(args: &CreateArgs) -> Value {
    let mut body = json!({
        "project_name": args.name,
        "metadata": { "public": args.public.to_string() },
    });
    if let Some(limit) = args.storage_limit {
        body["storage_limit"] = json!(limit);
    }
    if let Some(registry_id) = args.registry_id {
        body["registry_id"] = json!(registry_id);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body() {
        let args = CreateArgs {
            name: "demo".to_string(),
            public: true,
            storage_limit: Some(-1),
            registry_id: None,
        };
        assert_eq!(
            create_body(&args),
            json!({
                "project_name": "demo",
                "metadata": {"public": "true"},
                "storage_limit": -1
            })
        );
    }
}
