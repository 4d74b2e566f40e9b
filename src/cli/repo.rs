//
//  harbor-cli
//  cli/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::output::Column;

use super::{split_repository, GlobalOptions, ListFlags};

const REPO_COLUMNS: &[Column] = &[
    Column::new("NAME", "name"),
    Column::new("ARTIFACTS", "artifact_count"),
    Column::new("PULLS", "pull_count"),
    Column::new("UPDATED", "update_time"),
];

const REPO_FIELDS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Name", "name"),
    Column::new("Description", "description"),
    Column::new("Artifacts", "artifact_count"),
    Column::new("Pulls", "pull_count"),
    Column::new("Created", "creation_time"),
    Column::new("Updated", "update_time"),
];

/// Manage repositories
#[derive(Args, Debug)]
pub struct RepoCommand {
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RepoSubcommand {
    /// List repositories in a project, or across all projects
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a repository
    View(ViewArgs),

    /// Delete a repository and all of its artifacts
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project name (omit to list across all projects)
    pub project: Option<String>,

    #[command(flatten)]
    pub list: ListFlags,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Repository as <project>/<repository>
    pub repository: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Repository as <project>/<repository>
    pub repository: String,

    /// Skip the confirmation check
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl RepoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            RepoSubcommand::List(args) => self.list(args, global).await,
            RepoSubcommand::View(args) => self.view(args, global).await,
            RepoSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let (client, output) = global.session()?;
        let params = args.list.to_params();

        let repositories = match &args.project {
            Some(project) => client.repositories().list(project, &params).await?,
            None => client.repositories().list_all(&params).await?,
        };
        output.write_list(&repositories, REPO_COLUMNS)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let (project, repository) = split_repository(&args.repository)?;
        let (client, output) = global.session()?;
        let repo = client.repositories().get(project, repository).await?;
        output.write_record(&repo, REPO_FIELDS)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let (project, repository) = split_repository(&args.repository)?;
        if !args.yes {
            bail!(
                "Refusing to delete repository '{}' without --yes",
                args.repository
            );
        }

        let (client, output) = global.session()?;
        client.repositories().delete(project, repository).await?;
        output.write_success(&format!("Deleted repository {}", args.repository));
        Ok(())
    }
}
