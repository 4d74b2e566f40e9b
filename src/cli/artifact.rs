//
//  harbor-cli
//  cli/artifact.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Artifact commands
//!
//! Artifacts are addressed as `<project>/<repository>:<tag>` or
//! `<project>/<repository>@<digest>`.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::resources::{ArtifactDetail, ListArtifactsParams};
use crate::output::Column;

use super::{split_reference, split_repository, GlobalOptions, ListFlags};

const ARTIFACT_COLUMNS: &[Column] = &[
    Column::digest("DIGEST", "digest"),
    Column::names("TAGS", "tags"),
    Column::new("TYPE", "type"),
    Column::size("SIZE", "size"),
    Column::new("PUSHED", "push_time"),
];

const ARTIFACT_FIELDS: &[Column] = &[
    Column::new("Digest", "digest"),
    Column::new("Type", "type"),
    Column::new("Media type", "manifest_media_type"),
    Column::size("Size", "size"),
    Column::names("Tags", "tags"),
    Column::names("Labels", "labels"),
    Column::new("Pushed", "push_time"),
    Column::new("Pulled", "pull_time"),
];

/// Manage artifacts
#[derive(Args, Debug)]
pub struct ArtifactCommand {
    #[command(subcommand)]
    pub command: ArtifactSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ArtifactSubcommand {
    /// List artifacts in a repository
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View an artifact
    View(ViewArgs),

    /// Delete an artifact
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Repository as <project>/<repository>
    pub repository: String,

    #[command(flatten)]
    pub list: ListFlags,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Artifact as <project>/<repository>:<tag> or <project>/<repository>@<digest>
    pub artifact: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Artifact as <project>/<repository>:<tag> or <project>/<repository>@<digest>
    pub artifact: String,

    /// Skip the confirmation check
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl ArtifactCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ArtifactSubcommand::List(args) => self.list(args, global).await,
            ArtifactSubcommand::View(args) => self.view(args, global).await,
            ArtifactSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let (project, repository) = split_repository(&args.repository)?;
        let (client, output) = global.session()?;

        let params = ListArtifactsParams {
            list: args.list.to_params(),
            detail: ArtifactDetail::default().with_tag(true),
        };
        let artifacts = client.artifacts().list(project, repository, &params).await?;
        output.write_list(&artifacts, ARTIFACT_COLUMNS)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let (project, repository, reference) = split_reference(&args.artifact)?;
        let (client, output) = global.session()?;

        let detail = ArtifactDetail::default().with_tag(true).with_label(true);
        let artifact = client
            .artifacts()
            .get(project, repository, reference, &detail)
            .await?;
        output.write_record(&artifact, ARTIFACT_FIELDS)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let (project, repository, reference) = split_reference(&args.artifact)?;
        if !args.yes {
            bail!(
                "Refusing to delete artifact '{}' without --yes",
                args.artifact
            );
        }

        let (client, output) = global.session()?;
        client
            .artifacts()
            .delete(project, repository, reference)
            .await?;
        output.write_success(&format!("Deleted artifact {}", args.artifact));
        Ok(())
    }
}
