//
//  harbor-cli
//  cli/tag.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tag commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::json;

use crate::api::resources::ListTagsParams;
use crate::output::Column;

use super::{split_reference, GlobalOptions, ListFlags};

const TAG_COLUMNS: &[Column] = &[
    Column::new("NAME", "name"),
    Column::new("IMMUTABLE", "immutable"),
    Column::new("PUSHED", "push_time"),
    Column::new("PULLED", "pull_time"),
];

/// Manage artifact tags
#[derive(Args, Debug)]
pub struct TagCommand {
    #[command(subcommand)]
    pub command: TagSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TagSubcommand {
    /// List the tags of an artifact
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Add a tag to an artifact
    Create(CreateArgs),

    /// Remove a tag from an artifact
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Artifact as <project>/<repository>:<tag> or <project>/<repository>@<digest>
    pub artifact: String,

    #[command(flatten)]
    pub list: ListFlags,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Artifact as <project>/<repository>:<tag> or <project>/<repository>@<digest>
    pub artifact: String,

    /// New tag name
    pub tag: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Artifact as <project>/<repository>:<tag> or <project>/<repository>@<digest>
    pub artifact: String,

    /// Tag to remove
    pub tag: String,

    /// Skip the confirmation check
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl TagCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TagSubcommand::List(args) => self.list(args, global).await,
            TagSubcommand::Create(args) => self.create(args, global).await,
            TagSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let (project, repository, reference) = split_reference(&args.artifact)?;
        let (client, output) = global.session()?;

        let params = ListTagsParams {
            list: args.list.to_params(),
            with_immutable_status: Some(true),
        };
        let tags = client
            .tags()
            .list(project, repository, reference, &params)
            .await?;
        output.write_list(&tags, TAG_COLUMNS)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let (project, repository, reference) = split_reference(&args.artifact)?;
        let (client, output) = global.session()?;

        client
            .tags()
            .create(project, repository, reference, &json!({ "name": args.tag }))
            .await?;
        output.write_success(&format!("Tagged {} as {}", args.artifact, args.tag));
        Ok(())
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let (project, repository, reference) = split_reference(&args.artifact)?;
        if !args.yes {
            bail!("Refusing to delete tag '{}' without --yes", args.tag);
        }

        let (client, output) = global.session()?;
        client
            .tags()
            .delete(project, repository, reference, &args.tag)
            .await?;
        output.write_success(&format!("Deleted tag {}", args.tag));
        Ok(())
    }
}
