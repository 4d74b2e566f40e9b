//
//  harbor-cli
//  cli/gc.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Garbage collection commands

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::output::Column;

use super::{GlobalOptions, ListFlags};

const HISTORY_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("KIND", "job_kind"),
    Column::status("STATUS", "job_status"),
    Column::new("DELETE UNTAGGED", "job_parameters"),
    Column::new("CREATED", "creation_time"),
];

const SCHEDULE_FIELDS: &[Column] = &[
    Column::new("Type", "schedule.type"),
    Column::new("Cron", "schedule.cron"),
    Column::new("Next run", "schedule.next_scheduled_time"),
    Column::new("Parameters", "job_parameters"),
];

/// Garbage collection
#[derive(Args, Debug)]
pub struct GcCommand {
    #[command(subcommand)]
    pub command: GcSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GcSubcommand {
    /// List past garbage collection runs
    History(ListFlags),

    /// Show the garbage collection schedule
    Schedule,

    /// Start a garbage collection run now
    Run(RunArgs),

    /// Print the log of a run
    Log(LogArgs),

    /// Stop a running garbage collection
    Stop(LogArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Also delete untagged artifacts
    #[arg(long)]
    pub delete_untagged: bool,

    /// Report what would be freed without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct LogArgs {
    /// Run ID
    pub id: i64,
}

impl GcCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, output) = global.session()?;
        let gc = client.garbage_collection();

        match &self.command {
            GcSubcommand::History(list) => {
                let history = gc.history(&list.to_params()).await?;
                output.write_list(&history, HISTORY_COLUMNS)
            }
            GcSubcommand::Schedule => {
                let schedule = gc.schedule().await?;
                output.write_record(&schedule, SCHEDULE_FIELDS)
            }
            GcSubcommand::Run(args) => {
                let body = json!({
                    "schedule": { "type": "Manual" },
                    "parameters": {
                        "delete_untagged": args.delete_untagged,
                        "dry_run": args.dry_run,
                    },
                });
                gc.create_schedule(&body).await?;
                output.write_success("Garbage collection started");
                Ok(())
            }
            GcSubcommand::Log(args) => {
                let log = gc.log(args.id).await?;
                print!("{}", log);
                Ok(())
            }
            GcSubcommand::Stop(args) => {
                gc.stop(args.id).await?;
                output.write_success(&format!("Stopped garbage collection {}", args.id));
                Ok(())
            }
        }
    }
}
