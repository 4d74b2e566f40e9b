//
//  harbor-cli
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::common::Pagination;
use crate::output::Column;

use super::{GlobalOptions, ListFlags};

const USER_COLUMNS: &[Column] = &[
    Column::new("ID", "user_id"),
    Column::new("USERNAME", "username"),
    Column::new("EMAIL", "email"),
    Column::new("ADMIN", "sysadmin_flag"),
    Column::new("CREATED", "creation_time"),
];

const USER_FIELDS: &[Column] = &[
    Column::new("ID", "user_id"),
    Column::new("Username", "username"),
    Column::new("Full name", "realname"),
    Column::new("Email", "email"),
    Column::new("Admin", "sysadmin_flag"),
    Column::new("Admin by group", "admin_role_in_auth"),
    Column::new("Comment", "comment"),
    Column::new("Created", "creation_time"),
];

const SEARCH_COLUMNS: &[Column] = &[
    Column::new("ID", "user_id"),
    Column::new("USERNAME", "username"),
];

/// Manage users
#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// List users (system admin only)
    #[command(visible_alias = "ls")]
    List(ListFlags),

    /// Show the authenticated user
    Me,

    /// View a user by ID
    View(ViewArgs),

    /// Find users by username prefix
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// User ID
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Username prefix
    pub username: String,

    /// Maximum number of users to return
    #[arg(long, short = 'L', default_value = "10")]
    pub limit: u32,
}

impl UserCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, output) = global.session()?;

        match &self.command {
            UserSubcommand::List(list) => {
                let users = client.users().list(&list.to_params()).await?;
                output.write_list(&users, USER_COLUMNS)
            }
            UserSubcommand::Me => {
                let user = client.users().current().await?;
                output.write_record(&user, USER_FIELDS)
            }
            UserSubcommand::View(args) => {
                let user = client.users().get(args.id).await?;
                output.write_record(&user, USER_FIELDS)
            }
            UserSubcommand::Search(args) => {
                let users = client
                    .users()
                    .search(&args.username, &Pagination::new(1, args.limit))
                    .await?;
                output.write_list(&users, SEARCH_COLUMNS)
            }
        }
    }
}
