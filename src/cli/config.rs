//
//  harbor-cli
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! This module provides commands for managing the CLI configuration file:
//! core settings (`default_profile`, `output`) and per-profile connection
//! settings (`url`, `username`, `password`). Profile keys apply to the
//! profile selected with `--profile`, or the default profile.

use std::process::Command;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::auth::mask_secret;
use crate::config::{config_exists, Config};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset a configuration value
    Unset(UnsetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Open configuration in editor
    Edit,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,

    /// Print secrets in clear text
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

#[derive(Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key
    pub key: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Unset(args) => self.unset(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Edit => self.edit(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let value = config
            .get(&args.key, global.profile.as_deref())?
            .map(|v| display_value(&args.key, &v, args.reveal));

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        match value {
            Some(value) => println!("{}", value),
            None => bail!("Configuration key '{}' is not set", args.key),
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;
        let mut config = Config::load_from(&path)?;
        config.set(&args.key, &args.value, global.profile.as_deref())?;
        config.save_to(&path)?;

        let shown = display_value(&args.key, &args.value, false);
        if global.json {
            let result = serde_json::json!({
                "action": "set",
                "key": args.key,
                "value": shown,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(&args.key).cyan(),
                shown
            );
        }
        Ok(())
    }

    fn unset(&self, args: &UnsetArgs, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;
        let mut config = Config::load_from(&path)?;
        config.unset(&args.key, global.profile.as_deref())?;
        config.save_to(&path)?;

        if global.json {
            let result = serde_json::json!({
                "action": "unset",
                "key": args.key,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Unset {}", style("✓").green(), style(&args.key).cyan());
        }
        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let entries: Vec<(String, String)> = config
            .entries()
            .into_iter()
            .map(|(key, value)| {
                let shown = display_value(&key, &value, false);
                (key, shown)
            })
            .collect();

        if global.json {
            let map: serde_json::Map<String, serde_json::Value> = entries
                .into_iter()
                .map(|(k, v)| (k, serde_json::Value::String(v)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
            return Ok(());
        }

        for (key, value) in entries {
            println!("{} = {}", style(key).cyan(), value);
        }
        Ok(())
    }

    fn edit(&self, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;
        if !config_exists(&path) {
            Config::default().save_to(&path)?;
        }

        let editor = std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "vi".to_string()
                }
            });

        println!(
            "{} Opening {} in {}...",
            style("→").cyan(),
            path.display(),
            editor
        );

        // Editors like "code --wait" carry their own arguments
        let parts: Vec<&str> = editor.split_whitespace().collect();
        let (cmd, cmd_args) = parts
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("Invalid editor command"))?;

        let status = Command::new(cmd).args(cmd_args).arg(&path).status()?;
        if !status.success() {
            bail!("Editor exited with non-zero status");
        }

        // Re-parse so a broken edit is reported immediately
        Config::load_from(&path)?;
        println!("{} Configuration saved.", style("✓").green());
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": path.display().to_string(),
                "exists": config_exists(&path),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }
        Ok(())
    }
}

/// Masks password values unless `reveal` is set.
fn display_value(key: &str, value: &str, reveal: bool) -> String {
    if !reveal && (key == "password" || key.ends_with(".password")) {
        mask_secret(value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_masks_passwords() {
        assert_eq!(display_value("password", "Harbor12345", false), "Ha******");
        assert_eq!(
            display_value("profiles.prod.password", "Harbor12345", false),
            "Ha******"
        );
        assert_eq!(display_value("password", "Harbor12345", true), "Harbor12345");
        assert_eq!(display_value("url", "http://h/api/v2.0", false), "http://h/api/v2.0");
    }
}
