//
//  harbor-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module manages the `harbor` CLI configuration file: core settings and
//! named connection profiles, stored as TOML in the platform config directory.
//! The library client itself never reads this file; the CLI turns a profile
//! into a [`ClientConfig`](crate::api::ClientConfig) (see [`resolve`]).
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/harbor/config.toml`
//! - **macOS**: `~/Library/Application Support/harbor/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\harbor\config\config.toml`
//!
//! The location can be overridden with `--config` or `HARBOR_CONFIG`.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! default_profile = "default"
//! output = "table"
//!
//! [profiles.default]
//! url = "https://harbor.example.com/api/v2.0"
//! username = "admin"
//! password = "Harbor12345"
//!
//! [profiles.ci]
//! url = "https://harbor.example.com/api/v2.0"
//! username = "robot$ci"
//! password = "..."
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use harbor_cli::config::Config;
//!
//! let path = Config::config_path()?;
//! let mut config = Config::load_from(&path)?;
//! config.set("url", "https://harbor.example.com/api/v2.0", None)?;
//! config.save_to(&path)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O
//! - [`resolve`]: Flag, environment and profile precedence

mod file;
pub mod resolve;

pub use file::*;
pub use resolve::{resolve_client_config, ConnectionOverrides};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Name of the profile used when none is configured or selected.
pub const DEFAULT_PROFILE: &str = "default";

/// Keys stored in the `[core]` table.
pub const CORE_KEYS: &[&str] = &["default_profile", "output"];

/// Keys stored in each `[profiles.<name>]` table.
pub const PROFILE_KEYS: &[&str] = &["url", "username", "password"];

/// Complete configuration file contents.
///
/// # Fields
///
/// * `core` - Settings that apply to every command
/// * `profiles` - Named connection profiles
///
/// # Examples
///
/// ```rust
/// use harbor_cli::config::Config;
///
/// let config: Config = toml::from_str(r#"
/// [profiles.default]
/// url = "https://harbor.example.com/api/v2.0"
/// username = "admin"
/// "#).unwrap();
///
/// assert_eq!(config.core.default_profile, "default");
/// assert_eq!(config.profile("default").unwrap().username.as_deref(), Some("admin"));
/// ```
///
/// # Notes
///
/// - All tables use `#[serde(default)]`, so a partial or empty file loads cleanly
/// - Profiles are kept sorted by name so saved files are stable
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,

    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

/// Settings that apply to every command.
///
/// | Field | Default |
/// |-------|---------|
/// | `default_profile` | `"default"` |
/// | `output` | `"table"` |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoreConfig {
    /// Profile used when `--profile` is not given.
    #[serde(default = "default_profile")]
    pub default_profile: String,

    /// Default output format, `table` or `json`.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

fn default_output() -> String {
    "table".to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_profile: default_profile(),
            output: default_output(),
        }
    }
}

/// Connection settings of one Harbor instance.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProfileConfig {
    /// API base address, including `/api/v2.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Username or robot account name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Password or robot secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl std::fmt::Debug for ProfileConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Returns the default configuration file path.
    ///
    /// # Errors
    ///
    /// Fails when the platform has no home/config directory.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "harbor")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Loads the configuration at `path`, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the named profile.
    pub fn profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.get(name)
    }

    /// Returns the profile to use: `selected` if given, else `core.default_profile`.
    pub fn active_profile_name<'a>(&'a self, selected: Option<&'a str>) -> &'a str {
        selected.unwrap_or(&self.core.default_profile)
    }

    /// Reads a key.
    ///
    /// Core keys ignore `profile`; profile keys read from `profile` or the
    /// default profile.
    ///
    /// # Errors
    ///
    /// Fails for unknown keys.
    pub fn get(&self, key: &str, profile: Option<&str>) -> Result<Option<String>> {
        match key {
            "default_profile" => Ok(Some(self.core.default_profile.clone())),
            "output" => Ok(Some(self.core.output.clone())),
            "url" | "username" | "password" => {
                let name = self.active_profile_name(profile);
                Ok(self.profile(name).and_then(|p| match key {
                    "url" => p.url.clone(),
                    "username" => p.username.clone(),
                    _ => p.password.clone(),
                }))
            }
            _ => bail!(unknown_key(key)),
        }
    }

    /// Sets a key, creating the profile if needed.
    ///
    /// # Errors
    ///
    /// Fails for unknown keys, an `output` other than `table`/`json`, or a
    /// `url` that is not an absolute http(s) URL.
    pub fn set(&mut self, key: &str, value: &str, profile: Option<&str>) -> Result<()> {
        match key {
            "default_profile" => self.core.default_profile = value.to_string(),
            "output" => {
                if value != "table" && value != "json" {
                    bail!("Invalid output format '{}': expected 'table' or 'json'", value);
                }
                self.core.output = value.to_string();
            }
            "url" | "username" | "password" => {
                if key == "url" {
                    resolve::validate_base_address(value)?;
                }
                let name = self.active_profile_name(profile).to_string();
                let entry = self.profiles.entry(name).or_default();
                let value = Some(value.to_string());
                match key {
                    "url" => entry.url = value,
                    "username" => entry.username = value,
                    _ => entry.password = value,
                }
            }
            _ => bail!(unknown_key(key)),
        }
        Ok(())
    }

    /// Clears a key. Core keys go back to their defaults; an emptied profile
    /// is removed.
    pub fn unset(&mut self, key: &str, profile: Option<&str>) -> Result<()> {
        match key {
            "default_profile" => self.core.default_profile = default_profile(),
            "output" => self.core.output = default_output(),
            "url" | "username" | "password" => {
                let name = self.active_profile_name(profile).to_string();
                if let Some(entry) = self.profiles.get_mut(&name) {
                    match key {
                        "url" => entry.url = None,
                        "username" => entry.username = None,
                        _ => entry.password = None,
                    }
                    if *entry == ProfileConfig::default() {
                        self.profiles.remove(&name);
                    }
                }
            }
            _ => bail!(unknown_key(key)),
        }
        Ok(())
    }

    /// Lists every set key as `(key, value)`, profile keys prefixed with
    /// `profiles.<name>.`.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = vec![
            ("default_profile".to_string(), self.core.default_profile.clone()),
            ("output".to_string(), self.core.output.clone()),
        ];
        for (name, profile) in &self.profiles {
            let fields = [
                ("url", &profile.url),
                ("username", &profile.username),
                ("password", &profile.password),
            ];
            for (key, value) in fields {
                if let Some(value) = value {
                    entries.push((format!("profiles.{name}.{key}"), value.clone()));
                }
            }
        }
        entries
    }
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key '{}'. Valid keys: {}, {}",
        key,
        CORE_KEYS.join(", "),
        PROFILE_KEYS.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.core.default_profile, "default");
        assert_eq!(config.core.output, "table");
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("url", "https://harbor.example.com/api/v2.0", None).unwrap();
        config.set("username", "robot$ci", Some("ci")).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.get("url", None).unwrap().as_deref(),
            Some("https://harbor.example.com/api/v2.0")
        );
        assert_eq!(loaded.get("username", Some("ci")).unwrap().as_deref(), Some("robot$ci"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("output", "yaml", None).is_err());
        assert!(config.set("url", "harbor.example.com", None).is_err());
        assert!(config.set("editor", "vim", None).is_err());
    }

    #[test]
    fn test_unset_removes_empty_profile() {
        let mut config = Config::default();
        config.set("username", "admin", None).unwrap();
        config.unset("username", None).unwrap();
        assert!(config.profiles.is_empty());

        config.set("output", "json", None).unwrap();
        config.unset("output", None).unwrap();
        assert_eq!(config.core.output, "table");
    }

    #[test]
    fn test_entries_include_profiles() {
        let mut config = Config::default();
        config.set("username", "admin", Some("prod")).unwrap();
        let entries = config.entries();
        assert!(entries.contains(&("profiles.prod.username".to_string(), "admin".to_string())));
        assert_eq!(entries[0].0, "default_profile");
    }

    #[test]
    fn test_profile_debug_redacts_password() {
        let profile = ProfileConfig {
            password: Some("Harbor12345".to_string()),
            ..Default::default()
        };
        assert!(!format!("{profile:?}").contains("Harbor12345"));
    }
}
