//
//  harbor-cli
//  config/resolve.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Connection Resolution
//!
//! Decides which base address and credentials a CLI invocation uses. Each
//! value is taken from the first source that has it:
//!
//! 1. Command-line flag (`--url`, `--username`, `--password`)
//! 2. Environment (`HARBOR_URL`, `HARBOR_USERNAME`, `HARBOR_PASSWORD`)
//! 3. The selected profile in the config file
//! 4. The built-in default (base address only)
//!
//! Flags and environment are merged by clap before they reach
//! [`ConnectionOverrides`].

use anyhow::{bail, Result};
use tracing::debug;
use url::Url;

use super::Config;
use crate::api::{ClientConfig, DEFAULT_BASE_ADDRESS};

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOverrides {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub profile: Option<String>,
}

/// Checks that `address` is an absolute `http` or `https` URL.
pub fn validate_base_address(address: &str) -> Result<()> {
    let parsed = Url::parse(address)
        .map_err(|e| anyhow::anyhow!("Invalid Harbor URL '{}': {}", address, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => bail!("Invalid Harbor URL '{}': unsupported scheme '{}'", address, other),
    }
}

/// Builds the [`ClientConfig`] for this invocation.
///
/// # Errors
///
/// - The selected profile was named explicitly but does not exist
/// - The resolved URL is not an absolute http(s) URL
/// - No username or password could be found
///
/// # Example
///
/// ```rust
/// use harbor_cli::config::{resolve_client_config, Config, ConnectionOverrides};
///
/// let overrides = ConnectionOverrides {
///     username: Some("admin".into()),
///     password: Some("Harbor12345".into()),
///     ..Default::default()
/// };
/// let client = resolve_client_config(&overrides, &Config::default())?;
/// assert_eq!(client.base_address(), "http://localhost/api/v2.0");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn resolve_client_config(
    overrides: &ConnectionOverrides,
    config: &Config,
) -> Result<ClientConfig> {
    let profile_name = config.active_profile_name(overrides.profile.as_deref());
    let profile = config.profile(profile_name);
    if profile.is_none() && overrides.profile.is_some() {
        bail!("Profile '{}' not found in config", profile_name);
    }
    debug!(profile = profile_name, found = profile.is_some(), "Resolving connection");

    let url = overrides
        .url
        .clone()
        .or_else(|| profile.and_then(|p| p.url.clone()))
        .unwrap_or_else(|| DEFAULT_BASE_ADDRESS.to_string());
    validate_base_address(&url)?;

    let username = overrides
        .username
        .clone()
        .or_else(|| profile.and_then(|p| p.username.clone()));
    let password = overrides
        .password
        .clone()
        .or_else(|| profile.and_then(|p| p.password.clone()));

    let (Some(username), Some(password)) = (username, password) else {
        bail!(
            "No Harbor credentials found. Pass --username/--password, set HARBOR_USERNAME/HARBOR_PASSWORD, \
             or run `harbor config set username <name>` and `harbor config set password <secret>`"
        );
    };

    Ok(ClientConfig::new(username, password).with_base_address(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_profile() -> Config {
        let mut config = Config::default();
        config
            .set("url", "https://harbor.example.com/api/v2.0", None)
            .unwrap();
        config.set("username", "admin", None).unwrap();
        config.set("password", "from-profile", None).unwrap();
        config
    }

    #[test]
    fn test_profile_values_are_used() {
        let resolved =
            resolve_client_config(&ConnectionOverrides::default(), &config_with_profile()).unwrap();
        assert_eq!(resolved.base_address(), "https://harbor.example.com/api/v2.0");
        assert_eq!(resolved.principal(), "admin");
        assert_eq!(resolved.credential(), "from-profile");
    }

    #[test]
    fn test_overrides_win() {
        let overrides = ConnectionOverrides {
            url: Some("http://127.0.0.1:8080/api/v2.0".to_string()),
            password: Some("from-flag".to_string()),
            ..Default::default()
        };
        let resolved = resolve_client_config(&overrides, &config_with_profile()).unwrap();
        assert_eq!(resolved.base_address(), "http://127.0.0.1:8080/api/v2.0");
        assert_eq!(resolved.principal(), "admin");
        assert_eq!(resolved.credential(), "from-flag");
    }

    #[test]
    fn test_missing_credentials() {
        let err = resolve_client_config(&ConnectionOverrides::default(), &Config::default())
            .unwrap_err();
        assert!(err.to_string().contains("No Harbor credentials"));
    }

    #[test]
    fn test_unknown_explicit_profile() {
        let overrides = ConnectionOverrides {
            profile: Some("staging".to_string()),
            ..Default::default()
        };
        let err = resolve_client_config(&overrides, &config_with_profile()).unwrap_err();
        assert!(err.to_string().contains("Profile 'staging' not found"));
    }

    #[test]
    fn test_validate_base_address() {
        assert!(validate_base_address("https://harbor.example.com/api/v2.0").is_ok());
        assert!(validate_base_address("ftp://harbor.example.com").is_err());
        assert!(validate_base_address("/api/v2.0").is_err());
    }
}
