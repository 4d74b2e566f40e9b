//
//  harbor-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Harbor CLI Library
//!
//! A client library and command-line interface for the Harbor container
//! registry management API (`/api/v2.0`).
//!
//! ## Overview
//!
//! At the core is [`api::HarborClient`], a single transport helper that
//! every resource group shares. It joins the base address with an endpoint
//! path, attaches query parameters, Basic authentication and JSON headers,
//! and turns each response into a JSON value or a typed [`api::ApiError`].
//! The resource groups (projects, repositories, artifacts, users,
//! replication, retention and the rest) are thin handles that only describe
//! requests.
//!
//! ## Module Structure
//!
//! - [`api`]: Transport helper, request descriptions and resource groups
//! - [`auth`]: Basic credential encoding
//! - [`config`]: Configuration file and connection profiles
//! - [`output`]: Table and JSON output
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use harbor_cli::api::{ClientConfig, HarborClient};
//! use harbor_cli::api::common::ListParams;
//!
//! # async fn example() -> Result<(), harbor_cli::api::ApiError> {
//! let client = HarborClient::new(
//!     ClientConfig::new("admin", "Harbor12345")
//!         .with_base_address("https://harbor.example.com/api/v2.0"),
//! )?;
//!
//! let repositories = client
//!     .repositories()
//!     .list("library", &ListParams::default().query("name=~nginx"))
//!     .await?;
//! println!("{repositories}");
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// Harbor API client.
///
/// The shared transport helper plus one handle per resource group.
pub mod api;

/// Basic authentication helpers.
pub mod auth;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/harbor/config.toml`
/// - macOS: `~/Library/Application Support/harbor/config.toml`
/// - Windows: `%APPDATA%\harbor\config\config.toml`
pub mod config;

/// Output formatting for table and JSON modes.
pub mod output;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use harbor_cli::Cli;
///
/// let cli = Cli::parse();
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "harbor";

/// Application version constant, derived from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use harbor_cli::VERSION;
///
/// println!("harbor version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
///
/// # Example
///
/// ```rust,no_run
/// use harbor_cli::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    use crate::api::ApiError;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// Harbor answered 401 or 403. Check the configured username and password.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// The requested project, repository or artifact does not exist
    /// or the user does not have permission to see it.
    pub const NOT_FOUND: i32 = 8;

    /// Rate limit exceeded.
    pub const RATE_LIMIT: i32 = 32;

    /// Maps a command error to an exit code.
    ///
    /// API errors anywhere in the error chain decide the code by HTTP status;
    /// everything else is [`ERROR`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use harbor_cli::api::ApiError;
    /// use harbor_cli::exit_codes;
    ///
    /// let err = anyhow::Error::new(ApiError::Api {
    ///     status: 404,
    ///     message: "not found".to_string(),
    ///     body: String::new(),
    /// });
    /// assert_eq!(exit_codes::for_error(&err), exit_codes::NOT_FOUND);
    /// ```
    pub fn for_error(error: &anyhow::Error) -> i32 {
        let api_error = error
            .chain()
            .find_map(|cause| cause.downcast_ref::<ApiError>());

        match api_error {
            Some(e) if e.is_unauthorized() || e.is_forbidden() => AUTH_ERROR,
            Some(e) if e.is_not_found() => NOT_FOUND,
            Some(e) if e.is_rate_limited() => RATE_LIMIT,
            _ => ERROR,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn api_error(status: u16) -> anyhow::Error {
            anyhow::Error::new(ApiError::Api {
                status,
                message: "Request failed".to_string(),
                body: String::new(),
            })
        }

        #[test]
        fn test_for_error_by_status() {
            assert_eq!(for_error(&api_error(401)), AUTH_ERROR);
            assert_eq!(for_error(&api_error(403)), AUTH_ERROR);
            assert_eq!(for_error(&api_error(404)), NOT_FOUND);
            assert_eq!(for_error(&api_error(429)), RATE_LIMIT);
            assert_eq!(for_error(&api_error(500)), ERROR);
            assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
        }

        #[test]
        fn test_for_error_through_context() {
            let err = api_error(404).context("Failed to load project");
            assert_eq!(for_error(&err), NOT_FOUND);
        }
    }
}
