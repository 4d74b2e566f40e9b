//
//  harbor-cli
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! This command sends an authenticated request to any Harbor endpoint,
//! similar to `gh api` for GitHub. It covers endpoints that have no
//! dedicated command and is handy for debugging.
//!
//! ## Examples
//!
//! ```bash
//! # Get system info
//! harbor api /systeminfo
//!
//! # Filter a list
//! harbor api /projects -p page_size=50 -p q=name=~team
//!
//! # Create a project with POST
//! harbor api -X POST /projects \
//!     -F project_name=demo -F metadata.public=true
//! ```

use std::fs;
use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::{Map, Value};

use crate::api::common::QueryParams;
use crate::api::{Method, RequestSpec};

use super::GlobalOptions;

/// Make direct API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API endpoint relative to the base URL (e.g., /projects)
    pub endpoint: String,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Query parameters as key=value (can be specified multiple times)
    #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
    pub params: Vec<String>,

    /// Request headers as 'Name: Value' (can be specified multiple times)
    #[arg(long, short = 'H', action = clap::ArgAction::Append)]
    pub header: Vec<String>,

    /// Request body fields (key=value, typed, nested with dots)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Raw string body fields (key=value)
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Read request body from file (- for stdin)
    #[arg(long, short = 'f', conflicts_with_all = ["field", "raw_field"])]
    pub input: Option<String>,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, _) = global.session()?;
        let spec = self.build_spec()?;

        let response = client.execute(spec).await?;
        if !response.is_null() {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Ok(())
    }

    /// Turns the command line into a request description.
    pub fn build_spec(&self) -> Result<RequestSpec> {
        let method: Method = self
            .method
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;

        let endpoint = if self.endpoint.starts_with('/') {
            self.endpoint.clone()
        } else {
            format!("/{}", self.endpoint)
        };

        let mut spec = RequestSpec::new(method, endpoint).query(self.build_query()?);
        for header in &self.header {
            let (name, value) = parse_header(header)?;
            spec = spec.header(name, value);
        }
        if let Some(body) = self.build_body()? {
            spec = spec.json(&body)?;
        }
        Ok(spec)
    }

    fn build_query(&self) -> Result<QueryParams> {
        let mut query = QueryParams::new();
        for param in &self.params {
            let (key, value) = split_pair(param)?;
            query.push(key, value);
        }
        Ok(query)
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            } else {
                fs::read_to_string(input)
                    .with_context(|| format!("Failed to read request body from {}", input))?
            };
            let value: Value =
                serde_json::from_str(&content).context("Request body is not valid JSON")?;
            return Ok(Some(value));
        }

        if self.field.is_empty() && self.raw_field.is_empty() {
            return Ok(None);
        }

        let mut body = Map::new();
        for field in &self.field {
            let (key, value) = split_pair(field)?;
            set_nested_value(&mut body, key, parse_field_value(value));
        }
        for field in &self.raw_field {
            let (key, value) = split_pair(field)?;
            set_nested_value(&mut body, key, Value::String(value.to_string()));
        }
        Ok(Some(Value::Object(body)))
    }
}

fn split_pair(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid field format: {}. Expected key=value", field),
    }
}

fn parse_header(header: &str) -> Result<(&str, &str)> {
    match header.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => bail!("Invalid header format: {}. Expected 'Name: Value'", header),
    }
}

/// Interprets a `-F` value as a JSON literal where it looks like one.
fn parse_field_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = raw.parse::<i64>() {
                Value::Number(n.into())
            } else if let Some(n) = raw.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                Value::Number(n)
            } else if raw.starts_with('[') || raw.starts_with('{') {
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
            } else {
                Value::String(raw.to_string())
            }
        }
    }
}

fn set_nested_value(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn command(args: &[&str]) -> ApiCommand {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            api: ApiCommand,
        }

        let mut argv = vec!["api"];
        argv.extend_from_slice(args);
        Wrapper::parse_from(argv).api
    }

    #[test]
    fn test_parse_field_value_types() {
        assert_eq!(parse_field_value("true"), json!(true));
        assert_eq!(parse_field_value("null"), Value::Null);
        assert_eq!(parse_field_value("42"), json!(42));
        assert_eq!(parse_field_value("1.5"), json!(1.5));
        assert_eq!(parse_field_value("[1,2]"), json!([1, 2]));
        assert_eq!(parse_field_value("demo"), json!("demo"));
    }

    #[test]
    fn test_nested_fields() {
        let cmd = command(&[
            "-X",
            "POST",
            "/projects",
            "-F",
            "project_name=demo",
            "-F",
            "metadata.public=true",
            "--raw-field",
            "metadata.auto_scan=true",
        ]);
        let body = cmd.build_body().unwrap().unwrap();
        assert_eq!(
            body,
            json!({
                "project_name": "demo",
                "metadata": {"public": true, "auto_scan": "true"}
            })
        );
    }

    #[test]
    fn test_build_spec() {
        let cmd = command(&["projects", "-p", "page_size=50", "-H", "X-Trace: 1"]);
        let spec = cmd.build_spec().unwrap();
        assert_eq!(spec.method(), Method::Get);
        assert_eq!(spec.path(), "/projects");
        assert_eq!(spec.query_params().to_query_string(), "page_size=50");
        assert_eq!(spec.headers(), &[("X-Trace".to_string(), "1".to_string())]);
        assert!(spec.body().is_none());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(split_pair("novalue").is_err());
        assert!(parse_header("no-colon").is_err());
        assert!(command(&["-X", "TRACE", "/x"]).build_spec().is_err());
    }
}
