//
//  harbor-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting Module
//!
//! Renders Harbor API responses for the terminal. Responses stay as
//! [`serde_json::Value`]; commands describe which fields to show with
//! [`Column`]s and the writer either draws a table or prints the raw JSON.
//!
//! ## Output Formats
//!
//! | Format | Use |
//! |--------|-----|
//! | [`OutputFormat::Table`] | Human-readable tables and field lists (default) |
//! | [`OutputFormat::Json`] | The response exactly as Harbor returned it |
//!
//! ## Example
//!
//! ```rust,no_run
//! use harbor_cli::output::{Column, OutputFormat, OutputWriter};
//! use serde_json::json;
//!
//! let projects = json!([{"name": "library", "repo_count": 3}]);
//! let writer = OutputWriter::new(OutputFormat::Table);
//! writer.write_list(&projects, &[
//!     Column::new("NAME", "name"),
//!     Column::new("REPOS", "repo_count"),
//! ])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use std::str::FromStr;

use serde_json::Value;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format '{}'", other),
        }
    }
}

/// How a cell value is rendered in table output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Strings, numbers and booleans as text
    Plain,
    /// Byte counts in binary units
    Size,
    /// Job or component status, colored
    Status,
    /// Digests and long identifiers, shortened
    Digest,
    /// Array of objects, shown as their `name` fields
    Names,
}

/// A table column or record field: a header and the dotted path of the
/// value in each item (see [`lookup`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub path: &'static str,
    pub kind: CellKind,
}

impl Column {
    pub const fn new(title: &'static str, path: &'static str) -> Self {
        Self {
            title,
            path,
            kind: CellKind::Plain,
        }
    }

    pub const fn size(title: &'static str, path: &'static str) -> Self {
        Self {
            title,
            path,
            kind: CellKind::Size,
        }
    }

    pub const fn status(title: &'static str, path: &'static str) -> Self {
        Self {
            title,
            path,
            kind: CellKind::Status,
        }
    }

    pub const fn digest(title: &'static str, path: &'static str) -> Self {
        Self {
            title,
            path,
            kind: CellKind::Digest,
        }
    }

    pub const fn names(title: &'static str, path: &'static str) -> Self {
        Self {
            title,
            path,
            kind: CellKind::Names,
        }
    }

    /// Renders this column's cell for `item`.
    pub fn render(&self, item: &Value, color: bool) -> String {
        let value = lookup(item, self.path);
        match (self.kind, value) {
            (CellKind::Size, Some(Value::Number(n))) => match n.as_u64() {
                Some(bytes) => format_size(bytes),
                None => n.to_string(),
            },
            (CellKind::Status, Some(Value::String(s))) => format_status(s, color),
            (CellKind::Digest, Some(Value::String(s))) => truncate(s, 22),
            (CellKind::Names, Some(Value::Array(items))) if !items.is_empty() => items
                .iter()
                .map(|item| render_cell(item.get("name"), color))
                .collect::<Vec<_>>()
                .join(", "),
            (_, value) => render_cell(value, color),
        }
    }
}

/// Renders a JSON value as a single table cell.
///
/// Missing values and `null` render as `-`, arrays of scalars are joined
/// with `, `, and objects fall back to compact JSON.
pub fn render_cell(value: Option<&Value>, color: bool) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) if s.is_empty() => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => format_bool(*b, color),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) if items.is_empty() => "-".to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| render_cell(Some(item), color))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other @ Value::Object(_)) => other.to_string(),
    }
}

/// Writes command results in the selected format.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Writes a list response.
    ///
    /// Table output shows one row per array element; an empty array prints
    /// `No results`. A response that is not an array is written as a single
    /// row.
    pub fn write_list(&self, items: &Value, columns: &[Column]) -> anyhow::Result<()> {
        if self.format == OutputFormat::Json {
            return write_json(items);
        }

        let rows: Vec<&Value> = match items {
            Value::Array(items) => items.iter().collect(),
            Value::Null => Vec::new(),
            other => vec![other],
        };
        if rows.is_empty() {
            self.write_info("No results");
            return Ok(());
        }

        TableBuilder::new()
            .color(self.color)
            .headers(columns.iter().map(|c| c.title))
            .rows(
                rows.into_iter()
                    .map(|item| columns.iter().map(|c| c.render(item, self.color)).collect::<Vec<_>>()),
            )
            .print();
        Ok(())
    }

    /// Writes a single record as `Field: value` lines.
    pub fn write_record(&self, item: &Value, fields: &[Column]) -> anyhow::Result<()> {
        if self.format == OutputFormat::Json {
            return write_json(item);
        }

        let width = fields.iter().map(|f| f.title.len()).max().unwrap_or(0);
        for field in fields {
            let label = format!("{:width$}", field.title, width = width);
            print_field(&label, &field.render(item, self.color), self.color);
        }
        Ok(())
    }

    /// Writes a response as JSON regardless of format.
    pub fn write_raw(&self, value: &Value) -> anyhow::Result<()> {
        write_json(value)
    }

    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Prints a bold section header with an underline.
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.len()));
}

/// Prints a `key: value` line, dimming the key when colors are on.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_cell() {
        assert_eq!(render_cell(None, false), "-");
        assert_eq!(render_cell(Some(&json!(null)), false), "-");
        assert_eq!(render_cell(Some(&json!("")), false), "-");
        assert_eq!(render_cell(Some(&json!(true)), false), "Yes");
        assert_eq!(render_cell(Some(&json!(42)), false), "42");
        assert_eq!(render_cell(Some(&json!(["a", "b"])), false), "a, b");
        assert_eq!(render_cell(Some(&json!({"a": 1})), false), r#"{"a":1}"#);
    }

    #[test]
    fn test_column_kinds() {
        let item = json!({
            "size": 2048,
            "digest": "sha256:0123456789abcdef0123456789abcdef",
            "tags": [{"name": "latest"}],
        });
        assert_eq!(Column::size("SIZE", "size").render(&item, false), "2.0 KiB");
        assert_eq!(
            Column::digest("DIGEST", "digest").render(&item, false),
            "sha256:0123456789ab..."
        );
        assert_eq!(Column::new("TAG", "tags.0.name").render(&item, false), "latest");
        assert_eq!(Column::names("TAGS", "tags").render(&item, false), "latest");
        assert_eq!(Column::names("LABELS", "labels").render(&item, false), "-");
    }
}
