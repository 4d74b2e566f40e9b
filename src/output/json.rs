//
//  harbor-cli
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON Output
//!
//! Pretty-printing of API responses for `--json` and `harbor api`, plus
//! dotted-path lookup used to pull table cells out of a response.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

/// Writes a value as pretty-printed JSON to stdout.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value)
}

/// Writes a value as pretty-printed JSON followed by a newline.
///
/// # Example
///
/// ```rust
/// use harbor_cli::output::write_json_to;
///
/// let mut buffer = Vec::new();
/// write_json_to(&mut buffer, &serde_json::json!({"name": "library"}))?;
/// assert_eq!(String::from_utf8(buffer)?, "{\n  \"name\": \"library\"\n}\n");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Looks up a dotted path such as `metadata.public` or `tags.0.name`.
///
/// Numeric segments index into arrays. Returns `None` when any segment is
/// missing.
///
/// ```rust
/// use harbor_cli::output::lookup;
/// use serde_json::json;
///
/// let artifact = json!({"tags": [{"name": "latest"}], "extra_attrs": {"os": "linux"}});
/// assert_eq!(lookup(&artifact, "tags.0.name"), Some(&json!("latest")));
/// assert_eq!(lookup(&artifact, "extra_attrs.arch"), None);
/// ```
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested() {
        let value = json!({"metadata": {"public": "true"}, "count": 3});
        assert_eq!(lookup(&value, "metadata.public"), Some(&json!("true")));
        assert_eq!(lookup(&value, "count"), Some(&json!(3)));
        assert_eq!(lookup(&value, "count.inner"), None);
    }

    #[test]
    fn test_lookup_array_index() {
        let value = json!([{"name": "a"}, {"name": "b"}]);
        assert_eq!(lookup(&value, "1.name"), Some(&json!("b")));
        assert_eq!(lookup(&value, "x.name"), None);
    }

    #[test]
    fn test_write_json_to_null() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &Value::Null).unwrap();
        assert_eq!(buffer, b"null\n");
    }
}
