//! Indented dump of any domain object, for debugging and the CLI.

use crate::client::ApiResult;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{self, Write};

const INDENT: usize = 4;

/// Render `value` as an indented outline under `label`. With `hide_values`
/// only the field names are printed, which shows the schema of a response.
pub fn describe<T: Serialize>(label: &str, value: &T, hide_values: bool) -> ApiResult<String> {
    let tree = serde_json::to_value(value)?;
    let mut out = String::new();
    write_node(&mut out, label, &tree, 0, hide_values)?;
    Ok(out)
}

fn write_node(
    out: &mut String,
    label: &str,
    value: &Value,
    depth: usize,
    hide_values: bool,
) -> fmt::Result {
    let pad = " ".repeat(depth * INDENT);
    match value {
        Value::Object(fields) => {
            writeln!(out, "{pad}{label}:")?;
            for (key, field) in fields {
                write_node(out, key, field, depth + 1, hide_values)?;
            }
            Ok(())
        }
        Value::Array(items) if items.is_empty() => writeln!(out, "{pad}{label}: []"),
        Value::Array(items) => {
            writeln!(out, "{pad}{label}:")?;
            for (i, item) in items.iter().enumerate() {
                write_node(out, &format!("[{i}]"), item, depth + 1, hide_values)?;
            }
            Ok(())
        }
        _ if hide_values => writeln!(out, "{pad}{label}"),
        Value::String(s) => writeln!(out, "{pad}{label}: {s}"),
        scalar => writeln!(out, "{pad}{label}: {scalar}"),
    }
}
