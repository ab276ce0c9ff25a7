//! Go type and composite-literal generation from a parsed JSON value tree.
//!
//! The walk produces two strings per translation: a `type Result struct {...}`
//! declaration whose fields mirror the object's keys in insertion order, and a
//! matching initializer expression populated from the original values. Nested
//! objects recurse one indentation level deeper; the closing brace of a nested
//! block is aligned with the indentation of the enclosing field.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::error::Json2GoError;

/// Name of the single generated declaration.
pub const ROOT_TYPE_NAME: &str = "Result";

#[derive(Debug, Clone, PartialEq, Serialize)]
/// The two output strings of one translation.
pub struct Translation {
    /// Generated `type Result struct { ... }` declaration.
    pub type_declaration: String,
    /// Generated `Result{ ... }` composite-literal expression.
    pub initializer: String,
}

/// Generates the declaration/initializer pair for a top-level JSON object.
pub fn generate_go(fields: &JsonMap<String, JsonValue>) -> Result<Translation, Json2GoError> {
    let (decl, init) = render_struct(fields, 1)?;
    Ok(Translation {
        type_declaration: format!("type {ROOT_TYPE_NAME} {decl}"),
        initializer: format!("{ROOT_TYPE_NAME}{init}"),
    })
}

/// Maps a scalar JSON value to the name of the Go scalar type that holds it.
///
/// Composite values never reach scalar typing; the walker and the array
/// element policy dispatch them first. The fallback arm keeps the function
/// total with a type every Go value satisfies.
fn scalar_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(n) => number_type_name(n),
        JsonValue::String(_) => "string",
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => "interface{}",
    }
}

/// A number with a non-zero fractional part needs `float64`; everything else
/// (including negative zero) fits `int`.
fn number_type_name(n: &serde_json::Number) -> &'static str {
    if n.is_i64() || n.is_u64() {
        return "int";
    }
    match n.as_f64() {
        Some(v) if v.fract() == 0.0 => "int",
        _ => "float64",
    }
}

fn number_literal(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    // JSON numbers outside i64/u64 parse as f64. A whole-valued float is
    // typed `int`, so its literal must not carry a trailing `.0`.
    match n.as_f64() {
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        _ => n.to_string(),
    }
}

/// Returns the exported Go identifier for a JSON object key.
///
/// A key that is case-insensitively `id` becomes fully upper-cased; any other
/// key gets its first character upper-cased with the remainder unchanged.
pub fn exported_field_name(key: &str) -> Result<String, Json2GoError> {
    let mut chars = key.chars();
    let first = chars.next().ok_or_else(|| {
        Json2GoError::FieldError("object key must not be empty".to_string())
    })?;

    if key.eq_ignore_ascii_case("id") {
        return Ok(key.to_ascii_uppercase());
    }

    let mut out = String::with_capacity(key.len());
    out.extend(first.to_uppercase());
    out.push_str(chars.as_str());
    Ok(out)
}

/// Element-type policy for arrays: the first element decides the type.
///
/// Deterministic fallbacks for the shapes the first-element rule cannot type:
/// an empty array is `interface{}`, a scalar mix of `int` and `float64`
/// promotes to `float64`, any other scalar mix falls back to `interface{}`.
/// Mixing composite and scalar elements has no valid Go rendering and fails.
pub fn infer_array_element_type(
    items: &[JsonValue],
    level: usize,
) -> Result<String, Json2GoError> {
    let Some(first) = items.first() else {
        return Ok("interface{}".to_string());
    };

    match first {
        JsonValue::Object(map) => {
            if !items.iter().all(JsonValue::is_object) {
                return Err(Json2GoError::ArrayError(
                    "array mixes object and non-object elements".to_string(),
                ));
            }
            Ok(render_struct(map, level + 1)?.0)
        }
        JsonValue::Array(inner) => {
            if !items.iter().all(JsonValue::is_array) {
                return Err(Json2GoError::ArrayError(
                    "array mixes array and non-array elements".to_string(),
                ));
            }
            Ok(format!("[]{}", infer_array_element_type(inner, level)?))
        }
        _ => {
            if items.iter().any(|v| v.is_object() || v.is_array()) {
                return Err(Json2GoError::ArrayError(
                    "array mixes composite and scalar elements".to_string(),
                ));
            }
            let first_name = scalar_type_name(first);
            if items.iter().all(|v| scalar_type_name(v) == first_name) {
                return Ok(first_name.to_string());
            }
            let numeric = items
                .iter()
                .all(|v| matches!(scalar_type_name(v), "int" | "float64"));
            if numeric {
                Ok("float64".to_string())
            } else {
                Ok("interface{}".to_string())
            }
        }
    }
}

/// Renders one JSON value as a Go literal expression.
///
/// `level` is the indentation depth of the line the literal starts on; scalars
/// ignore it, composite literals indent their bodies one level deeper.
pub fn render_literal(value: &JsonValue, level: usize) -> Result<String, Json2GoError> {
    match value {
        JsonValue::Null => Ok("nil".to_string()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        JsonValue::Number(n) => Ok(number_literal(n)),
        JsonValue::String(s) => Ok(format!("\"{}\"", escape_go_string(s))),
        JsonValue::Array(items) => render_array_literal(items, level),
        JsonValue::Object(map) => Ok(render_struct(map, level + 1)?.1),
    }
}

fn render_array_literal(items: &[JsonValue], level: usize) -> Result<String, Json2GoError> {
    if items.is_empty() {
        return Ok("[]interface{}{}".to_string());
    }

    // Arrays of objects render one type-elided element block per line; the
    // element type is spelled out in the declaration only.
    if items[0].is_object() && items.iter().all(JsonValue::is_object) {
        let tab = "\t".repeat(level);
        let elem_tab = "\t".repeat(level + 1);
        let mut out = String::from("[]{\n");
        for item in items {
            out.push_str(&elem_tab);
            out.push_str(&render_literal(item, level + 1)?);
            out.push_str(",\n");
        }
        out.push_str(&tab);
        out.push('}');
        return Ok(out);
    }

    let elem = infer_array_element_type(items, level)?;
    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        parts.push(render_literal(item, level)?);
    }
    Ok(format!("[]{elem}{{{}}}", parts.join(", ")))
}

/// Walks a JSON object and returns its `(type declaration, initializer)` pair.
///
/// Both strings open with their brace, carry one line per field indented
/// `level` tabs, and close with a brace indented `level - 1` tabs, so a nested
/// block embeds into its enclosing field line with balanced delimiters.
pub fn render_struct(
    fields: &JsonMap<String, JsonValue>,
    level: usize,
) -> Result<(String, String), Json2GoError> {
    let tab = "\t".repeat(level);
    let close = "\t".repeat(level.saturating_sub(1));

    let mut decl = String::from("struct {\n");
    let mut init = String::from("{\n");
    let mut seen: HashMap<String, String> = HashMap::new();

    for (key, value) in fields {
        let field = exported_field_name(key)?;
        if let Some(previous) = seen.insert(field.clone(), key.clone()) {
            return Err(Json2GoError::FieldError(format!(
                "keys '{previous}' and '{key}' both map to field '{field}'"
            )));
        }

        match value {
            JsonValue::Object(inner) => {
                let (inner_decl, inner_init) = render_struct(inner, level + 1)?;
                decl.push_str(&format!("{tab}{field} {inner_decl} `json:\"{key}\"`\n"));
                init.push_str(&format!("{tab}{field}: {inner_init},\n"));
            }
            JsonValue::Array(items) => {
                let elem = infer_array_element_type(items, level)?;
                decl.push_str(&format!("{tab}{field} []{elem} `json:\"{key}\"`\n"));
                init.push_str(&format!(
                    "{tab}{field}: {},\n",
                    render_literal(value, level)?
                ));
            }
            scalar => {
                decl.push_str(&format!(
                    "{tab}{field} {} `json:\"{key}\"`\n",
                    scalar_type_name(scalar)
                ));
                init.push_str(&format!(
                    "{tab}{field}: {},\n",
                    render_literal(scalar, level)?
                ));
            }
        }
    }

    decl.push_str(&close);
    decl.push('}');
    init.push_str(&close);
    init.push('}');
    Ok((decl, init))
}

fn escape_go_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
