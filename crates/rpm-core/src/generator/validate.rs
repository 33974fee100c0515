//! Validation of an untyped reply against the result schema.
//!
//! The walker understands the subset of the schema dialect produced by
//! [`crate::prompt::result_schema`]: OBJECT with `properties`/`required`,
//! ARRAY with `items`, STRING and INTEGER. Properties the schema does not
//! name are allowed and ignored.

use serde_json::Value;

use crate::{
    error::{Result, RpmError},
    prompt::schema::{TYPE_ARRAY, TYPE_INTEGER, TYPE_OBJECT, TYPE_STRING},
};

/// Check `value` against `schema`, failing on the first mismatch with the JSON
/// path of the offending value.
pub fn validate(value: &Value, schema: &Value) -> Result<()> {
    check(value, schema, "$")
}

fn check(value: &Value, schema: &Value, path: &str) -> Result<()> {
    let expected = schema.get("type").and_then(Value::as_str).unwrap_or_default();
    match expected {
        TYPE_OBJECT => {
            let Some(object) = value.as_object() else {
                return Err(mismatch(path, expected, value));
            };
            if let Some(required) = schema.get("required").and_then(Value::as_array) {
                for name in required.iter().filter_map(Value::as_str) {
                    if !object.contains_key(name) {
                        return Err(RpmError::schema_violation(join(path, name))
                            .with_reason("required field is missing"));
                    }
                }
            }
            if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
                for (name, property) in properties {
                    if let Some(child) = object.get(name) {
                        check(child, property, &join(path, name))?;
                    }
                }
            }
            Ok(())
        }
        TYPE_ARRAY => {
            let Some(items) = value.as_array() else {
                return Err(mismatch(path, expected, value));
            };
            if let Some(item_schema) = schema.get("items") {
                for (index, item) in items.iter().enumerate() {
                    check(item, item_schema, &format!("{path}[{index}]"))?;
                }
            }
            Ok(())
        }
        TYPE_STRING if value.is_string() => Ok(()),
        TYPE_INTEGER if is_integer(value) => Ok(()),
        TYPE_STRING | TYPE_INTEGER => Err(mismatch(path, expected, value)),
        _ => Ok(()),
    }
}

/// Integral JSON numbers only; `3.0` is a float and rejected.
fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

fn join(path: &str, name: &str) -> String {
    if path == "$" {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn mismatch(path: &str, expected: &str, value: &Value) -> RpmError {
    RpmError::schema_violation(path)
        .with_reason(format!("expected {expected}, found {}", kind(value)))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
