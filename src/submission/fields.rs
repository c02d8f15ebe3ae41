use serde_json::{Map, Value};

use crate::models::Fields;

/// Longest accepted field name, in bytes.
pub const MAX_KEY_LEN: usize = 64;

/// Flatten a parsed body into string fields.
///
/// Scalars are stored as their text form and `null` as an empty string.
/// Nested arrays or objects, empty or oversized keys, NUL characters in a key
/// or value, and bodies with more than `max_fields` keys are rejected.
pub fn flatten(raw: Map<String, Value>, max_fields: usize) -> Result<Fields, String> {
    if raw.len() > max_fields {
        return Err(format!(
            "Too many fields: {} (limit {max_fields})",
            raw.len()
        ));
    }

    let mut fields = Fields::new();
    for (key, value) in raw {
        if key.is_empty() {
            return Err("Empty field name".to_string());
        }
        if key.len() > MAX_KEY_LEN {
            return Err(format!("Field name too long: {} bytes", key.len()));
        }
        if key.contains('\0') {
            return Err("NUL character in field name".to_string());
        }

        let text = match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(format!("Nested value not supported: {key}"));
            }
        };
        if text.contains('\0') {
            return Err(format!("NUL character in field: {key}"));
        }
        fields.insert(key, text);
    }

    Ok(fields)
}
