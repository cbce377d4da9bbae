// Helper functions for safe logging

use serde_json::Value;

/// Field names whose values are never written to logs
const SECRET_FIELDS: &[&str] = &["password"];

fn is_secret(key: &str) -> bool {
    SECRET_FIELDS.iter().any(|s| s.eq_ignore_ascii_case(key))
}

/// Masks secret values in a JSON document, at any depth
pub fn redact_json(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map.iter_mut() {
                if is_secret(key) {
                    *v = Value::String("***".to_string());
                } else {
                    redact_json(v);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_json),
        _ => {}
    }
}

/// Masks secret values in a form-urlencoded body
///
/// # Example
/// ```
/// let masked = redact_form("username=alice&password=abc123!");
/// // Returns: "username=alice&password=***"
/// ```
pub fn redact_form(body: &str) -> String {
    body.split('&')
        .map(|pair| {
            let (key, _) = pair.split_once('=').unwrap_or((pair, ""));
            let decoded = urlencoding::decode(&key.replace('+', " "))
                .map(|k| k.into_owned())
                .unwrap_or_else(|_| key.to_string());
            if is_secret(&decoded) {
                format!("{}=***", key)
            } else {
                pair.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Masks secrets in a request or response body. JSON bodies are
/// pretty-printed; anything else is treated as form data.
pub fn redact_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(mut json) => {
            redact_json(&mut json);
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| "***".to_string())
        }
        Err(_) => redact_form(body),
    }
}
