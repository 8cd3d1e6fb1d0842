//! JSON key case conversion between the client (camelCase) and the
//! server (`snake_case`).

use heck::{ToLowerCamelCase, ToSnakeCase};
use serde_json::{Map, Value};

/// Target case for object keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCase {
    /// `snake_case`, sent to the server.
    Snake,
    /// `camelCase`, handed to the client.
    Camel,
}

impl KeyCase {
    /// Converts a single key.
    #[must_use]
    pub fn apply(self, key: &str) -> String {
        match self {
            Self::Snake => key.to_snake_case(),
            Self::Camel => key.to_lower_camel_case(),
        }
    }
}

/// Rewrites every object key of `value`, recursively, into `case`.
///
/// Values are untouched; arrays are walked element by element.
#[must_use]
pub fn convert_keys(value: Value, case: KeyCase) -> Value {
    match value {
        Value::Object(map) => {
            let converted: Map<String, Value> = map
                .into_iter()
                .map(|(key, value)| (case.apply(&key), convert_keys(value, case)))
                .collect();
            Value::Object(converted)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| convert_keys(item, case))
                .collect(),
        ),
        other => other,
    }
}
