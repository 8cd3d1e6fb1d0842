//! Request payloads.
//!
//! A payload is a JSON object whose key order is the order in which the
//! caller inserted the keys. GET requests turn it into a query string,
//! every other method sends it as the body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// Default payload entries registered with an endpoint.
pub type DefaultPayload = &'static [(&'static str, &'static str)];

/// A JSON object payload with insertion-ordered keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builds a payload from a JSON value, which must be an object.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPayload` if the value is not an object.
    pub fn from_value(value: Value) -> DomainResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DomainError::InvalidPayload(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// Builds a payload from any serializable value that serializes to an object.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPayload` if serialization fails or
    /// does not produce an object.
    pub fn from_serializable<T: Serialize>(value: &T) -> DomainResult<Self> {
        let value =
            serde_json::to_value(value).map_err(|e| DomainError::InvalidPayload(e.to_string()))?;
        Self::from_value(value)
    }

    /// Inserts a key, replacing any previous value under that key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts a key, replacing any previous value under that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if the payload has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns the payload as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Lays this payload over endpoint defaults.
    ///
    /// Defaults come first, caller keys replace defaults with the same name.
    #[must_use]
    pub fn over_defaults(payload: Option<&Self>, defaults: DefaultPayload) -> Self {
        let mut merged = Map::new();
        for (key, value) in defaults {
            merged.insert((*key).to_string(), Value::from(*value));
        }
        if let Some(payload) = payload {
            for (key, value) in &payload.0 {
                merged.insert(key.clone(), value.clone());
            }
        }
        Self(merged)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Payload> for Value {
    fn from(payload: Payload) -> Self {
        Self::Object(payload.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_value_requires_object() {
        assert!(Payload::from_value(json!({"a": 1})).is_ok());
        assert!(matches!(
            Payload::from_value(json!([1, 2])),
            Err(DomainError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_caller_keys_override_defaults() {
        let payload = Payload::new()
            .with("app", "private")
            .with("email", "a@b.c");
        let merged = Payload::over_defaults(Some(&payload), &[("app", "public"), ("lang", "fr")]);

        assert_eq!(merged.get("app"), Some(&json!("private")));
        assert_eq!(merged.get("lang"), Some(&json!("fr")));
        assert_eq!(merged.get("email"), Some(&json!("a@b.c")));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_defaults_alone_when_no_payload() {
        let merged = Payload::over_defaults(None, &[("app", "public")]);
        assert_eq!(merged.to_value(), json!({"app": "public"}));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let payload = Payload::new().with("z", 1).with("a", 2).with("m", 3);
        let keys: Vec<_> = payload.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
