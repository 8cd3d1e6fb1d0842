//! Query string building for GET payloads.

use serde_json::Value;

use super::payload::Payload;

/// A query parameter key-value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    /// The parameter key
    pub key: String,
    /// The parameter value, already rendered as text
    pub value: String,
}

impl QueryParam {
    /// Creates a new query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An ordered list of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    items: Vec<QueryParam>,
}

impl QueryParams {
    /// Creates an empty query parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Flattens a payload into query parameters.
    ///
    /// Array values produce one parameter per element, in element order.
    #[must_use]
    pub fn from_payload(payload: &Payload) -> Self {
        let mut params = Self::new();
        for (key, value) in payload.iter() {
            match value {
                Value::Array(items) => {
                    for item in items {
                        params.add(QueryParam::new(key.clone(), render_scalar(item)));
                    }
                }
                other => params.add(QueryParam::new(key.clone(), render_scalar(other))),
            }
        }
        params
    }

    /// Adds a query parameter to the collection.
    pub fn add(&mut self, param: QueryParam) {
        self.items.push(param);
    }

    /// Returns all parameters.
    #[must_use]
    pub fn all(&self) -> &[QueryParam] {
        &self.items
    }

    /// Returns the number of parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Joins the parameters as `key=value` pairs separated by `&`.
    ///
    /// Values are written as-is; the server expects them unescaped.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.items
            .iter()
            .map(|p| format!("{}={}", p.key, p.value))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl FromIterator<QueryParam> for QueryParams {
    fn from_iter<T: IntoIterator<Item = QueryParam>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Nested structures are not expected in GET payloads; keep them readable.
        other => other.to_string(),
    }
}
