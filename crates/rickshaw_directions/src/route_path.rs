use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Route geometry document returned by a directions provider.
///
/// The document is passed through to clients untouched, so it is kept as an
/// opaque JSON value. A failed resolution is represented by the empty object
/// rather than an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(Value);

impl RoutePath {
    pub fn resolved(document: Value) -> Self {
        RoutePath(document)
    }

    pub fn unresolved() -> Self {
        RoutePath(Value::Object(serde_json::Map::new()))
    }

    pub fn is_resolved(&self) -> bool {
        match &self.0 {
            Value::Object(map) => !map.is_empty(),
            Value::Null => false,
            _ => true,
        }
    }

    pub fn document(&self) -> &Value {
        &self.0
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        RoutePath::unresolved()
    }
}
