use serde::{Deserialize, Serialize};
use serde_json::Value;

// ===== Service Response Types =====

/// Candidate as stored and echoed back by the backend.
///
/// Kept as the raw JSON body so nothing the server returns is lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredCandidate(Value);

impl StoredCandidate {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Server-assigned identifier, whatever JSON type the backend uses for it
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn created_at(&self) -> Option<&str> {
        self.0.get("createdAt").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for StoredCandidate {
    fn from(body: Value) -> Self {
        Self(body)
    }
}
