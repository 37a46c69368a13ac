use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix carried by every generated task identifier.
pub const TASK_ID_PREFIX: &str = "DEMO_TASK_";

/// Opaque identifier of an account.
///
/// The demo deployment only ever knows one of these, but handlers compare
/// against it through this type rather than raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a user ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl PartialEq<str> for UserId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Identifier handed back for a generated task.
///
/// Tasks are never stored, so the ID only needs to be distinct per call:
/// `DEMO_TASK_` followed by eight random lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new random task ID.
    pub fn new() -> Self {
        let random = Uuid::new_v4().simple().to_string();
        Self(format!("{TASK_ID_PREFIX}{}", &random[..8]))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
