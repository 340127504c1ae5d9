use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for model objects.
///
/// Stored as a plain string so identifiers read from files survive
/// round-trips even when they are not UUID-formatted.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct Uid(String);

impl From<&str> for Uid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Uid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Default for Uid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Uid {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a readable identifier like `People_1a2b3c4d`.
    pub fn with_prefix(prefix: &str) -> Self {
        let id = Uuid::new_v4().simple().to_string();
        Self(format!("{}_{}", prefix, &id[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
