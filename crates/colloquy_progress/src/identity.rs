//! Learner identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A learner within a study group. Each identity owns one ledger.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerIdentity {
    /// Group (class) the learner belongs to.
    pub group_id: String,
    /// Learner's display name.
    pub name: String,
}

impl LearnerIdentity {
    /// Creates an identity, trimming both parts.
    #[must_use]
    pub fn new(group_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into().trim().to_string(),
            name: name.into().trim().to_string(),
        }
    }

    /// Storage key, `"<group>:<name>"`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.name)
    }
}

impl Default for LearnerIdentity {
    fn default() -> Self {
        Self::new("local", "learner")
    }
}

impl fmt::Display for LearnerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.group_id)
    }
}
