//! Identifier generation for profile and payload UUID fields.

use serde::{Deserialize, Serialize};

/// A fresh random identifier in canonical 8-4-4-4-12 form, upper-cased.
///
/// Used wherever the profile format requires a `PayloadUUID`, and as the
/// instance-unique suffix of dotted identifier paths. Generated fresh per
/// call; never persisted or reused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Generate a fresh identifier from a new random UUID v4.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
