//! Catalog identifiers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique prompt identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromptId(pub Uuid);

impl PromptId {
    /// Create a new random prompt ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a prompt ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for PromptId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PromptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PromptId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Unique pack identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackId(pub Uuid);

impl PackId {
    /// Create a new random pack ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a pack ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for PackId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PackId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
