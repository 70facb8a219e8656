//! Prompt access tiers

use serde::{Deserialize, Serialize};

/// Access tier of a prompt in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptTier {
    /// Accessible to everyone, including anonymous visitors
    Free,
    /// Gated behind the starter pack or a subscription
    Starter,
    /// Gated behind a pro pack or a subscription
    Pro,
}

impl PromptTier {
    /// Whether this tier is accessible without any entitlement
    pub const fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }
}

impl std::fmt::Display for PromptTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Starter => write!(f, "starter"),
            Self::Pro => write!(f, "pro"),
        }
    }
}

impl std::str::FromStr for PromptTier {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "starter" => Ok(Self::Starter),
            "pro" => Ok(Self::Pro),
            _ => Err(TierParseError(s.to_string())),
        }
    }
}

/// Error parsing a tier string
#[derive(Debug, Clone)]
pub struct TierParseError(pub String);

impl std::fmt::Display for TierParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid prompt tier: {}", self.0)
    }
}

impl std::error::Error for TierParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_parsing() {
        assert_eq!("free".parse::<PromptTier>().unwrap(), PromptTier::Free);
        assert_eq!("Starter".parse::<PromptTier>().unwrap(), PromptTier::Starter);
        assert_eq!("PRO".parse::<PromptTier>().unwrap(), PromptTier::Pro);
        assert!("premium".parse::<PromptTier>().is_err());
    }

    #[test]
    fn only_free_is_free() {
        assert!(PromptTier::Free.is_free());
        assert!(!PromptTier::Starter.is_free());
        assert!(!PromptTier::Pro.is_free());
    }
}
