//! Purchase record types

use serde::{Deserialize, Serialize};

use crate::PackId;

/// What a completed checkout paid for.
///
/// A purchase row references exactly one of a pack or a subscription event,
/// never both and never neither; this enum makes the invariant
/// unrepresentable in the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseRef {
    /// One-time purchase of a prompt pack
    Pack(PackId),
    /// Subscription checkout, tagged with the plan name (e.g. `premium-monthly`)
    Subscription(String),
}

impl PurchaseRef {
    /// The pack this purchase references, if it is a pack purchase
    pub fn pack_id(&self) -> Option<PackId> {
        match self {
            Self::Pack(id) => Some(*id),
            Self::Subscription(_) => None,
        }
    }

    /// The subscription plan name, if it is a subscription purchase
    pub fn subscription_type(&self) -> Option<&str> {
        match self {
            Self::Pack(_) => None,
            Self::Subscription(plan) => Some(plan),
        }
    }
}
