//! Entitlement checking
//!
//! Decides whether a user may view a given prompt's full content. The
//! decision is read-only and evaluated fresh on every call: subscription and
//! purchase state changes asynchronously through the payment webhook, so a
//! cached answer could grant or deny stale access.

use promptdeck_db::{PromptRow, PurchaseRepository, UserRepository};
use promptdeck_types::{SubscriptionStatus, SubscriptionTier, UserId};
use std::sync::Arc;
use tracing::debug;

use crate::CatalogError;

/// Entitlement checker
#[derive(Clone)]
pub struct EntitlementChecker<U, P> {
    users: Arc<U>,
    purchases: Arc<P>,
}

impl<U: UserRepository, P: PurchaseRepository> EntitlementChecker<U, P> {
    /// Create a new entitlement checker
    pub fn new(users: Arc<U>, purchases: Arc<P>) -> Self {
        Self { users, purchases }
    }

    /// Check whether a user (or anonymous visitor) may access a prompt.
    ///
    /// Access is granted when any of the following holds:
    /// - the prompt's tier is free;
    /// - the user holds an active premium subscription;
    /// - the user has a purchase for the prompt's pack.
    pub async fn has_access(
        &self,
        user_id: Option<UserId>,
        prompt: &PromptRow,
    ) -> Result<bool, CatalogError> {
        // Free prompts are accessible to everyone
        if prompt.prompt_tier().is_some_and(|t| t.is_free()) {
            return Ok(true);
        }

        // Anonymous visitors can't access gated content
        let Some(user_id) = user_id else {
            return Ok(false);
        };

        let Some(user) = self.users.find_by_id(user_id.0).await? else {
            debug!(user_id = %user_id, "Entitlement check for unknown user");
            return Ok(false);
        };

        // An active premium subscription grants every non-free prompt
        let premium = user
            .subscription_tier
            .as_deref()
            .and_then(|t| t.parse::<SubscriptionTier>().ok())
            == Some(SubscriptionTier::Premium);
        let active = user.status() == Some(SubscriptionStatus::Active);
        if premium && active {
            return Ok(true);
        }

        // Otherwise access requires a purchase of the prompt's pack
        if let Some(pack_id) = prompt.pack_id {
            let purchase = self
                .purchases
                .find_by_user_and_pack(user_id.0, pack_id)
                .await?;
            return Ok(purchase.is_some());
        }

        Ok(false)
    }
}

impl<U, P> std::fmt::Debug for EntitlementChecker<U, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntitlementChecker").finish()
    }
}
