//! Repository traits
//!
//! Define async repository interfaces for database operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::*;

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>>;

    /// Find a user by Stripe customer ID
    async fn find_by_stripe_customer_id(&self, customer_id: &str) -> DbResult<Option<UserRow>>;

    /// Store the user's Stripe customer ID
    async fn update_stripe_customer_id(&self, id: Uuid, customer_id: &str) -> DbResult<()>;

    /// Update the user's subscription status and tier.
    ///
    /// The status string is stored verbatim as reported by the payment
    /// processor; `tier` is `Some("premium")` while the subscription is
    /// active and cleared otherwise.
    async fn update_subscription(
        &self,
        id: Uuid,
        status: &str,
        tier: Option<&str>,
    ) -> DbResult<()>;
}

/// Pack repository trait
#[async_trait]
pub trait PackRepository: Send + Sync {
    /// Find a pack by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PackRow>>;

    /// Find a pack by slug
    async fn find_by_slug(&self, slug: &str) -> DbResult<Option<PackRow>>;

    /// List published packs
    async fn list_published(&self) -> DbResult<Vec<PackRow>>;
}

/// Filters for listing prompts. All filters are conjunctive; `search` matches
/// title/description substrings case-insensitively or an exact tag.
#[derive(Debug, Clone, Default)]
pub struct PromptQuery {
    pub category: Option<String>,
    pub tier: Option<String>,
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub limit: i64,
    pub offset: i64,
}

/// Prompt repository trait
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Find a prompt by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PromptRow>>;

    /// List published prompts matching the query, ordered featured first,
    /// then rating, then newest
    async fn list(&self, query: &PromptQuery) -> DbResult<Vec<PromptRow>>;

    /// Count published prompts matching the query (ignores limit/offset)
    async fn count(&self, query: &PromptQuery) -> DbResult<i64>;

    /// List featured published prompts by rating
    async fn list_featured(&self, limit: i64) -> DbResult<Vec<PromptRow>>;

    /// Increment the view counter
    async fn increment_view_count(&self, id: Uuid) -> DbResult<()>;

    /// Increment the copy counter
    async fn increment_copy_count(&self, id: Uuid) -> DbResult<()>;
}

/// Purchase repository trait. Purchases are append-only: there is no update
/// operation by design.
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    /// Find a purchase by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PurchaseRow>>;

    /// Find a purchase by the processor's payment reference
    async fn find_by_stripe_payment_id(&self, payment_id: &str)
        -> DbResult<Option<PurchaseRow>>;

    /// Find a purchase linking a user to a pack
    async fn find_by_user_and_pack(
        &self,
        user_id: Uuid,
        pack_id: Uuid,
    ) -> DbResult<Option<PurchaseRow>>;

    /// List all purchases for a user, newest first
    async fn list_by_user_id(&self, user_id: Uuid) -> DbResult<Vec<PurchaseRow>>;

    /// Insert a new purchase
    async fn create(&self, purchase: CreatePurchase) -> DbResult<PurchaseRow>;
}

/// Create purchase input
#[derive(Debug, Clone)]
pub struct CreatePurchase {
    pub id: Uuid,
    pub user_id: Uuid,
    pub pack_id: Option<Uuid>,
    pub subscription_type: Option<String>,
    pub stripe_payment_id: String,
    pub amount_cents: i64,
}

/// Saved prompt (bookmark) repository trait
#[async_trait]
pub trait SavedPromptRepository: Send + Sync {
    /// Bookmark a prompt for a user; saving twice is a no-op
    async fn save(&self, user_id: Uuid, prompt_id: Uuid) -> DbResult<()>;

    /// Remove a bookmark
    async fn unsave(&self, user_id: Uuid, prompt_id: Uuid) -> DbResult<()>;

    /// List a user's bookmarked prompts, most recently saved first
    async fn list_for_user(&self, user_id: Uuid) -> DbResult<Vec<PromptRow>>;
}
