//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// User row from the database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub stripe_customer_id: Option<String>,
    pub subscription_status: String,
    pub subscription_tier: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Pack row from the database
#[derive(Debug, Clone, FromRow)]
pub struct PackRow {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Prompt row from the database
#[derive(Debug, Clone, FromRow)]
pub struct PromptRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: String,
    pub tier: String,
    pub pack_id: Option<Uuid>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
    pub view_count: i64,
    pub copy_count: i64,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Purchase row from the database
#[derive(Debug, Clone, FromRow)]
pub struct PurchaseRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub pack_id: Option<Uuid>,
    pub subscription_type: Option<String>,
    pub stripe_payment_id: String,
    pub amount_cents: i64,
    pub created_at: DateTime<Utc>,
}

/// Saved prompt (bookmark) row from the database
#[derive(Debug, Clone, FromRow)]
pub struct SavedPromptRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub prompt_id: Uuid,
    pub created_at: DateTime<Utc>,
}

// Conversion helpers from row types to promptdeck-types domain types

impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> promptdeck_types::UserId {
        promptdeck_types::UserId(self.id)
    }

    /// Parsed subscription status; unrecognized processor statuses are `None`
    pub fn status(&self) -> Option<promptdeck_types::SubscriptionStatus> {
        self.subscription_status.parse().ok()
    }
}

impl PromptRow {
    /// Convert to domain PromptId
    pub fn prompt_id(&self) -> promptdeck_types::PromptId {
        promptdeck_types::PromptId(self.id)
    }

    /// Parsed prompt tier
    pub fn prompt_tier(&self) -> Option<promptdeck_types::PromptTier> {
        self.tier.parse().ok()
    }
}

impl PackRow {
    /// Convert to domain PackId
    pub fn pack_id(&self) -> promptdeck_types::PackId {
        promptdeck_types::PackId(self.id)
    }
}
