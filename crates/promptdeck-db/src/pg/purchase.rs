//! PostgreSQL purchase repository implementation
//!
//! Purchases are append-only; the table carries a unique index on
//! `stripe_payment_id` so a redelivered checkout event cannot insert twice.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::PurchaseRow;
use crate::repo::{CreatePurchase, PurchaseRepository};

/// PostgreSQL purchase repository
#[derive(Clone)]
pub struct PgPurchaseRepository {
    pool: PgPool,
}

impl PgPurchaseRepository {
    /// Create a new purchase repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PurchaseRepository for PgPurchaseRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PurchaseRow>> {
        let purchase = sqlx::query_as::<_, PurchaseRow>(
            r#"
            SELECT id, user_id, pack_id, subscription_type,
                   stripe_payment_id, amount_cents, created_at
            FROM purchases
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(purchase)
    }

    async fn find_by_stripe_payment_id(
        &self,
        payment_id: &str,
    ) -> DbResult<Option<PurchaseRow>> {
        let purchase = sqlx::query_as::<_, PurchaseRow>(
            r#"
            SELECT id, user_id, pack_id, subscription_type,
                   stripe_payment_id, amount_cents, created_at
            FROM purchases
            WHERE stripe_payment_id = $1
            "#,
        )
        .bind(payment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(purchase)
    }

    async fn find_by_user_and_pack(
        &self,
        user_id: Uuid,
        pack_id: Uuid,
    ) -> DbResult<Option<PurchaseRow>> {
        let purchase = sqlx::query_as::<_, PurchaseRow>(
            r#"
            SELECT id, user_id, pack_id, subscription_type,
                   stripe_payment_id, amount_cents, created_at
            FROM purchases
            WHERE user_id = $1 AND pack_id = $2
            "#,
        )
        .bind(user_id)
        .bind(pack_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(purchase)
    }

    async fn list_by_user_id(&self, user_id: Uuid) -> DbResult<Vec<PurchaseRow>> {
        let purchases = sqlx::query_as::<_, PurchaseRow>(
            r#"
            SELECT id, user_id, pack_id, subscription_type,
                   stripe_payment_id, amount_cents, created_at
            FROM purchases
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(purchases)
    }

    async fn create(&self, purchase: CreatePurchase) -> DbResult<PurchaseRow> {
        let row = sqlx::query_as::<_, PurchaseRow>(
            r#"
            INSERT INTO purchases (id, user_id, pack_id, subscription_type,
                                   stripe_payment_id, amount_cents)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, pack_id, subscription_type,
                      stripe_payment_id, amount_cents, created_at
            "#,
        )
        .bind(purchase.id)
        .bind(purchase.user_id)
        .bind(purchase.pack_id)
        .bind(&purchase.subscription_type)
        .bind(&purchase.stripe_payment_id)
        .bind(purchase.amount_cents)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
