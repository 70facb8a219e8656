//! PostgreSQL pack repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::PackRow;
use crate::repo::PackRepository;

/// PostgreSQL pack repository
#[derive(Clone)]
pub struct PgPackRepository {
    pool: PgPool,
}

impl PgPackRepository {
    /// Create a new pack repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PackRepository for PgPackRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PackRow>> {
        let pack = sqlx::query_as::<_, PackRow>(
            r#"
            SELECT id, slug, name, description, price_cents, featured, published, created_at
            FROM packs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(pack)
    }

    async fn find_by_slug(&self, slug: &str) -> DbResult<Option<PackRow>> {
        let pack = sqlx::query_as::<_, PackRow>(
            r#"
            SELECT id, slug, name, description, price_cents, featured, published, created_at
            FROM packs
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(pack)
    }

    async fn list_published(&self) -> DbResult<Vec<PackRow>> {
        let packs = sqlx::query_as::<_, PackRow>(
            r#"
            SELECT id, slug, name, description, price_cents, featured, published, created_at
            FROM packs
            WHERE published = TRUE
            ORDER BY featured DESC, price_cents ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(packs)
    }
}
