//! PostgreSQL prompt repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::PromptRow;
use crate::repo::{PromptQuery, PromptRepository};

/// PostgreSQL prompt repository
#[derive(Clone)]
pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    /// Create a new prompt repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Filters are passed as nullable binds so the query text stays static; a NULL
// bind disables the corresponding predicate.
const LIST_FILTER: &str = r#"
    published = TRUE
    AND ($1::text IS NULL OR category = $1)
    AND ($2::text IS NULL OR tier = $2)
    AND ($3::bool IS NULL OR featured = $3)
    AND ($4::text IS NULL
         OR title ILIKE '%' || $4 || '%'
         OR description ILIKE '%' || $4 || '%'
         OR $4 = ANY(tags))
"#;

#[async_trait]
impl PromptRepository for PgPromptRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PromptRow>> {
        let prompt = sqlx::query_as::<_, PromptRow>(
            r#"
            SELECT id, title, description, content, category, tier, pack_id, tags,
                   featured, published, view_count, copy_count, rating,
                   created_at, updated_at
            FROM prompts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(prompt)
    }

    async fn list(&self, query: &PromptQuery) -> DbResult<Vec<PromptRow>> {
        let sql = format!(
            r#"
            SELECT id, title, description, content, category, tier, pack_id, tags,
                   featured, published, view_count, copy_count, rating,
                   created_at, updated_at
            FROM prompts
            WHERE {LIST_FILTER}
            ORDER BY featured DESC, rating DESC, created_at DESC
            LIMIT $5 OFFSET $6
            "#
        );

        let prompts = sqlx::query_as::<_, PromptRow>(&sql)
            .bind(&query.category)
            .bind(&query.tier)
            .bind(query.featured)
            .bind(&query.search)
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(prompts)
    }

    async fn count(&self, query: &PromptQuery) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM prompts WHERE {LIST_FILTER}");

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(&query.category)
            .bind(&query.tier)
            .bind(query.featured)
            .bind(&query.search)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn list_featured(&self, limit: i64) -> DbResult<Vec<PromptRow>> {
        let prompts = sqlx::query_as::<_, PromptRow>(
            r#"
            SELECT id, title, description, content, category, tier, pack_id, tags,
                   featured, published, view_count, copy_count, rating,
                   created_at, updated_at
            FROM prompts
            WHERE featured = TRUE AND published = TRUE
            ORDER BY rating DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(prompts)
    }

    async fn increment_view_count(&self, id: Uuid) -> DbResult<()> {
        sqlx::query("UPDATE prompts SET view_count = view_count + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn increment_copy_count(&self, id: Uuid) -> DbResult<()> {
        sqlx::query("UPDATE prompts SET copy_count = copy_count + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
