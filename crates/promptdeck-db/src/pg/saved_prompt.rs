//! PostgreSQL saved-prompt (bookmark) repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::PromptRow;
use crate::repo::SavedPromptRepository;

/// PostgreSQL saved-prompt repository
#[derive(Clone)]
pub struct PgSavedPromptRepository {
    pool: PgPool,
}

impl PgSavedPromptRepository {
    /// Create a new saved-prompt repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SavedPromptRepository for PgSavedPromptRepository {
    async fn save(&self, user_id: Uuid, prompt_id: Uuid) -> DbResult<()> {
        // (user_id, prompt_id) is unique; a repeated save is a no-op
        sqlx::query(
            r#"
            INSERT INTO saved_prompts (id, user_id, prompt_id)
            VALUES (gen_random_uuid(), $1, $2)
            ON CONFLICT (user_id, prompt_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(prompt_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn unsave(&self, user_id: Uuid, prompt_id: Uuid) -> DbResult<()> {
        sqlx::query("DELETE FROM saved_prompts WHERE user_id = $1 AND prompt_id = $2")
            .bind(user_id)
            .bind(prompt_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> DbResult<Vec<PromptRow>> {
        let prompts = sqlx::query_as::<_, PromptRow>(
            r#"
            SELECT p.id, p.title, p.description, p.content, p.category, p.tier,
                   p.pack_id, p.tags, p.featured, p.published,
                   p.view_count, p.copy_count, p.rating, p.created_at, p.updated_at
            FROM saved_prompts s
            JOIN prompts p ON p.id = s.prompt_id
            WHERE s.user_id = $1
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(prompts)
    }
}
