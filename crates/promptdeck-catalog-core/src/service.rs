//! Catalog service

use promptdeck_db::{PromptQuery, PromptRepository, PromptRow, SavedPromptRepository};
use promptdeck_types::{PromptId, UserId};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::CatalogError;

/// Default page size when the caller doesn't specify one
const DEFAULT_LIMIT: i64 = 50;
/// Upper bound on page size
const MAX_LIMIT: i64 = 100;

/// A page of prompts plus the total count matching the filter
#[derive(Debug, Clone)]
pub struct PromptPage {
    /// Prompts on this page
    pub prompts: Vec<PromptRow>,
    /// Total matching prompts, ignoring pagination
    pub total: i64,
}

/// Catalog service
pub struct CatalogService<P, S> {
    prompts: Arc<P>,
    saved: Arc<S>,
}

impl<P: PromptRepository, S: SavedPromptRepository> CatalogService<P, S> {
    /// Create a new catalog service
    pub fn new(prompts: Arc<P>, saved: Arc<S>) -> Self {
        Self { prompts, saved }
    }

    /// List published prompts matching the filter, with a total count
    #[instrument(skip(self))]
    pub async fn list_prompts(&self, query: &PromptQuery) -> Result<PromptPage, CatalogError> {
        let mut query = query.clone();
        if query.limit <= 0 {
            query.limit = DEFAULT_LIMIT;
        }
        query.limit = query.limit.min(MAX_LIMIT);
        query.offset = query.offset.max(0);

        let prompts = self.prompts.list(&query).await?;
        let total = self.prompts.count(&query).await?;

        debug!(returned = prompts.len(), total, "Listed prompts");

        Ok(PromptPage { prompts, total })
    }

    /// Fetch a single prompt and record the view.
    ///
    /// The view counter is telemetry: a failed increment is logged and does
    /// not fail the fetch.
    #[instrument(skip(self))]
    pub async fn get_prompt(&self, id: PromptId) -> Result<PromptRow, CatalogError> {
        let prompt = self
            .prompts
            .find_by_id(id.0)
            .await?
            .ok_or(CatalogError::PromptNotFound)?;

        if let Err(e) = self.prompts.increment_view_count(id.0).await {
            warn!(prompt_id = %id, error = %e, "Failed to record prompt view");
        }

        Ok(prompt)
    }

    /// Record that a prompt's content was copied
    #[instrument(skip(self))]
    pub async fn record_copy(&self, id: PromptId) -> Result<(), CatalogError> {
        self.prompts.increment_copy_count(id.0).await?;
        Ok(())
    }

    /// List featured prompts ordered by rating
    pub async fn featured_prompts(&self, limit: i64) -> Result<Vec<PromptRow>, CatalogError> {
        let limit = if limit <= 0 { 6 } else { limit.min(MAX_LIMIT) };
        Ok(self.prompts.list_featured(limit).await?)
    }

    /// Bookmark a prompt for a user
    #[instrument(skip(self))]
    pub async fn save_prompt(&self, user_id: UserId, id: PromptId) -> Result<(), CatalogError> {
        // Verify the prompt exists so a bad ID surfaces as 404, not a
        // silently dangling bookmark
        self.prompts
            .find_by_id(id.0)
            .await?
            .ok_or(CatalogError::PromptNotFound)?;

        self.saved.save(user_id.0, id.0).await?;
        Ok(())
    }

    /// Remove a bookmark
    #[instrument(skip(self))]
    pub async fn unsave_prompt(&self, user_id: UserId, id: PromptId) -> Result<(), CatalogError> {
        self.saved.unsave(user_id.0, id.0).await?;
        Ok(())
    }

    /// List a user's bookmarked prompts
    pub async fn saved_prompts(&self, user_id: UserId) -> Result<Vec<PromptRow>, CatalogError> {
        Ok(self.saved.list_for_user(user_id.0).await?)
    }
}

impl<P, S> std::fmt::Debug for CatalogService<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish()
    }
}
