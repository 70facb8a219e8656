//! Prompt catalog handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

use promptdeck_db::{PromptQuery, PromptRow};
use promptdeck_types::PromptId;

use crate::error::ApiResult;
use crate::extractors::{AuthUser, OptionalAuthUser};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListPromptsQuery {
    pub category: Option<String>,
    pub tier: Option<String>,
    pub search: Option<String>,
    pub featured: Option<bool>,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Full prompt text; absent when the caller is not entitled to it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub category: String,
    pub tier: String,
    pub pack_id: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub view_count: i64,
    pub copy_count: i64,
    pub rating: f64,
    pub has_access: bool,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct PromptListResponse {
    pub prompts: Vec<PromptResponse>,
    pub total: i64,
}

#[derive(Debug, Deserialize)]
pub struct FeaturedQuery {
    #[serde(default)]
    pub limit: i64,
}

fn prompt_response(prompt: PromptRow, has_access: bool) -> PromptResponse {
    PromptResponse {
        id: prompt.id.to_string(),
        title: prompt.title,
        description: prompt.description,
        content: has_access.then_some(prompt.content),
        category: prompt.category,
        tier: prompt.tier,
        pack_id: prompt.pack_id.map(|id| id.to_string()),
        tags: prompt.tags,
        featured: prompt.featured,
        view_count: prompt.view_count,
        copy_count: prompt.copy_count,
        rating: prompt.rating,
        has_access,
        created_at: prompt.created_at.to_rfc3339(),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/prompts
pub async fn list_prompts(
    State(state): State<AppState>,
    OptionalAuthUser(user): OptionalAuthUser,
    Query(query): Query<ListPromptsQuery>,
) -> ApiResult<Json<PromptListResponse>> {
    let start = Instant::now();
    let user_id = user.map(|u| u.user_id);

    let page = state
        .catalog
        .list_prompts(&PromptQuery {
            category: query.category,
            tier: query.tier,
            search: query.search,
            featured: query.featured,
            limit: query.limit,
            offset: query.offset,
        })
        .await?;

    let mut prompts = Vec::with_capacity(page.prompts.len());
    for prompt in page.prompts {
        let has_access = state.entitlements.has_access(user_id, &prompt).await?;
        prompts.push(prompt_response(prompt, has_access));
    }

    metrics::histogram!("catalog_operation_duration_seconds", "operation" => "list_prompts")
        .record(start.elapsed().as_secs_f64());

    Ok(Json(PromptListResponse {
        prompts,
        total: page.total,
    }))
}

/// GET /api/v1/prompts/:id
pub async fn get_prompt(
    State(state): State<AppState>,
    OptionalAuthUser(user): OptionalAuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<PromptResponse>> {
    let prompt = state.catalog.get_prompt(PromptId(id)).await?;
    let has_access = state
        .entitlements
        .has_access(user.map(|u| u.user_id), &prompt)
        .await?;

    Ok(Json(prompt_response(prompt, has_access)))
}

/// GET /api/v1/prompts/featured
pub async fn featured_prompts(
    State(state): State<AppState>,
    OptionalAuthUser(user): OptionalAuthUser,
    Query(query): Query<FeaturedQuery>,
) -> ApiResult<Json<PromptListResponse>> {
    let user_id = user.map(|u| u.user_id);
    let rows = state.catalog.featured_prompts(query.limit).await?;

    let total = rows.len() as i64;
    let mut prompts = Vec::with_capacity(rows.len());
    for prompt in rows {
        let has_access = state.entitlements.has_access(user_id, &prompt).await?;
        prompts.push(prompt_response(prompt, has_access));
    }

    Ok(Json(PromptListResponse { prompts, total }))
}

/// POST /api/v1/prompts/:id/copy
pub async fn copy_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.catalog.record_copy(PromptId(id)).await?;
    metrics::counter!("catalog_prompt_copies_total").increment(1);
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/prompts/:id/save
pub async fn save_prompt(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.catalog.save_prompt(user.user_id, PromptId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/prompts/:id/save
pub async fn unsave_prompt(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state
        .catalog
        .unsave_prompt(user.user_id, PromptId(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/prompts/saved
pub async fn saved_prompts(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<PromptListResponse>> {
    let AuthUser { user_id, .. } = user;
    let rows = state.catalog.saved_prompts(user_id).await?;

    let total = rows.len() as i64;
    let mut prompts = Vec::with_capacity(rows.len());
    for prompt in rows {
        let has_access = state.entitlements.has_access(Some(user_id), &prompt).await?;
        prompts.push(prompt_response(prompt, has_access));
    }

    Ok(Json(PromptListResponse { prompts, total }))
}
