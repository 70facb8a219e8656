//! Pack catalog handlers

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use promptdeck_catalog_core::CatalogError;
use promptdeck_db::{PackRepository, PackRow};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PackResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub featured: bool,
}

#[derive(Debug, Serialize)]
pub struct PackListResponse {
    pub packs: Vec<PackResponse>,
}

fn pack_response(pack: PackRow) -> PackResponse {
    PackResponse {
        id: pack.id.to_string(),
        slug: pack.slug,
        name: pack.name,
        description: pack.description,
        price_cents: pack.price_cents,
        featured: pack.featured,
    }
}

/// GET /api/v1/packs
pub async fn list_packs(State(state): State<AppState>) -> ApiResult<Json<PackListResponse>> {
    let packs = state
        .packs
        .list_published()
        .await
        .map_err(CatalogError::from)?;

    Ok(Json(PackListResponse {
        packs: packs.into_iter().map(pack_response).collect(),
    }))
}

/// GET /api/v1/packs/:slug
pub async fn get_pack(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<PackResponse>> {
    let pack = state
        .packs
        .find_by_slug(&slug)
        .await
        .map_err(CatalogError::from)?
        .filter(|p| p.published)
        .ok_or(CatalogError::PackNotFound)?;

    Ok(Json(pack_response(pack)))
}
