//! Checkout and billing-portal handlers

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

use promptdeck_billing_core::CheckoutParams;
use promptdeck_types::{PackId, PriceId};

use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateCheckoutRequest {
    pub price_id: String,
    pub pack_id: Option<Uuid>,
    pub subscription_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub session_id: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct PortalResponse {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub id: String,
    pub pack_id: Option<String>,
    pub subscription_type: Option<String>,
    pub amount_cents: i64,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct PurchaseListResponse {
    pub purchases: Vec<PurchaseResponse>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/billing/checkout
pub async fn create_checkout(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateCheckoutRequest>,
) -> ApiResult<Json<CheckoutResponse>> {
    let start = Instant::now();

    let session = state
        .billing
        .create_checkout(
            user.user_id,
            &user.email,
            CheckoutParams {
                price_id: PriceId::new(req.price_id),
                pack_id: req.pack_id.map(PackId),
                subscription_type: req.subscription_type,
            },
        )
        .await?;

    metrics::counter!("billing_checkouts_created_total").increment(1);
    metrics::histogram!("billing_operation_duration_seconds", "operation" => "create_checkout")
        .record(start.elapsed().as_secs_f64());

    Ok(Json(CheckoutResponse {
        session_id: session.session_id,
        url: session.url,
    }))
}

/// POST /api/v1/billing/portal
pub async fn create_portal(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<PortalResponse>> {
    let start = Instant::now();

    let portal = state.billing.create_portal(user.user_id).await?;

    metrics::histogram!("billing_operation_duration_seconds", "operation" => "create_portal")
        .record(start.elapsed().as_secs_f64());

    Ok(Json(PortalResponse { url: portal.url }))
}

/// GET /api/v1/billing/purchases
pub async fn list_purchases(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<PurchaseListResponse>> {
    let rows = state.billing.list_purchases(user.user_id).await?;

    Ok(Json(PurchaseListResponse {
        purchases: rows
            .into_iter()
            .map(|row| PurchaseResponse {
                id: row.id.to_string(),
                pack_id: row.pack_id.map(|id| id.to_string()),
                subscription_type: row.subscription_type,
                amount_cents: row.amount_cents,
                created_at: row.created_at.to_rfc3339(),
            })
            .collect(),
    }))
}
