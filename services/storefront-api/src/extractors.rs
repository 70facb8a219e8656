//! Axum extractors for forwarded identity
//!
//! Authentication lives in the fronting session layer; it forwards the
//! resolved identity as `x-user-id` / `x-user-email` headers. These
//! extractors only parse what was forwarded.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use promptdeck_types::UserId;

const USER_ID_HEADER: &str = "x-user-id";
const USER_EMAIL_HEADER: &str = "x-user-email";

/// Authenticated user extracted from forwarded identity headers
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    pub email: String,
}

/// Error response for auth failures
#[derive(Debug, Serialize)]
struct AuthErrorResponse {
    error: AuthErrorDetail,
}

#[derive(Debug, Serialize)]
struct AuthErrorDetail {
    code: &'static str,
    message: &'static str,
}

/// Auth rejection type
pub struct AuthRejection {
    status: StatusCode,
    code: &'static str,
    message: &'static str,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = AuthErrorResponse {
            error: AuthErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move { extract_identity(parts) })
    }
}

fn extract_identity(parts: &Parts) -> Result<AuthUser, AuthRejection> {
    let Some(id_header) = parts.headers.get(USER_ID_HEADER) else {
        return Err(AuthRejection {
            status: StatusCode::UNAUTHORIZED,
            code: "UNAUTHENTICATED",
            message: "No identity provided",
        });
    };

    let id_str = id_header.to_str().map_err(|_| AuthRejection {
        status: StatusCode::BAD_REQUEST,
        code: "INVALID_HEADER",
        message: "Invalid x-user-id header encoding",
    })?;

    let user_id = UserId::parse(id_str).map_err(|_| {
        tracing::debug!(header = %id_str, "Malformed forwarded user ID");
        AuthRejection {
            status: StatusCode::UNAUTHORIZED,
            code: "INVALID_IDENTITY",
            message: "Malformed identity header",
        }
    })?;

    let email = parts
        .headers
        .get(USER_EMAIL_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    Ok(AuthUser { user_id, email })
}

/// Optional auth extractor - doesn't fail if no identity is forwarded
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move { Ok(OptionalAuthUser(extract_identity(parts).ok())) })
    }
}
