//! Session Routes
//!
//! The dashboard page creates one session per browser tab and carries its
//! id in the `X-Session-Id` header. The only mutable flag is disclaimer
//! acceptance.
//!
//! - `POST /api/v1/session` - Create a session
//! - `GET /api/v1/session` - Current session flags
//! - `POST /api/v1/session/disclaimer` - Accept the disclaimer (idempotent)

use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::dto::SessionResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::page::SessionState;

/// Header carrying the session id on page requests
pub const SESSION_HEADER: &str = "x-session-id";

/// POST /api/v1/session
///
/// Create a fresh session with the disclaimer unaccepted.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = state.sessions.create().await;
    (StatusCode::CREATED, Json(session.into()))
}

/// GET /api/v1/session
///
/// Current flags for the session named in `X-Session-Id`.
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<SessionResponse>> {
    let session = require_session(&state, &headers).await?;
    Ok(Json(session.into()))
}

/// POST /api/v1/session/disclaimer
///
/// Mark the disclaimer accepted for this session. Accepting twice is a no-op.
pub async fn accept_disclaimer(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<SessionResponse>> {
    let id = session_id_from_headers(&headers)
        .ok_or_else(|| ApiError::Validation("Missing or malformed X-Session-Id header".into()))?;

    let session = state
        .sessions
        .accept_disclaimer(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Session {id} not found")))?;

    Ok(Json(session.into()))
}

/// Look up the session named in the request headers, if any.
///
/// Used by the gated endpoints: a missing or unknown session simply means
/// the disclaimer has not been accepted.
pub async fn session_from_headers(state: &AppState, headers: &HeaderMap) -> Option<SessionState> {
    let id = session_id_from_headers(headers)?;
    state.sessions.get(id).await
}

async fn require_session(state: &AppState, headers: &HeaderMap) -> ApiResult<SessionState> {
    let id = session_id_from_headers(headers)
        .ok_or_else(|| ApiError::Validation("Missing or malformed X-Session-Id header".into()))?;

    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Session {id} not found")))
}

fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    let raw = headers.get(SESSION_HEADER)?.to_str().ok()?;
    Uuid::parse_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_parsing() {
        let mut headers = HeaderMap::new();
        assert!(session_id_from_headers(&headers).is_none());

        headers.insert(SESSION_HEADER, "not-a-uuid".parse().unwrap());
        assert!(session_id_from_headers(&headers).is_none());

        let id = Uuid::new_v4();
        headers.insert(SESSION_HEADER, id.to_string().parse().unwrap());
        assert_eq!(session_id_from_headers(&headers), Some(id));
    }
}
