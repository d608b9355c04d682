//! Session payload access helpers.

use auditdesk_core::AppError;
use auditdesk_domain::SessionState;
use tower_sessions::Session;

use crate::error::ApiResult;

/// Session key holding the authenticated [`SessionState`].
pub const SESSION_STATE_KEY: &str = "auth.state";

/// Session key prefix for per-page table layouts.
const LAYOUT_KEY_PREFIX: &str = "ui_layout";

/// Returns the session key a page's table layout is stored under.
pub fn layout_key(page: &str) -> String {
    format!("{LAYOUT_KEY_PREFIX}.{page}")
}

/// Reads the session state, if any.
pub async fn load_session_state(session: &Session) -> ApiResult<Option<SessionState>> {
    let state = session
        .get::<SessionState>(SESSION_STATE_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read session state: {error}")))?;

    Ok(state)
}

/// Reads the session state, rejecting unauthenticated callers.
pub async fn require_session_state(session: &Session) -> ApiResult<SessionState> {
    load_session_state(session)
        .await?
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()).into())
}

/// Writes the session state back.
pub async fn save_session_state(session: &Session, state: &SessionState) -> ApiResult<()> {
    session
        .insert(SESSION_STATE_KEY, state)
        .await
        .map_err(|error| AppError::Internal(format!("failed to write session state: {error}")))?;

    Ok(())
}
