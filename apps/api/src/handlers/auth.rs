use axum::Json;
use axum::extract::State;
use auditdesk_core::AppError;
use auditdesk_domain::{SessionState, SessionUser};
use auditdesk_application::AuthOutcome;
use tower_sessions::Session;

use crate::dto::{
    AuthStatusResponse, Envelope, LoginData, LoginRequest, PermissionsDto, SessionUserDto,
    SuccessResponse,
};
use crate::error::ApiResult;
use crate::session::{load_session_state, save_session_state};
use crate::state::AppState;

pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<Envelope<LoginData>>> {
    let outcome = state
        .user_service
        .login(&request.email, &request.password)
        .await?;

    let profile = match outcome {
        AuthOutcome::Authenticated(profile) => profile,
        AuthOutcome::Failed => {
            state
                .auth_event_service
                .record_event(None, "login", "failure")
                .await?;
            return Err(AppError::Unauthorized("Invalid credentials".to_owned()).into());
        }
    };

    // Fresh session id on privilege change.
    session
        .cycle_id()
        .await
        .map_err(|error| AppError::Internal(format!("failed to cycle session id: {error}")))?;

    let session_user = SessionUser::from(&profile);
    let session_state = SessionState::new(session_user.clone());
    save_session_state(&session, &session_state).await?;

    state
        .auth_event_service
        .record_event(Some(session_user.email.as_str()), "login", "success")
        .await?;

    Ok(Json(Envelope::ok(LoginData {
        role: session_user.role.as_str().to_owned(),
        user: SessionUserDto::from(&session_user),
    })))
}

pub async fn logout_handler(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<SuccessResponse>> {
    let subject = load_session_state(&session)
        .await?
        .map(|state| state.user().email.as_str().to_owned());

    session
        .delete()
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete session: {error}")))?;

    state
        .auth_event_service
        .record_event(subject.as_deref(), "logout", "success")
        .await?;

    Ok(Json(SuccessResponse::ok()))
}

pub async fn status_handler(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<AuthStatusResponse>> {
    let Some(session_state) = load_session_state(&session).await? else {
        return Ok(Json(AuthStatusResponse::unauthenticated()));
    };

    let user = session_state.user();
    let permissions = state.access_service.role_permissions(user.role);

    Ok(Json(AuthStatusResponse {
        authenticated: true,
        user: Some(SessionUserDto::from(user)),
        role: Some(user.role.as_str().to_owned()),
        permissions: Some(PermissionsDto::from(&permissions)),
        is_impersonating: session_state.is_impersonating().then_some(true),
    }))
}

pub async fn permissions_handler(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<Envelope<PermissionsDto>>> {
    let session_state = crate::session::require_session_state(&session).await?;
    let permissions = state
        .access_service
        .role_permissions(session_state.user().role);

    Ok(Json(Envelope::ok(PermissionsDto::from(&permissions))))
}
