use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use auditdesk_domain::Role;
use tower_sessions::Session;

use crate::dto::{
    ComponentDto, Envelope, PermissionsDto, RoleDto, SuccessResponse, UserDto, ViewAsData,
    ViewAsRequest,
};
use crate::error::ApiResult;
use crate::session::{require_session_state, save_session_state};
use crate::state::AppState;

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<UserDto>>>> {
    let users = state.access_service.list_users().await?;
    Ok(Json(Envelope::ok(users.iter().map(UserDto::from).collect())))
}

pub async fn list_roles(State(state): State<AppState>) -> Json<Envelope<Vec<RoleDto>>> {
    let roles = state
        .access_service
        .list_roles()
        .iter()
        .enumerate()
        .map(|(index, role)| RoleDto::from_role(index, *role))
        .collect();

    Json(Envelope::ok(roles))
}

pub async fn list_components(State(state): State<AppState>) -> Json<Envelope<Vec<ComponentDto>>> {
    let components = state
        .access_service
        .list_components()
        .iter()
        .map(ComponentDto::from)
        .collect();

    Json(Envelope::ok(components))
}

pub async fn role_permissions(
    State(state): State<AppState>,
    Path(role_name): Path<String>,
) -> ApiResult<Json<Envelope<PermissionsDto>>> {
    let role = Role::from_str(&role_name)?;
    let permissions = state.access_service.role_permissions(role);

    Ok(Json(Envelope::ok(PermissionsDto::from(&permissions))))
}

pub async fn user_permissions(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<Envelope<PermissionsDto>>> {
    let permissions = state.access_service.permissions_for_email(&email).await?;
    Ok(Json(Envelope::ok(PermissionsDto::from(&permissions))))
}

pub async fn view_as(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<ViewAsRequest>,
) -> ApiResult<Json<Envelope<ViewAsData>>> {
    let mut session_state = require_session_state(&session).await?;

    let outcome = state
        .access_service
        .start_impersonation(&mut session_state, &request.target_email)
        .await?;
    save_session_state(&session, &session_state).await?;

    state
        .auth_event_service
        .record_event(
            Some(outcome.original_user.email.as_str()),
            "view_as",
            "success",
        )
        .await?;

    Ok(Json(Envelope::ok(ViewAsData::from(&outcome))))
}

pub async fn stop_view_as(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<SuccessResponse>> {
    let mut session_state = require_session_state(&session).await?;

    state
        .access_service
        .stop_impersonation(&mut session_state)?;
    save_session_state(&session, &session_state).await?;

    state
        .auth_event_service
        .record_event(
            Some(session_state.user().email.as_str()),
            "stop_view_as",
            "success",
        )
        .await?;

    Ok(Json(SuccessResponse::ok()))
}
