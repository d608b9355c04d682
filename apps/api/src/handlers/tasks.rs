use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use auditdesk_application::{CreateTaskInput, TaskPatch};
use auditdesk_domain::{SessionState, Task, TaskPriority, TaskStatus};
use axum::Extension;

use crate::dto::{CreateTaskRequest, Envelope, SuccessResponse, UpdateTaskRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<Task>>>> {
    let tasks = state.task_service.list_tasks().await?;
    Ok(Json(Envelope::ok(tasks)))
}

pub async fn create_task(
    State(state): State<AppState>,
    Extension(session_state): Extension<SessionState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<Json<Envelope<Task>>> {
    let status = match request.status.as_deref() {
        Some(value) => TaskStatus::from_str(value)?,
        None => TaskStatus::ToDo,
    };
    let priority = match request.priority.as_deref() {
        Some(value) => TaskPriority::from_str(value)?,
        None => TaskPriority::Medium,
    };

    let input = CreateTaskInput {
        title: request.title,
        description: request.description,
        status,
        priority,
        assignee: request.assignee,
        due_date: request.due_date,
    };

    let task = state
        .task_service
        .create_task(input, session_state.user().email.as_str())
        .await?;

    Ok(Json(Envelope::ok(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Envelope<Task>>> {
    let status = match request.status.as_deref() {
        Some(value) => Some(TaskStatus::from_str(value)?),
        None => None,
    };
    let priority = match request.priority.as_deref() {
        Some(value) => Some(TaskPriority::from_str(value)?),
        None => None,
    };

    let patch = TaskPatch {
        title: request.title,
        description: request.description,
        status,
        priority,
        assignee: request.assignee,
        due_date: request.due_date,
    };

    let task = state.task_service.update_task(id, patch).await?;
    Ok(Json(Envelope::ok(task)))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<SuccessResponse>> {
    state.task_service.delete_task(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
