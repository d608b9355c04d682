use axum::Json;
use axum::extract::State;
use auditdesk_application::{RecipientKind, SendReportInput};

use crate::dto::{Envelope, MessageResponse, RecipientDto, SendBatchEmailRequest, SendEmailRequest};
use crate::error::ApiResult;
use crate::state::AppState;

const DEMO_ACK: &str = "Email logged to console (demo mode)";

pub async fn action_responsible_list(
    State(state): State<AppState>,
) -> Json<Envelope<Vec<RecipientDto>>> {
    let recipients = state.report_service.action_responsible_list();
    Json(Envelope::ok(
        recipients.iter().map(RecipientDto::from).collect(),
    ))
}

pub async fn all_action_responsible_list(
    State(state): State<AppState>,
) -> Json<Envelope<Vec<RecipientDto>>> {
    let recipients = state.report_service.all_action_responsible_list();
    Json(Envelope::ok(
        recipients.iter().map(RecipientDto::from).collect(),
    ))
}

pub async fn clevel_list(State(state): State<AppState>) -> Json<Envelope<Vec<RecipientDto>>> {
    let recipients = state.report_service.clevel_list();
    Json(Envelope::ok(
        recipients.iter().map(RecipientDto::from).collect(),
    ))
}

pub async fn send_email(
    State(state): State<AppState>,
    Json(request): Json<SendEmailRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let kind = match request.reporting_target.as_deref() {
        Some("clevel") => RecipientKind::CLevel,
        _ => RecipientKind::ActionResponsible,
    };

    state
        .report_service
        .send_report(SendReportInput {
            to: request.to,
            subject: request.subject,
            kind,
        })
        .await?;

    Ok(Json(MessageResponse::ok(DEMO_ACK)))
}

pub async fn send_action_responsible_email(
    State(state): State<AppState>,
    Json(request): Json<SendBatchEmailRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .report_service
        .send_batch(
            RecipientKind::ActionResponsible,
            request.recipients,
            request.bulk_email,
        )
        .await?;

    Ok(Json(MessageResponse::ok(DEMO_ACK)))
}

pub async fn send_clevel_email(
    State(state): State<AppState>,
    Json(request): Json<SendBatchEmailRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .report_service
        .send_batch(RecipientKind::CLevel, request.recipients, request.bulk_email)
        .await?;

    Ok(Json(MessageResponse::ok(DEMO_ACK)))
}
