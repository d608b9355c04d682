//! Dataset endpoints. These return bare JSON (no envelope), matching the
//! dashboard client's chart loaders.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Query, State};
use auditdesk_application::{ALL_ACTION_LIMIT, VIEW_ACTION_LIMIT};
use auditdesk_domain::{ActionStatus, AuditYearFilter};
use serde_json::Value;

use crate::dto::{
    AgeSummaryDto, AuditPlanRowDto, AuditProjectsRow, AuditYearQuery, ControlBreakdownRow,
    FinancialImpactSumDto, FindingActionDto, FraudScoreCardsResponse, InvestigationsRow,
    LpScoreCardsResponse, MatScoresDto, MessageResponse, RadarChartDto, ScoreCardDto, SheetDto,
    StatusDistributionDto, StatusQuery, TypeBreakdownRow, age_histogram, finding_action_list,
    finding_status_map, lead_status_map,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn audit_projects_by_year(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AuditProjectsRow>>> {
    let rows = state
        .dashboard_service
        .repository()
        .audit_projects_by_year()
        .await?;

    Ok(Json(rows.iter().map(AuditProjectsRow::from).collect()))
}

pub async fn investigation_counts(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<InvestigationsRow>>> {
    let rows = state
        .dashboard_service
        .repository()
        .investigations_by_year()
        .await?;

    Ok(Json(rows.iter().map(InvestigationsRow::from).collect()))
}

pub async fn finding_status_by_year(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let rows = state
        .dashboard_service
        .repository()
        .finding_status_by_year()
        .await?;

    Ok(Json(finding_status_map(&rows)))
}

pub async fn finding_action_status_distribution(
    State(state): State<AppState>,
    Query(query): Query<AuditYearQuery>,
) -> ApiResult<Json<StatusDistributionDto>> {
    let filter = AuditYearFilter::parse_or(query.audit_year.as_deref(), AuditYearFilter::From2024);
    let distribution = state
        .dashboard_service
        .repository()
        .action_status_distribution(filter)
        .await?;

    Ok(Json(StatusDistributionDto::from(&distribution)))
}

pub async fn lead_status_distribution(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let rows = state
        .dashboard_service
        .repository()
        .lead_status_distribution()
        .await?;

    Ok(Json(lead_status_map(&rows)))
}

async fn view_actions(
    state: &AppState,
    query: AuditYearQuery,
) -> ApiResult<Json<Vec<FindingActionDto>>> {
    let filter = AuditYearFilter::parse_or(query.audit_year.as_deref(), AuditYearFilter::All);
    let actions = state
        .dashboard_service
        .view_actions(filter, VIEW_ACTION_LIMIT)
        .await?;

    Ok(Json(finding_action_list(&actions)))
}

pub async fn user_finding_actions(
    State(state): State<AppState>,
    Query(query): Query<AuditYearQuery>,
) -> ApiResult<Json<Vec<FindingActionDto>>> {
    view_actions(&state, query).await
}

pub async fn department_finding_actions(
    State(state): State<AppState>,
    Query(query): Query<AuditYearQuery>,
) -> ApiResult<Json<Vec<FindingActionDto>>> {
    view_actions(&state, query).await
}

pub async fn clevel_finding_actions(
    State(state): State<AppState>,
    Query(query): Query<AuditYearQuery>,
) -> ApiResult<Json<Vec<FindingActionDto>>> {
    view_actions(&state, query).await
}

pub async fn vp_finding_actions(
    State(state): State<AppState>,
    Query(query): Query<AuditYearQuery>,
) -> ApiResult<Json<Vec<FindingActionDto>>> {
    view_actions(&state, query).await
}

pub async fn team_finding_actions(
    State(state): State<AppState>,
    Query(query): Query<AuditYearQuery>,
) -> ApiResult<Json<Vec<FindingActionDto>>> {
    view_actions(&state, query).await
}

pub async fn management_finding_actions(
    State(state): State<AppState>,
    Query(query): Query<AuditYearQuery>,
) -> ApiResult<Json<Vec<FindingActionDto>>> {
    view_actions(&state, query).await
}

pub async fn all_finding_actions(
    State(state): State<AppState>,
    Query(query): Query<AuditYearQuery>,
) -> ApiResult<Json<Vec<FindingActionDto>>> {
    let filter = AuditYearFilter::parse_or(query.audit_year.as_deref(), AuditYearFilter::All);
    let actions = state
        .dashboard_service
        .view_actions(filter, ALL_ACTION_LIMIT)
        .await?;

    Ok(Json(finding_action_list(&actions)))
}

pub async fn finding_actions_by_status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> ApiResult<Json<Vec<FindingActionDto>>> {
    let filter = AuditYearFilter::parse_or(query.audit_year.as_deref(), AuditYearFilter::All);

    let actions = match query.status.as_deref() {
        Some(label) => {
            let status = ActionStatus::from_str(label)?;
            state
                .dashboard_service
                .actions_by_status(status, filter)
                .await?
        }
        None => {
            state
                .dashboard_service
                .view_actions(filter, VIEW_ACTION_LIMIT)
                .await?
        }
    };

    Ok(Json(finding_action_list(&actions)))
}

pub async fn overdue_actions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<FindingActionDto>>> {
    let actions = state.dashboard_service.overdue_actions().await?;
    Ok(Json(finding_action_list(&actions)))
}

pub async fn upcoming_actions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<FindingActionDto>>> {
    let actions = state.dashboard_service.upcoming_actions().await?;
    Ok(Json(finding_action_list(&actions)))
}

pub async fn finding_actions_aging(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let buckets = state
        .dashboard_service
        .repository()
        .action_age_distribution()
        .await?;

    Ok(Json(age_histogram(&buckets)))
}

pub async fn finding_action_age_summary(
    State(state): State<AppState>,
) -> ApiResult<Json<AgeSummaryDto>> {
    let summary = state
        .dashboard_service
        .repository()
        .action_age_summary()
        .await?;

    Ok(Json(AgeSummaryDto::from(&summary)))
}

pub async fn fraud_impact_score_cards(
    State(state): State<AppState>,
) -> ApiResult<Json<FraudScoreCardsResponse>> {
    let cards = state
        .dashboard_service
        .repository()
        .fraud_impact_score_cards()
        .await?;

    Ok(Json(FraudScoreCardsResponse {
        score_cards: cards.iter().map(ScoreCardDto::from).collect(),
    }))
}

pub async fn lp_impact_score_cards(
    State(state): State<AppState>,
) -> ApiResult<Json<LpScoreCardsResponse>> {
    let cards = state
        .dashboard_service
        .repository()
        .lp_impact_score_cards()
        .await?;

    Ok(Json(LpScoreCardsResponse {
        score_cards: cards.iter().map(ScoreCardDto::from).collect(),
    }))
}

pub async fn financial_impact_sum(
    State(state): State<AppState>,
) -> ApiResult<Json<FinancialImpactSumDto>> {
    let sum = state
        .dashboard_service
        .repository()
        .financial_impact_sum()
        .await?;

    Ok(Json(FinancialImpactSumDto::from(&sum)))
}

pub async fn mat_scores(State(state): State<AppState>) -> ApiResult<Json<MatScoresDto>> {
    let scores = state
        .dashboard_service
        .repository()
        .maturity_scores()
        .await?;

    Ok(Json(MatScoresDto::from(&scores)))
}

pub async fn radar_chart_data(State(state): State<AppState>) -> ApiResult<Json<RadarChartDto>> {
    let radar = state.dashboard_service.radar_chart_data().await?;
    Ok(Json(RadarChartDto::from(&radar)))
}

pub async fn google_sheet_data(State(state): State<AppState>) -> ApiResult<Json<SheetDto>> {
    let grid = state
        .dashboard_service
        .repository()
        .fraud_internal_control()
        .await?;

    Ok(Json(SheetDto::from(&grid)))
}

pub async fn loss_prevention_summary(State(state): State<AppState>) -> ApiResult<Json<SheetDto>> {
    let grid = state
        .dashboard_service
        .repository()
        .loss_prevention_summary()
        .await?;

    Ok(Json(SheetDto::from(&grid)))
}

pub async fn statistics_by_control_and_risk(
    State(state): State<AppState>,
    Query(query): Query<AuditYearQuery>,
) -> ApiResult<Json<Vec<ControlBreakdownRow>>> {
    let filter = AuditYearFilter::parse_or(query.audit_year.as_deref(), AuditYearFilter::From2024);
    let rows = state
        .dashboard_service
        .repository()
        .control_element_distribution(filter)
        .await?;

    Ok(Json(rows.iter().map(ControlBreakdownRow::from).collect()))
}

pub async fn statistics_by_type_and_risk(
    State(state): State<AppState>,
    Query(query): Query<AuditYearQuery>,
) -> ApiResult<Json<Vec<TypeBreakdownRow>>> {
    let filter = AuditYearFilter::parse_or(query.audit_year.as_deref(), AuditYearFilter::From2024);
    let rows = state
        .dashboard_service
        .repository()
        .risk_type_distribution(filter)
        .await?;

    Ok(Json(rows.iter().map(TypeBreakdownRow::from).collect()))
}

pub async fn department_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<crate::dto::DepartmentStatsDto>> {
    let stats = state
        .dashboard_service
        .repository()
        .department_stats()
        .await?;

    Ok(Json(crate::dto::DepartmentStatsDto::from(&stats)))
}

pub async fn yearly_audit_plan(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AuditPlanRowDto>>> {
    let entries = state.dashboard_service.repository().audit_plan().await?;
    Ok(Json(entries.iter().map(AuditPlanRowDto::from).collect()))
}

pub async fn audit_types(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.dashboard_service.repository().audit_types().await?))
}

pub async fn audit_countries(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(
        state.dashboard_service.repository().audit_countries().await?,
    ))
}

pub async fn clevel_options(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dashboard_service.clevel_options())
}

pub async fn action_responsible_options(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(
        state
            .dashboard_service
            .repository()
            .action_responsible_options()
            .await?,
    ))
}

pub async fn finding_actions_export() -> Json<MessageResponse> {
    Json(MessageResponse::ok(
        "Export functionality available in full version",
    ))
}

pub async fn finding_actions_aging_export() -> Json<MessageResponse> {
    Json(MessageResponse::ok(
        "Export functionality available in full version",
    ))
}
