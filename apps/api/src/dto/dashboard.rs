use auditdesk_application::RadarChartData;
use auditdesk_domain::{
    ActionAgeSummary, ActionStatusDistribution, AgeBucket, AuditPlanEntry, DepartmentStats,
    FinancialImpactSum, FindingAction, ImpactScoreCard, LeadStatusRow, MaturityScores,
    RiskBreakdownRow, SheetGrid, YearCount, YearStatusCounts,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditYearQuery {
    pub audit_year: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    pub status: Option<String>,
    pub audit_year: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditProjectsRow {
    pub audit_year: String,
    pub count: u32,
    pub per_auditor: f64,
}

impl From<&YearCount> for AuditProjectsRow {
    fn from(row: &YearCount) -> Self {
        Self {
            audit_year: row.year.to_string(),
            count: row.count,
            per_auditor: row.per_auditor,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestigationsRow {
    pub year: String,
    pub count: u32,
    pub per_auditor: f64,
}

impl From<&YearCount> for InvestigationsRow {
    fn from(row: &YearCount) -> Self {
        Self {
            year: row.year.to_string(),
            count: row.count,
            per_auditor: row.per_auditor,
        }
    }
}

/// Map payload of `finding-status-by-year`: year → labelled status counters.
pub fn finding_status_map(rows: &[YearStatusCounts]) -> Value {
    let mut map = Map::new();
    for row in rows {
        map.insert(
            row.year.to_string(),
            json!({
                "Open": row.open,
                "Risk Accepted": row.risk_accepted,
                "Completed": row.completed,
            }),
        );
    }

    Value::Object(map)
}

/// Map payload of the lead distributions: lead name → status counters.
pub fn lead_status_map(rows: &[LeadStatusRow]) -> Value {
    let mut map = Map::new();
    for row in rows {
        map.insert(
            row.lead.clone(),
            json!({
                "Open": row.open,
                "Risk Accepted": row.risk_accepted,
                "Completed": row.completed,
                "Overdue": row.overdue,
            }),
        );
    }

    Value::Object(map)
}

/// Map payload of the age histogram: bucket label → count.
pub fn age_histogram(buckets: &[AgeBucket]) -> Value {
    let mut map = Map::new();
    for bucket in buckets {
        map.insert(bucket.label.clone(), json!(bucket.count));
    }

    Value::Object(map)
}

#[derive(Debug, Serialize)]
pub struct StatusBucketDto {
    #[serde(rename = "Open")]
    pub open: u32,
    #[serde(rename = "Overdue")]
    pub overdue: u32,
    #[serde(rename = "Risk Accepted")]
    pub risk_accepted: u32,
    #[serde(rename = "Completed")]
    pub completed: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDistributionDto {
    pub status_distribution: StatusBucketDto,
    pub total_financial_impact: i64,
    pub parent_keys: Vec<String>,
}

impl From<&ActionStatusDistribution> for StatusDistributionDto {
    fn from(distribution: &ActionStatusDistribution) -> Self {
        Self {
            status_distribution: StatusBucketDto {
                open: distribution.open,
                overdue: distribution.overdue,
                risk_accepted: distribution.risk_accepted,
                completed: distribution.completed,
            },
            total_financial_impact: distribution.total_financial_impact,
            parent_keys: distribution.parent_keys.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingActionDto {
    pub key: String,
    pub summary: String,
    pub description: String,
    pub status: String,
    pub due_date: NaiveDate,
    pub responsible: String,
    pub c_level: String,
    pub audit_year: String,
    pub audit_name: String,
    pub risk_level: String,
    pub financial_impact: i64,
    pub created_date: NaiveDate,
}

impl From<&FindingAction> for FindingActionDto {
    fn from(action: &FindingAction) -> Self {
        Self {
            key: action.key.clone(),
            summary: action.summary.clone(),
            description: action.description.clone(),
            status: action.status.as_str().to_owned(),
            due_date: action.due_date,
            responsible: action.responsible.clone(),
            c_level: action.c_level.as_str().to_owned(),
            audit_year: action.audit_year.to_string(),
            audit_name: action.audit_name.clone(),
            risk_level: action.risk_level.as_str().to_owned(),
            financial_impact: action.financial_impact,
            created_date: action.created_date,
        }
    }
}

pub fn finding_action_list(actions: &[FindingAction]) -> Vec<FindingActionDto> {
    actions.iter().map(FindingActionDto::from).collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeSummaryDto {
    pub total_actions: u32,
    pub overdue_actions: u32,
    pub upcoming_actions: u32,
    pub avg_days_to_complete: u32,
}

impl From<&ActionAgeSummary> for AgeSummaryDto {
    fn from(summary: &ActionAgeSummary) -> Self {
        Self {
            total_actions: summary.total_actions,
            overdue_actions: summary.overdue_actions,
            upcoming_actions: summary.upcoming_actions,
            avg_days_to_complete: summary.avg_days_to_complete,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreCardDto {
    pub year: String,
    pub impact: i64,
}

impl From<&ImpactScoreCard> for ScoreCardDto {
    fn from(card: &ImpactScoreCard) -> Self {
        Self {
            year: card.year.to_string(),
            impact: card.impact,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudScoreCardsResponse {
    pub score_cards: Vec<ScoreCardDto>,
}

#[derive(Debug, Serialize)]
pub struct LpScoreCardsResponse {
    #[serde(rename = "scoreCards2")]
    pub score_cards: Vec<ScoreCardDto>,
}

#[derive(Debug, Serialize)]
pub struct FinancialImpactSumDto {
    #[serde(rename = "totalFraudImpact")]
    pub total_fraud_impact: i64,
    #[serde(rename = "totalLPImpact")]
    pub total_lp_impact: i64,
    #[serde(rename = "totalCombined")]
    pub total_combined: i64,
}

impl From<&FinancialImpactSum> for FinancialImpactSumDto {
    fn from(sum: &FinancialImpactSum) -> Self {
        Self {
            total_fraud_impact: sum.fraud_impact,
            total_lp_impact: sum.lp_impact,
            total_combined: sum.combined(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MaturityDimensionDto {
    pub dimension: String,
    pub group: String,
    #[serde(rename = "score2024")]
    pub score_2024: f64,
    #[serde(rename = "score2025")]
    pub score_2025: f64,
}

#[derive(Debug, Serialize)]
pub struct MatScoresDto {
    #[serde(rename = "average2024")]
    pub average_2024: f64,
    #[serde(rename = "average2025")]
    pub average_2025: f64,
    pub dimensions: Vec<MaturityDimensionDto>,
}

impl From<&MaturityScores> for MatScoresDto {
    fn from(scores: &MaturityScores) -> Self {
        Self {
            average_2024: scores.average_2024,
            average_2025: scores.average_2025,
            dimensions: scores
                .dimensions
                .iter()
                .map(|dimension| MaturityDimensionDto {
                    dimension: dimension.dimension.clone(),
                    group: dimension.group.clone(),
                    score_2024: dimension.score_2024,
                    score_2025: dimension.score_2025,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarLabelDto {
    pub dimension: String,
    pub group: String,
    pub full_label: String,
}

#[derive(Debug, Serialize)]
pub struct RadarChartDto {
    pub labels: Vec<String>,
    #[serde(rename = "labelsWithGroups")]
    pub labels_with_groups: Vec<RadarLabelDto>,
    #[serde(rename = "data2024")]
    pub data_2024: Vec<f64>,
    #[serde(rename = "data2025")]
    pub data_2025: Vec<f64>,
}

impl From<&RadarChartData> for RadarChartDto {
    fn from(radar: &RadarChartData) -> Self {
        Self {
            labels: radar.labels.clone(),
            labels_with_groups: radar
                .labels_with_groups
                .iter()
                .map(|label| RadarLabelDto {
                    dimension: label.dimension.clone(),
                    group: label.group.clone(),
                    full_label: label.full_label.clone(),
                })
                .collect(),
            data_2024: radar.data_2024.clone(),
            data_2025: radar.data_2025.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SheetDto {
    pub result: Vec<Vec<String>>,
}

impl From<&SheetGrid> for SheetDto {
    fn from(grid: &SheetGrid) -> Self {
        Self {
            result: grid.rows.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ControlBreakdownRow {
    pub control: String,
    #[serde(rename = "Critical")]
    pub critical: u32,
    #[serde(rename = "High")]
    pub high: u32,
    #[serde(rename = "Medium")]
    pub medium: u32,
    #[serde(rename = "Low")]
    pub low: u32,
    #[serde(rename = "Total")]
    pub total: u32,
}

impl From<&RiskBreakdownRow> for ControlBreakdownRow {
    fn from(row: &RiskBreakdownRow) -> Self {
        Self {
            control: row.category.clone(),
            critical: row.critical,
            high: row.high,
            medium: row.medium,
            low: row.low,
            total: row.total,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TypeBreakdownRow {
    #[serde(rename = "type")]
    pub risk_type: String,
    #[serde(rename = "Critical")]
    pub critical: u32,
    #[serde(rename = "High")]
    pub high: u32,
    #[serde(rename = "Medium")]
    pub medium: u32,
    #[serde(rename = "Low")]
    pub low: u32,
    #[serde(rename = "Total")]
    pub total: u32,
}

impl From<&RiskBreakdownRow> for TypeBreakdownRow {
    fn from(row: &RiskBreakdownRow) -> Self {
        Self {
            risk_type: row.category.clone(),
            critical: row.critical,
            high: row.high,
            medium: row.medium,
            low: row.low,
            total: row.total,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStatsDto {
    pub total_actions: u32,
    pub open_actions: u32,
    pub overdue_actions: u32,
    pub completed_actions: u32,
    pub completion_rate: f64,
}

impl From<&DepartmentStats> for DepartmentStatsDto {
    fn from(stats: &DepartmentStats) -> Self {
        Self {
            total_actions: stats.total_actions,
            open_actions: stats.open_actions,
            overdue_actions: stats.overdue_actions,
            completed_actions: stats.completed_actions,
            completion_rate: stats.completion_rate,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditPlanRowDto {
    pub id: u32,
    pub audit_name: String,
    pub audit_type: String,
    pub status: String,
    pub planned_start: NaiveDate,
    pub actual_start: Option<NaiveDate>,
    pub planned_end: NaiveDate,
    pub actual_end: Option<NaiveDate>,
    pub lead: String,
    pub country: String,
    pub quarter: String,
}

impl From<&AuditPlanEntry> for AuditPlanRowDto {
    fn from(entry: &AuditPlanEntry) -> Self {
        Self {
            id: entry.id,
            audit_name: entry.audit_name.clone(),
            audit_type: entry.audit_type.clone(),
            status: entry.status.as_str().to_owned(),
            planned_start: entry.planned_start,
            actual_start: entry.actual_start,
            planned_end: entry.planned_end,
            actual_end: entry.actual_end,
            lead: entry.lead.clone(),
            country: entry.country.clone(),
            quarter: entry.quarter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use auditdesk_domain::{ActionStatus, CLevel, FindingAction, RiskLevel, YearStatusCounts};
    use chrono::NaiveDate;

    use super::{FindingActionDto, finding_status_map};

    #[test]
    fn finding_action_uses_camel_case_and_string_year() {
        let action = FindingAction {
            key: "FIND-2024-0001".to_owned(),
            summary: "s".to_owned(),
            description: "d".to_owned(),
            status: ActionStatus::RiskAccepted,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default(),
            responsible: "John Smith".to_owned(),
            c_level: CLevel::Cfo,
            audit_year: 2024,
            audit_name: "Audit Project 2024-1".to_owned(),
            risk_level: RiskLevel::Low,
            financial_impact: 1000,
            created_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        };

        let value = serde_json::to_value(FindingActionDto::from(&action)).unwrap_or_default();
        assert_eq!(value["auditYear"], serde_json::json!("2024"));
        assert_eq!(value["status"], serde_json::json!("Risk Accepted"));
        assert_eq!(value["cLevel"], serde_json::json!("CFO"));
        assert_eq!(value["dueDate"], serde_json::json!("2024-06-01"));
    }

    #[test]
    fn status_map_keeps_year_insertion_order() {
        let rows = vec![
            YearStatusCounts {
                year: 2025,
                open: 1,
                risk_accepted: 2,
                completed: 3,
            },
            YearStatusCounts {
                year: 2021,
                open: 4,
                risk_accepted: 5,
                completed: 6,
            },
        ];

        let value = finding_status_map(&rows);
        let keys: Vec<&String> = value
            .as_object()
            .map(|map| map.keys().collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["2025", "2021"]);
    }
}
