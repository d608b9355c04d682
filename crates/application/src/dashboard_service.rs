use std::sync::Arc;

use async_trait::async_trait;
use auditdesk_core::AppResult;
use auditdesk_domain::{
    ActionAgeSummary, ActionStatus, ActionStatusDistribution, AgeBucket, AuditPlanEntry,
    AuditYearFilter, CLevel, DepartmentStats, FinancialImpactSum, FindingAction,
    FindingActionQuery, ImpactScoreCard, LeadStatusRow, MaturityScores, RiskBreakdownRow,
    SheetGrid, YearCount, YearStatusCounts,
};
use chrono::{Days, Utc};

/// Number of records served by the per-view action lists.
pub const VIEW_ACTION_LIMIT: usize = 50;

/// Number of records served by the all-actions list.
pub const ALL_ACTION_LIMIT: usize = 100;

const OVERDUE_ACTION_LIMIT: usize = 42;
const UPCOMING_ACTION_LIMIT: usize = 35;
const UPCOMING_WINDOW_DAYS: u64 = 30;

/// Repository port for the dashboard datasets.
///
/// Implementations hold the static tables and the synthesized finding-action
/// universe; every method is a read.
#[async_trait]
pub trait DashboardDataRepository: Send + Sync {
    /// Audit project counts per year.
    async fn audit_projects_by_year(&self) -> AppResult<Vec<YearCount>>;

    /// Investigation counts per year.
    async fn investigations_by_year(&self) -> AppResult<Vec<YearCount>>;

    /// Finding status counters per year.
    async fn finding_status_by_year(&self) -> AppResult<Vec<YearStatusCounts>>;

    /// Action status distribution for one scorecard bucket.
    async fn action_status_distribution(
        &self,
        filter: AuditYearFilter,
    ) -> AppResult<ActionStatusDistribution>;

    /// Action status counters per lead auditor.
    async fn lead_status_distribution(&self) -> AppResult<Vec<LeadStatusRow>>;

    /// Action-age histogram buckets in display order.
    async fn action_age_distribution(&self) -> AppResult<Vec<AgeBucket>>;

    /// Aggregate ageing counters.
    async fn action_age_summary(&self) -> AppResult<ActionAgeSummary>;

    /// Finding actions matching a query, capped at the query limit.
    async fn finding_actions(&self, query: FindingActionQuery) -> AppResult<Vec<FindingAction>>;

    /// Fraud impact scorecards per year.
    async fn fraud_impact_score_cards(&self) -> AppResult<Vec<ImpactScoreCard>>;

    /// Loss-prevention impact scorecards per year.
    async fn lp_impact_score_cards(&self) -> AppResult<Vec<ImpactScoreCard>>;

    /// Summed financial impact by source.
    async fn financial_impact_sum(&self) -> AppResult<FinancialImpactSum>;

    /// Audit maturity assessment.
    async fn maturity_scores(&self) -> AppResult<MaturityScores>;

    /// Findings per control element and risk level for one bucket.
    async fn control_element_distribution(
        &self,
        filter: AuditYearFilter,
    ) -> AppResult<Vec<RiskBreakdownRow>>;

    /// Findings per risk type and risk level for one bucket.
    async fn risk_type_distribution(
        &self,
        filter: AuditYearFilter,
    ) -> AppResult<Vec<RiskBreakdownRow>>;

    /// Department-level action counters.
    async fn department_stats(&self) -> AppResult<DepartmentStats>;

    /// Yearly audit plan rows.
    async fn audit_plan(&self) -> AppResult<Vec<AuditPlanEntry>>;

    /// Fraud internal-control summary grid.
    async fn fraud_internal_control(&self) -> AppResult<SheetGrid>;

    /// Loss-prevention summary grid.
    async fn loss_prevention_summary(&self) -> AppResult<SheetGrid>;

    /// Selectable audit types.
    async fn audit_types(&self) -> AppResult<Vec<String>>;

    /// Selectable audit countries.
    async fn audit_countries(&self) -> AppResult<Vec<String>>;

    /// Selectable action responsible names.
    async fn action_responsible_options(&self) -> AppResult<Vec<String>>;
}

/// Radar chart label with its capability group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarLabel {
    /// Dimension name.
    pub dimension: String,
    /// Capability group.
    pub group: String,
    /// Combined `dimension (group)` label.
    pub full_label: String,
}

/// Radar chart payload derived from the maturity assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChartData {
    /// Plain dimension labels.
    pub labels: Vec<String>,
    /// Labels with their capability groups.
    pub labels_with_groups: Vec<RadarLabel>,
    /// 2024 scores in label order.
    pub data_2024: Vec<f64>,
    /// 2025 scores in label order.
    pub data_2025: Vec<f64>,
}

/// Application service for the dashboard datasets.
#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn DashboardDataRepository>,
}

impl DashboardService {
    /// Creates a dashboard service over a data repository.
    #[must_use]
    pub fn new(repository: Arc<dyn DashboardDataRepository>) -> Self {
        Self { repository }
    }

    /// Returns the underlying data repository.
    #[must_use]
    pub fn repository(&self) -> &Arc<dyn DashboardDataRepository> {
        &self.repository
    }

    /// Finding actions for one dashboard view, honoring the scorecard filter.
    pub async fn view_actions(
        &self,
        filter: AuditYearFilter,
        limit: usize,
    ) -> AppResult<Vec<FindingAction>> {
        self.repository
            .finding_actions(FindingActionQuery {
                audit_year: filter,
                status: None,
                limit,
            })
            .await
    }

    /// Finding actions with one exact status, honoring the scorecard filter.
    pub async fn actions_by_status(
        &self,
        status: ActionStatus,
        filter: AuditYearFilter,
    ) -> AppResult<Vec<FindingAction>> {
        self.repository
            .finding_actions(FindingActionQuery {
                audit_year: filter,
                status: Some(status),
                limit: VIEW_ACTION_LIMIT,
            })
            .await
    }

    /// Actions past their due date.
    pub async fn overdue_actions(&self) -> AppResult<Vec<FindingAction>> {
        self.repository
            .finding_actions(FindingActionQuery {
                audit_year: AuditYearFilter::All,
                status: Some(ActionStatus::Overdue),
                limit: OVERDUE_ACTION_LIMIT,
            })
            .await
    }

    /// Open actions due within the next 30 days.
    pub async fn upcoming_actions(&self) -> AppResult<Vec<FindingAction>> {
        let open = self
            .repository
            .finding_actions(FindingActionQuery {
                audit_year: AuditYearFilter::All,
                status: Some(ActionStatus::Open),
                limit: ALL_ACTION_LIMIT,
            })
            .await?;

        let today = Utc::now().date_naive();
        let horizon = today
            .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
            .unwrap_or(today);

        Ok(open
            .into_iter()
            .filter(|action| action.due_date >= today && action.due_date <= horizon)
            .take(UPCOMING_ACTION_LIMIT)
            .collect())
    }

    /// Radar chart payload derived from the maturity dimensions.
    pub async fn radar_chart_data(&self) -> AppResult<RadarChartData> {
        let scores = self.repository.maturity_scores().await?;

        let labels = scores
            .dimensions
            .iter()
            .map(|dimension| dimension.dimension.clone())
            .collect();
        let labels_with_groups = scores
            .dimensions
            .iter()
            .map(|dimension| RadarLabel {
                dimension: dimension.dimension.clone(),
                group: dimension.group.clone(),
                full_label: dimension.full_label(),
            })
            .collect();
        let data_2024 = scores
            .dimensions
            .iter()
            .map(|dimension| dimension.score_2024)
            .collect();
        let data_2025 = scores
            .dimensions
            .iter()
            .map(|dimension| dimension.score_2025)
            .collect();

        Ok(RadarChartData {
            labels,
            labels_with_groups,
            data_2024,
            data_2025,
        })
    }

    /// Selectable C-level options.
    #[must_use]
    pub fn clevel_options(&self) -> Vec<String> {
        CLevel::all()
            .iter()
            .map(|level| level.as_str().to_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use auditdesk_core::AppResult;
    use auditdesk_domain::{
        ActionAgeSummary, ActionStatus, ActionStatusDistribution, AgeBucket, AuditPlanEntry,
        AuditYearFilter, CLevel, DepartmentStats, FinancialImpactSum, FindingAction,
        FindingActionQuery, ImpactScoreCard, LeadStatusRow, MaturityDimension, MaturityScores,
        RiskBreakdownRow, RiskLevel, SheetGrid, YearCount, YearStatusCounts,
    };
    use chrono::{Days, NaiveDate, Utc};

    use super::{DashboardDataRepository, DashboardService};

    struct FakeDashboardRepository {
        actions: Vec<FindingAction>,
    }

    fn action(key: &str, status: ActionStatus, due_in_days: i64) -> FindingAction {
        let today = Utc::now().date_naive();
        let due_date = if due_in_days >= 0 {
            today
                .checked_add_days(Days::new(due_in_days.unsigned_abs()))
                .unwrap_or(today)
        } else {
            today
                .checked_sub_days(Days::new(due_in_days.unsigned_abs()))
                .unwrap_or(today)
        };

        FindingAction {
            key: key.to_owned(),
            summary: "Control weakness identified".to_owned(),
            description: "Remediate the identified weakness".to_owned(),
            status,
            due_date,
            responsible: "John Smith".to_owned(),
            c_level: CLevel::Ceo,
            audit_year: 2024,
            audit_name: "Audit Project 2024-1".to_owned(),
            risk_level: RiskLevel::High,
            financial_impact: 10_000,
            created_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or(due_date),
        }
    }

    #[async_trait]
    impl DashboardDataRepository for FakeDashboardRepository {
        async fn audit_projects_by_year(&self) -> AppResult<Vec<YearCount>> {
            Ok(Vec::new())
        }

        async fn investigations_by_year(&self) -> AppResult<Vec<YearCount>> {
            Ok(Vec::new())
        }

        async fn finding_status_by_year(&self) -> AppResult<Vec<YearStatusCounts>> {
            Ok(Vec::new())
        }

        async fn action_status_distribution(
            &self,
            _filter: AuditYearFilter,
        ) -> AppResult<ActionStatusDistribution> {
            Ok(ActionStatusDistribution {
                open: 0,
                overdue: 0,
                risk_accepted: 0,
                completed: 0,
                total_financial_impact: 0,
                parent_keys: Vec::new(),
            })
        }

        async fn lead_status_distribution(&self) -> AppResult<Vec<LeadStatusRow>> {
            Ok(Vec::new())
        }

        async fn action_age_distribution(&self) -> AppResult<Vec<AgeBucket>> {
            Ok(Vec::new())
        }

        async fn action_age_summary(&self) -> AppResult<ActionAgeSummary> {
            Ok(ActionAgeSummary {
                total_actions: 0,
                overdue_actions: 0,
                upcoming_actions: 0,
                avg_days_to_complete: 0,
            })
        }

        async fn finding_actions(
            &self,
            query: FindingActionQuery,
        ) -> AppResult<Vec<FindingAction>> {
            Ok(self
                .actions
                .iter()
                .filter(|action| query.audit_year.matches_year(action.audit_year))
                .filter(|action| query.status.is_none_or(|status| action.status == status))
                .take(query.limit)
                .cloned()
                .collect())
        }

        async fn fraud_impact_score_cards(&self) -> AppResult<Vec<ImpactScoreCard>> {
            Ok(Vec::new())
        }

        async fn lp_impact_score_cards(&self) -> AppResult<Vec<ImpactScoreCard>> {
            Ok(Vec::new())
        }

        async fn financial_impact_sum(&self) -> AppResult<FinancialImpactSum> {
            Ok(FinancialImpactSum {
                fraud_impact: 0,
                lp_impact: 0,
            })
        }

        async fn maturity_scores(&self) -> AppResult<MaturityScores> {
            Ok(MaturityScores {
                average_2024: 3.8,
                average_2025: 4.2,
                dimensions: vec![
                    MaturityDimension {
                        dimension: "Governance".to_owned(),
                        group: "Governance".to_owned(),
                        score_2024: 4.1,
                        score_2025: 4.5,
                    },
                    MaturityDimension {
                        dimension: "Audit Tools".to_owned(),
                        group: "Use of Technology".to_owned(),
                        score_2024: 3.5,
                        score_2025: 4.0,
                    },
                ],
            })
        }

        async fn control_element_distribution(
            &self,
            _filter: AuditYearFilter,
        ) -> AppResult<Vec<RiskBreakdownRow>> {
            Ok(Vec::new())
        }

        async fn risk_type_distribution(
            &self,
            _filter: AuditYearFilter,
        ) -> AppResult<Vec<RiskBreakdownRow>> {
            Ok(Vec::new())
        }

        async fn department_stats(&self) -> AppResult<DepartmentStats> {
            Ok(DepartmentStats {
                total_actions: 0,
                open_actions: 0,
                overdue_actions: 0,
                completed_actions: 0,
                completion_rate: 0.0,
            })
        }

        async fn audit_plan(&self) -> AppResult<Vec<AuditPlanEntry>> {
            Ok(Vec::new())
        }

        async fn fraud_internal_control(&self) -> AppResult<SheetGrid> {
            Ok(SheetGrid { rows: Vec::new() })
        }

        async fn loss_prevention_summary(&self) -> AppResult<SheetGrid> {
            Ok(SheetGrid { rows: Vec::new() })
        }

        async fn audit_types(&self) -> AppResult<Vec<String>> {
            Ok(Vec::new())
        }

        async fn audit_countries(&self) -> AppResult<Vec<String>> {
            Ok(Vec::new())
        }

        async fn action_responsible_options(&self) -> AppResult<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn upcoming_actions_are_open_and_due_within_the_window() {
        let repository = FakeDashboardRepository {
            actions: vec![
                action("FIND-2024-0001", ActionStatus::Open, 5),
                action("FIND-2024-0002", ActionStatus::Open, 45),
                action("FIND-2024-0003", ActionStatus::Overdue, -10),
                action("FIND-2024-0004", ActionStatus::Open, 29),
            ],
        };
        let service = DashboardService::new(Arc::new(repository));

        let upcoming = service.upcoming_actions().await.unwrap_or_default();
        let keys: Vec<&str> = upcoming.iter().map(|action| action.key.as_str()).collect();
        assert_eq!(keys, vec!["FIND-2024-0001", "FIND-2024-0004"]);
    }

    #[tokio::test]
    async fn radar_payload_aligns_labels_and_series() {
        let service = DashboardService::new(Arc::new(FakeDashboardRepository {
            actions: Vec::new(),
        }));

        let radar = service.radar_chart_data().await;
        assert!(radar.is_ok());
        if let Ok(radar) = radar {
            assert_eq!(radar.labels.len(), 2);
            assert_eq!(radar.labels_with_groups.len(), 2);
            assert_eq!(radar.data_2024.len(), 2);
            assert_eq!(radar.data_2025.len(), 2);
            assert_eq!(
                radar.labels_with_groups[1].full_label,
                "Audit Tools (Use of Technology)"
            );
        }
    }

    #[tokio::test]
    async fn clevel_options_cover_every_executive_level() {
        let service = DashboardService::new(Arc::new(FakeDashboardRepository {
            actions: Vec::new(),
        }));
        assert_eq!(
            service.clevel_options(),
            vec!["CEO", "CFO", "CTO", "COO", "CHRO"]
        );
    }
}
