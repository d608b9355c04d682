//! Demo dashboard data source.
//!
//! Serves the fixed aggregate tables of the demo dataset and a finding-action
//! universe synthesized once at construction from a fixed seed, so repeated
//! queries over the same filter agree with each other.

use async_trait::async_trait;
use auditdesk_application::DashboardDataRepository;
use auditdesk_core::AppResult;
use auditdesk_domain::{
    ActionAgeSummary, ActionStatus, ActionStatusDistribution, AgeBucket, AuditPlanEntry,
    AuditPlanStatus, AuditYearFilter, CLevel, DepartmentStats, FinancialImpactSum, FindingAction,
    FindingActionQuery, ImpactScoreCard, LeadStatusRow, MaturityDimension, MaturityScores,
    RiskBreakdownRow, RiskLevel, SheetGrid, YearCount, YearStatusCounts,
};
use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const UNIVERSE_SEED: u64 = 20_240_101;
const UNIVERSE_SIZE: usize = 600;

const AUDIT_YEARS: [u16; 5] = [2021, 2022, 2023, 2024, 2025];

const SUMMARY_TEMPLATES: [&str; 5] = [
    "Process improvement needed",
    "Control weakness identified",
    "Policy compliance issue",
    "System vulnerability",
    "Documentation gap",
];

const RESPONSIBLES: [&str; 10] = [
    "John Smith",
    "Sarah Johnson",
    "Michael Brown",
    "Emily Davis",
    "David Wilson",
    "Lisa Anderson",
    "James Taylor",
    "Jennifer Martinez",
    "Robert Garcia",
    "Mary Rodriguez",
];

/// Dashboard repository serving the fixed demo dataset.
#[derive(Debug)]
pub struct MockDashboardRepository {
    actions: Vec<FindingAction>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn pick<T: Copy>(rng: &mut StdRng, values: &[T]) -> T {
    values[rng.random_range(0..values.len())]
}

fn synthesize_universe() -> Vec<FindingAction> {
    let mut rng = StdRng::seed_from_u64(UNIVERSE_SEED);
    let today = Utc::now().date_naive();

    (1..=UNIVERSE_SIZE)
        .map(|i| {
            let status = pick(&mut rng, ActionStatus::all());
            let year = pick(&mut rng, &AUDIT_YEARS);
            let due_date = if status == ActionStatus::Overdue {
                today
                    .checked_sub_days(Days::new(rng.random_range(1..=180)))
                    .unwrap_or(today)
            } else {
                today
                    .checked_add_days(Days::new(rng.random_range(0..365)))
                    .unwrap_or(today)
            };

            FindingAction {
                key: format!("FIND-{year}-{i:04}"),
                summary: format!("Finding Action {i}: {}", pick(&mut rng, &SUMMARY_TEMPLATES)),
                description: format!(
                    "Detailed description of finding action {i}. This action requires \
                     attention and proper remediation to address identified risks."
                ),
                status,
                due_date,
                responsible: pick(&mut rng, &RESPONSIBLES).to_owned(),
                c_level: pick(&mut rng, CLevel::all()),
                audit_year: year,
                audit_name: format!("Audit Project {year}-{}", rng.random_range(1..=10)),
                risk_level: pick(&mut rng, RiskLevel::all()),
                financial_impact: rng.random_range(0..500_000),
                created_date: date(i32::from(year), rng.random_range(1..=12), 15),
            }
        })
        .collect()
}

impl MockDashboardRepository {
    /// Creates the repository, synthesizing the finding-action universe once.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: synthesize_universe(),
        }
    }
}

impl Default for MockDashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn lead_row(lead: &str, open: u32, risk_accepted: u32, completed: u32, overdue: u32) -> LeadStatusRow {
    LeadStatusRow {
        lead: lead.to_owned(),
        open,
        risk_accepted,
        completed,
        overdue,
    }
}

fn breakdown(category: &str, critical: u32, high: u32, medium: u32, low: u32, total: u32) -> RiskBreakdownRow {
    RiskBreakdownRow {
        category: category.to_owned(),
        critical,
        high,
        medium,
        low,
        total,
    }
}

fn dimension(dimension: &str, group: &str, score_2024: f64, score_2025: f64) -> MaturityDimension {
    MaturityDimension {
        dimension: dimension.to_owned(),
        group: group.to_owned(),
        score_2024,
        score_2025,
    }
}

fn plan_entry(
    id: u32,
    audit_name: &str,
    audit_type: &str,
    status: AuditPlanStatus,
    planned_start: NaiveDate,
    actual_start: Option<NaiveDate>,
    planned_end: NaiveDate,
    actual_end: Option<NaiveDate>,
    lead: &str,
    quarter: &str,
) -> AuditPlanEntry {
    AuditPlanEntry {
        id,
        audit_name: audit_name.to_owned(),
        audit_type: audit_type.to_owned(),
        status,
        planned_start,
        actual_start,
        planned_end,
        actual_end,
        lead: lead.to_owned(),
        country: "Turkey".to_owned(),
        quarter: quarter.to_owned(),
    }
}

fn grid(rows: &[&[&str]]) -> SheetGrid {
    SheetGrid {
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| (*cell).to_owned()).collect())
            .collect(),
    }
}

#[async_trait]
impl DashboardDataRepository for MockDashboardRepository {
    async fn audit_projects_by_year(&self) -> AppResult<Vec<YearCount>> {
        Ok(vec![
            YearCount { year: 2025, count: 13, per_auditor: 2.17 },
            YearCount { year: 2024, count: 11, per_auditor: 1.84 },
            YearCount { year: 2023, count: 6, per_auditor: 0.86 },
            YearCount { year: 2022, count: 8, per_auditor: 1.15 },
            YearCount { year: 2021, count: 14, per_auditor: 1.94 },
        ])
    }

    async fn investigations_by_year(&self) -> AppResult<Vec<YearCount>> {
        Ok(vec![
            YearCount { year: 2025, count: 65, per_auditor: 10.84 },
            YearCount { year: 2024, count: 62, per_auditor: 10.25 },
            YearCount { year: 2023, count: 103, per_auditor: 14.74 },
            YearCount { year: 2022, count: 165, per_auditor: 23.59 },
            YearCount { year: 2021, count: 75, per_auditor: 10.70 },
        ])
    }

    async fn finding_status_by_year(&self) -> AppResult<Vec<YearStatusCounts>> {
        Ok(vec![
            YearStatusCounts { year: 2021, open: 12, risk_accepted: 8, completed: 45 },
            YearStatusCounts { year: 2022, open: 18, risk_accepted: 12, completed: 67 },
            YearStatusCounts { year: 2023, open: 25, risk_accepted: 15, completed: 82 },
            YearStatusCounts { year: 2024, open: 32, risk_accepted: 18, completed: 95 },
            YearStatusCounts { year: 2025, open: 28, risk_accepted: 10, completed: 42 },
        ])
    }

    async fn action_status_distribution(
        &self,
        filter: AuditYearFilter,
    ) -> AppResult<ActionStatusDistribution> {
        Ok(match filter {
            AuditYearFilter::From2024 => ActionStatusDistribution {
                open: 145,
                overdue: 42,
                risk_accepted: 28,
                completed: 137,
                total_financial_impact: 8_750_000,
                parent_keys: vec![
                    "AUDIT-2024-001".to_owned(),
                    "AUDIT-2024-002".to_owned(),
                    "AUDIT-2024-003".to_owned(),
                    "AUDIT-2024-004".to_owned(),
                    "AUDIT-2024-005".to_owned(),
                ],
            },
            AuditYearFilter::All => ActionStatusDistribution {
                open: 215,
                overdue: 68,
                risk_accepted: 53,
                completed: 386,
                total_financial_impact: 15_420_000,
                parent_keys: vec![
                    "AUDIT-2021-001".to_owned(),
                    "AUDIT-2022-001".to_owned(),
                    "AUDIT-2023-001".to_owned(),
                    "AUDIT-2024-001".to_owned(),
                    "AUDIT-2025-001".to_owned(),
                ],
            },
        })
    }

    async fn lead_status_distribution(&self) -> AppResult<Vec<LeadStatusRow>> {
        Ok(vec![
            lead_row("John Smith", 15, 3, 22, 5),
            lead_row("Sarah Johnson", 12, 2, 18, 3),
            lead_row("Michael Brown", 18, 4, 25, 6),
            lead_row("Emily Davis", 10, 2, 15, 2),
            lead_row("David Wilson", 14, 3, 20, 4),
            lead_row("Lisa Anderson", 8, 1, 12, 2),
            lead_row("James Taylor", 11, 2, 16, 3),
            lead_row("Jennifer Martinez", 9, 2, 14, 2),
            lead_row("Robert Garcia", 13, 3, 19, 4),
            lead_row("Mary Rodriguez", 7, 1, 10, 1),
        ])
    }

    async fn action_age_distribution(&self) -> AppResult<Vec<AgeBucket>> {
        let buckets = [
            ("-720—360", 5),
            ("-360—180", 8),
            ("-180—90", 12),
            ("-90—30", 15),
            ("-30—0", 18),
            ("0—30", 35),
            ("30—90", 42),
            ("90—180", 28),
            ("180—360", 20),
            ("360—720", 12),
            ("720+", 8),
        ];

        Ok(buckets
            .iter()
            .map(|(label, count)| AgeBucket {
                label: (*label).to_owned(),
                count: *count,
            })
            .collect())
    }

    async fn action_age_summary(&self) -> AppResult<ActionAgeSummary> {
        Ok(ActionAgeSummary {
            total_actions: 203,
            overdue_actions: 58,
            upcoming_actions: 125,
            avg_days_to_complete: 45,
        })
    }

    async fn finding_actions(&self, query: FindingActionQuery) -> AppResult<Vec<FindingAction>> {
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
        Ok(vec![
            ImpactScoreCard { year: 2025, impact: 8_050_000 },
            ImpactScoreCard { year: 2024, impact: 16_250_000 },
            ImpactScoreCard { year: 2023, impact: 10_920_000 },
            ImpactScoreCard { year: 2022, impact: 24_500_000 },
            ImpactScoreCard { year: 2021, impact: 6_720_000 },
        ])
    }

    async fn lp_impact_score_cards(&self) -> AppResult<Vec<ImpactScoreCard>> {
        Ok(vec![
            ImpactScoreCard { year: 2025, impact: 5_580_000 },
            ImpactScoreCard { year: 2024, impact: 4_560_000 },
            ImpactScoreCard { year: 2023, impact: 1_610_000 },
            ImpactScoreCard { year: 2022, impact: 490_000 },
            ImpactScoreCard { year: 2021, impact: 350_000 },
        ])
    }

    async fn financial_impact_sum(&self) -> AppResult<FinancialImpactSum> {
        Ok(FinancialImpactSum {
            fraud_impact: 66_490_000,
            lp_impact: 12_590_000,
        })
    }

    async fn maturity_scores(&self) -> AppResult<MaturityScores> {
        Ok(MaturityScores {
            average_2024: 3.8,
            average_2025: 4.2,
            dimensions: vec![
                dimension("Governance", "Governance", 4.1, 4.5),
                dimension("Strategy", "Governance", 3.8, 4.2),
                dimension("Audit Tools", "Use of Technology", 3.5, 4.0),
                dimension("Data Analytics", "Use of Technology", 3.2, 3.8),
                dimension("Team Skills", "People", 4.0, 4.3),
                dimension("Training", "People", 3.7, 4.1),
                dimension("Stakeholder Engagement", "Communications", 3.9, 4.4),
                dimension("Reporting", "Communications", 4.2, 4.6),
                dimension("Risk Assessment", "Scope of Work", 4.0, 4.3),
                dimension("Audit Coverage", "Scope of Work", 3.6, 4.0),
            ],
        })
    }

    async fn control_element_distribution(
        &self,
        filter: AuditYearFilter,
    ) -> AppResult<Vec<RiskBreakdownRow>> {
        Ok(match filter {
            AuditYearFilter::From2024 => vec![
                breakdown("Control Environment", 5, 12, 18, 8, 43),
                breakdown("Risk Assessment", 3, 8, 15, 12, 38),
                breakdown("Control Activities", 8, 15, 22, 10, 55),
                breakdown("Information & Communication", 2, 6, 12, 15, 35),
                breakdown("Monitoring Activities", 4, 10, 16, 9, 39),
                breakdown("Total", 22, 51, 83, 54, 210),
            ],
            AuditYearFilter::All => vec![
                breakdown("Control Environment", 12, 25, 35, 18, 90),
                breakdown("Risk Assessment", 8, 18, 28, 22, 76),
                breakdown("Control Activities", 15, 32, 45, 20, 112),
                breakdown("Information & Communication", 5, 12, 25, 28, 70),
                breakdown("Monitoring Activities", 10, 20, 32, 18, 80),
                breakdown("Total", 50, 107, 165, 106, 428),
            ],
        })
    }

    async fn risk_type_distribution(
        &self,
        filter: AuditYearFilter,
    ) -> AppResult<Vec<RiskBreakdownRow>> {
        Ok(match filter {
            AuditYearFilter::From2024 => vec![
                breakdown("Operational Risk", 8, 18, 25, 12, 63),
                breakdown("Financial Risk", 6, 14, 20, 15, 55),
                breakdown("Compliance Risk", 5, 12, 22, 18, 57),
                breakdown("Strategic Risk", 3, 7, 16, 9, 35),
                breakdown("Total", 22, 51, 83, 54, 210),
            ],
            AuditYearFilter::All => vec![
                breakdown("Operational Risk", 18, 38, 52, 25, 133),
                breakdown("Financial Risk", 14, 28, 42, 30, 114),
                breakdown("Compliance Risk", 12, 26, 45, 35, 118),
                breakdown("Strategic Risk", 6, 15, 26, 16, 63),
                breakdown("Total", 50, 107, 165, 106, 428),
            ],
        })
    }

    async fn department_stats(&self) -> AppResult<DepartmentStats> {
        Ok(DepartmentStats {
            total_actions: 145,
            open_actions: 62,
            overdue_actions: 18,
            completed_actions: 65,
            completion_rate: 44.8,
        })
    }

    async fn audit_plan(&self) -> AppResult<Vec<AuditPlanEntry>> {
        Ok(vec![
            plan_entry(
                1,
                "Financial Controls Audit",
                "Compliance",
                AuditPlanStatus::Completed,
                date(2025, 1, 15),
                Some(date(2025, 1, 15)),
                date(2025, 2, 28),
                Some(date(2025, 2, 25)),
                "John Smith",
                "Q1",
            ),
            plan_entry(
                2,
                "IT Security Assessment",
                "IT Audit",
                AuditPlanStatus::InProgress,
                date(2025, 2, 1),
                Some(date(2025, 2, 5)),
                date(2025, 3, 31),
                None,
                "Sarah Johnson",
                "Q1",
            ),
            plan_entry(
                3,
                "Supply Chain Review",
                "Operational",
                AuditPlanStatus::Planning,
                date(2025, 3, 15),
                None,
                date(2025, 5, 15),
                None,
                "Michael Brown",
                "Q2",
            ),
            plan_entry(
                4,
                "Fraud Investigation - Case 2025-001",
                "Investigation",
                AuditPlanStatus::Completed,
                date(2025, 1, 20),
                Some(date(2025, 1, 20)),
                date(2025, 2, 15),
                Some(date(2025, 2, 10)),
                "Emily Davis",
                "Q1",
            ),
            plan_entry(
                5,
                "Vendor Management Audit",
                "Compliance",
                AuditPlanStatus::NotStarted,
                date(2025, 4, 1),
                None,
                date(2025, 5, 30),
                None,
                "David Wilson",
                "Q2",
            ),
        ])
    }

    async fn fraud_internal_control(&self) -> AppResult<SheetGrid> {
        Ok(grid(&[
            &["Year", "2021", "2022", "2023", "2024", "2025"],
            &["Prevented Losses (€)", "6.72M", "24.50M", "10.92M", "16.25M", "8.05M"],
            &["Cases Investigated", "75", "165", "103", "62", "65"],
            &["Recovery Rate %", "68%", "72%", "65%", "70%", "73%"],
        ]))
    }

    async fn loss_prevention_summary(&self) -> AppResult<SheetGrid> {
        Ok(grid(&[
            &["Category", "2021", "2022", "2023", "2024", "2025"],
            &["Inventory Shrinkage", "€150K", "€210K", "€680K", "€1.8M", "€2.2M"],
            &["Process Improvements", "€200K", "€280K", "€930K", "€2.76M", "€3.38M"],
            &["Total Impact", "€350K", "€490K", "€1.61M", "€4.56M", "€5.58M"],
        ]))
    }

    async fn audit_types(&self) -> AppResult<Vec<String>> {
        Ok(["Compliance", "IT Audit", "Operational", "Investigation", "Financial"]
            .iter()
            .map(|value| (*value).to_owned())
            .collect())
    }

    async fn audit_countries(&self) -> AppResult<Vec<String>> {
        Ok(["Turkey", "Germany", "UK", "Spain", "Netherlands"]
            .iter()
            .map(|value| (*value).to_owned())
            .collect())
    }

    async fn action_responsible_options(&self) -> AppResult<Vec<String>> {
        Ok(RESPONSIBLES.iter().map(|name| (*name).to_owned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use auditdesk_application::DashboardDataRepository;
    use auditdesk_domain::{ActionStatus, AuditYearFilter, FindingActionQuery};
    use chrono::Utc;
    use std::collections::HashSet;

    use super::MockDashboardRepository;

    #[tokio::test]
    async fn universe_is_stable_across_queries() {
        let repository = MockDashboardRepository::new();

        let first = repository
            .finding_actions(FindingActionQuery::all(50))
            .await
            .unwrap_or_default();
        let second = repository
            .finding_actions(FindingActionQuery::all(50))
            .await
            .unwrap_or_default();

        assert_eq!(first, second);
        assert_eq!(first.len(), 50);
    }

    #[tokio::test]
    async fn recent_bucket_is_a_subset_of_all() {
        let repository = MockDashboardRepository::new();

        let all: HashSet<String> = repository
            .finding_actions(FindingActionQuery::all(usize::MAX))
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|action| action.key)
            .collect();

        let recent = repository
            .finding_actions(FindingActionQuery {
                audit_year: AuditYearFilter::From2024,
                status: None,
                limit: usize::MAX,
            })
            .await
            .unwrap_or_default();

        assert!(!recent.is_empty());
        assert!(recent.iter().all(|action| action.audit_year >= 2024));
        assert!(recent.iter().all(|action| all.contains(&action.key)));
    }

    #[tokio::test]
    async fn overdue_actions_are_past_due() {
        let repository = MockDashboardRepository::new();
        let today = Utc::now().date_naive();

        let overdue = repository
            .finding_actions(FindingActionQuery {
                audit_year: AuditYearFilter::All,
                status: Some(ActionStatus::Overdue),
                limit: 42,
            })
            .await
            .unwrap_or_default();

        assert!(!overdue.is_empty());
        assert!(overdue.iter().all(|action| action.due_date < today));
        assert!(overdue.iter().all(|action| action.status == ActionStatus::Overdue));
    }

    #[tokio::test]
    async fn breakdown_rows_end_with_a_total() {
        let repository = MockDashboardRepository::new();

        for filter in [AuditYearFilter::From2024, AuditYearFilter::All] {
            let rows = repository
                .control_element_distribution(filter)
                .await
                .unwrap_or_default();
            assert_eq!(rows.last().map(|row| row.category.as_str()), Some("Total"));

            let body_total: u32 = rows
                .iter()
                .take(rows.len().saturating_sub(1))
                .map(|row| row.total)
                .sum();
            assert_eq!(rows.last().map(|row| row.total), Some(body_total));
        }
    }

    #[tokio::test]
    async fn sheet_grids_share_the_year_columns() {
        let repository = MockDashboardRepository::new();

        let fraud = repository.fraud_internal_control().await;
        let lp = repository.loss_prevention_summary().await;
        let (Ok(fraud), Ok(lp)) = (fraud, lp) else {
            panic!("grids should load");
        };

        assert_eq!(fraud.rows[0][1..], lp.rows[0][1..]);
        assert!(fraud.rows.iter().all(|row| row.len() == 6));
        assert!(lp.rows.iter().all(|row| row.len() == 6));
    }
}
