use std::str::FromStr;

use auditdesk_core::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Remediation state of one finding action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionStatus {
    /// Work not finished, due date in the future.
    Open,
    /// Work not finished, due date passed.
    Overdue,
    /// Risk formally accepted instead of remediated.
    RiskAccepted,
    /// Remediation done.
    Completed,
}

impl ActionStatus {
    /// Returns the wire/reporting label for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Overdue => "Overdue",
            Self::RiskAccepted => "Risk Accepted",
            Self::Completed => "Completed",
        }
    }

    /// Returns all statuses in reporting order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[ActionStatus] = &[
            ActionStatus::Open,
            ActionStatus::Overdue,
            ActionStatus::RiskAccepted,
            ActionStatus::Completed,
        ];

        ALL
    }
}

impl FromStr for ActionStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Open" => Ok(Self::Open),
            "Overdue" => Ok(Self::Overdue),
            "Risk Accepted" => Ok(Self::RiskAccepted),
            "Completed" => Ok(Self::Completed),
            _ => Err(AppError::Validation(format!(
                "unknown action status '{value}'"
            ))),
        }
    }
}

/// Risk severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Immediate attention required.
    Critical,
    /// High severity.
    High,
    /// Medium severity.
    Medium,
    /// Low severity.
    Low,
}

impl RiskLevel {
    /// Returns the wire/reporting label for this level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Returns all levels in severity order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[RiskLevel] = &[
            RiskLevel::Critical,
            RiskLevel::High,
            RiskLevel::Medium,
            RiskLevel::Low,
        ];

        ALL
    }
}

/// C-level executive a finding action escalates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CLevel {
    /// Chief Executive Officer.
    Ceo,
    /// Chief Financial Officer.
    Cfo,
    /// Chief Technology Officer.
    Cto,
    /// Chief Operating Officer.
    Coo,
    /// Chief Human Resources Officer.
    Chro,
}

impl CLevel {
    /// Returns the wire/reporting label for this executive level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ceo => "CEO",
            Self::Cfo => "CFO",
            Self::Cto => "CTO",
            Self::Coo => "COO",
            Self::Chro => "CHRO",
        }
    }

    /// Returns all executive levels.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[CLevel] = &[
            CLevel::Ceo,
            CLevel::Cfo,
            CLevel::Cto,
            CLevel::Coo,
            CLevel::Chro,
        ];

        ALL
    }
}

/// The scorecard filter: the two-valued audit-year bucket used by every
/// year-filterable dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditYearFilter {
    /// Audit year 2024 or later.
    From2024,
    /// No year restriction.
    All,
}

impl AuditYearFilter {
    /// Returns the wire value for this bucket.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::From2024 => "2024+",
            Self::All => "all",
        }
    }

    /// Parses an optional query value, falling back to the endpoint default
    /// for absent or unknown values.
    #[must_use]
    pub fn parse_or(value: Option<&str>, default: Self) -> Self {
        match value {
            Some("2024+") => Self::From2024,
            Some("all") => Self::All,
            _ => default,
        }
    }

    /// Returns whether an audit year falls in the bucket.
    #[must_use]
    pub fn matches_year(&self, year: u16) -> bool {
        match self {
            Self::From2024 => year >= 2024,
            Self::All => true,
        }
    }
}

/// One remediation action linked to an audit finding.
///
/// Records are synthesized per request from fixed distributions; there is no
/// lifecycle beyond a single response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingAction {
    /// Stable key, e.g. `FIND-2024-0012`.
    pub key: String,
    /// Short description.
    pub summary: String,
    /// Long description.
    pub description: String,
    /// Remediation state.
    pub status: ActionStatus,
    /// Remediation due date.
    pub due_date: NaiveDate,
    /// Person responsible for remediation.
    pub responsible: String,
    /// Executive the action escalates to.
    pub c_level: CLevel,
    /// Year of the originating audit.
    pub audit_year: u16,
    /// Name of the originating audit project.
    pub audit_name: String,
    /// Risk severity.
    pub risk_level: RiskLevel,
    /// Estimated financial impact in euros.
    pub financial_impact: i64,
    /// Date the finding was recorded.
    pub created_date: NaiveDate,
}

/// Filter parameters for finding-action synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindingActionQuery {
    /// Audit-year bucket.
    pub audit_year: AuditYearFilter,
    /// Optional exact status filter.
    pub status: Option<ActionStatus>,
    /// Maximum number of records returned.
    pub limit: usize,
}

impl FindingActionQuery {
    /// Creates a query over the full year range without a status filter.
    #[must_use]
    pub fn all(limit: usize) -> Self {
        Self {
            audit_year: AuditYearFilter::All,
            status: None,
            limit,
        }
    }
}

/// Aggregate ageing counters for finding actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionAgeSummary {
    /// All tracked actions.
    pub total_actions: u32,
    /// Actions past their due date.
    pub overdue_actions: u32,
    /// Open actions due within the next 30 days.
    pub upcoming_actions: u32,
    /// Average days from creation to completion.
    pub avg_days_to_complete: u32,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{ActionStatus, AuditYearFilter};

    #[test]
    fn status_roundtrip_wire_label() {
        for status in ActionStatus::all() {
            assert_eq!(ActionStatus::from_str(status.as_str()).ok(), Some(*status));
        }
    }

    #[test]
    fn year_filter_falls_back_to_default() {
        assert_eq!(
            AuditYearFilter::parse_or(None, AuditYearFilter::All),
            AuditYearFilter::All
        );
        assert_eq!(
            AuditYearFilter::parse_or(Some("1999"), AuditYearFilter::From2024),
            AuditYearFilter::From2024
        );
        assert_eq!(
            AuditYearFilter::parse_or(Some("2024+"), AuditYearFilter::All),
            AuditYearFilter::From2024
        );
    }

    #[test]
    fn from_2024_bucket_excludes_earlier_years() {
        assert!(AuditYearFilter::From2024.matches_year(2024));
        assert!(AuditYearFilter::From2024.matches_year(2025));
        assert!(!AuditYearFilter::From2024.matches_year(2023));
        assert!(AuditYearFilter::All.matches_year(2021));
    }
}
