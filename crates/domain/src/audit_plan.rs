use std::str::FromStr;

use auditdesk_core::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Execution state of a planned audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditPlanStatus {
    /// Scheduled but not begun.
    NotStarted,
    /// Scoping in progress.
    Planning,
    /// Fieldwork running.
    InProgress,
    /// Audit closed.
    Completed,
}

impl AuditPlanStatus {
    /// Returns the wire/reporting label for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl FromStr for AuditPlanStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Not Started" => Ok(Self::NotStarted),
            "Planning" => Ok(Self::Planning),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            _ => Err(AppError::Validation(format!(
                "unknown audit plan status '{value}'"
            ))),
        }
    }
}

/// One row of the yearly audit plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditPlanEntry {
    /// Plan row id.
    pub id: u32,
    /// Audit project name.
    pub audit_name: String,
    /// Audit type, e.g. `Compliance` or `IT Audit`.
    pub audit_type: String,
    /// Execution state.
    pub status: AuditPlanStatus,
    /// Planned fieldwork start.
    pub planned_start: NaiveDate,
    /// Actual fieldwork start, once begun.
    pub actual_start: Option<NaiveDate>,
    /// Planned fieldwork end.
    pub planned_end: NaiveDate,
    /// Actual fieldwork end, once closed.
    pub actual_end: Option<NaiveDate>,
    /// Lead auditor.
    pub lead: String,
    /// Audited country.
    pub country: String,
    /// Plan quarter, e.g. `Q1`.
    pub quarter: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::AuditPlanStatus;

    #[test]
    fn status_roundtrip_wire_label() {
        for status in [
            AuditPlanStatus::NotStarted,
            AuditPlanStatus::Planning,
            AuditPlanStatus::InProgress,
            AuditPlanStatus::Completed,
        ] {
            assert_eq!(
                AuditPlanStatus::from_str(status.as_str()).ok(),
                Some(status)
            );
        }
    }
}
