use serde::{Deserialize, Serialize};

/// Per-year project or investigation counter with an auditor workload ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearCount {
    /// Calendar year.
    pub year: u16,
    /// Item count for the year.
    pub count: u32,
    /// Items per auditor.
    pub per_auditor: f64,
}

/// Finding status counters for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearStatusCounts {
    /// Calendar year.
    pub year: u16,
    /// Open findings.
    pub open: u32,
    /// Risk-accepted findings.
    pub risk_accepted: u32,
    /// Completed findings.
    pub completed: u32,
}

/// Status distribution of finding actions within one scorecard bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStatusDistribution {
    /// Open actions.
    pub open: u32,
    /// Overdue actions.
    pub overdue: u32,
    /// Risk-accepted actions.
    pub risk_accepted: u32,
    /// Completed actions.
    pub completed: u32,
    /// Summed financial impact in euros.
    pub total_financial_impact: i64,
    /// Parent audit issue keys contributing to the bucket.
    pub parent_keys: Vec<String>,
}

/// Status counters for one audit lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadStatusRow {
    /// Lead auditor name.
    pub lead: String,
    /// Open actions.
    pub open: u32,
    /// Risk-accepted actions.
    pub risk_accepted: u32,
    /// Completed actions.
    pub completed: u32,
    /// Overdue actions.
    pub overdue: u32,
}

/// One bucket of the action-age histogram, labelled in days relative to the
/// due date (negative is overdue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBucket {
    /// Histogram bucket label, e.g. `0—30`.
    pub label: String,
    /// Actions in the bucket.
    pub count: u32,
}

/// Yearly financial impact scorecard entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactScoreCard {
    /// Calendar year.
    pub year: u16,
    /// Impact in euros.
    pub impact: i64,
}

/// Total financial impact split by source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialImpactSum {
    /// Fraud-related impact in euros.
    pub fraud_impact: i64,
    /// Loss-prevention impact in euros.
    pub lp_impact: i64,
}

impl FinancialImpactSum {
    /// Returns the combined impact.
    #[must_use]
    pub fn combined(&self) -> i64 {
        self.fraud_impact + self.lp_impact
    }
}

/// Risk-level counters for one category (control element or risk type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakdownRow {
    /// Category label; the final row carries the `Total` label.
    pub category: String,
    /// Critical findings.
    pub critical: u32,
    /// High findings.
    pub high: u32,
    /// Medium findings.
    pub medium: u32,
    /// Low findings.
    pub low: u32,
    /// Row total.
    pub total: u32,
}

/// Department-level action counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStats {
    /// All department actions.
    pub total_actions: u32,
    /// Open actions.
    pub open_actions: u32,
    /// Overdue actions.
    pub overdue_actions: u32,
    /// Completed actions.
    pub completed_actions: u32,
    /// Completed / total, in percent.
    pub completion_rate: f64,
}

/// Spreadsheet-style grid returned by the summary sheet endpoints: a header
/// row followed by label + per-year value rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetGrid {
    /// Grid rows, first row is the header.
    pub rows: Vec<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::FinancialImpactSum;

    #[test]
    fn combined_impact_sums_both_sources() {
        let sum = FinancialImpactSum {
            fraud_impact: 66_490_000,
            lp_impact: 12_590_000,
        };
        assert_eq!(sum.combined(), 79_080_000);
    }
}
