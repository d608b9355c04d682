//! Domain types for the Auditdesk compliance dashboard.

#![forbid(unsafe_code)]

/// Yearly audit plan entries.
pub mod audit_plan;
/// Finding/action records and the scorecard year filter.
pub mod finding;
/// Audit maturity scores.
pub mod maturity;
/// Role-derived component permissions.
pub mod permissions;
/// Session state and the view-as state machine.
pub mod session;
/// Dataset projections for charts and statistics tables.
pub mod stats;
/// Table layout preferences persisted per browser.
pub mod table_layout;
/// Task manager records.
pub mod task;
/// User profiles and roles.
pub mod user;

pub use audit_plan::{AuditPlanEntry, AuditPlanStatus};
pub use finding::{
    ActionAgeSummary, ActionStatus, AuditYearFilter, CLevel, FindingAction, FindingActionQuery,
    RiskLevel,
};
pub use maturity::{MaturityDimension, MaturityScores};
pub use permissions::{ComponentDescriptor, Grant, RolePermissions, component_registry};
pub use session::{SessionState, SessionUser};
pub use stats::{
    ActionStatusDistribution, AgeBucket, DepartmentStats, FinancialImpactSum, ImpactScoreCard,
    LeadStatusRow, RiskBreakdownRow, SheetGrid, YearCount, YearStatusCounts,
};
pub use table_layout::{ColumnLayout, TableLayout};
pub use task::{Task, TaskPriority, TaskStatus};
pub use user::{EmailAddress, Role, UserProfile, UserStatus};
