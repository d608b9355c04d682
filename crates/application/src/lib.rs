//! Application services and ports.

#![forbid(unsafe_code)]

mod access_service;
mod auth_event_service;
mod dashboard_service;
mod report_service;
mod task_service;
mod user_service;

pub use access_service::{AccessService, ViewAsOutcome};
pub use auth_event_service::{AuthEvent, AuthEventRepository, AuthEventService};
pub use dashboard_service::{
    ALL_ACTION_LIMIT, DashboardDataRepository, DashboardService, RadarChartData, RadarLabel,
    VIEW_ACTION_LIMIT,
};
pub use report_service::{EmailService, RecipientKind, RecipientSummary, ReportService, SendReportInput};
pub use task_service::{CreateTaskInput, TaskPatch, TaskRepository, TaskService};
pub use user_service::{AuthOutcome, DemoCredentials, UserRepository, UserService};
