use auditdesk_application::{
    AccessService, AuthEventService, DashboardService, ReportService, TaskService, UserService,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub access_service: AccessService,
    pub dashboard_service: DashboardService,
    pub task_service: TaskService,
    pub report_service: ReportService,
    pub auth_event_service: AuthEventService,
    pub frontend_url: String,
}
