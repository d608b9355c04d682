//! Auditdesk API composition root.

#![forbid(unsafe_code)]

mod dto;
mod error;
mod handlers;
mod middleware;
mod session;
mod state;

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post, put};
use auditdesk_application::{
    AccessService, AuthEventService, DashboardService, DemoCredentials, ReportService, TaskService,
    UserService,
};
use auditdesk_core::AppError;
use auditdesk_infrastructure::{
    ConsoleEmailService, InMemoryAuthEventRepository, InMemoryTaskRepository,
    InMemoryUserRepository, MockDashboardRepository,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let api_port = env::var("API_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3001);
    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5174".to_owned());
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .unwrap_or_else(|_| "false".to_owned())
        .eq_ignore_ascii_case("true");
    let demo_email = env::var("DEMO_EMAIL").unwrap_or_else(|_| "mahmut@demo.com".to_owned());
    let demo_password =
        env::var("DEMO_PASSWORD").unwrap_or_else(|_| "mahmutturan12345".to_owned());

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(cookie_secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)));

    let user_repository = Arc::new(InMemoryUserRepository::seeded()?);
    let task_repository = Arc::new(InMemoryTaskRepository::seeded());
    let auth_event_repository = Arc::new(InMemoryAuthEventRepository::new());
    let dashboard_repository = Arc::new(MockDashboardRepository::new());
    let email_service = Arc::new(ConsoleEmailService::new());

    let app_state = AppState {
        user_service: UserService::new(
            user_repository.clone(),
            DemoCredentials {
                email: demo_email.trim().to_lowercase(),
                password: demo_password,
            },
        ),
        access_service: AccessService::new(user_repository),
        dashboard_service: DashboardService::new(dashboard_repository),
        task_service: TaskService::new(task_repository),
        report_service: ReportService::new(email_service),
        auth_event_service: AuthEventService::new(auth_event_repository),
        frontend_url: frontend_url.clone(),
    };

    let protected_routes = Router::new()
        .route("/api/auth/permissions", get(handlers::auth::permissions_handler))
        // Dashboard datasets.
        .route(
            "/api/audit-projects-by-year",
            get(handlers::dashboard::audit_projects_by_year),
        )
        .route(
            "/api/investigation-counts",
            get(handlers::dashboard::investigation_counts),
        )
        .route(
            "/api/finding-status-by-year",
            get(handlers::dashboard::finding_status_by_year),
        )
        .route(
            "/api/finding-action-status-distribution",
            get(handlers::dashboard::finding_action_status_distribution),
        )
        .route(
            "/api/finding-action-status-by-lead",
            get(handlers::dashboard::lead_status_distribution),
        )
        .route(
            "/api/lead-status-distribution",
            get(handlers::dashboard::lead_status_distribution),
        )
        .route(
            "/api/user-finding-actions",
            get(handlers::dashboard::user_finding_actions),
        )
        .route(
            "/api/department-finding-actions",
            get(handlers::dashboard::department_finding_actions),
        )
        .route(
            "/api/clevel-finding-actions",
            get(handlers::dashboard::clevel_finding_actions),
        )
        .route(
            "/api/vp-finding-actions",
            get(handlers::dashboard::vp_finding_actions),
        )
        .route(
            "/api/team-finding-actions",
            get(handlers::dashboard::team_finding_actions),
        )
        .route(
            "/api/management-finding-actions",
            get(handlers::dashboard::management_finding_actions),
        )
        .route(
            "/api/all-finding-actions",
            get(handlers::dashboard::all_finding_actions),
        )
        .route(
            "/api/finding-actions-by-status",
            get(handlers::dashboard::finding_actions_by_status),
        )
        .route("/api/overdue-actions", get(handlers::dashboard::overdue_actions))
        .route("/api/upcoming-actions", get(handlers::dashboard::upcoming_actions))
        .route(
            "/api/finding-actions-aging",
            get(handlers::dashboard::finding_actions_aging),
        )
        .route(
            "/api/finding-action-age",
            get(handlers::dashboard::finding_actions_aging),
        )
        .route(
            "/api/finding-action-age-summary",
            get(handlers::dashboard::finding_action_age_summary),
        )
        .route(
            "/api/fraud-impact-score-cards",
            get(handlers::dashboard::fraud_impact_score_cards),
        )
        .route(
            "/api/lp-impact-score-cards",
            get(handlers::dashboard::lp_impact_score_cards),
        )
        .route(
            "/api/financial-impact-sum",
            get(handlers::dashboard::financial_impact_sum),
        )
        .route("/api/mat-scores", get(handlers::dashboard::mat_scores))
        .route(
            "/api/radar-chart-data",
            get(handlers::dashboard::radar_chart_data),
        )
        .route(
            "/api/google-sheet-data",
            get(handlers::dashboard::google_sheet_data),
        )
        .route(
            "/api/loss-prevention-summary",
            get(handlers::dashboard::loss_prevention_summary),
        )
        .route(
            "/api/statistics-by-control-and-risk",
            get(handlers::dashboard::statistics_by_control_and_risk),
        )
        .route(
            "/api/statistics-by-type-and-risk",
            get(handlers::dashboard::statistics_by_type_and_risk),
        )
        .route("/api/department-stats", get(handlers::dashboard::department_stats))
        .route("/api/yearly-audit-plan", get(handlers::dashboard::yearly_audit_plan))
        .route("/api/audit-types", get(handlers::dashboard::audit_types))
        .route("/api/audit-countries", get(handlers::dashboard::audit_countries))
        .route("/api/clevel-options", get(handlers::dashboard::clevel_options))
        .route(
            "/api/action-responsible-options",
            get(handlers::dashboard::action_responsible_options),
        )
        .route(
            "/api/finding-actions-export",
            get(handlers::dashboard::finding_actions_export),
        )
        .route(
            "/api/finding-actions-aging-export",
            get(handlers::dashboard::finding_actions_aging_export),
        )
        // Task manager.
        .route(
            "/api/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/api/tasks/{id}",
            put(handlers::tasks::update_task).delete(handlers::tasks::delete_task),
        )
        // Access management.
        .route("/api/users", get(handlers::access_management::list_users))
        .route(
            "/api/access-management/users",
            get(handlers::access_management::list_users),
        )
        .route(
            "/api/access-management/roles",
            get(handlers::access_management::list_roles),
        )
        .route(
            "/api/access-management/components",
            get(handlers::access_management::list_components),
        )
        .route(
            "/api/access-management/role-permissions/{role_name}",
            get(handlers::access_management::role_permissions),
        )
        .route(
            "/api/permissions/user/{email}",
            get(handlers::access_management::user_permissions),
        )
        .route(
            "/api/access-management/view-as",
            post(handlers::access_management::view_as),
        )
        .route(
            "/api/access-management/stop-view-as",
            post(handlers::access_management::stop_view_as),
        )
        // Email and reports.
        .route(
            "/api/email/action-responsible-list",
            get(handlers::email::action_responsible_list),
        )
        .route(
            "/api/email/all-action-responsible-list",
            get(handlers::email::all_action_responsible_list),
        )
        .route("/api/email/clevel-list", get(handlers::email::clevel_list))
        .route("/api/send-email", post(handlers::email::send_email))
        .route(
            "/api/send-action-responsible-email",
            post(handlers::email::send_action_responsible_email),
        )
        .route(
            "/api/send-clevel-email",
            post(handlers::email::send_clevel_email),
        )
        // Per-browser table layouts.
        .route(
            "/api/ui-layout/{page}",
            get(handlers::layout::get_layout).put(handlers::layout::put_layout),
        )
        .route_layer(from_fn(middleware::require_auth));

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(&frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    let app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/api/auth/login", post(handlers::auth::login_handler))
        .route("/api/auth/logout", post(handlers::auth::logout_handler))
        .route("/api/auth/status", get(handlers::auth::status_handler))
        .merge(protected_routes)
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_same_origin_for_mutations,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(session_layer)
        .with_state(app_state);

    let host = IpAddr::from_str(&api_host)
        .map_err(|error| AppError::Internal(format!("invalid API_HOST '{api_host}': {error}")))?;
    let address = SocketAddr::from((host, api_port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "auditdesk-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
