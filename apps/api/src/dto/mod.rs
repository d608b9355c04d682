//! Wire types. Field casing matches the dashboard client: camelCase for the
//! chart/auth payloads, snake_case for tasks.

mod auth;
mod common;
mod dashboard;
mod email;
mod layout;
mod tasks;

pub use auth::{
    AuthStatusResponse, ComponentDto, LoginData, LoginRequest, PermissionsDto, RoleDto,
    SessionUserDto, UserDto, ViewAsData, ViewAsRequest,
};
pub use common::{Envelope, MessageResponse, SuccessResponse};
pub use dashboard::{
    AgeSummaryDto, AuditPlanRowDto, AuditProjectsRow, AuditYearQuery, ControlBreakdownRow,
    DepartmentStatsDto, FinancialImpactSumDto, FindingActionDto, FraudScoreCardsResponse,
    InvestigationsRow, LpScoreCardsResponse, MatScoresDto, MaturityDimensionDto, RadarChartDto,
    RadarLabelDto, ScoreCardDto, SheetDto, StatusBucketDto, StatusDistributionDto, StatusQuery,
    TypeBreakdownRow, age_histogram, finding_action_list, finding_status_map, lead_status_map,
};
pub use email::{RecipientDto, SendBatchEmailRequest, SendEmailRequest};
pub use layout::{ColumnLayoutDto, TableLayoutDto};
pub use tasks::{CreateTaskRequest, UpdateTaskRequest};
