use auditdesk_application::RecipientSummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientDto {
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_level: Option<String>,
    pub action_count: u32,
}

impl From<&RecipientSummary> for RecipientDto {
    fn from(summary: &RecipientSummary) -> Self {
        Self {
            email: summary.email.clone(),
            name: summary.name.clone(),
            c_level: summary.c_level.clone(),
            action_count: summary.action_count,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    pub to: String,
    #[serde(default)]
    pub subject: String,
    pub reporting_target: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBatchEmailRequest {
    pub recipients: Vec<String>,
    #[serde(default)]
    pub bulk_email: bool,
}
