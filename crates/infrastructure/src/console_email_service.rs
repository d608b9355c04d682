//! Console email service for the demo. Logs messages to tracing output.

use async_trait::async_trait;
use auditdesk_application::{EmailService, RecipientKind, SendReportInput};
use auditdesk_core::AppResult;
use tracing::info;

/// Demo email service that logs instead of delivering.
#[derive(Clone)]
pub struct ConsoleEmailService;

impl ConsoleEmailService {
    /// Creates a new console email service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for ConsoleEmailService {
    async fn send_report(&self, input: &SendReportInput) -> AppResult<()> {
        info!(
            to = input.to,
            subject = input.subject,
            report_type = input.kind.as_str(),
            "--- REPORT EMAIL (console, not delivered) ---"
        );

        Ok(())
    }

    async fn send_batch(
        &self,
        kind: RecipientKind,
        recipients: &[String],
        bulk: bool,
    ) -> AppResult<()> {
        info!(
            report_type = kind.as_str(),
            recipients = recipients.join(", "),
            bulk = bulk,
            "--- BATCH REPORT EMAIL (console, not delivered) ---"
        );

        Ok(())
    }
}
