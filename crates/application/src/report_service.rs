use std::sync::Arc;

use async_trait::async_trait;
use auditdesk_core::{AppError, AppResult};

/// Which reporting audience a message is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientKind {
    /// People responsible for open finding actions.
    ActionResponsible,
    /// C-level executives receiving the summary report.
    CLevel,
}

impl RecipientKind {
    /// Wire name used by report payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ActionResponsible => "action_responsible",
            Self::CLevel => "clevel",
        }
    }
}

/// One selectable report recipient with their open-action count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientSummary {
    /// Recipient email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Executive title, only set for C-level recipients.
    pub c_level: Option<String>,
    /// Number of actions the recipient is responsible for.
    pub action_count: u32,
}

/// A single report message to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReportInput {
    /// Destination address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Audience the report targets.
    pub kind: RecipientKind,
}

/// Outbound mail port. The demo adapter logs instead of delivering.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Dispatches a single report message.
    async fn send_report(&self, input: &SendReportInput) -> AppResult<()>;

    /// Dispatches a report to a recipient batch.
    async fn send_batch(
        &self,
        kind: RecipientKind,
        recipients: &[String],
        bulk: bool,
    ) -> AppResult<()>;
}

/// Application service for report recipients and mail dispatch.
#[derive(Clone)]
pub struct ReportService {
    mailer: Arc<dyn EmailService>,
}

impl ReportService {
    /// Creates a report service over an outbound mail port.
    #[must_use]
    pub fn new(mailer: Arc<dyn EmailService>) -> Self {
        Self { mailer }
    }

    /// Lists action-responsible recipients with their open-action counts.
    #[must_use]
    pub fn action_responsible_list(&self) -> Vec<RecipientSummary> {
        demo_recipients(false)
    }

    /// Lists every known action-responsible recipient.
    ///
    /// The demo dataset has no wider population, so this matches
    /// [`Self::action_responsible_list`].
    #[must_use]
    pub fn all_action_responsible_list(&self) -> Vec<RecipientSummary> {
        demo_recipients(false)
    }

    /// Lists C-level recipients with their executive titles.
    #[must_use]
    pub fn clevel_list(&self) -> Vec<RecipientSummary> {
        demo_recipients(true)
    }

    /// Dispatches a single report message.
    pub async fn send_report(&self, input: SendReportInput) -> AppResult<()> {
        if input.to.trim().is_empty() {
            return Err(AppError::Validation(
                "report recipient must not be empty".to_owned(),
            ));
        }

        self.mailer.send_report(&input).await
    }

    /// Dispatches a report to a recipient batch.
    pub async fn send_batch(
        &self,
        kind: RecipientKind,
        recipients: Vec<String>,
        bulk: bool,
    ) -> AppResult<()> {
        if recipients.is_empty() {
            return Err(AppError::Validation(
                "at least one recipient is required".to_owned(),
            ));
        }

        self.mailer.send_batch(kind, &recipients, bulk).await
    }
}

fn demo_recipients(with_titles: bool) -> Vec<RecipientSummary> {
    vec![
        RecipientSummary {
            email: "mahmuturan44@gmail.com".to_owned(),
            name: "Mahmut Uran".to_owned(),
            c_level: with_titles.then(|| "CEO".to_owned()),
            action_count: 45,
        },
        RecipientSummary {
            email: "donmezahmet@yandex.com".to_owned(),
            name: "Ahmet Dönmez".to_owned(),
            c_level: with_titles.then(|| "CFO".to_owned()),
            action_count: 34,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use auditdesk_core::{AppError, AppResult};
    use tokio::sync::Mutex;

    use super::{EmailService, RecipientKind, ReportService, SendReportInput};

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl EmailService for RecordingMailer {
        async fn send_report(&self, input: &SendReportInput) -> AppResult<()> {
            self.sent.lock().await.push(input.to.clone());
            Ok(())
        }

        async fn send_batch(
            &self,
            _kind: RecipientKind,
            recipients: &[String],
            _bulk: bool,
        ) -> AppResult<()> {
            self.sent.lock().await.extend(recipients.iter().cloned());
            Ok(())
        }
    }

    #[tokio::test]
    async fn report_reaches_the_mail_port() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = ReportService::new(mailer.clone());

        let outcome = service
            .send_report(SendReportInput {
                to: "mahmuturan44@gmail.com".to_owned(),
                subject: "Open Actions Summary".to_owned(),
                kind: RecipientKind::ActionResponsible,
            })
            .await;

        assert!(outcome.is_ok());
        assert_eq!(
            mailer.sent.lock().await.as_slice(),
            ["mahmuturan44@gmail.com".to_owned()]
        );
    }

    #[tokio::test]
    async fn empty_recipient_is_rejected() {
        let service = ReportService::new(Arc::new(RecordingMailer::default()));
        let outcome = service
            .send_report(SendReportInput {
                to: "  ".to_owned(),
                subject: "Summary".to_owned(),
                kind: RecipientKind::CLevel,
            })
            .await;

        assert!(matches!(outcome, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn empty_batch_is_rejected() {
        let service = ReportService::new(Arc::new(RecordingMailer::default()));
        let outcome = service
            .send_batch(RecipientKind::CLevel, Vec::new(), true)
            .await;

        assert!(matches!(outcome, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn clevel_list_carries_titles() {
        let service = ReportService::new(Arc::new(RecordingMailer::default()));

        let clevel = service.clevel_list();
        assert!(clevel.iter().all(|entry| entry.c_level.is_some()));

        let responsible = service.action_responsible_list();
        assert!(responsible.iter().all(|entry| entry.c_level.is_none()));
        assert_eq!(responsible.len(), 2);
    }
}
