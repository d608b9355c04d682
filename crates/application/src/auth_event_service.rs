use std::sync::Arc;

use async_trait::async_trait;
use auditdesk_core::AppResult;
use chrono::{DateTime, Utc};

/// One recorded authentication event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEvent {
    /// Email of the subject, when known at the time of the event.
    pub subject: Option<String>,
    /// Event kind, e.g. `login`, `logout`, `view_as`.
    pub event_type: String,
    /// Outcome label, e.g. `success` or `failure`.
    pub outcome: String,
    /// When the event happened.
    pub occurred_at: DateTime<Utc>,
}

/// Append-only sink for authentication events.
#[async_trait]
pub trait AuthEventRepository: Send + Sync {
    /// Appends one event.
    async fn append(&self, event: AuthEvent) -> AppResult<()>;
}

/// Records authentication activity for later inspection.
#[derive(Clone)]
pub struct AuthEventService {
    repository: Arc<dyn AuthEventRepository>,
}

impl AuthEventService {
    /// Creates an auth event service over an append-only sink.
    #[must_use]
    pub fn new(repository: Arc<dyn AuthEventRepository>) -> Self {
        Self { repository }
    }

    /// Records one event, stamping the current time.
    pub async fn record_event(
        &self,
        subject: Option<&str>,
        event_type: &str,
        outcome: &str,
    ) -> AppResult<()> {
        self.repository
            .append(AuthEvent {
                subject: subject.map(str::to_owned),
                event_type: event_type.to_owned(),
                outcome: outcome.to_owned(),
                occurred_at: Utc::now(),
            })
            .await
    }
}
