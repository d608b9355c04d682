//! In-memory authentication event log.

use async_trait::async_trait;
use auditdesk_application::{AuthEvent, AuthEventRepository};
use auditdesk_core::AppResult;
use tokio::sync::RwLock;
use tracing::debug;

/// Append-only auth event sink held in memory. Reset on process restart.
#[derive(Debug, Default)]
pub struct InMemoryAuthEventRepository {
    events: RwLock<Vec<AuthEvent>>,
}

impl InMemoryAuthEventRepository {
    /// Creates an empty event log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded events, oldest first.
    pub async fn snapshot(&self) -> Vec<AuthEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl AuthEventRepository for InMemoryAuthEventRepository {
    async fn append(&self, event: AuthEvent) -> AppResult<()> {
        debug!(
            subject = event.subject.as_deref().unwrap_or("-"),
            event_type = event.event_type,
            outcome = event.outcome,
            "auth event recorded"
        );
        self.events.write().await.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use auditdesk_application::{AuthEvent, AuthEventRepository};
    use chrono::Utc;

    use super::InMemoryAuthEventRepository;

    #[tokio::test]
    async fn appended_events_show_up_in_order() {
        let repository = InMemoryAuthEventRepository::new();

        for event_type in ["login", "logout"] {
            let outcome = repository
                .append(AuthEvent {
                    subject: Some("mahmut@demo.com".to_owned()),
                    event_type: event_type.to_owned(),
                    outcome: "success".to_owned(),
                    occurred_at: Utc::now(),
                })
                .await;
            assert!(outcome.is_ok());
        }

        let events = repository.snapshot().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, "login");
        assert_eq!(events[1].event_type, "logout");
    }
}
