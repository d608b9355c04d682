use std::sync::Arc;

use async_trait::async_trait;
use auditdesk_core::AppResult;
use auditdesk_domain::{UserProfile, UserStatus};

/// Repository port for seeded user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all seeded users.
    async fn list_users(&self) -> AppResult<Vec<UserProfile>>;

    /// Finds one user by its normalized email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>>;
}

/// The single seeded credential pair accepted by the demo login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCredentials {
    /// Login email of the seeded admin.
    pub email: String,
    /// Plaintext demo password.
    pub password: String,
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credentials matched; session may be established for this profile.
    Authenticated(UserProfile),
    /// Credentials rejected. The reason is never disclosed to the caller.
    Failed,
}

/// Application service for authentication and user lookups.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    credentials: DemoCredentials,
}

impl UserService {
    /// Creates a user service over a repository and the seeded credential.
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>, credentials: DemoCredentials) -> Self {
        Self {
            repository,
            credentials,
        }
    }

    /// Validates a credential pair against the seeded demo credential.
    ///
    /// All failure cases collapse into [`AuthOutcome::Failed`]: wrong email,
    /// wrong password, missing profile and inactive account are
    /// indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthOutcome> {
        let email = email.trim().to_lowercase();
        if email != self.credentials.email || password != self.credentials.password {
            return Ok(AuthOutcome::Failed);
        }

        let profile = match self.repository.find_by_email(email.as_str()).await? {
            Some(profile) if profile.status == UserStatus::Active => profile,
            _ => return Ok(AuthOutcome::Failed),
        };

        Ok(AuthOutcome::Authenticated(profile))
    }

    /// Lists all seeded users.
    pub async fn list_users(&self) -> AppResult<Vec<UserProfile>> {
        self.repository.list_users().await
    }

    /// Finds one user by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>> {
        self.repository.find_by_email(email).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use auditdesk_core::AppResult;
    use auditdesk_domain::{Role, UserProfile, UserStatus};

    use super::{AuthOutcome, DemoCredentials, UserRepository, UserService};

    struct FakeUserRepository {
        users: Vec<UserProfile>,
    }

    #[async_trait]
    impl UserRepository for FakeUserRepository {
        async fn list_users(&self) -> AppResult<Vec<UserProfile>> {
            Ok(self.users.clone())
        }

        async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>> {
            Ok(self
                .users
                .iter()
                .find(|user| user.email.as_str() == email)
                .cloned())
        }
    }

    fn service_with_admin(status: UserStatus) -> UserService {
        let admin = UserProfile::new("admin@demo.com", "Admin", Role::Admin, status, "Audit")
            .unwrap_or_else(|_| panic!("test profile"));

        UserService::new(
            Arc::new(FakeUserRepository { users: vec![admin] }),
            DemoCredentials {
                email: "admin@demo.com".to_owned(),
                password: "demo-password".to_owned(),
            },
        )
    }

    #[tokio::test]
    async fn seeded_credential_authenticates() {
        let service = service_with_admin(UserStatus::Active);
        let outcome = service.login("admin@demo.com", "demo-password").await;
        assert!(matches!(outcome, Ok(AuthOutcome::Authenticated(_))));
    }

    #[tokio::test]
    async fn email_is_normalized_before_comparison() {
        let service = service_with_admin(UserStatus::Active);
        let outcome = service.login("  ADMIN@Demo.COM ", "demo-password").await;
        assert!(matches!(outcome, Ok(AuthOutcome::Authenticated(_))));
    }

    #[tokio::test]
    async fn wrong_password_fails() {
        let service = service_with_admin(UserStatus::Active);
        let outcome = service.login("admin@demo.com", "wrong").await;
        assert!(matches!(outcome, Ok(AuthOutcome::Failed)));
    }

    #[tokio::test]
    async fn inactive_account_fails() {
        let service = service_with_admin(UserStatus::Inactive);
        let outcome = service.login("admin@demo.com", "demo-password").await;
        assert!(matches!(outcome, Ok(AuthOutcome::Failed)));
    }
}
