//! In-memory user store seeded with the demo organisation.

use async_trait::async_trait;
use auditdesk_application::UserRepository;
use auditdesk_core::AppResult;
use auditdesk_domain::{Role, UserProfile, UserStatus};

/// User repository backed by a fixed seeded list. Reset on process restart.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Vec<UserProfile>,
}

impl InMemoryUserRepository {
    /// Creates the repository with the demo organisation seeded.
    pub fn seeded() -> AppResult<Self> {
        let users = vec![
            UserProfile::new(
                "mahmut@demo.com",
                "Mahmut Uran",
                Role::Admin,
                UserStatus::Active,
                "Internal Audit",
            )?,
            UserProfile::new(
                "mahmuturan44@gmail.com",
                "Mahmut Uran (Email)",
                Role::Team,
                UserStatus::Active,
                "Audit Team",
            )?,
            UserProfile::new(
                "donmezahmet@yandex.com",
                "Ahmet Dönmez",
                Role::TeamManager,
                UserStatus::Active,
                "Audit Team",
            )?,
            UserProfile::new(
                "director@democompany.com",
                "Department Director",
                Role::DepartmentDirector,
                UserStatus::Active,
                "Operations",
            )?,
            UserProfile::new(
                "ceo@democompany.com",
                "CEO User",
                Role::TopManagement,
                UserStatus::Active,
                "Executive",
            )?,
            UserProfile::new(
                "manager@democompany.com",
                "Management User",
                Role::Management,
                UserStatus::Active,
                "Management",
            )?,
        ];

        Ok(Self { users })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_users(&self) -> AppResult<Vec<UserProfile>> {
        Ok(self.users.clone())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>> {
        let email = email.trim().to_lowercase();
        Ok(self
            .users
            .iter()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }
}
