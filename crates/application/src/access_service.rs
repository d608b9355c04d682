use std::sync::Arc;

use auditdesk_core::{AppError, AppResult};
use auditdesk_domain::{
    ComponentDescriptor, Role, RolePermissions, SessionState, SessionUser, UserProfile,
    component_registry,
};

use crate::user_service::UserRepository;

/// Result of a successful view-as transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewAsOutcome {
    /// The now-effective user.
    pub user: SessionUser,
    /// Permissions derived from the target role.
    pub permissions: RolePermissions,
    /// The preserved original user.
    pub original_user: SessionUser,
}

/// Application service for permission resolution and view-as impersonation.
#[derive(Clone)]
pub struct AccessService {
    repository: Arc<dyn UserRepository>,
}

impl AccessService {
    /// Creates an access service over the user repository.
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Returns the static permission set for a role.
    #[must_use]
    pub fn role_permissions(&self, role: Role) -> RolePermissions {
        RolePermissions::for_role(role)
    }

    /// Resolves the permission set of the user registered under an email.
    pub async fn permissions_for_email(&self, email: &str) -> AppResult<RolePermissions> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no user registered for '{email}'")))?;

        Ok(RolePermissions::for_role(user.role))
    }

    /// Starts impersonating the user registered under `target_email`.
    ///
    /// Authorization is checked against the session's original user, never
    /// the currently effective one, so an impersonated low-privilege view can
    /// not widen access. Unknown targets leave the session unchanged.
    pub async fn start_impersonation(
        &self,
        state: &mut SessionState,
        target_email: &str,
    ) -> AppResult<ViewAsOutcome> {
        let target = self
            .repository
            .find_by_email(target_email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no user registered for '{target_email}'")))?;

        let authorizer = state.authorizing_user();
        if !RolePermissions::for_role(authorizer.role).may_view_as(target.role) {
            return Err(AppError::Forbidden(format!(
                "role '{}' may not view as role '{}'",
                authorizer.role.as_str(),
                target.role.as_str()
            )));
        }

        state.start_impersonation(SessionUser::from(&target));

        let original_user = state
            .original_user()
            .cloned()
            .ok_or_else(|| AppError::Internal("impersonation lost the original user".to_owned()))?;

        Ok(ViewAsOutcome {
            user: state.user().clone(),
            permissions: RolePermissions::for_role(target.role),
            original_user,
        })
    }

    /// Stops impersonating and restores the original user.
    ///
    /// Returns a conflict when the session is not impersonating.
    pub fn stop_impersonation(&self, state: &mut SessionState) -> AppResult<()> {
        state.stop_impersonation()
    }

    /// Lists all seeded users for the access management view.
    pub async fn list_users(&self) -> AppResult<Vec<UserProfile>> {
        self.repository.list_users().await
    }

    /// Lists all grantable roles.
    #[must_use]
    pub fn list_roles(&self) -> &'static [Role] {
        Role::all()
    }

    /// Lists all grantable UI components.
    #[must_use]
    pub fn list_components(&self) -> &'static [ComponentDescriptor] {
        component_registry()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use auditdesk_core::{AppError, AppResult};
    use auditdesk_domain::{Role, SessionState, SessionUser, UserProfile, UserStatus};

    use crate::user_service::UserRepository;

    use super::AccessService;

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

    fn profile(email: &str, role: Role) -> UserProfile {
        UserProfile::new(email, "Test User", role, UserStatus::Active, "Audit")
            .unwrap_or_else(|_| panic!("test profile"))
    }

    fn service(users: Vec<UserProfile>) -> AccessService {
        AccessService::new(Arc::new(FakeUserRepository { users }))
    }

    #[tokio::test]
    async fn admin_may_impersonate_any_seeded_user() {
        let admin = profile("admin@demo.com", Role::Admin);
        let target = profile("team@demo.com", Role::Team);
        let service = service(vec![admin.clone(), target]);

        let mut state = SessionState::new(SessionUser::from(&admin));
        let outcome = service
            .start_impersonation(&mut state, "team@demo.com")
            .await;

        assert!(outcome.is_ok());
        assert!(state.is_impersonating());
        assert_eq!(state.user().role, Role::Team);
    }

    #[tokio::test]
    async fn unknown_target_leaves_session_unchanged() {
        let admin = profile("admin@demo.com", Role::Admin);
        let service = service(vec![admin.clone()]);

        let mut state = SessionState::new(SessionUser::from(&admin));
        let outcome = service
            .start_impersonation(&mut state, "ghost@demo.com")
            .await;

        assert!(matches!(outcome, Err(AppError::NotFound(_))));
        assert!(!state.is_impersonating());
        assert_eq!(state.user().email.as_str(), "admin@demo.com");
    }

    #[tokio::test]
    async fn unprivileged_role_may_not_impersonate_upwards() {
        let team = profile("team@demo.com", Role::Team);
        let admin = profile("admin@demo.com", Role::Admin);
        let service = service(vec![team.clone(), admin]);

        let mut state = SessionState::new(SessionUser::from(&team));
        let outcome = service
            .start_impersonation(&mut state, "admin@demo.com")
            .await;

        assert!(matches!(outcome, Err(AppError::Forbidden(_))));
        assert!(!state.is_impersonating());
    }

    #[tokio::test]
    async fn authorization_uses_the_original_user_while_impersonating() {
        let admin = profile("admin@demo.com", Role::Admin);
        let team = profile("team@demo.com", Role::Team);
        let director = profile("director@demo.com", Role::DepartmentDirector);
        let service = service(vec![admin.clone(), team, director]);

        let mut state = SessionState::new(SessionUser::from(&admin));
        let first = service
            .start_impersonation(&mut state, "team@demo.com")
            .await;
        assert!(first.is_ok());

        // A plain team session could never view as a director, but the
        // original admin identity still authorizes the switch.
        let second = service
            .start_impersonation(&mut state, "director@demo.com")
            .await;
        assert!(second.is_ok());
        assert_eq!(
            state.original_user().map(|user| user.role),
            Some(Role::Admin)
        );
    }

    #[tokio::test]
    async fn stop_without_impersonation_is_a_conflict() {
        let admin = profile("admin@demo.com", Role::Admin);
        let service = service(vec![admin.clone()]);

        let mut state = SessionState::new(SessionUser::from(&admin));
        let outcome = service.stop_impersonation(&mut state);
        assert!(matches!(outcome, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn permissions_for_unknown_email_is_not_found() {
        let service = service(Vec::new());
        let outcome = service.permissions_for_email("ghost@demo.com").await;
        assert!(matches!(outcome, Err(AppError::NotFound(_))));
    }
}
