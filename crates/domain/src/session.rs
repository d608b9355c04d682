use auditdesk_core::{AppError, AppResult, UserId};
use serde::{Deserialize, Serialize};

use crate::user::{EmailAddress, Role, UserProfile};

/// User information persisted in the authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Stable user identifier.
    pub id: UserId,
    /// Login email.
    pub email: EmailAddress,
    /// Display name.
    pub name: String,
    /// Role the permission set is derived from.
    pub role: Role,
    /// Owning department.
    pub department: String,
}

impl From<&UserProfile> for SessionUser {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email.clone(),
            name: profile.name.clone(),
            role: profile.role,
            department: profile.department.clone(),
        }
    }
}

/// Session payload with the view-as state machine.
///
/// Two states: normal (no `original_user`) and impersonating. A session keeps
/// at most one original user, so impersonation never nests: starting a second
/// view-as while one is active swaps the effective user but preserves the
/// first original identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    user: SessionUser,
    original_user: Option<SessionUser>,
}

impl SessionState {
    /// Creates a freshly authenticated session in the normal state.
    #[must_use]
    pub fn new(user: SessionUser) -> Self {
        Self {
            user,
            original_user: None,
        }
    }

    /// Returns the effective session user.
    #[must_use]
    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    /// Returns the original user while impersonating.
    #[must_use]
    pub fn original_user(&self) -> Option<&SessionUser> {
        self.original_user.as_ref()
    }

    /// Returns whether the session is in the impersonating state.
    #[must_use]
    pub fn is_impersonating(&self) -> bool {
        self.original_user.is_some()
    }

    /// Returns the user authorization decisions must be made against: the
    /// original user while impersonating, the effective user otherwise.
    #[must_use]
    pub fn authorizing_user(&self) -> &SessionUser {
        self.original_user.as_ref().unwrap_or(&self.user)
    }

    /// Replaces the effective user with the target, remembering the current
    /// user as the original on the first transition.
    pub fn start_impersonation(&mut self, target: SessionUser) {
        if self.original_user.is_none() {
            self.original_user = Some(self.user.clone());
        }

        self.user = target;
    }

    /// Restores the original user and leaves the impersonating state.
    pub fn stop_impersonation(&mut self) -> AppResult<()> {
        let original = self
            .original_user
            .take()
            .ok_or_else(|| AppError::Conflict("session is not impersonating".to_owned()))?;

        self.user = original;
        Ok(())
    }
}
