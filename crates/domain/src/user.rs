use std::str::FromStr;

use auditdesk_core::{AppError, AppResult, UserId};
use serde::{Deserialize, Serialize};

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Performs basic structural validation: non-empty, contains exactly one `@`,
    /// local part and domain are non-empty, domain contains at least one `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let parts: Vec<&str> = trimmed.splitn(2, '@').collect();
        if parts.len() != 2 {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        }

        let local = parts[0];
        let domain = parts[1];

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Closed set of dashboard roles. The role fully determines the permission
/// set attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access to every feature, including access management.
    Admin,
    /// Audit team member.
    Team,
    /// Audit team manager (same data access as team).
    TeamManager,
    /// Director responsible for one department's actions.
    DepartmentDirector,
    /// C-level executive view.
    TopManagement,
    /// Management-level action owner.
    Management,
}

impl Role {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Team => "team",
            Self::TeamManager => "team_manager",
            Self::DepartmentDirector => "department_director",
            Self::TopManagement => "top_management",
            Self::Management => "management",
        }
    }

    /// Returns a short human-readable description of the role.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Admin => "Full access to all features",
            Self::Team => "Team member access",
            Self::TeamManager => "Team manager with same access as team",
            Self::DepartmentDirector => "Department director access",
            Self::TopManagement => "Top management access",
            Self::Management => "Management level user access",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::Admin,
            Role::Team,
            Role::TeamManager,
            Role::DepartmentDirector,
            Role::TopManagement,
            Role::Management,
        ];

        ALL
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "team" => Ok(Self::Team),
            "team_manager" => Ok(Self::TeamManager),
            "department_director" => Ok(Self::DepartmentDirector),
            "top_management" => Ok(Self::TopManagement),
            "management" => Ok(Self::Management),
            _ => Err(AppError::NotFound(format!("unknown role '{value}'"))),
        }
    }
}

/// Whether a user account may establish sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Account is usable.
    Active,
    /// Account is disabled.
    Inactive,
}

impl UserStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// A seeded user record. Held in memory only; reset on process restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable user identifier.
    pub id: UserId,
    /// Unique login email.
    pub email: EmailAddress,
    /// Display name.
    pub name: String,
    /// Role the permission set is derived from.
    pub role: Role,
    /// Account status.
    pub status: UserStatus,
    /// Owning department.
    pub department: String,
}

impl UserProfile {
    /// Creates a validated user profile.
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        status: UserStatus,
        department: impl Into<String>,
    ) -> AppResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::Validation(
                "user name must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            id: UserId::new(),
            email: EmailAddress::new(email)?,
            name,
            role,
            status,
            department: department.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{EmailAddress, Role, UserProfile, UserStatus};

    #[test]
    fn valid_email_is_normalized() {
        let email = EmailAddress::new("USER@Example.COM");
        assert!(email.is_ok());
        assert_eq!(
            email.unwrap_or_else(|_| panic!("test")).as_str(),
            "user@example.com"
        );
    }

    #[test]
    fn email_without_at_is_rejected() {
        assert!(EmailAddress::new("noatsign").is_err());
    }

    #[test]
    fn role_roundtrip_storage_value() {
        for role in Role::all() {
            let restored = Role::from_str(role.as_str());
            assert_eq!(restored.ok(), Some(*role));
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::from_str("superuser").is_err());
    }

    #[test]
    fn profile_requires_name() {
        let profile = UserProfile::new("a@b.co", "  ", Role::Team, UserStatus::Active, "Audit");
        assert!(profile.is_err());
    }
}
