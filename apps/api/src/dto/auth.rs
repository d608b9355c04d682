use auditdesk_application::ViewAsOutcome;
use auditdesk_domain::{ComponentDescriptor, Role, RolePermissions, SessionUser, UserProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionUserDto {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub department: String,
}

impl From<&SessionUser> for SessionUserDto {
    fn from(user: &SessionUser) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_owned(),
            name: user.name.clone(),
            role: user.role.as_str().to_owned(),
            department: user.department.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub status: String,
    pub department: String,
}

impl From<&UserProfile> for UserDto {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            email: profile.email.as_str().to_owned(),
            name: profile.name.clone(),
            role: profile.role.as_str().to_owned(),
            status: profile.status.as_str().to_owned(),
            department: profile.department.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsDto {
    pub components: Vec<String>,
    pub interactive_components: Vec<String>,
    pub charts: Vec<String>,
    pub pages: Vec<String>,
    pub view_as_roles: Vec<String>,
}

impl From<&RolePermissions> for PermissionsDto {
    fn from(permissions: &RolePermissions) -> Self {
        Self {
            components: permissions.components().to_wire(),
            interactive_components: permissions.interactive_components().to_wire(),
            charts: permissions.charts().to_wire(),
            pages: permissions.pages().to_wire(),
            view_as_roles: permissions
                .view_as_roles()
                .iter()
                .map(|role| role.as_str().to_owned())
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginData {
    pub user: SessionUserDto,
    pub role: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_impersonating: Option<bool>,
}

impl AuthStatusResponse {
    pub fn unauthenticated() -> Self {
        Self {
            authenticated: false,
            user: None,
            role: None,
            permissions: None,
            is_impersonating: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoleDto {
    pub id: u32,
    pub name: String,
    pub description: String,
}

impl RoleDto {
    pub fn from_role(index: usize, role: Role) -> Self {
        Self {
            id: index as u32 + 1,
            name: role.as_str().to_owned(),
            description: role.description().to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ComponentDto {
    pub key: String,
    pub name: String,
}

impl From<&ComponentDescriptor> for ComponentDto {
    fn from(descriptor: &ComponentDescriptor) -> Self {
        Self {
            key: descriptor.key.to_owned(),
            name: descriptor.name.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewAsRequest {
    pub target_email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewAsData {
    pub user: SessionUserDto,
    pub role: String,
    pub permissions: PermissionsDto,
    pub is_impersonating: bool,
    pub original_user: SessionUserDto,
}

impl From<&ViewAsOutcome> for ViewAsData {
    fn from(outcome: &ViewAsOutcome) -> Self {
        Self {
            user: SessionUserDto::from(&outcome.user),
            role: outcome.user.role.as_str().to_owned(),
            permissions: PermissionsDto::from(&outcome.permissions),
            is_impersonating: true,
            original_user: SessionUserDto::from(&outcome.original_user),
        }
    }
}

#[cfg(test)]
mod tests {
    use auditdesk_domain::{Role, RolePermissions, UserProfile, UserStatus};

    use super::{PermissionsDto, UserDto};

    #[test]
    fn unrestricted_permissions_encode_as_all() {
        let dto = PermissionsDto::from(&RolePermissions::for_role(Role::Admin));
        let value = serde_json::to_value(&dto).unwrap_or_default();

        assert_eq!(value["components"], serde_json::json!(["all"]));
        assert_eq!(value["interactiveComponents"], serde_json::json!(["all"]));
        assert_eq!(value["viewAsRoles"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn scoped_permissions_list_their_keys() {
        let dto = PermissionsDto::from(&RolePermissions::for_role(Role::Management));
        let value = serde_json::to_value(&dto).unwrap_or_default();

        assert_eq!(
            value["components"],
            serde_json::json!(["management_actions_page"])
        );
        assert_eq!(value["charts"], serde_json::json!([]));
    }

    #[test]
    fn user_dto_flattens_validated_fields() {
        let profile = UserProfile::new(
            "mahmut@demo.com",
            "Mahmut Uran",
            Role::Admin,
            UserStatus::Active,
            "Internal Audit",
        )
        .unwrap_or_else(|_| panic!("test profile"));

        let value = serde_json::to_value(UserDto::from(&profile)).unwrap_or_default();
        assert_eq!(value["email"], serde_json::json!("mahmut@demo.com"));
        assert_eq!(value["role"], serde_json::json!("admin"));
        assert_eq!(value["status"], serde_json::json!("active"));
    }
}
