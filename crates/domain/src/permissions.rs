use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::user::Role;

/// Scope of one permission category.
///
/// Replaces the legacy `'all'` string sentinel: an unrestricted grant
/// short-circuits membership checks, a scoped grant is an explicit key set and
/// an empty scope denies everything (fail-closed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grant {
    /// Every key is allowed.
    Unrestricted,
    /// Only the listed keys are allowed.
    Scoped(BTreeSet<String>),
}

impl Grant {
    /// Creates a scoped grant from a key list.
    #[must_use]
    pub fn scoped<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Scoped(keys.into_iter().map(Into::into).collect())
    }

    /// Creates an empty scoped grant that denies every key.
    #[must_use]
    pub fn none() -> Self {
        Self::Scoped(BTreeSet::new())
    }

    /// Returns whether the grant allows a key.
    #[must_use]
    pub fn allows(&self, key: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Scoped(keys) => keys.contains(key),
        }
    }

    /// Returns the wire representation: `["all"]` or the sorted key list.
    #[must_use]
    pub fn to_wire(&self) -> Vec<String> {
        match self {
            Self::Unrestricted => vec!["all".to_owned()],
            Self::Scoped(keys) => keys.iter().cloned().collect(),
        }
    }
}

/// Effective permission sets derived from a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermissions {
    components: Grant,
    interactive_components: Grant,
    charts: Grant,
    pages: Grant,
    view_as_roles: Vec<Role>,
}

impl RolePermissions {
    /// Returns the static permission set for a role.
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self {
                components: Grant::Unrestricted,
                interactive_components: Grant::Unrestricted,
                charts: Grant::Unrestricted,
                pages: Grant::Unrestricted,
                view_as_roles: Role::all().to_vec(),
            },
            Role::Team => Self {
                components: Grant::scoped([
                    "dashboard_page",
                    "my_actions_page",
                    "all_findings_actions_page",
                    "audit_plan_page",
                    "task_manager",
                ]),
                interactive_components: Grant::none(),
                charts: Grant::scoped([
                    "audit_findings_chart",
                    "audit_plan_chart",
                    "finding_actions_status_chart",
                    "my_actions_chart",
                ]),
                pages: Grant::scoped([
                    "dashboard",
                    "my-actions",
                    "all-findings-actions",
                    "audit-plan",
                    "tasks",
                ]),
                view_as_roles: vec![Role::Team],
            },
            Role::TeamManager => Self {
                components: Grant::scoped([
                    "dashboard_page",
                    "my_actions_page",
                    "all_findings_actions_page",
                    "audit_plan_page",
                    "task_manager",
                ]),
                interactive_components: Grant::none(),
                charts: Grant::scoped([
                    "audit_findings_chart",
                    "audit_plan_chart",
                    "finding_actions_status_chart",
                    "my_actions_chart",
                ]),
                pages: Grant::scoped([
                    "dashboard",
                    "my-actions",
                    "all-findings-actions",
                    "audit-plan",
                    "tasks",
                ]),
                view_as_roles: vec![Role::TeamManager, Role::Team],
            },
            Role::DepartmentDirector => Self {
                components: Grant::scoped(["department_actions_page", "my_actions_chart"]),
                interactive_components: Grant::scoped([
                    "open_actions_button",
                    "overdue_actions_button",
                ]),
                charts: Grant::scoped(["department_actions_chart", "my_actions_chart"]),
                pages: Grant::scoped(["department-actions"]),
                view_as_roles: vec![Role::DepartmentDirector],
            },
            Role::TopManagement => Self {
                components: Grant::scoped([
                    "clevel_actions_page",
                    "audit_maturity_chart",
                    "fraud_impact_chart",
                ]),
                interactive_components: Grant::none(),
                charts: Grant::scoped([
                    "audit_findings_chart",
                    "fraud_impact_chart",
                    "loss_prevention_chart",
                    "audit_maturity_chart",
                ]),
                pages: Grant::scoped(["clevel-actions"]),
                view_as_roles: vec![Role::TopManagement],
            },
            Role::Management => Self {
                components: Grant::scoped(["management_actions_page"]),
                interactive_components: Grant::none(),
                charts: Grant::none(),
                pages: Grant::scoped(["management-level-actions"]),
                view_as_roles: vec![Role::Management],
            },
        }
    }

    /// Returns a permission set that denies everything.
    #[must_use]
    pub fn denied() -> Self {
        Self {
            components: Grant::none(),
            interactive_components: Grant::none(),
            charts: Grant::none(),
            pages: Grant::none(),
            view_as_roles: Vec::new(),
        }
    }

    /// Returns whether the role may see the component.
    #[must_use]
    pub fn has_component(&self, key: &str) -> bool {
        self.components.allows(key)
    }

    /// Returns whether the role may act on the component.
    ///
    /// View access is a precondition: interaction on a hidden component is
    /// denied even when the interactive grant names the key.
    #[must_use]
    pub fn can_interact(&self, key: &str) -> bool {
        self.has_component(key) && self.interactive_components.allows(key)
    }

    /// Returns whether the role may see the chart.
    #[must_use]
    pub fn has_chart(&self, key: &str) -> bool {
        self.charts.allows(key)
    }

    /// Returns whether the role may open the page.
    #[must_use]
    pub fn has_page(&self, key: &str) -> bool {
        self.pages.allows(key)
    }

    /// Returns whether the role may impersonate users with the target role.
    #[must_use]
    pub fn may_view_as(&self, target: Role) -> bool {
        self.view_as_roles.contains(&target)
    }

    /// Returns the component grant.
    #[must_use]
    pub fn components(&self) -> &Grant {
        &self.components
    }

    /// Returns the interactive component grant.
    #[must_use]
    pub fn interactive_components(&self) -> &Grant {
        &self.interactive_components
    }

    /// Returns the chart grant.
    #[must_use]
    pub fn charts(&self) -> &Grant {
        &self.charts
    }

    /// Returns the page grant.
    #[must_use]
    pub fn pages(&self) -> &Grant {
        &self.pages
    }

    /// Returns the roles this role may impersonate.
    #[must_use]
    pub fn view_as_roles(&self) -> &[Role] {
        &self.view_as_roles
    }
}

/// One grantable UI component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Stable component key used in grants.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
}

/// Returns the registry of grantable UI components.
#[must_use]
pub fn component_registry() -> &'static [ComponentDescriptor] {
    const REGISTRY: &[ComponentDescriptor] = &[
        ComponentDescriptor {
            key: "dashboard_page",
            name: "Dashboard",
        },
        ComponentDescriptor {
            key: "my_actions_page",
            name: "My Team Actions",
        },
        ComponentDescriptor {
            key: "department_actions_page",
            name: "Department Actions",
        },
        ComponentDescriptor {
            key: "clevel_actions_page",
            name: "C-Level Actions",
        },
        ComponentDescriptor {
            key: "all_findings_actions_page",
            name: "All Findings & Actions",
        },
        ComponentDescriptor {
            key: "audit_plan_page",
            name: "Audit Plan",
        },
        ComponentDescriptor {
            key: "risk_management_page",
            name: "Risk Management",
        },
        ComponentDescriptor {
            key: "audit_maturity_page",
            name: "Audit Maturity",
        },
        ComponentDescriptor {
            key: "task_manager",
            name: "Task Manager",
        },
        ComponentDescriptor {
            key: "access_management",
            name: "Access Management",
        },
        ComponentDescriptor {
            key: "send_email_button",
            name: "Send Email",
        },
        ComponentDescriptor {
            key: "export_button",
            name: "Export Data",
        },
    ];

    REGISTRY
}

#[cfg(test)]
mod tests {
    use crate::user::Role;

    use super::{Grant, RolePermissions, component_registry};

    #[test]
    fn unrestricted_grant_allows_any_key() {
        let grant = Grant::Unrestricted;
        assert!(grant.allows("anything"));
        assert!(grant.allows(""));
    }

    #[test]
    fn empty_grant_denies_every_key() {
        let grant = Grant::none();
        assert!(!grant.allows("dashboard_page"));
    }

    #[test]
    fn unrestricted_grant_encodes_as_all_sentinel() {
        assert_eq!(Grant::Unrestricted.to_wire(), vec!["all".to_owned()]);
    }

    #[test]
    fn admin_has_every_component() {
        let permissions = RolePermissions::for_role(Role::Admin);
        for component in component_registry() {
            assert!(permissions.has_component(component.key));
            assert!(permissions.can_interact(component.key));
        }
    }

    #[test]
    fn denied_permissions_fail_closed() {
        let permissions = RolePermissions::denied();
        assert!(!permissions.has_component("dashboard_page"));
        assert!(!permissions.can_interact("dashboard_page"));
        assert!(!permissions.has_page("dashboard"));
    }

    #[test]
    fn interaction_requires_view_access() {
        // Every role, every registry key: can_interact implies has_component.
        for role in Role::all() {
            let permissions = RolePermissions::for_role(*role);
            for component in component_registry() {
                if permissions.can_interact(component.key) {
                    assert!(permissions.has_component(component.key));
                }
            }
        }
    }

    #[test]
    fn interactive_grant_without_view_grant_is_denied() {
        let permissions = RolePermissions::for_role(Role::DepartmentDirector);
        // Granted interactively but not listed as a viewable component.
        assert!(
            !permissions
                .interactive_components()
                .allows("dashboard_page")
        );
        assert!(permissions.interactive_components().allows("open_actions_button"));
        assert!(!permissions.has_component("open_actions_button"));
        assert!(!permissions.can_interact("open_actions_button"));
    }

    #[test]
    fn chart_grants_follow_the_role() {
        let team = RolePermissions::for_role(Role::Team);
        assert!(team.has_chart("audit_findings_chart"));
        assert!(!team.has_chart("fraud_impact_chart"));

        let management = RolePermissions::for_role(Role::Management);
        assert!(!management.has_chart("audit_findings_chart"));

        let admin = RolePermissions::for_role(Role::Admin);
        assert!(admin.has_chart("fraud_impact_chart"));
    }

    #[test]
    fn team_manager_may_view_as_team() {
        let permissions = RolePermissions::for_role(Role::TeamManager);
        assert!(permissions.may_view_as(Role::Team));
        assert!(!permissions.may_view_as(Role::Admin));
    }
}
