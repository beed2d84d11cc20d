//! # Identity service profile
//!
//! The identity service answers `GET /auth/me` with
//!
//! ```json
//! {
//!   "user": { "id": "…", "email": "…", "name": "…", "restaurantId": "…",
//!             "role": { "name": "Branch Manager", "permissions": [{ "action": "orders:all" }] } },
//!   "permissions": [{ "action": "branches:all" }]
//! }
//! ```
//!
//! [`IdentityMe`] mirrors that document. [`IdentityMe::into_session`] projects it into
//! the client-safe [`SessionInfo`]: the effective permission list is the top-level
//! grants followed by the role's grants, deduplicated. Actions that are not valid
//! permission identifiers are skipped, which leaves them denied.

use access::{is_super_admin_role, PermissionId, Role, SessionInfo, UserInfo};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct IdentityMe {
    pub user: IdentityUser,
    #[serde(default)]
    pub permissions: Vec<ActionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "restaurant_id", alias = "restaurant")]
    pub restaurant_id: Option<String>,
    #[serde(default)]
    pub role: Option<IdentityRole>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentityRole {
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<ActionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionEntry {
    pub action: String,
}

impl IdentityMe {
    pub fn into_session(self, super_admin_role: &str) -> SessionInfo {
        let role = self.user.role.map(|role| Role {
            name: role.name,
            permissions: parse_actions(role.permissions),
        });

        let user = UserInfo {
            is_super_admin: is_super_admin_role(role.as_ref(), super_admin_role),
            id: self.user.id,
            email: self.user.email,
            name: self.user.name.filter(|name| !name.trim().is_empty()),
            restaurant_id: self.user.restaurant_id,
            role,
        };

        SessionInfo::new(user, parse_actions(self.permissions))
    }
}

fn parse_actions(entries: Vec<ActionEntry>) -> Vec<PermissionId> {
    entries
        .into_iter()
        .filter_map(|entry| match PermissionId::parse(&entry.action) {
            Ok(permission) => Some(permission),
            Err(e) => {
                tracing::warn!("Skipping permission {:?}: {}", entry.action, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ME: &str = r#"{
        "user": {
            "_id": "64f0c2",
            "email": "owner@bistro.test",
            "name": "Owner",
            "restaurantId": "r-9",
            "role": {
                "name": "Super Admin",
                "permissions": [{ "action": "settings:all" }, { "action": "orders:all" }]
            }
        },
        "permissions": [{ "action": "orders:all" }, { "action": "menu-management:items" }, { "action": "  " }]
    }"#;

    #[test]
    fn test_profile_projects_into_session() {
        let me: IdentityMe = serde_json::from_str(ME).unwrap();
        let session = me.into_session("Super Admin");

        assert_eq!(session.user.id, "64f0c2");
        assert_eq!(session.user.restaurant_id.as_deref(), Some("r-9"));
        assert_eq!(session.user.role_name(), Some("Super Admin"));
        assert!(session.user.is_super_admin);
        assert_eq!(
            session.permissions,
            vec![
                PermissionId::new("orders:all"),
                PermissionId::new("menu-management:items"),
                PermissionId::new("settings:all"),
            ]
        );
    }

    #[test]
    fn test_user_without_role() {
        let me: IdentityMe = serde_json::from_str(
            r#"{ "user": { "id": "7", "email": "rider@bistro.test", "name": "" } }"#,
        )
        .unwrap();
        let session = me.into_session("Super Admin");

        assert!(session.user.role.is_none());
        assert!(!session.user.is_super_admin);
        assert!(session.user.name.is_none());
        assert!(session.permissions.is_empty());
    }
}
