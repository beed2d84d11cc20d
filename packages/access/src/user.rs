//! # Session user model
//!
//! [`UserInfo`] is the client-safe view of the signed-in user. It crosses the
//! server/client boundary inside a [`SessionInfo`], which also carries the effective
//! permission list the identity service granted for this session.

use serde::{Deserialize, Serialize};

use crate::permission::{PermissionId, PermissionSet};

/// Role name that marks a super-admin unless the deployment configures another.
pub const DEFAULT_SUPER_ADMIN_ROLE: &str = "Super Admin";

/// A named bundle of permissions attached to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<PermissionId>,
}

/// Signed-in user, as the UI sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    /// Restaurant (tenant) the user belongs to.
    pub restaurant_id: Option<String>,
    pub role: Option<Role>,
    /// Derived from the role name on the server.
    #[serde(default)]
    pub is_super_admin: bool,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(|role| role.name.as_str())
    }
}

/// Whether a role name designates a super-admin.
pub fn is_super_admin_role(role: Option<&Role>, super_admin_role: &str) -> bool {
    role.is_some_and(|role| role.name == super_admin_role)
}

/// Everything the identity service told us about the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user: UserInfo,
    /// Effective permissions, deduplicated, in the order first granted.
    pub permissions: Vec<PermissionId>,
}

impl SessionInfo {
    /// Combine the session-level grants with the ones carried by the user's role.
    pub fn new(user: UserInfo, granted: impl IntoIterator<Item = PermissionId>) -> Self {
        let role_permissions = user
            .role
            .as_ref()
            .map(|role| role.permissions.clone())
            .unwrap_or_default();

        let mut permissions: Vec<PermissionId> = Vec::new();
        for permission in granted.into_iter().chain(role_permissions) {
            if !permissions.contains(&permission) {
                permissions.push(permission);
            }
        }

        Self { user, permissions }
    }

    pub fn permission_set(&self) -> PermissionSet {
        self.permissions.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Option<Role>) -> UserInfo {
        UserInfo {
            id: "u-1".to_string(),
            email: "manager@bistro.test".to_string(),
            name: None,
            restaurant_id: Some("r-42".to_string()),
            role,
            is_super_admin: false,
        }
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut u = user(None);
        assert_eq!(u.display_name(), "manager@bistro.test");
        u.name = Some("Ada".to_string());
        assert_eq!(u.display_name(), "Ada");
    }

    #[test]
    fn test_session_unites_role_and_direct_grants() {
        let role = Role {
            name: "Branch Manager".to_string(),
            permissions: vec![
                PermissionId::new("orders:all"),
                PermissionId::new("branches:all"),
            ],
        };
        let session = SessionInfo::new(
            user(Some(role)),
            vec![
                PermissionId::new("branches:all"),
                PermissionId::new("reviews:all"),
            ],
        );

        assert_eq!(
            session.permissions,
            vec![
                PermissionId::new("branches:all"),
                PermissionId::new("reviews:all"),
                PermissionId::new("orders:all"),
            ]
        );
        assert_eq!(session.permission_set().len(), 3);
    }

    #[test]
    fn test_super_admin_is_exact_role_name() {
        let admin = Role {
            name: DEFAULT_SUPER_ADMIN_ROLE.to_string(),
            permissions: vec![],
        };
        let lookalike = Role {
            name: "super admin".to_string(),
            permissions: vec![],
        };

        assert!(is_super_admin_role(Some(&admin), DEFAULT_SUPER_ADMIN_ROLE));
        assert!(!is_super_admin_role(Some(&lookalike), DEFAULT_SUPER_ADMIN_ROLE));
        assert!(!is_super_admin_role(None, DEFAULT_SUPER_ADMIN_ROLE));
    }
}
