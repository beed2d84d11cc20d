//! Route guard state machine.
//!
//! A guard begins in [`GuardState::Loading`] and moves to `Granted` or `Denied` the
//! first time it observes a session whose loading flag has cleared. After that the
//! decision is fixed for as long as the guard stays mounted.

use crate::permission::PermissionId;
use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuardState {
    #[default]
    Loading,
    Granted,
    Denied,
}

impl GuardState {
    /// Decide from a single snapshot of the session.
    pub fn evaluate(session: &SessionState, required: Option<&PermissionId>) -> Self {
        if session.is_loading() {
            Self::Loading
        } else if session.has_permission(required) {
            Self::Granted
        } else {
            Self::Denied
        }
    }

    /// Step a mounted guard forward. Resolved states never change again.
    pub fn advance(self, session: &SessionState, required: Option<&PermissionId>) -> Self {
        match self {
            Self::Loading => Self::evaluate(session, required),
            resolved => resolved,
        }
    }

    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{SessionInfo, UserInfo};

    fn signed_in(permissions: &[&'static str]) -> SessionState {
        let mut state = SessionState::new();
        state.sign_in(SessionInfo::new(
            UserInfo {
                id: "u-3".to_string(),
                email: "ops@bistro.test".to_string(),
                name: None,
                restaurant_id: None,
                role: None,
                is_super_admin: false,
            },
            permissions.iter().copied().map(PermissionId::new),
        ));
        state
    }

    #[test]
    fn test_loading_until_store_resolves() {
        let roles = PermissionId::new("authentication:roles");
        let state = GuardState::default().advance(&SessionState::new(), Some(&roles));
        assert_eq!(state, GuardState::Loading);
        assert!(!state.is_resolved());
    }

    #[test]
    fn test_role_page_denied_for_users_only_permission() {
        let roles = PermissionId::new("authentication:roles");
        let mut guard = GuardState::default();

        guard = guard.advance(&SessionState::new(), Some(&roles));
        assert_eq!(guard, GuardState::Loading);

        guard = guard.advance(&signed_in(&["authentication:users"]), Some(&roles));
        assert_eq!(guard, GuardState::Denied);
    }

    #[test]
    fn test_granted_when_permission_present() {
        let roles = PermissionId::new("authentication:roles");
        let guard = GuardState::Loading.advance(&signed_in(&["authentication:roles"]), Some(&roles));
        assert_eq!(guard, GuardState::Granted);
    }

    #[test]
    fn test_public_route_is_granted_even_without_session() {
        let mut anonymous = SessionState::new();
        anonymous.resolve::<String>(Ok(None));
        assert_eq!(GuardState::evaluate(&anonymous, None), GuardState::Granted);
    }

    #[test]
    fn test_failed_fetch_denies() {
        let mut failed = SessionState::new();
        failed.resolve::<&str>(Err("502 Bad Gateway"));
        let orders = PermissionId::new("orders:all");
        assert_eq!(GuardState::evaluate(&failed, Some(&orders)), GuardState::Denied);
    }

    #[test]
    fn test_decision_is_latched_per_mount() {
        let orders = PermissionId::new("orders:all");
        let granted = GuardState::Loading.advance(&signed_in(&["orders:all"]), Some(&orders));

        let mut revoked = signed_in(&[]);
        assert_eq!(granted.advance(&revoked, Some(&orders)), GuardState::Granted);

        revoked.clear();
        let denied = GuardState::Loading.advance(&revoked, Some(&orders));
        assert_eq!(denied.advance(&signed_in(&["orders:all"]), Some(&orders)), GuardState::Denied);
    }
}
