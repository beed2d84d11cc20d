//! # Session state: the permission store
//!
//! [`SessionState`] is the single source the navigation filter and route guards read.
//! It starts out *loading*; the first [`resolve`](SessionState::resolve) clears the flag
//! whether the fetch succeeded or not, so an empty permission set after that point means
//! "deny everything" and never "still waiting".
//!
//! Lifecycle:
//!
//! | Step | Method | Effect |
//! |------|--------|--------|
//! | app mount | [`SessionState::new`] | loading, no user, no permissions |
//! | fetch finished | [`SessionState::resolve`] | user + permissions replaced, loading cleared |
//! | login | [`SessionState::sign_in`] | same as a successful resolve |
//! | logout | [`SessionState::clear`] | user + permissions dropped, loading stays cleared |
//!
//! Resolving again (a refresh) overwrites the previous result and never re-enters the
//! loading state. Responses are applied in arrival order.

use std::fmt::Display;

use crate::permission::{PermissionId, PermissionSet};
use crate::user::{SessionInfo, UserInfo};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    user: Option<UserInfo>,
    permissions: PermissionSet,
    loading: bool,
    /// Message from the last failed fetch, if any.
    last_error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            permissions: PermissionSet::new(),
            loading: true,
            last_error: None,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of a session fetch.
    ///
    /// `Ok(None)` is an anonymous visitor; `Err` is a failed fetch. Both leave the
    /// store empty with loading cleared.
    pub fn resolve<E: Display>(&mut self, outcome: Result<Option<SessionInfo>, E>) {
        match outcome {
            Ok(Some(session)) => self.sign_in(session),
            Ok(None) => {
                self.user = None;
                self.permissions = PermissionSet::new();
                self.last_error = None;
            }
            Err(e) => {
                self.user = None;
                self.permissions = PermissionSet::new();
                self.last_error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    pub fn sign_in(&mut self, session: SessionInfo) {
        self.permissions = session.permission_set();
        self.user = Some(session.user);
        self.last_error = None;
        self.loading = false;
    }

    /// Teardown on logout.
    pub fn clear(&mut self) {
        self.user = None;
        self.permissions = PermissionSet::new();
        self.last_error = None;
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn has_permission(&self, required: Option<&PermissionId>) -> bool {
        self.permissions.grants(required)
    }
}
