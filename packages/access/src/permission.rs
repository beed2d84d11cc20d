//! # Permissions and the access predicate
//!
//! A permission is an opaque action identifier issued by the identity service, shaped
//! like `"<module>:<capability>"` (`"menu-management:items"`) or occasionally a bare
//! module-wide grant (`"settings:all"`). Two permissions are the same permission iff
//! their strings are equal; there is no wildcard, prefix or hierarchy matching.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`PermissionId`] | Immutable newtype around the identifier string. |
//! | [`PermissionSet`] | Hash-set of granted permissions; [`PermissionSet::grants`] is the access predicate. |

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a grantable capability, e.g. `"authentication:roles"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionId(Cow<'static, str>);

impl PermissionId {
    /// Build a permission from a known identifier.
    ///
    /// Used at static construction sites (navigation tree, route declarations).
    /// Use [`PermissionId::parse`] for identifiers arriving from outside.
    pub const fn new(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Parse an identifier received at runtime.
    ///
    /// The string is taken verbatim: padded identifiers are rejected, not trimmed, so a
    /// grant always equals the issued action byte for byte.
    pub fn parse(id: &str) -> Result<Self, InvalidPermission> {
        if id.trim().is_empty() {
            return Err(InvalidPermission::Empty);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(InvalidPermission::Whitespace(id.to_string()));
        }
        Ok(Self(Cow::Owned(id.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The module half: `"menu-management"` for `"menu-management:items"`.
    pub fn module(&self) -> &str {
        self.as_str()
            .split_once(':')
            .map_or(self.as_str(), |(module, _)| module)
    }

    /// The capability half, if the identifier has one.
    pub fn capability(&self) -> Option<&str> {
        self.as_str().split_once(':').map(|(_, capability)| capability)
    }
}

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PermissionId {
    type Err = InvalidPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Reasons a runtime identifier is not a usable permission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPermission {
    #[error("permission identifier is empty")]
    Empty,
    #[error("permission identifier contains whitespace: {0:?}")]
    Whitespace(String),
}

/// The permissions granted to the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    granted: HashSet<PermissionId>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Access predicate.
    ///
    /// `None` means the caller declared no requirement and is always granted.
    /// Otherwise the permission must be present by exact match.
    pub fn grants(&self, required: Option<&PermissionId>) -> bool {
        match required {
            None => true,
            Some(permission) => self.granted.contains(permission),
        }
    }

    pub fn contains(&self, permission: &PermissionId) -> bool {
        self.granted.contains(permission)
    }

    pub fn insert(&mut self, permission: PermissionId) -> bool {
        self.granted.insert(permission)
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PermissionId> {
        self.granted.iter()
    }
}

impl FromIterator<PermissionId> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = PermissionId>>(iter: I) -> Self {
        Self {
            granted: iter.into_iter().collect(),
        }
    }
}

impl Extend<PermissionId> for PermissionSet {
    fn extend<I: IntoIterator<Item = PermissionId>>(&mut self, iter: I) {
        self.granted.extend(iter);
    }
}
