//! Access control model shared by the server functions and the UI: permissions, the
//! signed-in user, the session store, the sidebar filter and the route guard.

pub mod guard;
pub mod nav;
pub mod permission;
pub mod session;
pub mod user;

pub use guard::GuardState;
pub use nav::{filter_navigation, NavIcon, NavItem};
pub use permission::{InvalidPermission, PermissionId, PermissionSet};
pub use session::SessionState;
pub use user::{is_super_admin_role, Role, SessionInfo, UserInfo, DEFAULT_SUPER_ADMIN_ROLE};
