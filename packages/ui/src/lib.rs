//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

mod auth;
pub use auth::{
    load_session, use_has_permission, use_permissions, use_session, LogoutButton, SessionProvider,
};

mod guard;
pub use guard::RouteGuard;

mod login_form;
pub use login_form::LoginForm;

mod navbar;
pub use navbar::Navbar;

mod resource_table;
pub use resource_table::ResourceTable;

mod sidebar;
pub use sidebar::AppSidebar;
