//! # Admin navigation tree
//!
//! The full sidebar as declared for every user, in menu order. Each entry's
//! permission is the same one its route guards on, so the sidebar never offers a page
//! the guard would refuse. Paths come from [`Route`]'s `Display` so they cannot drift
//! from the router.

use access::{NavIcon, NavItem, PermissionId};

use crate::Route;

pub mod permissions {
    use access::PermissionId;

    pub const BRANCHES: PermissionId = PermissionId::new("branches:all");
    pub const MENU_CATEGORIES: PermissionId = PermissionId::new("menu-management:categories");
    pub const MENU_ITEMS: PermissionId = PermissionId::new("menu-management:items");
    pub const INGREDIENTS: PermissionId = PermissionId::new("inventory:ingredients");
    pub const ORDERS: PermissionId = PermissionId::new("orders:all");
    pub const RIDERS: PermissionId = PermissionId::new("riders:all");
    pub const DISCOUNTS: PermissionId = PermissionId::new("marketing:discounts");
    pub const LOYALTY: PermissionId = PermissionId::new("marketing:loyalty");
    pub const REVIEWS: PermissionId = PermissionId::new("reviews:all");
    pub const USERS: PermissionId = PermissionId::new("authentication:users");
    pub const ROLES: PermissionId = PermissionId::new("authentication:roles");
    pub const CMS: PermissionId = PermissionId::new("cms:all");
    pub const SETTINGS: PermissionId = PermissionId::new("settings:all");
}

fn link(name: &str, icon: NavIcon, route: Route, permission: Option<PermissionId>) -> NavItem {
    let item = NavItem::link(name, icon, route.to_string());
    match permission {
        Some(permission) => item.requires(permission),
        None => item,
    }
}

pub fn admin_navigation() -> Vec<NavItem> {
    use self::permissions::*;

    vec![
        link("Dashboard", NavIcon::Dashboard, Route::Dashboard {}, None),
        link("Branches", NavIcon::Branches, Route::Branches {}, Some(BRANCHES)),
        NavItem::section(
            "Menu & Categories",
            NavIcon::Menu,
            vec![
                link("Categories", NavIcon::Dot, Route::MenuCategories {}, Some(MENU_CATEGORIES)),
                link("Items", NavIcon::Dot, Route::MenuItems {}, Some(MENU_ITEMS)),
            ],
        ),
        link("Ingredients & Stock", NavIcon::Ingredients, Route::Ingredients {}, Some(INGREDIENTS)),
        link("Orders", NavIcon::Orders, Route::Orders {}, Some(ORDERS)),
        link("Riders", NavIcon::Riders, Route::Riders {}, Some(RIDERS)),
        NavItem::section(
            "Marketing",
            NavIcon::Discounts,
            vec![
                link("Discounts", NavIcon::Dot, Route::Discounts {}, Some(DISCOUNTS)),
                link("Loyalty", NavIcon::Dot, Route::Loyalty {}, Some(LOYALTY)),
            ],
        ),
        link("Reviews", NavIcon::Reviews, Route::Reviews {}, Some(REVIEWS)),
        NavItem::section(
            "Authentication",
            NavIcon::Users,
            vec![
                link("Users", NavIcon::Dot, Route::Users {}, Some(USERS)),
                link("Roles & Permissions", NavIcon::Dot, Route::Roles {}, Some(ROLES)),
            ],
        ),
        link("CMS", NavIcon::Cms, Route::Cms {}, Some(CMS)),
        link("Settings", NavIcon::Settings, Route::Settings {}, Some(SETTINGS)),
    ]
}
