//! One guarded page per backend collection.

use access::PermissionId;
use api::Resource;
use dioxus::prelude::*;
use ui::{ResourceTable, RouteGuard};

use crate::navigation::permissions;

#[component]
fn ResourcePage(title: String, permission: PermissionId, resource: Resource) -> Element {
    rsx! {
        RouteGuard {
            permission: Some(permission),
            section {
                class: "p-6",
                h1 { class: "m-0 mb-4 text-xl font-semibold text-neutral-800", "{title}" }
                ResourceTable { resource: resource }
            }
        }
    }
}

#[component]
pub fn Branches() -> Element {
    rsx! { ResourcePage { title: "Branches", permission: permissions::BRANCHES, resource: Resource::Branches } }
}

#[component]
pub fn MenuCategories() -> Element {
    rsx! { ResourcePage { title: "Categories", permission: permissions::MENU_CATEGORIES, resource: Resource::MenuCategories } }
}

#[component]
pub fn MenuItems() -> Element {
    rsx! { ResourcePage { title: "Menu Items", permission: permissions::MENU_ITEMS, resource: Resource::MenuItems } }
}

#[component]
pub fn Ingredients() -> Element {
    rsx! { ResourcePage { title: "Ingredients & Stock", permission: permissions::INGREDIENTS, resource: Resource::Ingredients } }
}

#[component]
pub fn Orders() -> Element {
    rsx! { ResourcePage { title: "Orders", permission: permissions::ORDERS, resource: Resource::Orders } }
}

#[component]
pub fn Riders() -> Element {
    rsx! { ResourcePage { title: "Riders", permission: permissions::RIDERS, resource: Resource::Riders } }
}

#[component]
pub fn Discounts() -> Element {
    rsx! { ResourcePage { title: "Discounts", permission: permissions::DISCOUNTS, resource: Resource::Discounts } }
}

#[component]
pub fn Loyalty() -> Element {
    rsx! { ResourcePage { title: "Loyalty", permission: permissions::LOYALTY, resource: Resource::Loyalty } }
}

#[component]
pub fn Reviews() -> Element {
    rsx! { ResourcePage { title: "Reviews", permission: permissions::REVIEWS, resource: Resource::Reviews } }
}

#[component]
pub fn Users() -> Element {
    rsx! { ResourcePage { title: "Users", permission: permissions::USERS, resource: Resource::Users } }
}

#[component]
pub fn Roles() -> Element {
    rsx! { ResourcePage { title: "Roles & Permissions", permission: permissions::ROLES, resource: Resource::Roles } }
}

#[component]
pub fn Cms() -> Element {
    rsx! { ResourcePage { title: "CMS", permission: permissions::CMS, resource: Resource::Cms } }
}
