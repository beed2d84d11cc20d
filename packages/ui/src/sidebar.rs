use access::{filter_navigation, NavIcon, NavItem};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCarrot, FaCircle, FaGauge, FaGear, FaGift, FaMotorcycle, FaNewspaper, FaReceipt, FaStar,
    FaStore, FaTags, FaUsers, FaUtensils,
};
use dioxus_free_icons::Icon;

use crate::{use_permissions, use_session, LogoutButton, SIDEBAR_CSS};

/// Sidebar showing the part of `items` the current user may see.
#[component]
pub fn AppSidebar(
    items: Vec<NavItem>,
    active_path: String,
    #[props(default = "Restaurant Admin".to_string())] title: String,
) -> Element {
    let session = use_session();
    let permissions = use_permissions();

    // The declared tree is static; only the permission set drives re-filtering.
    let visible = use_memo(move || filter_navigation(&items, &permissions.read()));

    let user_name = session
        .read()
        .user()
        .map(|user| user.display_name().to_string());
    let role_name = session
        .read()
        .user()
        .and_then(|user| user.role_name().map(str::to_string));

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        nav {
            class: "sidebar",

            div {
                class: "sidebar-user",
                span { class: "sidebar-title", "{title}" }
                if let Some(name) = user_name {
                    span { class: "sidebar-user-name", "{name}" }
                }
                if let Some(role) = role_name {
                    span { class: "sidebar-user-role", "{role}" }
                }
            }

            div {
                class: "sidebar-tree",
                if session.read().is_loading() {
                    div { class: "sidebar-loading", "Loading..." }
                } else {
                    for (index, item) in visible().into_iter().enumerate() {
                        if item.is_section() {
                            NavSection {
                                key: "{nav_key(index, &item)}",
                                item: item.clone(),
                                active_path: active_path.clone(),
                            }
                        } else {
                            NavEntry {
                                key: "{nav_key(index, &item)}",
                                item: item.clone(),
                                active_path: active_path.clone(),
                            }
                        }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                LogoutButton { class: "sidebar-bottom-item" }
            }
        }
    }
}

#[component]
fn NavSection(item: NavItem, active_path: String) -> Element {
    let contains_active = item.contains_path(&active_path);
    let mut expanded = use_signal(move || contains_active);

    rsx! {
        div {
            class: "nav-section",
            button {
                class: if contains_active { "nav-section-header active" } else { "nav-section-header" },
                onclick: move |_| expanded.set(!expanded()),
                NavGlyph { icon: item.icon }
                span { class: "nav-label", "{item.name}" }
                span {
                    class: "nav-caret",
                    if expanded() { "\u{25BE}" } else { "\u{25B8}" }
                }
            }

            if expanded() {
                div {
                    class: "nav-section-children",
                    for (index, child) in item.children().iter().cloned().enumerate() {
                        NavEntry {
                            key: "{nav_key(index, &child)}",
                            item: child,
                            active_path: active_path.clone(),
                        }
                    }
                }
            }
        }
    }
}

/// Stable key for a rendered entry: its path when it has one, else position and name.
fn nav_key(index: usize, item: &NavItem) -> String {
    match &item.path {
        Some(path) => path.clone(),
        None => format!("{index}:{}", item.name),
    }
}

#[component]
fn NavEntry(item: NavItem, active_path: String) -> Element {
    let active = item.path.as_deref() == Some(active_path.as_str());
    let class = if active { "nav-entry active" } else { "nav-entry" };

    match item.path.clone() {
        Some(path) => rsx! {
            Link {
                class: class,
                to: path,
                NavGlyph { icon: item.icon }
                span { class: "nav-label", "{item.name}" }
            }
        },
        None => rsx! {
            span {
                class: "nav-entry disabled",
                NavGlyph { icon: item.icon }
                span { class: "nav-label", "{item.name}" }
            }
        },
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon { class: "nav-icon", width: 14, height: 14, icon: FaGauge } },
        NavIcon::Branches => rsx! { Icon { class: "nav-icon", width: 14, height: 14, icon: FaStore } },
        NavIcon::Menu => rsx! { Icon { class: "nav-icon", width: 14, height: 14, icon: FaUtensils } },
        NavIcon::Ingredients => rsx! { Icon { class: "nav-icon", width: 14, height: 14, icon: FaCarrot } },
        NavIcon::Orders => rsx! { Icon { class: "nav-icon", width: 14, height: 14, icon: FaReceipt } },
        NavIcon::Riders => rsx! { Icon { class: "nav-icon", width: 14, height: 14, icon: FaMotorcycle } },
        NavIcon::Discounts => rsx! { Icon { class: "nav-icon", width: 14, height: 14, icon: FaTags } },
        NavIcon::Loyalty => rsx! { Icon { class: "nav-icon", width: 14, height: 14, icon: FaGift } },
        NavIcon::Reviews => rsx! { Icon { class: "nav-icon", width: 14, height: 14, icon: FaStar } },
        NavIcon::Users => rsx! { Icon { class: "nav-icon", width: 14, height: 14, icon: FaUsers } },
        NavIcon::Cms => rsx! { Icon { class: "nav-icon", width: 14, height: 14, icon: FaNewspaper } },
        NavIcon::Settings => rsx! { Icon { class: "nav-icon", width: 14, height: 14, icon: FaGear } },
        NavIcon::Dot => rsx! { Icon { class: "nav-icon nav-icon-dot", width: 6, height: 6, icon: FaCircle } },
    }
}
