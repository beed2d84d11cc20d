//! Landing page: who is signed in and which areas they can open.

use access::{filter_navigation, NavItem};
use dioxus::prelude::*;
use ui::{use_permissions, use_session};

use crate::navigation::admin_navigation;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let permissions = use_permissions();

    let shortcuts = use_memo(move || shortcuts(&filter_navigation(&admin_navigation(), &permissions.read())));
    let user = session.read().user().cloned();

    rsx! {
        section {
            class: "p-6",
            if let Some(user) = user {
                h1 { class: "m-0 mb-1 text-xl font-semibold text-neutral-800", "Welcome, {user.display_name()}" }
                p {
                    class: "m-0 mb-6 text-sm text-neutral-600",
                    if let Some(role) = user.role_name() {
                        "{role}"
                    } else {
                        "No role assigned"
                    }
                    if let Some(restaurant) = user.restaurant_id.as_deref() {
                        " \u{00B7} restaurant {restaurant}"
                    }
                }
            }

            if shortcuts().is_empty() {
                p {
                    class: "text-sm text-neutral-600",
                    "Your role does not grant access to any area yet. Ask an administrator to assign permissions."
                }
            } else {
                div {
                    class: "grid grid-cols-3 gap-3",
                    for (name, path) in shortcuts() {
                        Link {
                            key: "{path}",
                            class: "block p-4 border border-neutral-200 rounded hover:bg-neutral-50 no-underline text-neutral-800",
                            to: path.clone(),
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

/// Flatten the visible tree into `(label, path)` pairs, skipping the dashboard itself.
fn shortcuts(visible: &[NavItem]) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for item in visible {
        if item.is_section() {
            for child in item.children() {
                if let Some(path) = &child.path {
                    out.push((format!("{} \u{203A} {}", item.name, child.name), path.clone()));
                }
            }
        } else if let Some(path) = item.path.as_deref().filter(|path| *path != "/") {
            out.push((item.name.clone(), path.to_string()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use access::{NavIcon, PermissionId, PermissionSet};

    #[test]
    fn test_shortcuts_flatten_visible_tree() {
        let granted: PermissionSet = [PermissionId::new("menu-management:items")].into_iter().collect();
        let visible = filter_navigation(&admin_navigation(), &granted);

        assert_eq!(
            shortcuts(&visible),
            vec![("Menu & Categories \u{203A} Items".to_string(), "/menu/items".to_string())]
        );
    }

    #[test]
    fn test_plain_entry_without_path_is_skipped() {
        let visible = vec![NavItem::section("Reports", NavIcon::Dashboard, vec![])];
        assert!(shortcuts(&visible).is_empty());
    }
}
