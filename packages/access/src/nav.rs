//! # Navigation tree and the visibility filter
//!
//! The sidebar is declared once as a static, ordered list of [`NavItem`]s. Each entry
//! is either a link (`path`) or a section holding child links, and may declare the
//! permission needed to see it. [`filter_navigation`] derives the tree the current
//! user may see without touching the declared one.
//!
//! Rules for a section:
//!
//! 1. children are kept when the access predicate grants their own permission;
//! 2. the section survives when any child survived, or when it declares a permission of
//!    its own that is granted;
//! 3. a surviving section always displays the surviving children, even if its own
//!    permission would have been enough;
//! 4. a section kept only through its own permission has no children left to show and is
//!    emitted as a plain entry, so an empty expandable group is never produced.
//!
//! Links are kept when they declare nothing or their permission is granted. Declaration
//! order is menu order and is preserved at both levels.

use serde::{Deserialize, Serialize};

use crate::permission::{PermissionId, PermissionSet};

/// Icon shown next to a navigation entry. The UI maps these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavIcon {
    Dashboard,
    Branches,
    Menu,
    Ingredients,
    Orders,
    Riders,
    Discounts,
    Loyalty,
    Reviews,
    Users,
    Cms,
    Settings,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub icon: NavIcon,
    pub path: Option<String>,
    pub children: Option<Vec<NavItem>>,
    pub permission: Option<PermissionId>,
}

impl NavItem {
    pub fn link(name: impl Into<String>, icon: NavIcon, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon,
            path: Some(path.into()),
            children: None,
            permission: None,
        }
    }

    pub fn section(name: impl Into<String>, icon: NavIcon, children: Vec<NavItem>) -> Self {
        Self {
            name: name.into(),
            icon,
            path: None,
            children: Some(children),
            permission: None,
        }
    }

    /// Require `permission` to see this entry.
    pub fn requires(mut self, permission: PermissionId) -> Self {
        self.permission = Some(permission);
        self
    }

    /// Give a section a landing path, used when it collapses into a plain entry.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn is_section(&self) -> bool {
        self.children.is_some()
    }

    pub fn children(&self) -> &[NavItem] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Whether this entry or one of its children points at `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.path.as_deref() == Some(path)
            || self.children().iter().any(|child| child.contains_path(path))
    }
}

/// Produce the part of `items` the holder of `permissions` may see.
pub fn filter_navigation(items: &[NavItem], permissions: &PermissionSet) -> Vec<NavItem> {
    items
        .iter()
        .filter_map(|item| filter_item(item, permissions))
        .collect()
}

fn filter_item(item: &NavItem, permissions: &PermissionSet) -> Option<NavItem> {
    let Some(children) = &item.children else {
        return permissions
            .grants(item.permission.as_ref())
            .then(|| item.clone());
    };

    let visible_children: Vec<NavItem> = children
        .iter()
        .filter(|child| permissions.grants(child.permission.as_ref()))
        .cloned()
        .collect();

    let own_grant = item
        .permission
        .as_ref()
        .is_some_and(|permission| permissions.contains(permission));

    if visible_children.is_empty() && !own_grant {
        return None;
    }

    Some(NavItem {
        children: (!visible_children.is_empty()).then_some(visible_children),
        ..item.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn granted(ids: &[&'static str]) -> PermissionSet {
        ids.iter().copied().map(PermissionId::new).collect()
    }

    fn names(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    fn menu_section() -> NavItem {
        NavItem::section(
            "Menu & Categories",
            NavIcon::Menu,
            vec![
                NavItem::link("Categories", NavIcon::Dot, "/menu/categories")
                    .requires(PermissionId::new("menu-management:categories")),
                NavItem::link("Items", NavIcon::Dot, "/menu/items")
                    .requires(PermissionId::new("menu-management:items")),
            ],
        )
    }

    #[test]
    fn test_section_keeps_only_granted_children() {
        let filtered = filter_navigation(&[menu_section()], &granted(&["menu-management:items"]));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Menu & Categories");
        assert_eq!(names(filtered[0].children()), vec!["Items"]);
    }

    #[test]
    fn test_denied_link_is_dropped() {
        let settings = NavItem::link("Settings", NavIcon::Settings, "/settings")
            .requires(PermissionId::new("settings:all"));

        assert!(filter_navigation(&[settings], &PermissionSet::new()).is_empty());
    }

    #[test]
    fn test_public_link_survives_empty_set() {
        let dashboard = NavItem::link("Dashboard", NavIcon::Dashboard, "/");
        let filtered = filter_navigation(&[dashboard.clone()], &PermissionSet::new());
        assert_eq!(filtered, vec![dashboard]);
    }

    #[test]
    fn test_section_with_all_children_denied_is_dropped() {
        let filtered = filter_navigation(&[menu_section()], &granted(&["orders:all"]));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_children_take_precedence_over_own_permission() {
        let section = menu_section().requires(PermissionId::new("menu-management:all"));
        let filtered = filter_navigation(
            &[section],
            &granted(&["menu-management:all", "menu-management:categories"]),
        );

        assert_eq!(names(filtered[0].children()), vec!["Categories"]);
    }

    #[test]
    fn test_own_permission_keeps_section_as_plain_entry() {
        let section = menu_section()
            .requires(PermissionId::new("menu-management:all"))
            .with_path("/menu");
        let filtered = filter_navigation(&[section], &granted(&["menu-management:all"]));

        assert_eq!(filtered.len(), 1);
        assert!(!filtered[0].is_section());
        assert_eq!(filtered[0].path.as_deref(), Some("/menu"));
    }

    #[test]
    fn test_section_declared_empty_without_permission_is_dropped() {
        let empty = NavItem::section("Reports", NavIcon::Dashboard, vec![]);
        assert!(filter_navigation(&[empty], &granted(&["reports:all"])).is_empty());
    }

    #[test]
    fn test_input_tree_is_untouched() {
        let tree = vec![menu_section()];
        let before = tree.clone();
        let _ = filter_navigation(&tree, &PermissionSet::new());
        assert_eq!(tree, before);
    }

    #[test]
    fn test_contains_path_looks_into_children() {
        let section = menu_section();
        assert!(section.contains_path("/menu/items"));
        assert!(!section.contains_path("/orders"));
    }

    const POOL: [&str; 6] = [
        "branches:all",
        "menu-management:items",
        "menu-management:categories",
        "orders:all",
        "authentication:roles",
        "settings:all",
    ];

    fn arb_permission() -> impl Strategy<Value = Option<PermissionId>> {
        prop::option::of(prop::sample::select(POOL.to_vec()).prop_map(PermissionId::new))
    }

    fn arb_link() -> impl Strategy<Value = NavItem> {
        ("[A-Z][a-z]{2,8}", arb_permission()).prop_map(|(name, permission)| NavItem {
            path: Some(format!("/{}", name.to_lowercase())),
            name,
            icon: NavIcon::Dot,
            children: None,
            permission,
        })
    }

    fn arb_item() -> impl Strategy<Value = NavItem> {
        prop_oneof![
            arb_link(),
            (
                "[A-Z][a-z]{2,8}",
                arb_permission(),
                prop::collection::vec(arb_link(), 0..5),
            )
                .prop_map(|(name, permission, children)| NavItem {
                    name,
                    icon: NavIcon::Dot,
                    path: None,
                    children: Some(children),
                    permission,
                }),
        ]
    }

    /// Top-level names get an index suffix so entries can be told apart.
    fn arb_tree() -> impl Strategy<Value = Vec<NavItem>> {
        prop::collection::vec(arb_item(), 0..8).prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| NavItem {
                    name: format!("{}{i}", item.name),
                    ..item
                })
                .collect()
        })
    }

    fn arb_granted() -> impl Strategy<Value = PermissionSet> {
        prop::sample::subsequence(POOL.to_vec(), 0..=POOL.len())
            .prop_map(|ids| ids.into_iter().map(PermissionId::new).collect())
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(
            tree in arb_tree(),
            permissions in arb_granted(),
        ) {
            let once = filter_navigation(&tree, &permissions);
            let twice = filter_navigation(&once, &permissions);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_everything_granted_preserves_order(
            tree in arb_tree(),
        ) {
            let everything: PermissionSet = POOL.iter().copied().map(PermissionId::new).collect();
            let filtered = filter_navigation(&tree, &everything);

            let expected: Vec<&NavItem> = tree
                .iter()
                .filter(|item| !item.is_section() || !item.children().is_empty() || item.permission.is_some())
                .collect();
            prop_assert_eq!(names(&filtered), expected.iter().map(|item| item.name.as_str()).collect::<Vec<_>>());
            for (out, declared) in filtered.iter().zip(expected) {
                prop_assert_eq!(names(out.children()), names(declared.children()));
            }
        }

        #[test]
        fn prop_no_empty_sections_survive(
            tree in arb_tree(),
            permissions in arb_granted(),
        ) {
            for item in filter_navigation(&tree, &permissions) {
                if let Some(children) = &item.children {
                    prop_assert!(!children.is_empty());
                }
            }
        }

        #[test]
        fn prop_fully_denied_sections_disappear(
            tree in arb_tree(),
            permissions in arb_granted(),
        ) {
            let filtered = filter_navigation(&tree, &permissions);
            for item in tree.iter().filter(|item| item.is_section()) {
                let any_child = item.children().iter().any(|c| permissions.grants(c.permission.as_ref()));
                let own = item.permission.as_ref().is_some_and(|p| permissions.contains(p));
                if !any_child && !own {
                    prop_assert!(!filtered.iter().any(|kept| kept.name == item.name));
                }
            }
        }
    }
}
