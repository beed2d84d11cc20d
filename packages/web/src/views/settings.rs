use dioxus::prelude::*;

use ui::{load_session, use_has_permission, use_session, RouteGuard};

use crate::navigation::permissions;
use crate::Route;

#[component]
pub fn Settings() -> Element {
    let session = use_session();
    let mut refreshing = use_signal(|| false);
    let can_manage_roles = use_has_permission(Some(permissions::ROLES));

    let account = session.read().user().map(|user| {
        (
            user.email.clone(),
            user.role_name().unwrap_or("None").to_string(),
            user.restaurant_id.clone().unwrap_or_else(|| "-".to_string()),
        )
    });
    let mut granted: Vec<String> = session
        .read()
        .permissions()
        .iter()
        .map(|permission| permission.to_string())
        .collect();
    granted.sort();

    let refresh = move |_| async move {
        refreshing.set(true);
        load_session(session).await;
        refreshing.set(false);
    };

    rsx! {
        RouteGuard {
            permission: Some(permissions::SETTINGS),
            section {
                class: "p-6 flex flex-col gap-6",

                if let Some((email, role, restaurant)) = account {
                    div {
                        h2 { class: "m-0 mb-2 text-lg font-semibold text-neutral-800", "Account" }
                        dl {
                            class: "grid grid-cols-[10rem_1fr] gap-y-1 text-sm",
                            dt { "Email" }
                            dd { "{email}" }
                            dt { "Role" }
                            dd { "{role}" }
                            dt { "Restaurant" }
                            dd { "{restaurant}" }
                        }
                    }
                }

                div {
                    h2 { class: "m-0 mb-2 text-lg font-semibold text-neutral-800", "Granted permissions" }
                    ul {
                        class: "m-0 pl-5 text-sm font-mono",
                        for permission in granted {
                            li { key: "{permission}", "{permission}" }
                        }
                    }
                    button {
                        class: "mt-3 px-3 py-1.5 border border-neutral-300 rounded text-sm disabled:opacity-50",
                        disabled: refreshing(),
                        onclick: refresh,
                        if refreshing() { "Refreshing..." } else { "Refresh permissions" }
                    }
                    if can_manage_roles() {
                        Link {
                            class: "ml-3 text-sm",
                            to: Route::Roles {},
                            "Manage roles"
                        }
                    }
                }
            }
        }
    }
}
