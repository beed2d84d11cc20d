use dioxus::prelude::*;

use crate::use_session;

/// Top bar of the admin shell: page title on the left, signed-in user on the right.
#[component]
pub fn Navbar(#[props(into)] title: String) -> Element {
    let session = use_session();
    let user = session.read().user().cloned();

    rsx! {
        header {
            class: "navbar flex items-center gap-2 px-4 py-2 border-b border-neutral-200",
            span { class: "text-sm font-semibold", "{title}" }
            div { class: "flex-1" }
            if let Some(user) = user {
                span {
                    class: "text-sm text-neutral-600",
                    "{user.display_name()}"
                    if user.is_super_admin {
                        span { class: "ml-2 px-1.5 py-0.5 rounded bg-amber-100 text-amber-800 text-xs", "super admin" }
                    }
                }
            }
        }
    }
}
