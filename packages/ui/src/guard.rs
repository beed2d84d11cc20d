use std::cell::Cell;
use std::rc::Rc;

use access::{GuardState, PermissionId};
use dioxus::prelude::*;

use crate::use_session;

/// Render `children` only for users holding `permission`.
///
/// While the session is still loading a neutral placeholder is shown. The first
/// resolved decision sticks until the guard unmounts. On denial the guard shows a
/// notice (unless `show_notice` is false) and, when `redirect_to` is set, replaces the
/// current route once.
#[component]
pub fn RouteGuard(
    permission: Option<PermissionId>,
    #[props(default)] redirect_to: Option<String>,
    #[props(default = true)] show_notice: bool,
    children: Element,
) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let latch = use_hook(|| Rc::new(Cell::new(GuardState::Loading)));

    let previous = latch.get();
    let state = previous.advance(&session.read(), permission.as_ref());
    latch.set(state);

    if previous != state {
        tracing::debug!(
            permission = permission.as_ref().map(PermissionId::as_str),
            ?state,
            "Route guard resolved"
        );
        if state == GuardState::Denied {
            if let Some(path) = redirect_to.clone() {
                nav.replace(path);
            }
        }
    }

    match state {
        GuardState::Loading => rsx! {
            div {
                class: "guard-loading flex items-center justify-center p-8 text-sm text-neutral-500",
                "Loading..."
            }
        },
        GuardState::Granted => rsx! {
            {children}
        },
        GuardState::Denied if show_notice => rsx! {
            AccessDenied {}
        },
        GuardState::Denied => rsx! {},
    }
}

#[component]
fn AccessDenied() -> Element {
    rsx! {
        div {
            class: "guard-denied flex flex-col items-center justify-center gap-2 p-12 text-center",
            h2 { class: "m-0 text-lg font-semibold text-neutral-800", "Access denied" }
            p {
                class: "m-0 text-sm text-neutral-600",
                "Your role does not include access to this page."
            }
        }
    }
}
