//! Session context and hooks for the UI.

use access::{PermissionId, PermissionSet, SessionState};
use dioxus::prelude::*;

/// Get the current session.
/// Returns a signal that updates when the session loads, refreshes or is cleared.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The granted permission set, recomputed only when the session's set changes.
pub fn use_permissions() -> Memo<PermissionSet> {
    let session = use_session();
    use_memo(move || session.read().permissions().clone())
}

/// Access predicate bound to the current session.
pub fn use_has_permission(required: Option<PermissionId>) -> Memo<bool> {
    let permissions = use_permissions();
    use_memo(move || permissions.read().grants(required.as_ref()))
}

/// Fetch the session from the server and store the outcome.
///
/// Used for the initial load and for refreshing on demand. A refresh never puts the
/// store back into its loading state; whichever response lands last wins.
pub async fn load_session(mut session: Signal<SessionState>) {
    let outcome = api::get_session().await;
    match &outcome {
        Ok(Some(info)) => tracing::debug!(
            "Session loaded for {} with {} permissions",
            info.user.id,
            info.permissions.len()
        ),
        Ok(None) => tracing::debug!("No active session"),
        Err(e) => tracing::error!("Failed to load session: {}", e),
    }
    session.write().resolve(outcome);
}

/// Provider component that owns the session store.
/// Wrap your app with this component; it loads the session once on mount.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(SessionState::new);

    let _ = use_resource(move || async move {
        load_session(session).await;
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "/login".to_string())] redirect_to: String,
) -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let onclick = move |_| {
        let redirect_to = redirect_to.clone();
        async move {
            match api::logout().await {
                Ok(()) => {
                    session.write().clear();
                    nav.replace(redirect_to);
                }
                Err(e) => tracing::error!("Failed to log out: {}", e),
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
