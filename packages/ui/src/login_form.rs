//! Email/password sign-in form.

use dioxus::prelude::*;

use crate::use_session;

/// Signs in against the identity service and populates the session store.
#[component]
pub fn LoginForm(on_success: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match api::login(e, p).await {
                Ok(info) => {
                    session.write().sign_in(info);
                    loading.set(false);
                    on_success.call(());
                }
                Err(e) => {
                    tracing::warn!("Sign-in failed: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            onsubmit: handle_login,
            class: "flex flex-col gap-3 w-full max-w-[320px]",

            if let Some(err) = error() {
                div {
                    class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                    "{err}"
                }
            }

            input {
                class: "w-full px-3 py-2 border border-neutral-300 rounded",
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            input {
                class: "w-full px-3 py-2 border border-neutral-300 rounded",
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            button {
                class: "w-full px-5 py-2.5 rounded bg-neutral-900 text-white text-[0.9375rem] font-medium disabled:opacity-50",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Sign in" }
            }
        }
    }
}
