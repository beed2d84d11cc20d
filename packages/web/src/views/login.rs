//! Login page view with the email/password form.

use dioxus::prelude::*;
use ui::{use_session, LoginForm};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // If already logged in, go to the dashboard
    let signed_in = {
        let state = session.read();
        !state.is_loading() && state.is_authenticated()
    };
    if signed_in {
        nav.replace(Route::Dashboard {});
    }

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Restaurant Admin"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Sign in with your staff account"
            }

            LoginForm {
                on_success: move |_| {
                    nav.replace(Route::Dashboard {});
                },
            }
        }
    }
}
