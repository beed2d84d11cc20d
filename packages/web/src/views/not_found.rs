use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen gap-3",
            h1 { class: "m-0 text-xl font-semibold text-neutral-800", "Page not found" }
            p { class: "m-0 text-sm text-neutral-600", "/{path}" }
            Link { class: "text-sm", to: Route::Dashboard {}, "Back to dashboard" }
        }
    }
}
