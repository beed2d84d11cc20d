use dioxus::prelude::*;

use ui::{use_session, AppSidebar, Navbar};

use crate::navigation::admin_navigation;
use crate::Route;

/// Shell for every signed-in page: permission-filtered sidebar, top bar, routed body.
#[component]
pub fn AdminLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    // Anonymous visitors go to the login page once the session has loaded
    let signed_out = {
        let state = session.read();
        !state.is_loading() && !state.is_authenticated()
    };
    if signed_out {
        nav.replace(Route::Login {});
    }

    rsx! {
        div {
            class: "admin-shell flex min-h-screen",
            AppSidebar {
                items: admin_navigation(),
                active_path: route.to_string(),
            }

            main {
                class: "flex-1 flex flex-col min-w-0",
                Navbar { title: page_title(&route) }
                div {
                    class: "flex-1 overflow-y-auto",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

fn page_title(route: &Route) -> &'static str {
    match route {
        Route::Dashboard {} => "Dashboard",
        Route::Branches {} => "Branches",
        Route::MenuCategories {} => "Menu Categories",
        Route::MenuItems {} => "Menu Items",
        Route::Ingredients {} => "Ingredients & Stock",
        Route::Orders {} => "Orders",
        Route::Riders {} => "Riders",
        Route::Discounts {} => "Discounts",
        Route::Loyalty {} => "Loyalty",
        Route::Reviews {} => "Reviews",
        Route::Users {} => "Users",
        Route::Roles {} => "Roles & Permissions",
        Route::Cms {} => "CMS",
        Route::Settings {} => "Settings",
        Route::Login {} | Route::NotFound { .. } => "",
    }
}
