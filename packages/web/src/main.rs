use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    AdminLayout, Branches, Cms, Dashboard, Discounts, Ingredients, Login, Loyalty, MenuCategories,
    MenuItems, NotFound, Orders, Reviews, Riders, Roles, Settings, Users,
};

mod navigation;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(AdminLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/branches")]
        Branches {},
        #[route("/menu/categories")]
        MenuCategories {},
        #[route("/menu/items")]
        MenuItems {},
        #[route("/ingredients")]
        Ingredients {},
        #[route("/orders")]
        Orders {},
        #[route("/riders")]
        Riders {},
        #[route("/discounts")]
        Discounts {},
        #[route("/loyalty")]
        Loyalty {},
        #[route("/reviews")]
        Reviews {},
        #[route("/users")]
        Users {},
        #[route("/role")]
        Roles {},
        #[route("/cms")]
        Cms {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Fail fast on a missing or malformed service configuration
    api::client::service_client()
        .await
        .expect("Failed to configure identity service client");

    // The session only holds the identity token; nothing else is persisted
    let session_store = MemoryStore::default();

    let secure_cookie = std::env::var("COOKIE_SECURE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookie)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 12).try_into().unwrap(),
        )); // 12 hours

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
