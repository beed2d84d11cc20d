//! # API crate: server functions for the restaurant admin dashboard
//!
//! The web frontend never talks to the identity service or the REST backend directly.
//! It calls the Dioxus server functions defined here, which keep the identity token in
//! the server-side session and forward requests upstream through the shared
//! [`client::ServiceClient`].
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Identity token stored in the `tower-sessions` session |
//! | [`client`] | `server` | `reqwest` client for the identity service and the REST backend |
//! | [`config`] | none | [`config::ServiceConfig`] from environment variables |
//! | [`error`] | none | [`error::ConfigError`] and [`error::ServiceError`] |
//! | [`models`] | none | Wire shapes: identity profile, `{ success, data, message }` envelope, resource rows |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]`. The `server` build holds the real logic; the client
//! build is a thin stub that forwards the call over HTTP.
//!
//! - **Session**: `get_session`, `login`, `logout`
//! - **Resources**: `list_resource`

use dioxus::prelude::*;

pub use access::{PermissionId, SessionInfo, UserInfo};

pub mod auth;
#[cfg(feature = "server")]
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use models::{Resource, ResourceRow};

/// Get the signed-in user and the permissions granted to them.
///
/// `Ok(None)` when nobody is signed in, or when the identity service no longer
/// accepts the stored token (the token is then dropped from the session).
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_session() -> Result<Option<SessionInfo>, ServerFnError> {
    let Some(token) = auth::session_token(&session).await? else {
        return Ok(None);
    };

    let client = client::service_client()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    auth::settle_session(&session, client.current_session(&token).await).await
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_session() -> Result<Option<SessionInfo>, ServerFnError> {
    Ok(None)
}

/// Sign in with email and password against the identity service.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<SessionInfo, ServerFnError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.is_empty() {
        return Err(ServerFnError::new("Password is required"));
    }

    let client = client::service_client()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let token = client
        .sign_in(&email, &password)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let info = client
        .current_session(&token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .cycle_id()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session
        .insert(auth::SESSION_TOKEN_KEY, token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user = %info.user.id, permissions = info.permissions.len(), "Signed in");
    Ok(info)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<SessionInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// List the records of a backend collection for the signed-in user.
#[cfg(feature = "server")]
#[get("/api/resources/:resource", session: tower_sessions::Session)]
pub async fn list_resource(resource: String) -> Result<Vec<ResourceRow>, ServerFnError> {
    use crate::error::ServiceError;

    let Some(collection) = Resource::from_slug(&resource) else {
        return Err(ServerFnError::new(
            ServiceError::UnknownResource(resource).to_string(),
        ));
    };

    let Some(token) = auth::session_token(&session).await? else {
        return Err(ServerFnError::new(ServiceError::Unauthenticated.to_string()));
    };

    let client = client::service_client()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    client.list(collection, &token).await.map_err(|e| {
        tracing::error!("Failed to list {}: {}", collection.slug(), e);
        ServerFnError::new(e.to_string())
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/resources/:resource")]
pub async fn list_resource(resource: String) -> Result<Vec<ResourceRow>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
