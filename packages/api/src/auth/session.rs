//! The identity token kept in the server-side session.

use access::SessionInfo;
use dioxus::prelude::ServerFnError;
use tower_sessions::Session;

use crate::error::ServiceError;

/// Key for storing the identity service token in the session.
pub const SESSION_TOKEN_KEY: &str = "identity_token";

/// Read the token of the signed-in user, if any.
pub async fn session_token(session: &Session) -> Result<Option<String>, ServerFnError> {
    session
        .get(SESSION_TOKEN_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Turn the identity service's answer for the stored token into what the client sees.
///
/// A token the service no longer accepts is dropped, and the caller is reported as
/// signed out rather than failed.
pub async fn settle_session(
    session: &Session,
    answer: Result<SessionInfo, ServiceError>,
) -> Result<Option<SessionInfo>, ServerFnError> {
    match answer {
        Ok(info) => Ok(Some(info)),
        Err(ServiceError::Unauthenticated) => {
            tracing::info!("Identity token rejected, clearing session");
            session
                .remove::<String>(SESSION_TOKEN_KEY)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?;
            Ok(None)
        }
        Err(e) => {
            tracing::error!("Failed to load session: {}", e);
            Err(ServerFnError::new(e.to_string()))
        }
    }
}
