//! Session credential handling for the identity service.

#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use session::{session_token, settle_session, SESSION_TOKEN_KEY};
