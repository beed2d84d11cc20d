//! Wire models for the identity service and the REST backend.

mod envelope;
mod resource;
mod user;

pub use envelope::ApiEnvelope;
pub use resource::{rows_from_value, Resource, ResourceRow};
pub use user::{ActionEntry, IdentityMe, IdentityRole, IdentityUser};
