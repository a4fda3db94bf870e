pub mod admin;
pub mod auth;

pub use admin::{authorize, require_role};
pub use auth::auth_middleware;
