//! Authentication module
//!
//! Stateless HS256 bearer tokens carrying the account identity and role

pub mod jwt;

pub use jwt::{AuthUser, Claims, TokenError, TokenService};
