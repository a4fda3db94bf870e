//! Accounts: roles, password hashing and the credential store

mod command;
mod error;
pub mod password;
pub(crate) mod repository;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub use command::{Command, LoginInput, RegisterInput};
pub use error::{UserError, UserResult};
pub use password::{HashParams, Hasher};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Public view of an account, the password hash never leaves the crate
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub role: Role,
}
