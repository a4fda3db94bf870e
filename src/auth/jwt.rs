//! Bearer token issuance and verification

use filmapi_user::{Account, Role};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
    get_current_timestamp,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    SignatureInvalid,

    #[error("token has expired")]
    Expired,

    #[error("token could not be signed: {0}")]
    Signing(String),
}

/// Identity carried by a token and attached to authenticated requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl From<Account> for AuthUser {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            role: account.role,
        }
    }
}

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub user: AuthUser,
    /// Issued at, seconds since epoch
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
}

/// HS256 token service bound to one secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime_seconds: u64,
}

impl TokenService {
    pub fn new(secret: &str, lifetime_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime_seconds,
        }
    }

    /// Sign a token valid from now until now + lifetime
    pub fn issue(&self, user: AuthUser) -> Result<String, TokenError> {
        self.issue_at(user, get_current_timestamp())
    }

    /// Sign a token as if it had been issued at `issued_at`
    pub fn issue_at(&self, user: AuthUser, issued_at: u64) -> Result<String, TokenError> {
        let claims = Claims {
            user,
            iat: issued_at,
            exp: issued_at.saturating_add(self.lifetime_seconds),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Check signature and expiry, returns the embedded identity
    ///
    /// A token is accepted up to and including its `exp` second.
    pub fn verify(&self, token: &str) -> Result<AuthUser, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::Malformed,
            }
        })?;

        Ok(data.claims.user)
    }
}
