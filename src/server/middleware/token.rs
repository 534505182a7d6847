use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::Role;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{error::auth::AuthError, model::account::Account};

/// Claims carried by an access token.
///
/// `sub` holds the account email. The role is informational only; the stored
/// account is authoritative once the token has been resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// HMAC keys and lifetime used to issue and verify access tokens.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_hours: i64,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_hours,
        }
    }

    /// Signs a token naming `account` that expires after the configured lifetime.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded HS256 token
    /// - `Err(jsonwebtoken::errors::Error)` - Signing failed
    pub fn issue(&self, account: &Account) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: account.email.clone(),
            role: account.role,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.ttl_hours)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verifies signature and expiry and returns the token's claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::Unauthenticated)` - Token is malformed, expired or badly signed
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AuthError::Unauthenticated(format!("invalid token: {}", e)))
    }
}
