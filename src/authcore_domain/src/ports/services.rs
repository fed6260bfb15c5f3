use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::Secret;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{claims::RefreshTokenClaims, user::User};

// CredentialHasher port trait and errors
#[derive(Debug, Error)]
pub enum CredentialHasherError {
    #[error("Malformed stored hash")]
    MalformedHash,
    #[error("Hashing failure: {0}")]
    HashingFailure(String),
}

impl PartialEq for CredentialHasherError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MalformedHash, Self::MalformedHash) => true,
            (Self::HashingFailure(_), Self::HashingFailure(_)) => true,
            _ => false,
        }
    }
}

/// One-way hashing of secrets with a memory-hard, tunable-cost algorithm.
///
/// Serves double duty: password hashes for accounts and hashes of raw
/// refresh-token strings before they reach the record store. The deliberate
/// CPU/memory cost is the point; implementations must not cache or shortcut.
///
/// Arguments are owned so implementations can move them onto a blocking
/// worker.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, secret: Secret<String>) -> Result<Secret<String>, CredentialHasherError>;

    /// `Ok(false)` for a wrong secret; `Err` is reserved for malformed
    /// stored hashes and infrastructure failure.
    async fn verify(
        &self,
        stored_hash: Secret<String>,
        candidate: Secret<String>,
    ) -> Result<bool, CredentialHasherError>;

    /// True when the stored hash was produced under different cost
    /// parameters than currently configured, supporting online upgrades.
    fn needs_rehash(&self, stored_hash: &str) -> bool;
}

// TokenIssuer port trait and errors
#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token signing failure: {0}")]
    SigningFailure(String),
}

impl PartialEq for TokenIssuerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidToken, Self::InvalidToken) => true,
            (Self::SigningFailure(_), Self::SigningFailure(_)) => true,
            _ => false,
        }
    }
}

/// A freshly signed refresh token together with the identifiers the caller
/// must persist. `expires_at` is decoded from the `exp` claim the issuer
/// embedded; callers never recompute expiry from TTL configuration.
#[derive(Debug, Clone)]
pub struct IssuedRefreshToken {
    pub token: String,
    pub jti: Uuid,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies the two token families. Access and refresh tokens use
/// different secrets so compromise of one cannot forge the other.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn sign_access_token(&self, user: &User) -> Result<String, TokenIssuerError>;

    async fn sign_refresh_token(
        &self,
        user_id: Uuid,
    ) -> Result<IssuedRefreshToken, TokenIssuerError>;

    /// Signature and expiry check against the refresh secret. Bad signature,
    /// malformed structure and expiry all collapse into `InvalidToken`.
    async fn verify_refresh_token(
        &self,
        token: &str,
    ) -> Result<RefreshTokenClaims, TokenIssuerError>;
}
