use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    email::Email,
    refresh_token::{NewRefreshTokenRecord, RefreshTokenRecord},
    user::{NewUser, User},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("Email already registered")]
    EmailTaken,
    #[error("Unexpected user store error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmailTaken, Self::EmailTaken) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// The external account store. The engine only ever reads accounts and asks
/// for creation; schema, migrations and retention live elsewhere.
///
/// Lookups return `Ok(None)` for absent rows: absence is a branch the login
/// and refresh flows take deliberately, not a store failure.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserStoreError>;
}

// RefreshTokenStore port trait and errors
#[derive(Debug, Error)]
pub enum RefreshTokenStoreError {
    #[error("Refresh token jti already exists")]
    DuplicateJti,
    #[error("Refresh token record not found")]
    RecordNotFound,
    #[error("Unexpected refresh token store error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for RefreshTokenStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateJti, Self::DuplicateJti) => true,
            (Self::RecordNotFound, Self::RecordNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Exclusive owner of refresh-token record state.
///
/// Records are created live, mutated only by `revoke`, and never deleted
/// here. The rotation flow relies on read-after-write consistency for a
/// single record: once `revoke` returns, a subsequent `find_by_jti` must
/// observe `revoked_at`.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Inserts a new live record. `DuplicateJti` signals an integrity
    /// violation upstream; it must not occur under correct jti generation.
    async fn create(
        &self,
        record: NewRefreshTokenRecord,
    ) -> Result<RefreshTokenRecord, RefreshTokenStoreError>;

    async fn find_by_jti(
        &self,
        jti: Uuid,
    ) -> Result<Option<RefreshTokenRecord>, RefreshTokenStoreError>;

    /// Flips a live record to revoked, setting `revoked_at` to now, and
    /// reports whether this call did the flipping. `Ok(false)` means the
    /// record was already revoked; the flip happens at most once even under
    /// concurrent callers. Never an error for an already-revoked record.
    async fn revoke(&self, id: Uuid) -> Result<bool, RefreshTokenStoreError>;
}
