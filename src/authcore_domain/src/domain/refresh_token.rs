use chrono::{DateTime, Utc};
use secrecy::Secret;
use uuid::Uuid;

/// Persisted metadata for one issued refresh token.
///
/// Holds the argon2 hash of the token string, never the token itself: a
/// leaked dump of these records yields nothing presentable. A record is
/// mutated exactly once in its life, to set `revoked_at` at rotation;
/// retention and cleanup of dead records belong to the embedding system.
#[derive(Debug, Clone)]
pub struct RefreshTokenRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Globally unique token identifier, also embedded in the signed token.
    pub jti: Uuid,
    pub token_hash: Secret<String>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshTokenRecord {
    /// A record is live until it is revoked or its expiry passes, whichever
    /// comes first. `now >= expires_at` counts as dead.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && now < self.expires_at
    }
}

/// Creation input for the refresh token store.
#[derive(Debug, Clone)]
pub struct NewRefreshTokenRecord {
    pub jti: Uuid,
    pub user_id: Uuid,
    pub token_hash: Secret<String>,
    pub expires_at: DateTime<Utc>,
}
