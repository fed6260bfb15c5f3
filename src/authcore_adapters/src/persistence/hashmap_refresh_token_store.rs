use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use authcore_domain::{
    NewRefreshTokenRecord, RefreshTokenRecord, RefreshTokenStore, RefreshTokenStoreError,
};

/// In-memory refresh-token record store, keyed by jti.
///
/// Revocation is a conditional flip under the write lock: of two racing
/// rotations of the same token, exactly one call gets `Ok(true)` back and
/// goes on to mint.
#[derive(Default, Clone)]
pub struct HashMapRefreshTokenStore {
    records: Arc<RwLock<HashMap<Uuid, RefreshTokenRecord>>>,
}

impl HashMapRefreshTokenStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl RefreshTokenStore for HashMapRefreshTokenStore {
    async fn create(
        &self,
        record: NewRefreshTokenRecord,
    ) -> Result<RefreshTokenRecord, RefreshTokenStoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.jti) {
            return Err(RefreshTokenStoreError::DuplicateJti);
        }

        let stored = RefreshTokenRecord {
            id: Uuid::new_v4(),
            user_id: record.user_id,
            jti: record.jti,
            token_hash: record.token_hash,
            expires_at: record.expires_at,
            created_at: Utc::now(),
            revoked_at: None,
        };
        records.insert(stored.jti, stored.clone());
        Ok(stored)
    }

    async fn find_by_jti(
        &self,
        jti: Uuid,
    ) -> Result<Option<RefreshTokenRecord>, RefreshTokenStoreError> {
        let records = self.records.read().await;
        Ok(records.get(&jti).cloned())
    }

    async fn revoke(&self, id: Uuid) -> Result<bool, RefreshTokenStoreError> {
        let mut records = self.records.write().await;
        let record = records
            .values_mut()
            .find(|r| r.id == id)
            .ok_or(RefreshTokenStoreError::RecordNotFound)?;

        // Second revoke of the same record is a no-op, reported as such.
        if record.revoked_at.is_some() {
            return Ok(false);
        }
        record.revoked_at = Some(Utc::now());
        Ok(true)
    }
}
