//! Mock collaborators shared by the use-case tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{Duration, Utc};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use uuid::Uuid;

use authcore_domain::{
    CredentialHasher, CredentialHasherError, Email, IssuedRefreshToken, NewRefreshTokenRecord,
    NewUser, Password, RefreshTokenClaims, RefreshTokenRecord, RefreshTokenStore,
    RefreshTokenStoreError, TokenIssuer, TokenIssuerError, User, UserStore, UserStoreError,
};

pub(crate) fn email(address: &str) -> Email {
    Email::try_from(Secret::from(address.to_owned())).unwrap()
}

pub(crate) fn password(plaintext: &str) -> Password {
    Password::try_from(Secret::from(plaintext.to_owned())).unwrap()
}

/// Hashes by prefixing, so tests can predict hashes without argon2 cost.
#[derive(Clone, Default)]
pub(crate) struct MockCredentialHasher {
    verify_calls: Arc<AtomicUsize>,
}

impl MockCredentialHasher {
    pub(crate) fn verify_call_count(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CredentialHasher for MockCredentialHasher {
    async fn hash(&self, secret: Secret<String>) -> Result<Secret<String>, CredentialHasherError> {
        Ok(Secret::from(format!("hashed:{}", secret.expose_secret())))
    }

    async fn verify(
        &self,
        stored_hash: Secret<String>,
        candidate: Secret<String>,
    ) -> Result<bool, CredentialHasherError> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        Ok(stored_hash.expose_secret() == &format!("hashed:{}", candidate.expose_secret()))
    }

    fn needs_rehash(&self, _stored_hash: &str) -> bool {
        false
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserStore {
    pub(crate) async fn seed_user(&self, email: Email, password_hash: &str) -> User {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email,
            password_hash: Secret::from(password_hash.to_owned()),
            created_at: now,
            updated_at: now,
        };
        self.users.write().await.insert(user.id, user.clone());
        user
    }

    pub(crate) async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == new_user.email) {
            return Err(UserStoreError::EmailTaken);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }
}

/// Issues transparent `kind:sub:jti:exp` strings instead of real JWTs.
#[derive(Clone)]
pub(crate) struct MockTokenIssuer {
    pub(crate) fixed_jti: Option<Uuid>,
    pub(crate) reject_all: bool,
    pub(crate) refresh_ttl_seconds: i64,
}

impl Default for MockTokenIssuer {
    fn default() -> Self {
        Self {
            fixed_jti: None,
            reject_all: false,
            refresh_ttl_seconds: 900,
        }
    }
}

#[async_trait::async_trait]
impl TokenIssuer for MockTokenIssuer {
    async fn sign_access_token(&self, user: &User) -> Result<String, TokenIssuerError> {
        Ok(format!("access:{}", user.id))
    }

    async fn sign_refresh_token(
        &self,
        user_id: Uuid,
    ) -> Result<IssuedRefreshToken, TokenIssuerError> {
        let jti = self.fixed_jti.unwrap_or_else(Uuid::new_v4);
        let expires_at = Utc::now() + Duration::seconds(self.refresh_ttl_seconds);
        Ok(IssuedRefreshToken {
            token: format!("refresh:{}:{}:{}", user_id, jti, expires_at.timestamp()),
            jti,
            expires_at,
        })
    }

    async fn verify_refresh_token(
        &self,
        token: &str,
    ) -> Result<RefreshTokenClaims, TokenIssuerError> {
        if self.reject_all {
            return Err(TokenIssuerError::InvalidToken);
        }
        let parts: Vec<&str> = token.split(':').collect();
        let ["refresh", sub, jti, exp] = parts.as_slice() else {
            return Err(TokenIssuerError::InvalidToken);
        };
        let exp: i64 = exp.parse().map_err(|_| TokenIssuerError::InvalidToken)?;
        if Utc::now().timestamp() >= exp {
            return Err(TokenIssuerError::InvalidToken);
        }
        Ok(RefreshTokenClaims {
            sub: (*sub).to_owned(),
            jti: (*jti).to_owned(),
            iat: (exp - self.refresh_ttl_seconds) as usize,
            exp: exp as usize,
        })
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockRefreshTokenStore {
    records: Arc<RwLock<HashMap<Uuid, RefreshTokenRecord>>>,
    ops: Arc<Mutex<Vec<String>>>,
    /// When set, `revoke` reports every record as already revoked without
    /// touching it, as if a concurrent rotation had won the race.
    pub(crate) revoke_loses_race: bool,
}

impl MockRefreshTokenStore {
    pub(crate) async fn all_records(&self) -> Vec<RefreshTokenRecord> {
        self.records.read().await.values().cloned().collect()
    }

    /// Create/revoke calls in the order the use case made them.
    pub(crate) fn operations(&self) -> Vec<String> {
        self.ops.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RefreshTokenStore for MockRefreshTokenStore {
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
        self.ops.lock().unwrap().push(format!("create:{}", stored.jti));
        Ok(stored)
    }

    async fn find_by_jti(
        &self,
        jti: Uuid,
    ) -> Result<Option<RefreshTokenRecord>, RefreshTokenStoreError> {
        Ok(self.records.read().await.get(&jti).cloned())
    }

    async fn revoke(&self, id: Uuid) -> Result<bool, RefreshTokenStoreError> {
        let mut records = self.records.write().await;
        let record = records
            .values_mut()
            .find(|r| r.id == id)
            .ok_or(RefreshTokenStoreError::RecordNotFound)?;
        self.ops.lock().unwrap().push(format!("revoke:{id}"));
        if self.revoke_loses_race || record.revoked_at.is_some() {
            return Ok(false);
        }
        record.revoked_at = Some(Utc::now());
        Ok(true)
    }
}
