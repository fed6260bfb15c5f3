use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use uuid::Uuid;

use crate::domain::email::Email;

/// An account row as the external user store hands it back.
///
/// The engine consumes accounts; it never owns their schema. The password
/// hash travels as a secret PHC string, never as plaintext.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: Email,
    pub password_hash: Secret<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation input for the user store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: Secret<String>,
}

/// What registration returns to the caller. Notably hash-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for AccountSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.as_ref().expose_secret().clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
