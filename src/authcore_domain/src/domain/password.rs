use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters long")]
    TooShort,
}

/// A plaintext password that passed the minimum-length policy.
///
/// Only ever held transiently: the engine hashes it and drops it. It never
/// reaches a store or a token.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() >= MIN_PASSWORD_LENGTH {
            Ok(Self(value))
        } else {
            Err(PasswordError::TooShort)
        }
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl Password {
    /// Consumes the wrapper, handing the secret to the hasher.
    pub fn into_secret(self) -> Secret<String> {
        self.0
    }
}
