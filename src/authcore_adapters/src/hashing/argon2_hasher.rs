use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

use authcore_domain::{CredentialHasher, CredentialHasherError};

/// Argon2id cost parameters, fixed at startup for the whole process.
#[derive(Debug, Clone, Copy)]
pub struct Argon2Config {
    /// Memory cost in KiB.
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

/// Argon2id hasher for passwords and refresh-token strings.
///
/// The work is CPU- and memory-bound on purpose, so both operations run on
/// the blocking pool rather than starving the async executor.
pub struct Argon2CredentialHasher {
    config: Argon2Config,
}

impl Argon2CredentialHasher {
    pub fn new(config: Argon2Config) -> Self {
        Self { config }
    }

    fn params(&self) -> Result<Params, CredentialHasherError> {
        Params::new(
            self.config.memory_cost,
            self.config.time_cost,
            self.config.parallelism,
            None,
        )
        .map_err(|e| CredentialHasherError::HashingFailure(e.to_string()))
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    #[tracing::instrument(name = "Computing argon2 hash", skip_all)]
    async fn hash(&self, secret: Secret<String>) -> Result<Secret<String>, CredentialHasherError> {
        let params = self.params()?;
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(rand_core::OsRng);
                Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
                    .hash_password(secret.expose_secret().as_bytes(), &salt)
                    .map(|hash| Secret::from(hash.to_string()))
                    .map_err(|e| CredentialHasherError::HashingFailure(e.to_string()))
            })
        })
        .await
        .map_err(|e| CredentialHasherError::HashingFailure(e.to_string()))?
    }

    #[tracing::instrument(name = "Verifying argon2 hash", skip_all)]
    async fn verify(
        &self,
        stored_hash: Secret<String>,
        candidate: Secret<String>,
    ) -> Result<bool, CredentialHasherError> {
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let parsed = PasswordHash::new(stored_hash.expose_secret())
                    .map_err(|_| CredentialHasherError::MalformedHash)?;

                // Verification parameters come from the stored PHC string
                // itself, so older hashes keep verifying after a cost bump.
                match Argon2::default()
                    .verify_password(candidate.expose_secret().as_bytes(), &parsed)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(CredentialHasherError::HashingFailure(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| CredentialHasherError::HashingFailure(e.to_string()))?
    }

    fn needs_rehash(&self, stored_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored_hash) else {
            return true;
        };
        if parsed.algorithm != Algorithm::Argon2id.ident() {
            return true;
        }
        let Ok(params) = Params::try_from(&parsed) else {
            return true;
        };
        params.m_cost() != self.config.memory_cost
            || params.t_cost() != self.config.time_cost
            || params.p_cost() != self.config.parallelism
    }
}
