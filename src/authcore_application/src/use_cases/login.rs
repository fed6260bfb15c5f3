use secrecy::Secret;

use authcore_domain::{
    CredentialHasher, Email, Password, RefreshTokenStore, TokenIssuer, UserStore,
};

use crate::use_cases::issue_tokens::{IssueTokenError, TokenPair, issue_token_pair};

/// Error types for the login use case. `InvalidCredentials` is deliberately
/// identical for "no such account" and "wrong password".
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Internal error")]
    IntegrityViolation,
    #[error("Unexpected login failure: {0}")]
    UnexpectedError(String),
}

impl PartialEq for LoginError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidCredentials, Self::InvalidCredentials) => true,
            (Self::IntegrityViolation, Self::IntegrityViolation) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

impl From<IssueTokenError> for LoginError {
    fn from(e: IssueTokenError) -> Self {
        match e {
            IssueTokenError::IntegrityViolation => Self::IntegrityViolation,
            IssueTokenError::UnexpectedError(msg) => Self::UnexpectedError(msg),
        }
    }
}

/// Login use case - verifies credentials and issues a token pair.
///
/// `dummy_hash` is the process-wide hash computed once at startup; it keeps
/// the absent-account path doing the same verification work as the
/// wrong-password path, so response latency reveals nothing about whether an
/// email is registered.
pub struct LoginUseCase<'a, H, U, T, R>
where
    H: CredentialHasher,
    U: UserStore,
    T: TokenIssuer,
    R: RefreshTokenStore,
{
    hasher: &'a H,
    user_store: &'a U,
    token_issuer: &'a T,
    refresh_token_store: &'a R,
    dummy_hash: &'a Secret<String>,
}

impl<'a, H, U, T, R> LoginUseCase<'a, H, U, T, R>
where
    H: CredentialHasher,
    U: UserStore,
    T: TokenIssuer,
    R: RefreshTokenStore,
{
    pub fn new(
        hasher: &'a H,
        user_store: &'a U,
        token_issuer: &'a T,
        refresh_token_store: &'a R,
        dummy_hash: &'a Secret<String>,
    ) -> Self {
        Self {
            hasher,
            user_store,
            token_issuer,
            refresh_token_store,
            dummy_hash,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// A `TokenPair` on success, `InvalidCredentials` otherwise. The raw
    /// refresh token is returned to the caller and never persisted; only its
    /// hash reaches the record store.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<TokenPair, LoginError> {
        let user = self
            .user_store
            .find_by_email(&email)
            .await
            .map_err(|e| LoginError::UnexpectedError(e.to_string()))?;

        let Some(user) = user else {
            // Exactly one verification-shaped operation happens whether or
            // not the account exists. The outcome is discarded.
            let _ = self
                .hasher
                .verify(self.dummy_hash.clone(), password.into_secret())
                .await;
            return Err(LoginError::InvalidCredentials);
        };

        let password_matches = self
            .hasher
            .verify(user.password_hash.clone(), password.into_secret())
            .await
            .map_err(|e| LoginError::UnexpectedError(e.to_string()))?;

        if !password_matches {
            return Err(LoginError::InvalidCredentials);
        }

        issue_token_pair(
            self.hasher,
            self.token_issuer,
            self.refresh_token_store,
            &user,
        )
        .await
        .map_err(LoginError::from)
    }
}
