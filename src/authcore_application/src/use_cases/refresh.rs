use chrono::Utc;
use secrecy::Secret;
use uuid::Uuid;

use authcore_domain::{CredentialHasher, RefreshTokenStore, TokenIssuer, UserStore};

use crate::use_cases::issue_tokens::{IssueTokenError, TokenPair, issue_token_pair};

/// Error types for the refresh use case. `InvalidRefreshToken` deliberately
/// conflates malformed, expired, revoked, unknown and mismatched tokens: a
/// replayed stolen token gets the same answer as an ordinary expired one.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("Invalid refresh token")]
    InvalidRefreshToken,
    #[error("Internal error")]
    IntegrityViolation,
    #[error("Unexpected refresh failure: {0}")]
    UnexpectedError(String),
}

impl PartialEq for RefreshError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidRefreshToken, Self::InvalidRefreshToken) => true,
            (Self::IntegrityViolation, Self::IntegrityViolation) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

impl From<IssueTokenError> for RefreshError {
    fn from(e: IssueTokenError) -> Self {
        match e {
            IssueTokenError::IntegrityViolation => Self::IntegrityViolation,
            IssueTokenError::UnexpectedError(msg) => Self::UnexpectedError(msg),
        }
    }
}

/// Refresh use case - the rotation state machine.
///
/// Each refresh token is valid for exactly one successful refresh: the
/// presented record is revoked before its replacement is created, so a crash
/// in between loses the session rather than leaving two live tokens.
pub struct RefreshUseCase<'a, H, U, T, R>
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
}

impl<'a, H, U, T, R> RefreshUseCase<'a, H, U, T, R>
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
    ) -> Self {
        Self {
            hasher,
            user_store,
            token_issuer,
            refresh_token_store,
        }
    }

    /// Execute the refresh use case
    ///
    /// # Returns
    /// A fresh `TokenPair`; the presented token is dead afterwards.
    #[tracing::instrument(name = "RefreshUseCase::execute", skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<TokenPair, RefreshError> {
        let claims = self
            .token_issuer
            .verify_refresh_token(refresh_token)
            .await
            .map_err(|_| RefreshError::InvalidRefreshToken)?;

        let jti = Uuid::parse_str(&claims.jti).map_err(|_| RefreshError::InvalidRefreshToken)?;

        let record = self
            .refresh_token_store
            .find_by_jti(jti)
            .await
            .map_err(|e| RefreshError::UnexpectedError(e.to_string()))?
            .ok_or(RefreshError::InvalidRefreshToken)?;

        if !record.is_live(Utc::now()) {
            return Err(RefreshError::InvalidRefreshToken);
        }

        // The signature proved the token was minted by us; the stored hash
        // proves this exact token string belongs to this record, so a
        // guessed jti alone gets nowhere.
        let token_matches = self
            .hasher
            .verify(
                record.token_hash.clone(),
                Secret::from(refresh_token.to_owned()),
            )
            .await
            .map_err(|e| RefreshError::UnexpectedError(e.to_string()))?;

        if !token_matches {
            return Err(RefreshError::InvalidRefreshToken);
        }

        let user = self
            .user_store
            .find_by_id(record.user_id)
            .await
            .map_err(|e| RefreshError::UnexpectedError(e.to_string()))?
            .ok_or(RefreshError::InvalidRefreshToken)?;

        // Revoke first, then mint. The reverse order could leave two live
        // tokens if we crashed in between. The revoke is a conditional flip:
        // only the caller that actually flipped the record proceeds, so a
        // concurrent rotation of the same token loses here.
        let revoked = self
            .refresh_token_store
            .revoke(record.id)
            .await
            .map_err(|e| RefreshError::UnexpectedError(e.to_string()))?;

        if !revoked {
            return Err(RefreshError::InvalidRefreshToken);
        }

        issue_token_pair(
            self.hasher,
            self.token_issuer,
            self.refresh_token_store,
            &user,
        )
        .await
        .map_err(RefreshError::from)
    }
}
