use secrecy::Secret;

use authcore_domain::{
    CredentialHasher, NewRefreshTokenRecord, RefreshTokenStore, RefreshTokenStoreError,
    TokenIssuer, User,
};

/// The pair every successful login or refresh hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum IssueTokenError {
    #[error("Internal error")]
    IntegrityViolation,
    #[error("{0}")]
    UnexpectedError(String),
}

/// Issues an access/refresh pair for `user` and persists the refresh-token
/// record under the freshly minted jti.
///
/// The two signings share no mutable state, so they run concurrently. The
/// raw refresh token is hashed before storage; the store only ever sees the
/// hash. A jti collision means our uniqueness assumption broke: logged and
/// surfaced as fatal, never retried.
pub(crate) async fn issue_token_pair<H, T, R>(
    hasher: &H,
    token_issuer: &T,
    refresh_token_store: &R,
    user: &User,
) -> Result<TokenPair, IssueTokenError>
where
    H: CredentialHasher,
    T: TokenIssuer,
    R: RefreshTokenStore,
{
    let (access_token, issued) = tokio::try_join!(
        token_issuer.sign_access_token(user),
        token_issuer.sign_refresh_token(user.id),
    )
    .map_err(|e| IssueTokenError::UnexpectedError(e.to_string()))?;

    let token_hash = hasher
        .hash(Secret::from(issued.token.clone()))
        .await
        .map_err(|e| IssueTokenError::UnexpectedError(e.to_string()))?;

    let new_record = NewRefreshTokenRecord {
        jti: issued.jti,
        user_id: user.id,
        token_hash,
        expires_at: issued.expires_at,
    };

    match refresh_token_store.create(new_record).await {
        Ok(_) => Ok(TokenPair {
            access_token,
            refresh_token: issued.token,
        }),
        Err(RefreshTokenStoreError::DuplicateJti) => {
            tracing::error!(jti = %issued.jti, "jti collision while persisting refresh token");
            Err(IssueTokenError::IntegrityViolation)
        }
        Err(e) => Err(IssueTokenError::UnexpectedError(e.to_string())),
    }
}
