use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use uuid::Uuid;

use authcore_domain::{
    AccessTokenClaims, IssuedRefreshToken, RefreshTokenClaims, TokenIssuer, TokenIssuerError,
    User,
};

/// Secrets and TTLs for the two token families. Distinct secrets are the
/// whole point: a leaked access secret must not mint refresh tokens.
#[derive(Clone)]
pub struct JwtConfig {
    pub access_secret: Secret<String>,
    pub access_ttl_seconds: i64,
    pub refresh_secret: Secret<String>,
    pub refresh_ttl_seconds: i64,
}

pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

// Compute issued-at/expiry claim values for a token minted now
fn claim_window(ttl_seconds: i64) -> Result<(usize, usize), TokenIssuerError> {
    let delta = chrono::Duration::try_seconds(ttl_seconds).ok_or_else(|| {
        TokenIssuerError::SigningFailure("token ttl out of range".to_string())
    })?;

    let now = Utc::now();
    let expiry = now.checked_add_signed(delta).ok_or_else(|| {
        TokenIssuerError::SigningFailure("token expiry out of range".to_string())
    })?;

    let iat = usize::try_from(now.timestamp())
        .map_err(|_| TokenIssuerError::SigningFailure("clock before epoch".to_string()))?;
    let exp = usize::try_from(expiry.timestamp())
        .map_err(|_| TokenIssuerError::SigningFailure("expiry before epoch".to_string()))?;

    Ok((iat, exp))
}

fn sign<C: serde::Serialize>(claims: &C, secret: &Secret<String>) -> Result<String, TokenIssuerError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|e| TokenIssuerError::SigningFailure(e.to_string()))
}

#[async_trait]
impl TokenIssuer for JwtTokenIssuer {
    async fn sign_access_token(&self, user: &User) -> Result<String, TokenIssuerError> {
        let (iat, exp) = claim_window(self.config.access_ttl_seconds)?;
        let claims = AccessTokenClaims {
            sub: user.id.to_string(),
            email: user.email.as_ref().expose_secret().clone(),
            iat,
            exp,
        };

        sign(&claims, &self.config.access_secret)
    }

    async fn sign_refresh_token(
        &self,
        user_id: Uuid,
    ) -> Result<IssuedRefreshToken, TokenIssuerError> {
        let jti = Uuid::new_v4();
        let (iat, exp) = claim_window(self.config.refresh_ttl_seconds)?;
        let claims = RefreshTokenClaims {
            sub: user_id.to_string(),
            jti: jti.to_string(),
            iat,
            exp,
        };

        let token = sign(&claims, &self.config.refresh_secret)?;

        // The absolute expiry handed to callers is the exp claim that was
        // just signed, not a recomputation from the configured TTL.
        let exp_seconds = i64::try_from(claims.exp)
            .map_err(|_| TokenIssuerError::SigningFailure("expiry out of range".to_string()))?;
        let expires_at = DateTime::<Utc>::from_timestamp(exp_seconds, 0).ok_or_else(|| {
            TokenIssuerError::SigningFailure("expiry out of range".to_string())
        })?;

        Ok(IssuedRefreshToken {
            token,
            jti,
            expires_at,
        })
    }

    async fn verify_refresh_token(
        &self,
        token: &str,
    ) -> Result<RefreshTokenClaims, TokenIssuerError> {
        decode::<RefreshTokenClaims>(
            token,
            &DecodingKey::from_secret(self.config.refresh_secret.expose_secret().as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| TokenIssuerError::InvalidToken)
    }
}
