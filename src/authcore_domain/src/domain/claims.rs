use serde::{Deserialize, Serialize};

/// Claims carried inside a signed access token. Access tokens are stateless;
/// everything the resource side needs travels here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessTokenClaims {
    /// Account id.
    pub sub: String,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

/// Claims carried inside a signed refresh token. The `jti` is what binds the
/// stateless token to its revocable `RefreshTokenRecord`: the signature
/// proves authenticity, the record proves liveness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshTokenClaims {
    /// Account id.
    pub sub: String,
    pub jti: String,
    pub iat: usize,
    pub exp: usize,
}
