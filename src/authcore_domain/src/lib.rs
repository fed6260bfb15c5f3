pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    claims::{AccessTokenClaims, RefreshTokenClaims},
    email::{Email, EmailError},
    password::{Password, PasswordError},
    refresh_token::{NewRefreshTokenRecord, RefreshTokenRecord},
    user::{AccountSummary, NewUser, User},
};

pub use ports::{
    repositories::{RefreshTokenStore, RefreshTokenStoreError, UserStore, UserStoreError},
    services::{
        CredentialHasher, CredentialHasherError, IssuedRefreshToken, TokenIssuer,
        TokenIssuerError,
    },
};
