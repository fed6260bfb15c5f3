pub mod config;
pub mod hashing;
pub mod persistence;
pub mod tokens;

pub use config::settings::Settings;
pub use hashing::argon2_hasher::{Argon2Config, Argon2CredentialHasher};
pub use persistence::{
    hashmap_refresh_token_store::HashMapRefreshTokenStore, hashmap_user_store::HashMapUserStore,
};
pub use tokens::jwt_issuer::{JwtConfig, JwtTokenIssuer};
