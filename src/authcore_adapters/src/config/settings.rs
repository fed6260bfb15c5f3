use config::{Config, ConfigError, Environment};
use secrecy::Secret;

use crate::hashing::argon2_hasher::Argon2Config;
use crate::tokens::jwt_issuer::JwtConfig;

/// Everything the engine consumes from the environment. Every key is
/// required; a missing or malformed value fails the load, which the
/// embedding process treats as startup-fatal.
///
/// Recognized keys: `JWT_ACCESS_SECRET`, `JWT_ACCESS_TTL_SECONDS`,
/// `JWT_REFRESH_SECRET`, `JWT_REFRESH_TTL_SECONDS`, `ARGON2_MEMORY_COST`,
/// `ARGON2_TIME_COST`, `ARGON2_PARALLELISM`.
#[derive(Clone)]
pub struct Settings {
    pub jwt: JwtConfig,
    pub argon2: Argon2Config,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let cfg = Config::builder()
            .add_source(Environment::default())
            .build()?;

        Self::from_config(&cfg)
    }

    fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig {
                access_secret: Secret::from(cfg.get_string("jwt_access_secret")?),
                access_ttl_seconds: cfg.get_int("jwt_access_ttl_seconds")?,
                refresh_secret: Secret::from(cfg.get_string("jwt_refresh_secret")?),
                refresh_ttl_seconds: cfg.get_int("jwt_refresh_ttl_seconds")?,
            },
            argon2: Argon2Config {
                memory_cost: get_u32(cfg, "argon2_memory_cost")?,
                time_cost: get_u32(cfg, "argon2_time_cost")?,
                parallelism: get_u32(cfg, "argon2_parallelism")?,
            },
        })
    }
}

fn get_u32(cfg: &Config, key: &str) -> Result<u32, ConfigError> {
    let value = cfg.get_int(key)?;
    u32::try_from(value)
        .map_err(|_| ConfigError::Message(format!("{key} must be a positive 32-bit integer")))
}
