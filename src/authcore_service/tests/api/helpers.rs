use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use secrecy::Secret;

use authcore_adapters::{
    Argon2Config, Argon2CredentialHasher, HashMapRefreshTokenStore, HashMapUserStore, JwtConfig,
    JwtTokenIssuer,
};
use authcore_domain::{Email, Password};
use authcore_service::AuthCore;

pub type TestEngine =
    AuthCore<Argon2CredentialHasher, HashMapUserStore, JwtTokenIssuer, HashMapRefreshTokenStore>;

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        access_secret: Secret::from("test-access-secret".to_owned()),
        access_ttl_seconds: 900,
        refresh_secret: Secret::from("test-refresh-secret".to_owned()),
        refresh_ttl_seconds: 604_800,
    }
}

// Minimal argon2 costs so the suite stays fast.
fn argon2_config() -> Argon2Config {
    Argon2Config {
        memory_cost: 8,
        time_cost: 1,
        parallelism: 1,
    }
}

pub async fn engine_with_jwt(jwt: JwtConfig) -> TestEngine {
    AuthCore::new(
        Argon2CredentialHasher::new(argon2_config()),
        HashMapUserStore::new(),
        JwtTokenIssuer::new(jwt),
        HashMapRefreshTokenStore::new(),
    )
    .await
    .expect("engine construction")
}

pub async fn test_engine() -> TestEngine {
    engine_with_jwt(jwt_config()).await
}

pub fn random_email() -> Email {
    let address: String = SafeEmail().fake();
    Email::try_from(Secret::from(address)).expect("faker yields valid emails")
}

pub fn email(address: &str) -> Email {
    Email::try_from(Secret::from(address.to_owned())).expect("valid email")
}

pub fn password(plaintext: &str) -> Password {
    Password::try_from(Secret::from(plaintext.to_owned())).expect("valid password")
}
