pub mod telemetry;

pub use telemetry::init_tracing;

use secrecy::Secret;

use authcore_application::{
    LoginError, LoginUseCase, RefreshError, RefreshUseCase, RegisterError, RegisterUseCase,
    TokenPair,
};
use authcore_domain::{
    AccountSummary, CredentialHasher, CredentialHasherError, Email, Password, RefreshTokenStore,
    TokenIssuer, UserStore,
};

/// Placeholder secret hashed once at startup. Logins against unknown emails
/// verify the supplied password against this hash so their latency matches
/// the known-email path.
const DUMMY_PASSWORD: &str = "authcore_dummy_password_for_timing_equalization_v1";

/// Main entry point for the authentication engine.
///
/// Owns one instance of each collaborator plus the timing-equalization dummy
/// hash, which is computed in the constructor, before any request is served.
/// The transport layer maps its endpoints onto `register`, `login` and
/// `refresh`.
pub struct AuthCore<H, U, T, R>
where
    H: CredentialHasher,
    U: UserStore,
    T: TokenIssuer,
    R: RefreshTokenStore,
{
    hasher: H,
    user_store: U,
    token_issuer: T,
    refresh_token_store: R,
    dummy_hash: Secret<String>,
}

impl<H, U, T, R> AuthCore<H, U, T, R>
where
    H: CredentialHasher,
    U: UserStore,
    T: TokenIssuer,
    R: RefreshTokenStore,
{
    /// Assembles the engine and precomputes the dummy hash. Runs one full
    /// argon2 hash, so call it once at startup and share the instance.
    pub async fn new(
        hasher: H,
        user_store: U,
        token_issuer: T,
        refresh_token_store: R,
    ) -> Result<Self, CredentialHasherError> {
        let dummy_hash = hasher.hash(Secret::from(DUMMY_PASSWORD.to_owned())).await?;

        Ok(Self {
            hasher,
            user_store,
            token_issuer,
            refresh_token_store,
            dummy_hash,
        })
    }

    pub async fn register(
        &self,
        email: Email,
        password: Password,
    ) -> Result<AccountSummary, RegisterError> {
        RegisterUseCase::new(&self.hasher, &self.user_store)
            .execute(email, password)
            .await
    }

    pub async fn login(&self, email: Email, password: Password) -> Result<TokenPair, LoginError> {
        LoginUseCase::new(
            &self.hasher,
            &self.user_store,
            &self.token_issuer,
            &self.refresh_token_store,
            &self.dummy_hash,
        )
        .execute(email, password)
        .await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, RefreshError> {
        RefreshUseCase::new(
            &self.hasher,
            &self.user_store,
            &self.token_issuer,
            &self.refresh_token_store,
        )
        .execute(refresh_token)
        .await
    }
}
