use authcore_domain::{
    AccountSummary, CredentialHasher, Email, NewUser, Password, UserStore, UserStoreError,
};

/// Error types for the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Account already exists")]
    DuplicateAccount,
    #[error("Unexpected registration failure: {0}")]
    UnexpectedError(String),
}

impl PartialEq for RegisterError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateAccount, Self::DuplicateAccount) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Register use case - hashes the password and delegates account creation
/// to the external user store.
pub struct RegisterUseCase<'a, H, U>
where
    H: CredentialHasher,
    U: UserStore,
{
    hasher: &'a H,
    user_store: &'a U,
}

impl<'a, H, U> RegisterUseCase<'a, H, U>
where
    H: CredentialHasher,
    U: UserStore,
{
    pub fn new(hasher: &'a H, user_store: &'a U) -> Self {
        Self { hasher, user_store }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// An `AccountSummary` on success, `DuplicateAccount` when the store
    /// reports a uniqueness violation on email.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<AccountSummary, RegisterError> {
        let password_hash = self
            .hasher
            .hash(password.into_secret())
            .await
            .map_err(|e| RegisterError::UnexpectedError(e.to_string()))?;

        let user = self
            .user_store
            .create_user(NewUser {
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserStoreError::EmailTaken => RegisterError::DuplicateAccount,
                other => RegisterError::UnexpectedError(other.to_string()),
            })?;

        Ok(AccountSummary::from(&user))
    }
}
