pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

pub use use_cases::{
    issue_tokens::TokenPair,
    login::{LoginError, LoginUseCase},
    refresh::{RefreshError, RefreshUseCase},
    register::{RegisterError, RegisterUseCase},
};
