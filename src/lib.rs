//! # Authcore - Authentication & Token Engine Library
//!
//! This is a facade crate that re-exports all public APIs from the authcore
//! components. Use this crate to get access to the whole authentication
//! engine in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! authcore = { path = "../authcore" }
//! ```
//!
//! ## Structure
//!
//! - **Domain types**: `Email`, `Password`, `User`, `RefreshTokenRecord`, etc.
//! - **Port traits**: `UserStore`, `RefreshTokenStore`, `CredentialHasher`, `TokenIssuer`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `RefreshUseCase`
//! - **Adapters**: `Argon2CredentialHasher`, `JwtTokenIssuer`, `HashMapUserStore`, etc.
//! - **Service**: `AuthCore` - The main entry point for the engine

// ============================================================================
// Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod domain {
    pub use authcore_domain::*;
}

// Re-export most commonly used domain types at the root level
pub use authcore_domain::{
    AccessTokenClaims, AccountSummary, Email, EmailError, NewRefreshTokenRecord, NewUser,
    Password, PasswordError, RefreshTokenClaims, RefreshTokenRecord, User,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use authcore_domain::{
        CredentialHasher, CredentialHasherError, IssuedRefreshToken, RefreshTokenStore,
        RefreshTokenStoreError, TokenIssuer, TokenIssuerError, UserStore, UserStoreError,
    };
}

// Re-export port traits at root level
pub use authcore_domain::{
    CredentialHasher, CredentialHasherError, IssuedRefreshToken, RefreshTokenStore,
    RefreshTokenStoreError, TokenIssuer, TokenIssuerError, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use authcore_application::*;
}

// Re-export use cases at root level
pub use authcore_application::{
    LoginError, LoginUseCase, RefreshError, RefreshUseCase, RegisterError, RegisterUseCase,
    TokenPair,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Password and token hashing
    pub mod hashing {
        pub use authcore_adapters::hashing::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use authcore_adapters::persistence::*;
    }

    /// JWT issuance and verification
    pub mod tokens {
        pub use authcore_adapters::tokens::*;
    }

    /// Configuration
    pub mod config {
        pub use authcore_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use authcore_adapters::{
    Argon2Config, Argon2CredentialHasher, HashMapRefreshTokenStore, HashMapUserStore, JwtConfig,
    JwtTokenIssuer, Settings,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main service facade
pub use authcore_service::{AuthCore, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
