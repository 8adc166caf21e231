//! Error types for wallet-savelink.
//!
//! Every failure is fatal to the call that produced it; nothing here is
//! transient, so nothing is retried. Private key material is never
//! included in error messages.

/// Errors produced while loading credentials, building claims, and
/// signing or verifying save tokens.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Invalid claim: {0}")]
    InvalidClaim(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Token verification failed: {0}")]
    Verification(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, WalletError>;
