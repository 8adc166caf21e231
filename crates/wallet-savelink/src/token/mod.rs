//! Save tokens: RS256 compact JWS over a save claim.
//!
//! - [`sign`]: sign a claim with the issuer's private key.
//! - [`verify`]: verify a token against the issuer's public key, or
//!   decode it without verification for inspection.

pub mod sign;
pub mod verify;

pub use sign::{sign_claim, SaveToken};
pub use verify::{decode_unverified, verify_save_token, verify_save_token_from, DecodedToken};
