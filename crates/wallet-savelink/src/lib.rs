//! wallet-savelink: signed "Save to Google Wallet" links.
//!
//! Builds wallet object references, assembles save claims, signs them
//! RS256 with a service-account key and wraps the token in a save URL.
//! Tokens can be verified against the issuer's public key or decoded
//! for inspection.
//!
//! No network I/O happens here: wallet classes and objects are created
//! elsewhere, and this crate only needs their references.

pub mod claim;
pub mod crypto;
pub mod error;
pub mod issuer;
pub mod object;
pub mod savelink;
pub mod storage;
pub mod token;

// Re-export primary types
pub use claim::{ObjectEntry, SaveClaim, SaveClaimBuilder, SAVE_AUDIENCE, SAVE_TYPE};
pub use error::{Result, WalletError};
pub use issuer::IssuerIdentity;
pub use object::{sanitize_user_id, ObjectReference, WalletObjectType};
pub use savelink::{build_save_url, SaveUrl, SAVE_URL_PREFIX};
pub use storage::{issuer_identity_from_json, load_issuer_identity};
pub use token::{
    decode_unverified, sign_claim, verify_save_token, verify_save_token_from, DecodedToken,
    SaveToken,
};
