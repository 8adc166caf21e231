//! Cryptographic helpers for save tokens.
//!
//! This module provides:
//! - RSA key parsing from PEM (PKCS#1 or PKCS#8) for RS256 signing
//!   and verification
//! - Base64url segment encoding for compact JWS tokens

pub mod encoding;
pub mod keys;
