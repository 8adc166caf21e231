//! RSA key parsing for RS256.
//!
//! Service-account keys arrive as PEM text. PKCS#8 (`BEGIN PRIVATE KEY`)
//! and PKCS#1 (`BEGIN RSA PRIVATE KEY`) are both accepted, as are SPKI
//! and PKCS#1 public keys on the verifying side.

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::error::{Result, WalletError};

/// Parse an RSA private key PEM into an RS256 encoding key.
///
/// Fails with [`WalletError::Signing`] when the key is absent or is not
/// an RSA private key. The PEM text itself never enters the error.
pub fn encoding_key_from_pem(pem: &str) -> Result<EncodingKey> {
    if pem.trim().is_empty() {
        return Err(WalletError::Signing("private key is absent".into()));
    }
    EncodingKey::from_rsa_pem(pem.as_bytes())
        .map_err(|e| WalletError::Signing(format!("malformed RSA private key: {e}")))
}

/// Parse an RSA public key PEM into an RS256 decoding key.
pub fn decoding_key_from_pem(pem: &str) -> Result<DecodingKey> {
    if pem.trim().is_empty() {
        return Err(WalletError::Verification("public key is absent".into()));
    }
    DecodingKey::from_rsa_pem(pem.as_bytes())
        .map_err(|e| WalletError::Verification(format!("malformed RSA public key: {e}")))
}
