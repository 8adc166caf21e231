//! Save token verification and inspection.
//!
//! Verification is what the wallet service does on its side: check the
//! RS256 signature against the issuer's public key, then check the fixed
//! audience and type marker. Save tokens carry no `exp`; expiry is the
//! verifier's policy, so none is required here.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, Validation};

use crate::claim::{SaveClaim, SAVE_AUDIENCE};
use crate::crypto::{encoding, keys};
use crate::error::{Result, WalletError};

/// Header and claim of a token, decoded without checking the signature.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    pub header: serde_json::Value,
    pub claim: serde_json::Value,
    /// Signature length in bytes.
    pub signature_len: usize,
}

/// Verify a save token against the issuer's RSA public key (PEM).
///
/// Returns the verified claim. Any alteration of the token makes this fail.
pub fn verify_save_token(token: &str, public_key_pem: &str) -> Result<SaveClaim> {
    verify_with(token, public_key_pem, None)
}

/// Verify a save token and additionally require a specific issuer.
pub fn verify_save_token_from(
    token: &str,
    public_key_pem: &str,
    expected_issuer: &str,
) -> Result<SaveClaim> {
    verify_with(token, public_key_pem, Some(expected_issuer))
}

fn verify_with(token: &str, public_key_pem: &str, issuer: Option<&str>) -> Result<SaveClaim> {
    encoding::split_compact(token)?;
    let key = keys::decoding_key_from_pem(public_key_pem)?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation.set_audience(&[SAVE_AUDIENCE]);
    if let Some(iss) = issuer {
        validation.set_issuer(&[iss]);
    }

    let data = jsonwebtoken::decode::<SaveClaim>(token, &key, &validation).map_err(|e| {
        match e.kind() {
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => WalletError::InvalidToken(e.to_string()),
            _ => WalletError::Verification(e.to_string()),
        }
    })?;

    let claim = data.claims;
    claim.validate()?;
    log::debug!(
        "verified save token from {} with {} object(s)",
        claim.iss,
        claim.object_count()
    );
    Ok(claim)
}

/// Decode a token's header and claim without verifying the signature.
///
/// For inspection only: nothing returned here is authenticated.
pub fn decode_unverified(token: &str) -> Result<DecodedToken> {
    let [header, payload, signature] = encoding::split_compact(token)?;

    let header: serde_json::Value = serde_json::from_slice(&encoding::decode_segment(header)?)
        .map_err(|e| WalletError::InvalidToken(format!("header is not JSON: {e}")))?;
    let claim: serde_json::Value = serde_json::from_slice(&encoding::decode_segment(payload)?)
        .map_err(|e| WalletError::InvalidToken(format!("payload is not JSON: {e}")))?;
    let signature_len = encoding::decode_segment(signature)?.len();

    Ok(DecodedToken {
        header,
        claim,
        signature_len,
    })
}
