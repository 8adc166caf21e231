//! Signing save claims.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, Header};

use crate::claim::SaveClaim;
use crate::crypto::encoding;
use crate::error::{Result, WalletError};
use crate::issuer::IssuerIdentity;

/// A signed save token in compact form: `header.payload.signature`.
///
/// RS256 signatures are deterministic, so the same claim signed with the
/// same key always produces the same token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SaveToken(String);

impl SaveToken {
    /// Wrap an existing compact token after checking its shape.
    pub fn parse(token: &str) -> Result<Self> {
        encoding::split_compact(token)?;
        Ok(Self(token.to_string()))
    }

    /// Return the compact token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the three base64url segments.
    pub fn segments(&self) -> [&str; 3] {
        let mut parts = self.0.splitn(3, '.');
        [
            parts.next().unwrap_or(""),
            parts.next().unwrap_or(""),
            parts.next().unwrap_or(""),
        ]
    }

    /// Consume the token, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SaveToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sign a save claim with the issuer's private key.
///
/// The claim is validated first; a claim whose `iss` differs from the
/// signing identity is rejected. The header is `{"typ":"JWT","alg":"RS256"}`
/// plus `kid` when the identity carries a key id.
///
/// # Errors
///
/// Returns `WalletError::InvalidClaim` for a malformed claim and
/// `WalletError::Signing` if the private key is absent or malformed.
pub fn sign_claim(claim: &SaveClaim, issuer: &IssuerIdentity) -> Result<SaveToken> {
    claim.validate()?;
    if claim.iss != issuer.identity() {
        return Err(WalletError::InvalidClaim(format!(
            "claim issuer '{}' does not match signing identity '{}'",
            claim.iss,
            issuer.identity()
        )));
    }

    let key = issuer.encoding_key()?;
    let mut header = Header::new(Algorithm::RS256);
    header.kid = issuer.key_id().map(str::to_string);

    log::debug!(
        "signing save claim for {}: {} object(s) under {} type key(s)",
        claim.iss,
        claim.object_count(),
        claim.payload.len()
    );

    let token = jsonwebtoken::encode(&header, claim, &key).map_err(|e| match e.kind() {
        ErrorKind::Json(_) => WalletError::Serialization(e.to_string()),
        _ => WalletError::Signing(e.to_string()),
    })?;
    Ok(SaveToken(token))
}
