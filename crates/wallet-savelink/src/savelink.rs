//! Save URLs: the link an end user opens to add a pass to their wallet.
//!
//! `https://pay.google.com/gp/v/save/<header>.<payload>.<signature>`
//!
//! The URL is self-contained: the wallet service validates it with the
//! issuer's public key alone, with no server-side state on either end.

use crate::claim::SaveClaimBuilder;
use crate::error::{Result, WalletError};
use crate::issuer::IssuerIdentity;
use crate::token::{sign_claim, SaveToken};

/// Fixed prefix of every save URL.
pub const SAVE_URL_PREFIX: &str = "https://pay.google.com/gp/v/save/";

/// A save URL carrying a signed save token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SaveUrl(String);

impl SaveUrl {
    /// Wrap a signed token in a save URL.
    pub fn from_token(token: &SaveToken) -> Self {
        Self(format!("{SAVE_URL_PREFIX}{token}"))
    }

    /// Parse a save URL, checking the prefix and the token shape.
    pub fn parse(url: &str) -> Result<Self> {
        let Some(token) = url.strip_prefix(SAVE_URL_PREFIX) else {
            return Err(WalletError::InvalidToken(format!(
                "save URL must start with {SAVE_URL_PREFIX}"
            )));
        };
        SaveToken::parse(token)?;
        Ok(Self(url.to_string()))
    }

    /// Return the full URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the compact token embedded in the URL.
    pub fn token(&self) -> &str {
        &self.0[SAVE_URL_PREFIX.len()..]
    }

    /// Consume the URL, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SaveUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build a signed save URL for one or more wallet objects of one type.
///
/// `allowed_origins` are the web origins allowed to present the save
/// button, kept in the given order. Every object reference must have the
/// shape `<issuer>.<user>-<class>`; all of them are placed under
/// `object_type_key` (e.g. `loyaltyObjects`).
///
/// # Errors
///
/// Returns `WalletError::InvalidClaim` if `object_references` is empty or
/// any reference is malformed, checked before any key is touched, and
/// `WalletError::Signing` if the issuer's private key is absent or
/// malformed.
pub fn build_save_url<O, R>(
    issuer: &IssuerIdentity,
    allowed_origins: &[O],
    object_references: &[R],
    object_type_key: &str,
) -> Result<SaveUrl>
where
    O: AsRef<str>,
    R: AsRef<str>,
{
    if object_references.is_empty() {
        return Err(WalletError::InvalidClaim(
            "at least one object reference is required".into(),
        ));
    }

    let claim = object_references
        .iter()
        .fold(
            SaveClaimBuilder::new(issuer.identity())
                .origins(allowed_origins.iter().map(|o| o.as_ref())),
            |builder, reference| builder.object(object_type_key, reference.as_ref()),
        )
        .build()?;

    let token = sign_claim(&claim, issuer)?;
    log::debug!(
        "built save URL for {} object(s) under {object_type_key}",
        object_references.len()
    );
    Ok(SaveUrl::from_token(&token))
}
