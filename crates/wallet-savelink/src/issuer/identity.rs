//! Issuer identity: identity string plus RSA signing key.

use jsonwebtoken::EncodingKey;
use zeroize::Zeroize;

use crate::crypto::keys;
use crate::error::Result;

/// The identity a save token is issued under.
///
/// Holds the private key as PEM text. The key is parsed only for the
/// duration of a signing operation and the PEM buffer is zeroized on drop.
pub struct IssuerIdentity {
    /// Service-account identity (`client_email`), emitted as `iss`.
    identity: String,
    /// RSA private key, PEM encoded.
    private_key_pem: String,
    /// Service-account key id, emitted as the JWS `kid` header.
    key_id: Option<String>,
}

impl IssuerIdentity {
    /// Create an identity from an identity string and a PEM private key.
    pub fn new(identity: impl Into<String>, private_key_pem: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            private_key_pem: private_key_pem.into(),
            key_id: None,
        }
    }

    /// Attach the service-account key id.
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    /// Return the identity string.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Return the key id, if known.
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// Parse the private key for one signing operation.
    pub(crate) fn encoding_key(&self) -> Result<EncodingKey> {
        keys::encoding_key_from_pem(&self.private_key_pem)
    }
}

impl std::fmt::Debug for IssuerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuerIdentity")
            .field("identity", &self.identity)
            .field("key_id", &self.key_id)
            .field("private_key_pem", &"<redacted>")
            .finish()
    }
}

impl Drop for IssuerIdentity {
    fn drop(&mut self) {
        self.private_key_pem.zeroize();
    }
}
