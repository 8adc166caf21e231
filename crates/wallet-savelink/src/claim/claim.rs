//! Save claim: issuer, audience, origins, type marker and payload.
//!
//! Serialized form:
//! ```json
//! {
//!     "iss": "issuer@example.com",
//!     "aud": "google",
//!     "origins": ["https://example.com"],
//!     "typ": "savetowallet",
//!     "payload": {
//!         "loyaltyObjects": [{ "id": "123.test_user-classA" }]
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WalletError};
use crate::object::{ObjectReference, WalletObjectType};

/// Fixed audience of every save claim.
pub const SAVE_AUDIENCE: &str = "google";

/// Fixed type marker of every save claim.
pub const SAVE_TYPE: &str = "savetowallet";

/// One object to save, as it appears in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectEntry {
    pub id: String,
}

/// The claim signed into a save token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveClaim {
    pub iss: String,
    pub aud: String,
    pub origins: Vec<String>,
    pub typ: String,
    pub payload: BTreeMap<String, Vec<ObjectEntry>>,
}

impl SaveClaim {
    /// Check every local precondition of a save claim.
    ///
    /// The audience and type marker must be the fixed constants, the
    /// issuer and every origin must be non-empty, the payload must name at
    /// least one object, every payload key must be ASCII alphanumeric and
    /// every object id must be a well-formed [`ObjectReference`].
    pub fn validate(&self) -> Result<()> {
        if self.iss.trim().is_empty() {
            return Err(WalletError::InvalidClaim("issuer identity is empty".into()));
        }
        if self.aud != SAVE_AUDIENCE {
            return Err(WalletError::InvalidClaim(format!(
                "audience must be '{SAVE_AUDIENCE}', got '{}'",
                self.aud
            )));
        }
        if self.typ != SAVE_TYPE {
            return Err(WalletError::InvalidClaim(format!(
                "type must be '{SAVE_TYPE}', got '{}'",
                self.typ
            )));
        }
        if let Some(i) = self.origins.iter().position(|o| o.trim().is_empty()) {
            return Err(WalletError::InvalidClaim(format!("origin #{i} is empty")));
        }
        if self.object_count() == 0 {
            return Err(WalletError::InvalidClaim(
                "payload must reference at least one object".into(),
            ));
        }
        for (key, entries) in &self.payload {
            validate_payload_key(key)?;
            for entry in entries {
                ObjectReference::parse(&entry.id)?;
            }
        }
        Ok(())
    }

    /// Object ids listed under a payload key, in order.
    pub fn object_ids(&self, payload_key: &str) -> Vec<&str> {
        self.payload
            .get(payload_key)
            .map(|entries| entries.iter().map(|e| e.id.as_str()).collect())
            .unwrap_or_default()
    }

    /// Total number of objects across all payload keys.
    pub fn object_count(&self) -> usize {
        self.payload.values().map(Vec::len).sum()
    }
}

/// Payload keys are plural type names such as `loyaltyObjects`.
fn validate_payload_key(key: &str) -> Result<()> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(WalletError::InvalidClaim(format!(
            "object type key '{key}' must be non-empty ASCII alphanumeric"
        )));
    }
    Ok(())
}

/// Builder for save claims.
///
/// Objects may be added under several payload keys; a single save link
/// can then carry, say, a loyalty card together with an offer.
pub struct SaveClaimBuilder {
    issuer: String,
    origins: Vec<String>,
    payload: BTreeMap<String, Vec<ObjectEntry>>,
}

impl SaveClaimBuilder {
    /// Start a claim for the given issuer identity string.
    pub fn new(issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            origins: Vec::new(),
            payload: BTreeMap::new(),
        }
    }

    /// Append an allowed origin.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origins.push(origin.into());
        self
    }

    /// Append several allowed origins, keeping their order.
    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins.extend(origins.into_iter().map(Into::into));
        self
    }

    /// Add an object id under an arbitrary payload key.
    ///
    /// Validation is deferred to [`SaveClaimBuilder::build`].
    pub fn object(mut self, payload_key: impl Into<String>, id: impl Into<String>) -> Self {
        self.payload
            .entry(payload_key.into())
            .or_default()
            .push(ObjectEntry { id: id.into() });
        self
    }

    /// Add a validated reference under the payload key of a pass type.
    pub fn typed_object(self, object_type: WalletObjectType, reference: &ObjectReference) -> Self {
        self.object(object_type.payload_key(), reference.as_str())
    }

    /// Finalize and validate the claim.
    pub fn build(self) -> Result<SaveClaim> {
        let claim = SaveClaim {
            iss: self.issuer,
            aud: SAVE_AUDIENCE.to_string(),
            origins: self.origins,
            typ: SAVE_TYPE.to_string(),
            payload: self.payload,
        };
        claim.validate()?;
        Ok(claim)
    }
}
