//! Wallet object references.
//!
//! Format: `<issuerId>.<sanitizedUserId>-<classId>`. The same
//! (issuer, user, class) triple always yields the same reference, so
//! creating or saving an object with it is idempotent.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WalletError};

/// True for characters allowed in an object reference: `[A-Za-z0-9_.-]`.
fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// Replace every character outside `[A-Za-z0-9_.-]` with `_`.
///
/// Multi-byte characters count as a single character.
pub fn sanitize_user_id(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| if is_id_char(c) { c } else { '_' })
        .collect()
}

/// A validated wallet object reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectReference(String);

impl ObjectReference {
    /// Build the reference for a user's object of the given class.
    ///
    /// The user id is sanitized; issuer and class ids must already be
    /// valid identifier text.
    pub fn new(issuer_id: &str, user_id: &str, class_id: &str) -> Result<Self> {
        if issuer_id.contains('.') {
            return Err(WalletError::InvalidClaim(format!(
                "issuer id '{issuer_id}' must not contain '.'"
            )));
        }
        if user_id.is_empty() {
            return Err(WalletError::InvalidClaim("user id is empty".into()));
        }
        if class_id.is_empty() {
            return Err(WalletError::InvalidClaim("class id is empty".into()));
        }
        Self::parse(&format!(
            "{issuer_id}.{}-{class_id}",
            sanitize_user_id(user_id)
        ))
    }

    /// Validate an existing reference string.
    ///
    /// The reference must have the shape `<issuer>.<token>-<class>`: a
    /// non-empty issuer part without dots, then a remainder containing a
    /// `-` with text on both sides. Every character must be in
    /// `[A-Za-z0-9_.-]`.
    pub fn parse(reference: &str) -> Result<Self> {
        if reference.is_empty() {
            return Err(WalletError::InvalidClaim("object reference is empty".into()));
        }

        if let Some(bad) = reference.chars().find(|c| !is_id_char(*c)) {
            return Err(WalletError::InvalidClaim(format!(
                "object reference '{reference}' contains disallowed character {bad:?}"
            )));
        }

        let Some((issuer, rest)) = reference.split_once('.') else {
            return Err(WalletError::InvalidClaim(format!(
                "object reference '{reference}' has no issuer prefix"
            )));
        };
        if issuer.is_empty() {
            return Err(WalletError::InvalidClaim(format!(
                "object reference '{reference}' has an empty issuer id"
            )));
        }

        let last = rest.len().saturating_sub(1);
        let has_class_separator = rest
            .char_indices()
            .any(|(i, c)| c == '-' && i > 0 && i < last);
        if !has_class_separator {
            return Err(WalletError::InvalidClaim(format!(
                "object reference '{reference}' is not of the form <issuer>.<user>-<class>"
            )));
        }

        Ok(Self(reference.to_string()))
    }

    /// Return the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the issuer id prefix.
    pub fn issuer_id(&self) -> &str {
        self.0.split_once('.').map(|(issuer, _)| issuer).unwrap_or("")
    }
}

impl std::fmt::Display for ObjectReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ObjectReference {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ObjectReference {
    type Error = WalletError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<ObjectReference> for String {
    fn from(reference: ObjectReference) -> Self {
        reference.0
    }
}

impl AsRef<str> for ObjectReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
