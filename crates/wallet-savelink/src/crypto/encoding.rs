//! Base64url segments of a compact JWS.
//!
//! A compact token is `header.payload.signature`, each segment base64url
//! encoded without padding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::{Result, WalletError};

/// Encode bytes as an unpadded base64url segment.
pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode an unpadded base64url segment.
pub fn decode_segment(segment: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| WalletError::InvalidToken(format!("invalid base64url segment: {e}")))
}

/// True if `s` is non-empty and uses only the base64url alphabet.
pub fn is_base64url(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Split a compact token into its three segments.
///
/// Each segment must be non-empty base64url text.
pub fn split_compact(token: &str) -> Result<[&str; 3]> {
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(WalletError::InvalidToken(
            "expected three dot-separated segments".into(),
        ));
    };

    for (name, segment) in [("header", header), ("payload", payload), ("signature", signature)] {
        if !is_base64url(segment) {
            return Err(WalletError::InvalidToken(format!(
                "{name} segment is empty or not base64url"
            )));
        }
    }

    Ok([header, payload, signature])
}
