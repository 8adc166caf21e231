//! Edge case tests: object references, claim preconditions, credential
//! loading, foreign tokens.

use wallet_savelink::crypto::encoding;
use wallet_savelink::{
    build_save_url, decode_unverified, issuer_identity_from_json, sanitize_user_id,
    verify_save_token, IssuerIdentity, ObjectReference, SaveClaimBuilder, SaveUrl, WalletError,
};

const PRIVATE_PEM: &str = include_str!("../fixtures/issuer_key.pem");
const OTHER_PKCS8_PEM: &str = include_str!("../fixtures/other_key.pem");
const OTHER_PKCS1_PEM: &str = include_str!("../fixtures/other_key_pkcs1.pem");
const PUBLIC_PEM: &str = include_str!("../fixtures/issuer_pub.pem");

fn issuer() -> IssuerIdentity {
    IssuerIdentity::new("issuer@example.com", PRIVATE_PEM)
}

// === Object Reference Edge Cases ===

#[test]
fn edge_sanitize_keeps_allowed_punctuation() {
    assert_eq!(sanitize_user_id("first.last-1_x"), "first.last-1_x");
}

#[test]
fn edge_sanitize_every_disallowed_char_is_one_underscore() {
    assert_eq!(sanitize_user_id("a+b/c=d e"), "a_b_c_d_e");
    assert_eq!(sanitize_user_id("  "), "__");
    assert_eq!(sanitize_user_id("名前"), "__");
}

#[test]
fn edge_user_made_only_of_disallowed_chars_still_builds() {
    let r = ObjectReference::new("123", "@@", "classA").unwrap();
    assert_eq!(r.as_str(), "123.__-classA");
}

#[test]
fn edge_issuer_with_dot_is_rejected() {
    assert!(ObjectReference::new("1.2", "user", "class").is_err());
    assert!(ObjectReference::new("1 2", "user", "class").is_err());
}

#[test]
fn edge_parsed_issuer_ends_at_first_dot() {
    let r = ObjectReference::parse("1.2.user-class").unwrap();
    assert_eq!(r.issuer_id(), "1");
}

// === Claim Precondition Edge Cases ===

#[test]
fn edge_empty_reference_list_with_broken_key_is_still_invalid_claim() {
    let broken = IssuerIdentity::new("issuer@example.com", "garbage");
    let refs: [&str; 0] = [];
    let err = build_save_url(&broken, &["https://example.com"], &refs, "loyaltyObjects");
    assert!(matches!(err, Err(WalletError::InvalidClaim(_))));
}

#[test]
fn edge_one_bad_reference_poisons_the_claim() {
    let err = build_save_url(
        &issuer(),
        &["https://example.com"],
        &["123.good-classA", "bad reference"],
        "loyaltyObjects",
    );
    assert!(matches!(err, Err(WalletError::InvalidClaim(_))));
}

#[test]
fn edge_empty_object_type_key_rejected() {
    let err = build_save_url(&issuer(), &["https://example.com"], &["1.u-c"], "");
    assert!(matches!(err, Err(WalletError::InvalidClaim(_))));
}

#[test]
fn edge_no_origins_is_accepted() {
    let origins: [&str; 0] = [];
    let url = build_save_url(&issuer(), &origins, &["1.u-c"], "loyaltyObjects").unwrap();
    let claim = verify_save_token(url.token(), PUBLIC_PEM).unwrap();
    assert!(claim.origins.is_empty());
}

#[test]
fn edge_duplicate_references_are_kept() {
    let url = build_save_url(
        &issuer(),
        &["https://example.com"],
        &["1.u-c", "1.u-c"],
        "loyaltyObjects",
    )
    .unwrap();
    let claim = verify_save_token(url.token(), PUBLIC_PEM).unwrap();
    assert_eq!(claim.object_ids("loyaltyObjects"), vec!["1.u-c", "1.u-c"]);
}

// === Signing Edge Cases ===

#[test]
fn edge_pkcs1_and_pkcs8_keys_sign_identically() {
    let build = |pem: &str| {
        let other = IssuerIdentity::new("other@example.com", pem);
        build_save_url(&other, &["https://example.com"], &["1.u-c"], "loyaltyObjects")
            .expect("both key encodings should sign")
    };
    assert_eq!(build(OTHER_PKCS8_PEM), build(OTHER_PKCS1_PEM));
}

#[test]
fn edge_public_key_as_private_key_is_signing_error() {
    let wrong = IssuerIdentity::new("issuer@example.com", PUBLIC_PEM);
    let err = build_save_url(&wrong, &["https://example.com"], &["1.u-c"], "loyaltyObjects");
    assert!(matches!(err, Err(WalletError::Signing(_))));
}

// === Credential Edge Cases ===

#[test]
fn edge_credentials_with_unknown_fields_load() {
    let json = serde_json::json!({
        "type": "service_account",
        "client_email": "issuer@example.com",
        "private_key": PRIVATE_PEM,
        "universe_domain": "googleapis.com"
    })
    .to_string();
    let issuer = issuer_identity_from_json(&json).unwrap();
    assert!(build_save_url(&issuer, &["https://example.com"], &["1.u-c"], "loyaltyObjects").is_ok());
}

#[test]
fn edge_credentials_error_never_echoes_private_key() {
    let json = serde_json::json!({
        "type": "authorized_user",
        "client_email": "issuer@example.com",
        "private_key": PRIVATE_PEM
    })
    .to_string();
    let msg = issuer_identity_from_json(&json).unwrap_err().to_string();
    assert!(!msg.contains("PRIVATE KEY"));
}

// === Foreign Token Edge Cases ===

#[test]
fn edge_unsigned_token_rejected() {
    let claim = SaveClaimBuilder::new("issuer@example.com")
        .object("loyaltyObjects", "1.u-c")
        .build()
        .unwrap();
    let header = encoding::encode_segment(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = encoding::encode_segment(serde_json::to_string(&claim).unwrap().as_bytes());
    let forged = format!("{header}.{payload}.AAAA");

    assert!(decode_unverified(&forged).is_ok());
    assert!(verify_save_token(&forged, PUBLIC_PEM).is_err());
}

#[test]
fn edge_signed_token_with_extra_claims_fails_verification() {
    // A correctly signed JWT that carries an `iat` is not a save claim.
    let claims = serde_json::json!({
        "iss": "issuer@example.com",
        "aud": "google",
        "origins": [],
        "typ": "savetowallet",
        "payload": { "loyaltyObjects": [{ "id": "1.u-c" }] },
        "iat": 1
    });
    let key = jsonwebtoken::EncodingKey::from_rsa_pem(PRIVATE_PEM.as_bytes()).unwrap();
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::RS256),
        &claims,
        &key,
    )
    .unwrap();

    assert!(matches!(
        verify_save_token(&token, PUBLIC_PEM),
        Err(WalletError::InvalidToken(_))
    ));
}

#[test]
fn edge_signed_token_with_foreign_type_fails_verification() {
    let claims = serde_json::json!({
        "iss": "issuer@example.com",
        "aud": "google",
        "origins": [],
        "typ": "savetoandroidpay",
        "payload": { "loyaltyObjects": [{ "id": "1.u-c" }] }
    });
    let key = jsonwebtoken::EncodingKey::from_rsa_pem(PRIVATE_PEM.as_bytes()).unwrap();
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::RS256),
        &claims,
        &key,
    )
    .unwrap();

    assert!(matches!(
        verify_save_token(&token, PUBLIC_PEM),
        Err(WalletError::InvalidClaim(_))
    ));
}

#[test]
fn edge_save_url_parse_rejects_other_hosts() {
    assert!(SaveUrl::parse("http://pay.google.com/gp/v/save/a.b.c").is_err());
    assert!(SaveUrl::parse("https://pay.google.com/gp/v/save/a.b").is_err());
    assert!(SaveUrl::parse("https://pay.google.com/gp/v/save/a.b.c").is_ok());
}
