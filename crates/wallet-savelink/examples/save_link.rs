//! Save Link: load a service-account key, build an object reference,
//! mint a Save to Google Wallet URL and verify it.
//!
//! Run with:
//!   cargo run --example save_link -p wallet-savelink

use wallet_savelink::{
    build_save_url, decode_unverified, issuer_identity_from_json, verify_save_token,
    ObjectReference, WalletObjectType,
};

const SERVICE_ACCOUNT: &str = include_str!("../../../tests/fixtures/service_account.json");
const PUBLIC_PEM: &str = include_str!("../../../tests/fixtures/issuer_pub.pem");

fn main() {
    // ── 1. Load the issuer identity ─────────────────────────────────────────
    //
    // The service-account email signs as the issuer; its private key id
    // goes into the token header as `kid`.
    let issuer = issuer_identity_from_json(SERVICE_ACCOUNT).expect("service account should load");
    println!("Issuer loaded");
    println!("  Identity: {}", issuer.identity());
    println!("  Key ID:   {}", issuer.key_id().unwrap_or("(none)"));
    println!();

    // ── 2. Build the object reference ───────────────────────────────────────
    //
    // Disallowed characters in the user id become `_`, so an email address
    // yields a stable, valid object id.
    let object_type = WalletObjectType::Loyalty;
    let reference = ObjectReference::new(
        "3388000000022",
        "jane.doe+wallet@example.com",
        &object_type.default_class_id(),
    )
    .expect("reference should build");
    println!("Object reference");
    println!("  ID:       {reference}");
    println!("  Resource: {}", object_type.object_url(&reference));
    println!();

    // ── 3. Mint the save URL ────────────────────────────────────────────────
    let url = build_save_url(
        &issuer,
        &["https://www.example.com"],
        &[&reference],
        &object_type.payload_key(),
    )
    .expect("save URL should build");
    println!("Save URL ({} chars)", url.as_str().len());
    println!("  {url}");
    println!();

    // ── 4. Inspect and verify ───────────────────────────────────────────────
    let decoded = decode_unverified(url.token()).expect("token should decode");
    println!("Header: {}", decoded.header);
    println!("Claim:  {}", decoded.claim);

    let claim = verify_save_token(url.token(), PUBLIC_PEM).expect("token should verify");
    assert_eq!(claim.object_ids(&object_type.payload_key()), vec![reference.as_str()]);
    println!("Verified: OK ({} object)", claim.object_count());
}
