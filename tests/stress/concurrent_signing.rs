//! Concurrency test: one issuer identity shared across threads.
//!
//! Building save URLs is a pure function of the inputs and the immutable
//! key, so concurrent callers need no coordination.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

use wallet_savelink::{build_save_url, verify_save_token, IssuerIdentity, ObjectReference};

const PRIVATE_PEM: &str = include_str!("../fixtures/issuer_key.pem");
const PUBLIC_PEM: &str = include_str!("../fixtures/issuer_pub.pem");

#[test]
fn stress_8_concurrent_builders() {
    let issuer = Arc::new(IssuerIdentity::new("issuer@example.com", PRIVATE_PEM));
    let urls = Arc::new(Mutex::new(Vec::new()));

    let mut handles = Vec::new();
    for thread_id in 0..8 {
        let issuer = Arc::clone(&issuer);
        let urls = Arc::clone(&urls);
        let handle = thread::spawn(move || {
            for i in 0..25 {
                let reference =
                    ObjectReference::new("123", &format!("user-{thread_id}-{i}"), "classA")
                        .expect("reference should build");
                let url = build_save_url(
                    &issuer,
                    &["https://example.com"],
                    &[&reference],
                    "loyaltyObjects",
                )
                .expect("build should succeed");
                urls.lock().unwrap().push((reference, url));
            }
        });
        handles.push(handle);
    }

    for h in handles {
        h.join().unwrap();
    }

    let urls = urls.lock().unwrap();
    assert_eq!(urls.len(), 200);

    let mut seen = HashSet::new();
    for (reference, url) in urls.iter() {
        let claim = verify_save_token(url.token(), PUBLIC_PEM).expect("token should verify");
        assert_eq!(claim.object_ids("loyaltyObjects"), vec![reference.as_str()]);
        assert!(seen.insert(url.as_str().to_string()), "duplicate URL for {reference}");
    }
}

#[test]
fn stress_concurrent_identical_inputs_agree() {
    let issuer = Arc::new(IssuerIdentity::new("issuer@example.com", PRIVATE_PEM));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let issuer = Arc::clone(&issuer);
            thread::spawn(move || {
                build_save_url(
                    &issuer,
                    &["https://example.com"],
                    &["123.test_user-classA"],
                    "loyaltyObjects",
                )
                .expect("build should succeed")
            })
        })
        .collect();

    let urls: HashSet<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().into_string())
        .collect();
    assert_eq!(urls.len(), 1, "RS256 is deterministic");
}

#[test]
fn stress_200_sequential_builds_verify() {
    let issuer = IssuerIdentity::new("issuer@example.com", PRIVATE_PEM);
    for i in 0..200 {
        let url = build_save_url(
            &issuer,
            &["https://example.com"],
            &[format!("123.user{i}-classA")],
            "offerObjects",
        )
        .expect("build should succeed");
        let claim = verify_save_token(url.token(), PUBLIC_PEM).expect("token should verify");
        assert_eq!(claim.object_count(), 1, "build {i}");
    }
}
