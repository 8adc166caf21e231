//! Issuer identity: who signs save tokens.
//!
//! An issuer is the business entity allowed to create wallet passes. It
//! is identified by a service-account identity string and proves itself
//! with that account's RSA private key.

pub mod identity;

pub use identity::IssuerIdentity;
