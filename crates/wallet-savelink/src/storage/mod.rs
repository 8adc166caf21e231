//! Credential store: where issuer identities come from.
//!
//! The only supported source is a Google Cloud service-account key file
//! (JSON), the same file `GOOGLE_APPLICATION_CREDENTIALS` points at.
//!
//! # Modules
//!
//! - [`service_account`]: parse a key file into an [`IssuerIdentity`].
//!
//! [`IssuerIdentity`]: crate::issuer::IssuerIdentity

pub mod service_account;

pub use service_account::{issuer_identity_from_json, load_issuer_identity, ServiceAccountKey};
