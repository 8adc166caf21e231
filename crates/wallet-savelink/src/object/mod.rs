//! Wallet objects: references and pass types.
//!
//! A wallet object is one user's instance of a wallet class. Save tokens
//! carry object references grouped under the plural key of their pass
//! type (`loyaltyObjects`, `offerObjects`, ...).

pub mod kind;
pub mod reference;

pub use kind::{WalletObjectType, WALLET_API_BASE};
pub use reference::{sanitize_user_id, ObjectReference};
