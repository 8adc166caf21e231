//! Save claims: the assertion a save token signs.

#[allow(clippy::module_inception)]
pub mod claim;

pub use claim::{ObjectEntry, SaveClaim, SaveClaimBuilder, SAVE_AUDIENCE, SAVE_TYPE};
