//! Wallet pass types.
//!
//! Each pass vertical has a class resource (`loyaltyClass`), an object
//! resource (`loyaltyObject`) and a plural payload key used inside save
//! claims (`loyaltyObjects`).

use crate::error::{Result, WalletError};
use crate::object::ObjectReference;

/// Base URL of the wallet objects REST API.
pub const WALLET_API_BASE: &str = "https://walletobjects.googleapis.com/walletobjects/v1";

/// The pass verticals a save link can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletObjectType {
    Generic,
    Loyalty,
    Offer,
    GiftCard,
    EventTicket,
    Flight,
    Transit,
}

impl WalletObjectType {
    /// Every supported pass type.
    pub const ALL: [WalletObjectType; 7] = [
        WalletObjectType::Generic,
        WalletObjectType::Loyalty,
        WalletObjectType::Offer,
        WalletObjectType::GiftCard,
        WalletObjectType::EventTicket,
        WalletObjectType::Flight,
        WalletObjectType::Transit,
    ];

    /// The camelCase name used in resource paths and payload keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletObjectType::Generic => "generic",
            WalletObjectType::Loyalty => "loyalty",
            WalletObjectType::Offer => "offer",
            WalletObjectType::GiftCard => "giftCard",
            WalletObjectType::EventTicket => "eventTicket",
            WalletObjectType::Flight => "flight",
            WalletObjectType::Transit => "transit",
        }
    }

    /// Plural key under which objects of this type appear in a save
    /// claim payload, e.g. `loyaltyObjects`.
    pub fn payload_key(&self) -> String {
        format!("{}Objects", self.as_str())
    }

    /// REST resource name for classes of this type, e.g. `loyaltyClass`.
    pub fn class_resource(&self) -> String {
        format!("{}Class", self.as_str())
    }

    /// REST resource name for objects of this type, e.g. `loyaltyObject`.
    pub fn object_resource(&self) -> String {
        format!("{}Object", self.as_str())
    }

    /// REST URL of a single object of this type.
    pub fn object_url(&self, reference: &ObjectReference) -> String {
        format!("{WALLET_API_BASE}/{}/{reference}", self.object_resource())
    }

    /// Placeholder class id used when none is configured.
    pub fn default_class_id(&self) -> String {
        format!("test-{}-class-id", self.as_str())
    }
}

impl std::fmt::Display for WalletObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WalletObjectType {
    type Err = WalletError;

    /// Accepts the camelCase name as well as lower, snake and kebab case
    /// spellings (`giftCard`, `giftcard`, `gift_card`, `gift-card`).
    fn from_str(s: &str) -> Result<Self> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        WalletObjectType::ALL
            .into_iter()
            .find(|t| t.as_str().to_ascii_lowercase() == folded)
            .ok_or_else(|| WalletError::InvalidClaim(format!("unknown wallet object type: {s}")))
    }
}
