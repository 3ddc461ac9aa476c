//! # Identity Module
//!
//! Wallet identity creation and import.
//!
//! ## Identity Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      IDENTITY DERIVATION FLOW                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Seed Phrase (12 words)                                                 │
//! │        │                                                                │
//! │        ▼  BIP39 PBKDF2-SHA512                                           │
//! │  Master Seed (32 bytes)                                                 │
//! │        │                                                                │
//! │        ▼  HKDF-SHA256 ("crucible-wallet-key-v1")                        │
//! │  Ed25519 Signing Key                                                    │
//! │        │                                                                │
//! │        ▼  base58(version ‖ public key)                                  │
//! │  Wallet Address                                                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The derivation is deterministic: importing the same phrase always yields
//! the same address. The balance is initialized to the literal `"0.00"` and
//! refreshed later by the (out-of-scope) chain fetcher — the session core
//! never writes a refreshed balance back into the identity.

mod address;
mod seed;

pub use address::{Address, ADDRESS_VERSION};
pub use seed::{SeedPhrase, WORD_COUNT};

use ed25519_dalek::SigningKey;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::crypto::derive_signing_seed;
use crate::error::Result;

/// Balance assigned to a freshly created or imported wallet
pub const INITIAL_BALANCE: &str = "0.00";

/// The address/balance pair representing the user's active wallet
///
/// Created once at wallet creation/import, destroyed on logout, and never
/// mutated in between — balance display refreshes happen outside the
/// session core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletIdentity {
    /// Base58 wallet address
    pub address: String,

    /// Display balance as a decimal string
    pub balance: String,
}

impl WalletIdentity {
    /// Build a fresh identity with the initial balance
    pub fn fresh(address: String) -> Self {
        Self {
            address,
            balance: INITIAL_BALANCE.to_string(),
        }
    }

    /// Parse a persisted identity, enforcing the shape check
    ///
    /// Returns `None` unless the value is a JSON object with both `address`
    /// and `balance` present as strings. Anything else — missing fields,
    /// wrong types, corrupt JSON — is treated as "no wallet stored".
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Encode the identity for persistence
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Derive a fresh [`WalletIdentity`] from a seed phrase
///
/// Used by both creation (with a generated phrase) and import (with a
/// user-supplied one).
pub fn derive_identity(phrase: &SeedPhrase) -> Result<WalletIdentity> {
    let master_seed = Zeroizing::new(phrase.to_seed()?);
    let signing_seed = Zeroizing::new(derive_signing_seed(&master_seed)?);

    let signing_key = SigningKey::from_bytes(&signing_seed);
    let address = Address::from_public_key(&signing_key.verifying_key().to_bytes());

    Ok(WalletIdentity::fresh(address.as_str().to_string()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_shape_check_accepts_valid_identity() {
        let identity =
            WalletIdentity::from_json(r#"{"address":"5FakeAddr","balance":"0.00"}"#).unwrap();

        assert_eq!(identity.address, "5FakeAddr");
        assert_eq!(identity.balance, "0.00");
    }

    #[test]
    fn test_shape_check_tolerates_extra_fields() {
        let raw = r#"{"address":"5FakeAddr","balance":"0.00","network":"mainnet"}"#;
        assert!(WalletIdentity::from_json(raw).is_some());
    }

    #[test]
    fn test_shape_check_rejects_missing_fields() {
        assert!(WalletIdentity::from_json(r#"{"address":"5FakeAddr"}"#).is_none());
        assert!(WalletIdentity::from_json(r#"{"balance":"0.00"}"#).is_none());
        assert!(WalletIdentity::from_json("{}").is_none());
    }

    #[test]
    fn test_shape_check_rejects_wrong_types() {
        assert!(WalletIdentity::from_json(r#"{"address":"5FakeAddr","balance":12}"#).is_none());
        assert!(WalletIdentity::from_json(r#"{"address":null,"balance":"0.00"}"#).is_none());
    }

    #[test]
    fn test_shape_check_rejects_non_objects() {
        assert!(WalletIdentity::from_json("null").is_none());
        assert!(WalletIdentity::from_json("[1,2]").is_none());
        assert!(WalletIdentity::from_json("not json at all").is_none());
    }

    #[test]
    fn test_json_roundtrip() {
        let identity = WalletIdentity::fresh("5FakeAddr".into());
        let json = identity.to_json().unwrap();

        assert_eq!(WalletIdentity::from_json(&json).unwrap(), identity);
    }

    #[test]
    fn test_derive_identity_is_deterministic() {
        let phrase = SeedPhrase::from_phrase(TEST_PHRASE).unwrap();

        let identity1 = derive_identity(&phrase).unwrap();
        let identity2 = derive_identity(&phrase).unwrap();

        assert_eq!(identity1.address, identity2.address);
    }

    #[test]
    fn test_derive_identity_starts_at_zero_balance() {
        let phrase = SeedPhrase::from_phrase(TEST_PHRASE).unwrap();
        let identity = derive_identity(&phrase).unwrap();

        assert_eq!(identity.balance, INITIAL_BALANCE);
        assert!(Address::parse(&identity.address).is_ok());
    }

    #[test]
    fn test_different_phrases_different_addresses() {
        let phrase1 = SeedPhrase::generate().unwrap();
        let phrase2 = SeedPhrase::generate().unwrap();

        let identity1 = derive_identity(&phrase1).unwrap();
        let identity2 = derive_identity(&phrase2).unwrap();

        assert_ne!(identity1.address, identity2.address);
    }
}
