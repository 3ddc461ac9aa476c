//! # Wallet Addresses
//!
//! Base58 wallet addresses derived from the Ed25519 public key.
//!
//! ## Address Format
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ADDRESS FORMAT                                   │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  raw bytes:  [ version (1 byte) ‖ Ed25519 public key (32 bytes) ]       │
//! │                                                                         │
//! │  encoding:   base58(raw bytes)                                          │
//! │                                                                         │
//! │  The version byte namespaces Crucible addresses so a pasted address    │
//! │  from another network fails parsing instead of silently "working".     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session core treats stored addresses as opaque strings; parsing is
//! only used when validating input pasted into the UI.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Version byte prepended to the public key before encoding
pub const ADDRESS_VERSION: u8 = 42;

/// Raw decoded length: version byte plus 32-byte public key
const DECODED_LEN: usize = 33;

/// A Crucible wallet address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// The base58-encoded address string
    value: String,
}

impl Address {
    /// Derive an address from an Ed25519 public key
    pub fn from_public_key(public_key: &[u8; 32]) -> Self {
        let mut raw = Vec::with_capacity(DECODED_LEN);
        raw.push(ADDRESS_VERSION);
        raw.extend_from_slice(public_key);

        Self {
            value: bs58::encode(&raw).into_string(),
        }
    }

    /// Parse and validate an address string
    pub fn parse(address: &str) -> Result<Self> {
        let decoded = bs58::decode(address)
            .into_vec()
            .map_err(|e| Error::InvalidAddress(format!("Invalid base58 encoding: {}", e)))?;

        if decoded.len() != DECODED_LEN {
            return Err(Error::InvalidAddress(format!(
                "Expected {} bytes, got {}",
                DECODED_LEN,
                decoded.len()
            )));
        }

        if decoded[0] != ADDRESS_VERSION {
            return Err(Error::InvalidAddress(format!(
                "Unknown version byte: {}",
                decoded[0]
            )));
        }

        Ok(Self {
            value: address.to_string(),
        })
    }

    /// Extract the public key from this address
    pub fn public_key(&self) -> Result<[u8; 32]> {
        let decoded = bs58::decode(&self.value)
            .into_vec()
            .map_err(|e| Error::InvalidAddress(format!("Invalid base58 encoding: {}", e)))?;

        decoded[1..]
            .try_into()
            .map_err(|_| Error::InvalidAddress("Invalid public key length".into()))
    }

    /// Get the address string
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl std::str::FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// ============================================================================
// TESTS
// ============================================================================
