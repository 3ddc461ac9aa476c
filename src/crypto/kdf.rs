//! # Key Derivation Functions
//!
//! Derives the wallet's signing key material from the BIP39 master seed.
//!
//! ```text
//! Master Seed (32 bytes)
//!       │
//!       └──► HKDF(info="crucible-wallet-key-v1") → Ed25519 signing seed
//! ```
//!
//! The `info` string provides cryptographic domain separation: a key derived
//! for the wallet can never collide with a key derived for another purpose
//! from the same seed, and the "-v1" suffix allows future algorithm upgrades.

use hkdf::Hkdf;
use sha2::Sha256;

use crate::error::{Error, Result};

/// Domain separation strings for HKDF
pub mod domain {
    /// Domain for wallet signing key derivation
    pub const WALLET_KEY: &[u8] = b"crucible-wallet-key-v1";
}

/// Derive the Ed25519 signing seed from a master seed
///
/// ## Security Note
///
/// The input seed should have at least 128 bits of entropy (e.g., from BIP39).
pub fn derive_signing_seed(master_seed: &[u8; 32]) -> Result<[u8; 32]> {
    let hkdf = Hkdf::<Sha256>::new(None, master_seed);

    let mut signing_seed = [0u8; 32];
    hkdf.expand(domain::WALLET_KEY, &mut signing_seed)
        .map_err(|_| Error::KeyDerivationFailed("Failed to derive signing seed".into()))?;

    Ok(signing_seed)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_deterministic() {
        let seed = [42u8; 32];

        let key1 = derive_signing_seed(&seed).unwrap();
        let key2 = derive_signing_seed(&seed).unwrap();

        assert_eq!(key1, key2);
    }

    #[test]
    fn test_derive_different_seeds() {
        let key1 = derive_signing_seed(&[1u8; 32]).unwrap();
        let key2 = derive_signing_seed(&[2u8; 32]).unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_derived_key_differs_from_seed() {
        let seed = [42u8; 32];
        let key = derive_signing_seed(&seed).unwrap();

        assert_ne!(key, seed);
    }
}
