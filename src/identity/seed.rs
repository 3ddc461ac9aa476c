//! # Seed Phrase (BIP39)
//!
//! BIP39 mnemonic phrases for wallet backup and import.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      BIP39 SEED PHRASE                                  │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  128 bits of OS CSPRNG entropy                                          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  entropy ‖ checksum (first 4 bits of SHA256)  = 132 bits                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  12 × 11-bit segments → BIP39 English wordlist                          │
//! │                                                                         │
//! │  "ribbon glue open penalty ..."  (12 words)                             │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  PBKDF2-HMAC-SHA512(words, "mnemonic", 2048 iterations)                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  512-bit seed — the first 32 bytes are the wallet master seed           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Security Considerations
//!
//! | Aspect | Measure |
//! |--------|---------|
//! | Entropy | 128 bits from OS CSPRNG |
//! | Checksum | 4 bits catches most typos on import |
//! | Storage | Phrase is shown once and NEVER persisted |
//! | Display | Never logged — `Debug` is redacted |

use bip39::Mnemonic;
use rand::RngCore;
use zeroize::ZeroizeOnDrop;

use crate::error::{Error, Result};

/// Number of words in a seed phrase
pub const WORD_COUNT: usize = 12;

/// Entropy size in bytes for 12 words (128 bits)
const ENTROPY_BYTES: usize = 16;

/// A BIP39 seed phrase for wallet backup
///
/// ## Security Warning
///
/// - This phrase can fully recover the wallet
/// - Should be shown to the user exactly once at creation
/// - Is never persisted; losing it after logout means losing the wallet
#[derive(ZeroizeOnDrop)]
pub struct SeedPhrase {
    /// The underlying BIP39 mnemonic
    #[zeroize(skip)] // bip39::Mnemonic doesn't implement Zeroize
    mnemonic: Mnemonic,
}

impl SeedPhrase {
    /// Generate a new random seed phrase
    pub fn generate() -> Result<Self> {
        let mut entropy = [0u8; ENTROPY_BYTES];
        rand::rngs::OsRng.fill_bytes(&mut entropy);

        let mnemonic = Mnemonic::from_entropy(&entropy)
            .map_err(|e| Error::KeyDerivationFailed(format!("Failed to generate mnemonic: {}", e)))?;

        Ok(Self { mnemonic })
    }

    /// Parse a seed phrase from user input
    ///
    /// ## Validation
    ///
    /// - Must be exactly 12 words
    /// - All words must be in the BIP39 English wordlist
    /// - Checksum must be valid
    pub fn from_phrase(phrase: &str) -> Result<Self> {
        let mnemonic = Mnemonic::parse_normalized(phrase.trim())
            .map_err(|e| Error::InvalidSeedPhrase(format!("{}", e)))?;

        if mnemonic.word_count() != WORD_COUNT {
            return Err(Error::InvalidSeedPhrase(format!(
                "Expected {} words, got {}",
                WORD_COUNT,
                mnemonic.word_count()
            )));
        }

        Ok(Self { mnemonic })
    }

    /// Get the words as a vector
    pub fn words(&self) -> Vec<&'static str> {
        self.mnemonic.words().collect()
    }

    /// Get the phrase as a single string (words separated by spaces)
    ///
    /// Only for display to the user. Never log or store.
    pub fn phrase(&self) -> String {
        self.mnemonic.to_string()
    }

    /// Derive the wallet master seed from this phrase
    ///
    /// Uses an empty passphrase (standard BIP39 behavior).
    pub fn to_seed(&self) -> Result<[u8; 32]> {
        // BIP39 seed derivation produces 64 bytes; the first 32 are ours
        let seed_bytes = self.mnemonic.to_seed("");

        let mut master_seed = [0u8; 32];
        master_seed.copy_from_slice(&seed_bytes[..32]);

        Ok(master_seed)
    }

    /// Validate a phrase without constructing a SeedPhrase
    ///
    /// Useful for UI validation before submission.
    pub fn validate(phrase: &str) -> Result<()> {
        Self::from_phrase(phrase)?;
        Ok(())
    }
}

// Prevent accidental logging
impl std::fmt::Debug for SeedPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SeedPhrase([REDACTED])")
    }
}

// ============================================================================
// TESTS
// ============================================================================
