//! # Password Hashing
//!
//! One-way password hashing and verification for the unlock gate, plus the
//! strength checklist shown during wallet creation.
//!
//! ## Design
//!
//! The digest persisted under the password key is a self-describing PHC
//! string (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`), so parameters can
//! be raised later without invalidating existing wallets. Verification is
//! constant-time.
//!
//! The verifier sits behind a trait so the session components can be unit
//! tested with a fake that never pays the Argon2 cost.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier as PhcVerifier,
        SaltString,
    },
    Argon2,
};

use crate::config::WalletConfig;
use crate::error::{Error, Result};

/// One-way password hashing and constant-time verification
///
/// Implementations must never retain or log the plaintext password.
pub trait PasswordVerifier {
    /// Hash a plaintext password into a persistable digest string
    fn hash(&self, password: &str) -> Result<String>;

    /// Verify a plaintext password against a stored digest
    ///
    /// Returns `Ok(false)` for a well-formed digest that does not match;
    /// returns an error only when the primitive itself fails (e.g. the
    /// stored digest is corrupt).
    fn verify(&self, password: &str, digest: &str) -> Result<bool>;
}

/// Argon2id-backed [`PasswordVerifier`]
///
/// Uses the crate defaults (Argon2id v19, 19 MiB memory, 2 iterations),
/// which follow the OWASP baseline recommendation.
#[derive(Debug, Clone, Default)]
pub struct Argon2Verifier;

impl PasswordVerifier for Argon2Verifier {
    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::HashingFailed(e.to_string()))?;
        Ok(digest.to_string())
    }

    fn verify(&self, password: &str, digest: &str) -> Result<bool> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| Error::VerificationFailure(format!("Malformed digest: {}", e)))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(Error::VerificationFailure(e.to_string())),
        }
    }
}

// ============================================================================
// PASSWORD STRENGTH
// ============================================================================

/// Per-rule result of the password strength checklist
///
/// Each flag maps to one line of the checklist the creation screen renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    /// At least one uppercase letter
    pub has_uppercase: bool,
    /// At least one lowercase letter
    pub has_lowercase: bool,
    /// At least one number
    pub has_digit: bool,
    /// At least one special character
    pub has_symbol: bool,
    /// Meets the configured minimum length
    pub long_enough: bool,
}

impl StrengthReport {
    /// True when every rule passes
    pub fn is_acceptable(&self) -> bool {
        self.has_uppercase
            && self.has_lowercase
            && self.has_digit
            && self.has_symbol
            && self.long_enough
    }
}

/// Evaluate a candidate password against the creation checklist
pub fn check_strength(password: &str, config: &WalletConfig) -> StrengthReport {
    StrengthReport {
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: password.chars().any(|c| c.is_ascii_digit()),
        has_symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        long_enough: password.chars().count() >= config.min_password_length,
    }
}

// ============================================================================
// TESTS
// ============================================================================
