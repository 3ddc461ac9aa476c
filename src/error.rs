//! # Error Handling
//!
//! This module provides the error types for Crucible Core.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                      │
//! │  │                                                                      │
//! │  ├── Identity Errors                                                    │
//! │  │   ├── InvalidSeedPhrase    - Invalid BIP39 phrase                    │
//! │  │   ├── KeyDerivationFailed  - Failed to derive keys                   │
//! │  │   └── InvalidAddress       - Invalid address format                  │
//! │  │                                                                      │
//! │  ├── Unlock Errors                                                      │
//! │  │   ├── NoPasswordSet        - No digest on record                     │
//! │  │   ├── IncorrectPassword    - Verify returned false                   │
//! │  │   ├── VerificationFailure  - Verify primitive itself failed          │
//! │  │   └── HashingFailed        - Hash primitive failed                   │
//! │  │                                                                      │
//! │  ├── Storage Errors                                                     │
//! │  │   ├── StorageUnavailable   - Backing store missing                   │
//! │  │   ├── StorageReadError     - Failed to read from storage             │
//! │  │   └── StorageWriteError    - Failed to write to storage              │
//! │  │                                                                      │
//! │  └── Internal Errors                                                    │
//! │      └── SerializationError   - JSON encode/decode failed               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate is fatal: every error is recovered at the
//! SessionStore/UnlockGate boundary and surfaced to the popup as a short
//! user-facing string. The worst outcomes are "stuck on the unlock prompt"
//! or "treated as a fresh install", both recoverable by user action.

use thiserror::Error;

/// Result type alias for Crucible Core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Crucible Core
///
/// All errors are categorized by module/domain to make error handling
/// clearer and to provide meaningful error messages to users.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Identity Errors (200-299)
    // ========================================================================

    /// Invalid seed phrase
    #[error("Invalid seed phrase: {0}")]
    InvalidSeedPhrase(String),

    /// Key derivation failed
    #[error("Failed to derive keys: {0}")]
    KeyDerivationFailed(String),

    /// Invalid address format
    #[error("Invalid address format: {0}")]
    InvalidAddress(String),

    // ========================================================================
    // Unlock Errors (300-399)
    // ========================================================================

    /// No password digest is on record
    #[error("No wallet password is set. The stored wallet may have been cleared externally.")]
    NoPasswordSet,

    /// The candidate password did not match the stored digest
    #[error("Incorrect password.")]
    IncorrectPassword,

    /// The verification primitive itself failed
    #[error("Password verification failed: {0}")]
    VerificationFailure(String),

    /// The hashing primitive failed
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),

    // ========================================================================
    // Storage Errors (400-499)
    // ========================================================================

    /// The backing store is missing (e.g. running outside the extension host)
    #[error("Extension storage is unavailable; changes will not persist.")]
    StorageUnavailable,

    /// Failed to read from storage
    #[error("Failed to read from storage: {0}")]
    StorageReadError(String),

    /// Failed to write to storage
    #[error("Failed to write to storage: {0}")]
    StorageWriteError(String),

    // ========================================================================
    // Internal Errors (900-999)
    // ========================================================================

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl Error {
    /// Get the error code for the JS boundary
    ///
    /// Error codes are organized by category:
    /// - 200-299: Identity
    /// - 300-399: Unlock
    /// - 400-499: Storage
    /// - 900-999: Internal
    pub fn code(&self) -> i32 {
        match self {
            // Identity (200-299)
            Error::InvalidSeedPhrase(_) => 200,
            Error::KeyDerivationFailed(_) => 201,
            Error::InvalidAddress(_) => 202,

            // Unlock (300-399)
            Error::NoPasswordSet => 300,
            Error::IncorrectPassword => 301,
            Error::VerificationFailure(_) => 302,
            Error::HashingFailed(_) => 303,

            // Storage (400-499)
            Error::StorageUnavailable => 400,
            Error::StorageReadError(_) => 401,
            Error::StorageWriteError(_) => 402,

            // Internal (900-999)
            Error::SerializationError(_) => 900,
        }
    }

    /// Check if this error is recoverable
    ///
    /// Recoverable errors can potentially be resolved by retrying
    /// or by user action.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::IncorrectPassword
                | Error::VerificationFailure(_)
                | Error::StorageUnavailable
                | Error::StorageReadError(_)
                | Error::StorageWriteError(_)
        )
    }

    /// Check if this error requires user action
    pub fn requires_user_action(&self) -> bool {
        matches!(
            self,
            Error::NoPasswordSet | Error::IncorrectPassword | Error::InvalidSeedPhrase(_)
        )
    }
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

// ============================================================================
// UI ERROR REPRESENTATION
// ============================================================================

/// UI-friendly error representation
///
/// This struct can be safely passed across the WASM boundary to the popup.
#[derive(Debug, Clone)]
pub struct UiError {
    /// Numeric error code
    pub code: i32,
    /// Human-readable error message
    pub message: String,
    /// Whether the error is recoverable
    pub recoverable: bool,
}

impl From<Error> for UiError {
    fn from(err: Error) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
            recoverable: err.is_recoverable(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
