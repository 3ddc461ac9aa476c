//! # Crucible Core
//!
//! The session core of the Crucible browser-extension wallet: create or
//! import a keypair, protect it behind a password, and keep wallet identity
//! and lock state consistent across extension reloads.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CRUCIBLE CORE MODULES                             │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌──────────────────────────────┐    │
//! │  │  Identity   │  │   Crypto    │  │          Session             │    │
//! │  │             │  │             │  │                              │    │
//! │  │ - Seed      │  │ - Argon2id  │  │ - SessionStore (hydration,   │    │
//! │  │   phrase    │  │   digests   │  │   mutate-then-persist)       │    │
//! │  │ - Address   │  │ - HKDF      │  │ - UnlockGate (screen modes,  │    │
//! │  │ - Wallet    │  │   key       │  │   password verification)     │    │
//! │  │   identity  │  │   derivation│  │ - WalletLifecycle (commit,   │    │
//! │  └──────┬──────┘  └──────┬──────┘  │   create/import, drafts)     │    │
//! │         │                │         └──────────────┬───────────────┘    │
//! │         └────────────────┴────────────────────────┘                    │
//! │                                   │                                     │
//! │                          ┌────────┴────────┐                            │
//! │                          │     Storage     │                            │
//! │                          │                 │                            │
//! │                          │ - KV port       │                            │
//! │                          │ - MemoryKv      │                            │
//! │                          │ - ExtensionKv   │                            │
//! │                          └─────────────────┘                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error types for the entire library
//! - [`config`] - Policy knobs (password rules)
//! - [`crypto`] - Password hashing and key derivation
//! - [`identity`] - Seed phrases, addresses, wallet identity
//! - [`storage`] - The persistence port and its backings
//! - [`session`] - The session state machine (the core of the core)
//!
//! ## Lifecycle
//!
//! ```text
//! popup open ──► SessionStore::hydrate (three concurrent reads)
//!                      │
//!                      ▼
//!        ScreenMode: Loading → LockedPrompt | Active
//!                      │
//!     create/import/unlock/lock/logout mutate the store,
//!     and every mutation is mirrored back into storage
//! ```
//!
//! ## Security Model
//!
//! | Value | At rest | Notes |
//! |-------|---------|-------|
//! | Seed phrase | never persisted | shown once at creation |
//! | Password | Argon2id PHC digest only | constant-time verify |
//! | Wallet identity | plain JSON | public address + display balance |
//! | Lock flag | `"true"`/`"false"` string | ambiguity fails closed |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod config;
pub mod crypto;
pub mod error;
pub mod identity;
pub mod session;
pub mod storage;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use config::WalletConfig;
pub use crypto::{Argon2Verifier, PasswordVerifier};
pub use error::{Error, Result, UiError};
pub use identity::{SeedPhrase, WalletIdentity};
pub use session::{ScreenMode, SessionState, SessionStore, UnlockGate, View};

/// Get the version of Crucible Core
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
