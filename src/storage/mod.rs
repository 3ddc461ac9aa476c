//! # Storage Module
//!
//! Persistence for the wallet session.
//!
//! ## Storage Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         STORAGE SYSTEM                                  │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  KeyValueStore Trait                                            │   │
//! │  │  ───────────────────                                            │   │
//! │  │                                                                 │   │
//! │  │  • get(key)          - Read, None when absent                   │   │
//! │  │  • set(key, value)   - Overwrite one key                        │   │
//! │  │  • remove(key)       - Delete one key                           │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Backings:                                                              │
//! │  ─────────                                                              │
//! │                                                                         │
//! │  ┌───────────────────────┐      ┌───────────────────────────────┐      │
//! │  │  MemoryKv             │      │  ExtensionKv (wasm32)         │      │
//! │  │  (dev / tests)        │      │  chrome.storage.local bridge  │      │
//! │  └───────────────────────┘      └───────────────────────────────┘      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Durable Contract
//!
//! | Key | Value | Written by | Cleared by |
//! |-----|-------|------------|------------|
//! | `walletCurrentView` | `welcome`/`create`/`import`/`dashboard` | every view change | never |
//! | `walletData` | `{address, balance}` JSON | wallet commit | logout |
//! | `walletLocked` | `"true"` / `"false"` | every lock-state change | never (overwritten) |
//! | `walletPassword` | Argon2 PHC digest | creation/import | logout |
//! | `createWalletStep` | step number string | creation flow | commit/abandon |
//! | `createWalletAddress` | address string | creation flow | commit/abandon |

mod kv;

#[cfg(target_arch = "wasm32")]
mod extension;

pub use kv::{KeyValueStore, MemoryKv};

#[cfg(target_arch = "wasm32")]
pub use extension::ExtensionKv;

/// Key names for persisted session state
pub mod keys {
    /// The active top-level view
    pub const CURRENT_VIEW: &str = "walletCurrentView";

    /// The wallet identity JSON object
    pub const WALLET_DATA: &str = "walletData";

    /// The lock flag (`"true"` / `"false"`)
    pub const LOCKED: &str = "walletLocked";

    /// The password digest (PHC string)
    pub const PASSWORD_DIGEST: &str = "walletPassword";

    /// Creation-flow draft: current step
    pub const DRAFT_STEP: &str = "createWalletStep";

    /// Creation-flow draft: derived address
    pub const DRAFT_ADDRESS: &str = "createWalletAddress";
}
