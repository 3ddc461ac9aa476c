//! # Key/Value Port
//!
//! The persistence boundary of the session core. Everything durable —
//! current view, wallet identity, lock flag, password digest, onboarding
//! draft — goes through this trait, so the session components can be unit
//! tested against an in-memory fake and shipped against extension storage.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::Result;

/// Async key/value persistence port
///
/// Semantics mirror `chrome.storage.local`: values are strings, `get`
/// resolves to `None` when the key is absent, and each key is written
/// independently (no transactional grouping).
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait KeyValueStore {
    /// Read a value, `None` when the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value under a key, overwriting any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory [`KeyValueStore`] for development and testing
///
/// In production the popup uses the extension-storage bridge; this backing
/// exists so the session core runs (without durability) anywhere else.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKv {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl KeyValueStore for MemoryKv {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
