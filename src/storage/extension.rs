//! # Extension Storage Bridge
//!
//! [`KeyValueStore`] backed by `chrome.storage.local` via JavaScript interop.
//!
//! The extension shell installs a tiny adapter object on `globalThis`
//! (`__crucible_storage`) that wraps the callback-style `chrome.storage`
//! API in promises; this module calls through it with `wasm_bindgen`. The
//! indirection keeps the Rust side free of the `chrome.runtime.lastError`
//! dance and lets the same build run in a plain browser tab, where the
//! adapter reports the backing store as unavailable and the session core
//! degrades to in-memory-only operation.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::KeyValueStore;
use crate::error::{Error, Result};

// ============================================================================
// JAVASCRIPT BRIDGE — extern functions provided by storage-bridge.ts
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["globalThis", "__crucible_storage"], js_name = "available")]
    fn bridge_available() -> bool;

    #[wasm_bindgen(js_namespace = ["globalThis", "__crucible_storage"], js_name = "get", catch)]
    fn bridge_get(key: &str) -> std::result::Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = ["globalThis", "__crucible_storage"], js_name = "set", catch)]
    fn bridge_set(key: &str, value: &str) -> std::result::Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = ["globalThis", "__crucible_storage"], js_name = "remove", catch)]
    fn bridge_remove(key: &str) -> std::result::Result<js_sys::Promise, JsValue>;
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

// ============================================================================
// EXTENSION KV
// ============================================================================

/// `chrome.storage.local`-backed [`KeyValueStore`]
#[derive(Debug, Default)]
pub struct ExtensionKv {
    /// Set once the missing-backing-store warning has been emitted
    warned: AtomicBool,
}

impl ExtensionKv {
    /// Create a new bridge handle
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the extension storage backing is reachable
    ///
    /// Logs the degraded-mode warning once per handle.
    fn backing_available(&self) -> bool {
        if bridge_available() {
            return true;
        }
        if !self.warned.swap(true, Ordering::Relaxed) {
            tracing::warn!("{}", Error::StorageUnavailable);
        }
        false
    }
}

#[async_trait(?Send)]
impl KeyValueStore for ExtensionKv {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if !self.backing_available() {
            return Ok(None);
        }

        let promise = bridge_get(key).map_err(|e| Error::StorageReadError(js_err(e)))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| Error::StorageReadError(js_err(e)))?;

        // The adapter resolves with null/undefined for absent keys
        Ok(value.as_string())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.backing_available() {
            return Err(Error::StorageUnavailable);
        }

        let promise = bridge_set(key, value).map_err(|e| Error::StorageWriteError(js_err(e)))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| Error::StorageWriteError(js_err(e)))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if !self.backing_available() {
            return Err(Error::StorageUnavailable);
        }

        let promise = bridge_remove(key).map_err(|e| Error::StorageWriteError(js_err(e)))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| Error::StorageWriteError(js_err(e)))?;
        Ok(())
    }
}
