//! # Session Store
//!
//! The single authoritative in-memory record of the session, mirrored to
//! persistent storage on every change.
//!
//! ## Hydration
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        HYDRATION SEQUENCE                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  popup open                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  hydrating = true ──► three concurrent reads:                           │
//! │                         walletCurrentView / walletData / walletLocked   │
//! │      │                                                                  │
//! │      ▼  all three resolved (any order)                                  │
//! │  resolve initial state:                                                 │
//! │    identity fails shape check → no wallet, unlocked,                    │
//! │                                 stored view if valid else welcome       │
//! │    identity valid             → create/import forced to dashboard,      │
//! │                                 locked unless flag is exactly "false"   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  hydrating = false  (only now may writes flow back out)                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Hydration must not echo the pre-hydration defaults back into storage
//! before the true persisted state has been read, so no write is issued
//! while `hydrating` is true.
//!
//! ## Failure policy
//!
//! Storage is best-effort: a failed read behaves as "value absent", a failed
//! write is logged and dropped, and the in-memory state is never rolled
//! back. The wallet stays usable even with a degraded backing store; it
//! just loses durability.

use crate::identity::WalletIdentity;
use crate::storage::{keys, KeyValueStore};

use super::{SessionState, View};

/// The authoritative session record with its injected persistence port
pub struct SessionStore<K: KeyValueStore> {
    kv: K,
    state: SessionState,
}

impl<K: KeyValueStore> SessionStore<K> {
    /// Create a store in the pre-hydration boot state
    ///
    /// Call [`hydrate`](Self::hydrate) before rendering anything final.
    pub fn new(kv: K) -> Self {
        Self {
            kv,
            state: SessionState::boot(),
        }
    }

    /// Snapshot of the current session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The underlying persistence port
    pub fn kv(&self) -> &K {
        &self.kv
    }

    // ========================================================================
    // HYDRATION
    // ========================================================================

    /// One-time load of persisted session data
    ///
    /// Issues the three reads concurrently and derives the initial state
    /// only after all of them resolve — partial hydration is never rendered
    /// as final state. Hydrating twice from the same persisted snapshot
    /// yields the same derived state.
    pub async fn hydrate(&mut self) {
        self.state.hydrating = true;

        let (view_raw, wallet_raw, locked_raw) = futures::join!(
            self.read(keys::CURRENT_VIEW),
            self.read(keys::WALLET_DATA),
            self.read(keys::LOCKED),
        );

        let stored_view = view_raw.as_deref().and_then(View::parse);
        let wallet = wallet_raw.as_deref().and_then(WalletIdentity::from_json);
        if wallet_raw.is_some() && wallet.is_none() {
            tracing::debug!("stored wallet identity failed the shape check; treating as absent");
        }

        match wallet {
            Some(identity) => {
                self.state.view = match stored_view {
                    // Stale in-progress screen from before the wallet existed;
                    // never show the creation flow again.
                    Some(View::Create) | Some(View::Import) => View::Dashboard,
                    Some(view) => view,
                    None => View::Dashboard,
                };
                // Fail closed: anything but the exact string "false" locks.
                self.state.locked = locked_raw.as_deref() != Some("false");
                self.state.wallet = Some(identity);
            }
            None => {
                self.state.wallet = None;
                self.state.locked = false;
                self.state.view = match stored_view {
                    // A dashboard view with no identity is unreachable state;
                    // fall back to onboarding.
                    Some(View::Dashboard) | None => View::Welcome,
                    Some(view) => view,
                };
            }
        }

        self.state.hydrating = false;
        tracing::debug!(
            view = %self.state.view,
            locked = self.state.locked,
            has_wallet = self.state.wallet.is_some(),
            "session hydrated"
        );
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Switch the active view
    ///
    /// The dashboard is refused while no wallet exists.
    pub async fn set_view(&mut self, view: View) {
        if view == View::Dashboard && self.state.wallet.is_none() {
            tracing::warn!("refusing dashboard view with no wallet identity");
            return;
        }
        self.state.view = view;
        self.write(keys::CURRENT_VIEW, view.as_str()).await;
    }

    /// Install or clear the wallet identity
    ///
    /// The lock flag is coupled, not independent: installing an identity
    /// unlocks the session, clearing it locks the session. Only
    /// [`set_locked`](Self::set_locked) can produce an installed-but-locked
    /// combination.
    pub async fn set_wallet(&mut self, wallet: Option<WalletIdentity>) {
        match wallet {
            Some(identity) => {
                self.state.wallet = Some(identity.clone());
                self.state.locked = false;
                match identity.to_json() {
                    Ok(json) => self.write(keys::WALLET_DATA, &json).await,
                    Err(e) => tracing::warn!("could not encode wallet identity: {}", e),
                }
                self.write(keys::LOCKED, "false").await;
            }
            None => {
                self.state.wallet = None;
                self.state.locked = true;
                self.remove(keys::WALLET_DATA).await;
                self.write(keys::LOCKED, "true").await;
            }
        }
    }

    /// Set the lock flag
    pub async fn set_locked(&mut self, locked: bool) {
        self.state.locked = locked;
        self.write(keys::LOCKED, if locked { "true" } else { "false" })
            .await;
    }

    // ========================================================================
    // PASSWORD DIGEST
    // ========================================================================

    /// Read the persisted password digest, `None` when absent or unreadable
    pub async fn password_digest(&self) -> Option<String> {
        self.read(keys::PASSWORD_DIGEST).await
    }

    /// Persist the password digest
    pub async fn set_password_digest(&self, digest: &str) {
        if let Err(e) = self.kv.set(keys::PASSWORD_DIGEST, digest).await {
            tracing::warn!("storage write failed for {}: {}", keys::PASSWORD_DIGEST, e);
        }
    }

    /// Remove the persisted password digest
    pub async fn clear_password_digest(&self) {
        if let Err(e) = self.kv.remove(keys::PASSWORD_DIGEST).await {
            tracing::warn!(
                "storage remove failed for {}: {}",
                keys::PASSWORD_DIGEST,
                e
            );
        }
    }

    // ========================================================================
    // STORAGE HELPERS
    // ========================================================================

    async fn read(&self, key: &str) -> Option<String> {
        match self.kv.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("storage read failed for {}: {}", key, e);
                None
            }
        }
    }

    async fn write(&self, key: &str, value: &str) {
        if self.state.hydrating {
            tracing::debug!("skipping write of {} during hydration", key);
            return;
        }
        if let Err(e) = self.kv.set(key, value).await {
            tracing::warn!("storage write failed for {}: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        if self.state.hydrating {
            tracing::debug!("skipping removal of {} during hydration", key);
            return;
        }
        if let Err(e) = self.kv.remove(key).await {
            tracing::warn!("storage remove failed for {}: {}", key, e);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::storage::MemoryKv;
    use async_trait::async_trait;

    /// KV whose backing store is gone — every operation fails
    struct FailingKv;

    #[async_trait]
    impl KeyValueStore for FailingKv {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::StorageUnavailable)
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::StorageUnavailable)
        }

        async fn remove(&self, _key: &str) -> Result<()> {
            Err(Error::StorageUnavailable)
        }
    }

    const IDENTITY_JSON: &str = r#"{"address":"5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty","balance":"0.00"}"#;

    async fn seeded_kv(pairs: &[(&str, &str)]) -> MemoryKv {
        let kv = MemoryKv::new();
        for (key, value) in pairs {
            kv.set(key, value).await.unwrap();
        }
        kv
    }

    #[tokio::test]
    async fn test_fresh_install_hydrates_to_welcome() {
        let mut store = SessionStore::new(MemoryKv::new());
        assert!(store.state().hydrating);

        store.hydrate().await;

        let state = store.state();
        assert!(!state.hydrating);
        assert_eq!(state.view, View::Welcome);
        assert_eq!(state.wallet, None);
        assert!(!state.locked);
    }

    #[tokio::test]
    async fn test_stored_wallet_hydrates_locked() {
        let kv = seeded_kv(&[
            (keys::CURRENT_VIEW, "dashboard"),
            (keys::WALLET_DATA, IDENTITY_JSON),
            (keys::LOCKED, "true"),
        ])
        .await;

        let mut store = SessionStore::new(kv);
        store.hydrate().await;

        let state = store.state();
        assert_eq!(state.view, View::Dashboard);
        assert!(state.wallet.is_some());
        assert!(state.locked);
        assert_eq!(
            crate::session::ScreenMode::for_state(state),
            crate::session::ScreenMode::LockedPrompt
        );
    }

    #[tokio::test]
    async fn test_stale_creation_view_is_corrected() {
        for stale in ["create", "import"] {
            let kv = seeded_kv(&[
                (keys::CURRENT_VIEW, stale),
                (keys::WALLET_DATA, IDENTITY_JSON),
                (keys::LOCKED, "false"),
            ])
            .await;

            let mut store = SessionStore::new(kv);
            store.hydrate().await;

            assert_eq!(store.state().view, View::Dashboard);
        }
    }

    #[tokio::test]
    async fn test_lock_flag_fails_closed() {
        for flag in [Some("maybe"), Some("True"), Some(""), None] {
            let mut pairs = vec![(keys::WALLET_DATA, IDENTITY_JSON)];
            if let Some(flag) = flag {
                pairs.push((keys::LOCKED, flag));
            }
            let kv = seeded_kv(&pairs).await;

            let mut store = SessionStore::new(kv);
            store.hydrate().await;

            assert!(store.state().locked, "flag {:?} should lock", flag);
        }
    }

    #[tokio::test]
    async fn test_only_exact_false_unlocks() {
        let kv = seeded_kv(&[(keys::WALLET_DATA, IDENTITY_JSON), (keys::LOCKED, "false")]).await;

        let mut store = SessionStore::new(kv);
        store.hydrate().await;

        assert!(!store.state().locked);
    }

    #[tokio::test]
    async fn test_malformed_identity_treated_as_fresh_install() {
        let kv = seeded_kv(&[
            (keys::CURRENT_VIEW, "create"),
            (keys::WALLET_DATA, r#"{"address":"5F..."}"#),
            (keys::LOCKED, "true"),
        ])
        .await;

        let mut store = SessionStore::new(kv);
        store.hydrate().await;

        let state = store.state();
        assert_eq!(state.wallet, None);
        assert!(!state.locked);
        // The stored view is still valid on its own and is kept
        assert_eq!(state.view, View::Create);
    }

    #[tokio::test]
    async fn test_unknown_view_defaults() {
        // No wallet: default to welcome
        let kv = seeded_kv(&[(keys::CURRENT_VIEW, "garbage")]).await;
        let mut store = SessionStore::new(kv);
        store.hydrate().await;
        assert_eq!(store.state().view, View::Welcome);

        // Wallet present: default to dashboard
        let kv = seeded_kv(&[
            (keys::CURRENT_VIEW, "garbage"),
            (keys::WALLET_DATA, IDENTITY_JSON),
        ])
        .await;
        let mut store = SessionStore::new(kv);
        store.hydrate().await;
        assert_eq!(store.state().view, View::Dashboard);
    }

    #[tokio::test]
    async fn test_dashboard_view_without_wallet_falls_back_to_welcome() {
        let kv = seeded_kv(&[(keys::CURRENT_VIEW, "dashboard")]).await;

        let mut store = SessionStore::new(kv);
        store.hydrate().await;

        assert_eq!(store.state().view, View::Welcome);
    }

    #[tokio::test]
    async fn test_hydration_is_idempotent() {
        let kv = seeded_kv(&[
            (keys::CURRENT_VIEW, "dashboard"),
            (keys::WALLET_DATA, IDENTITY_JSON),
            (keys::LOCKED, "true"),
        ])
        .await;

        let mut store = SessionStore::new(kv);
        store.hydrate().await;
        let first = store.state().clone();

        store.hydrate().await;
        assert_eq!(*store.state(), first);
    }

    #[tokio::test]
    async fn test_hydration_does_not_write_back() {
        let kv = MemoryKv::new();
        let mut store = SessionStore::new(kv);
        store.hydrate().await;

        // Fresh install: hydration must not have seeded any keys
        assert_eq!(store.kv().get(keys::CURRENT_VIEW).await.unwrap(), None);
        assert_eq!(store.kv().get(keys::LOCKED).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_no_writes_while_hydrating() {
        let mut store = SessionStore::new(MemoryKv::new());

        // Still in the boot state: mutations apply in memory only
        store.set_view(View::Create).await;
        assert_eq!(store.state().view, View::Create);
        assert_eq!(store.kv().get(keys::CURRENT_VIEW).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_view_persists() {
        let mut store = SessionStore::new(MemoryKv::new());
        store.hydrate().await;

        store.set_view(View::Import).await;

        assert_eq!(store.state().view, View::Import);
        assert_eq!(
            store.kv().get(keys::CURRENT_VIEW).await.unwrap().as_deref(),
            Some("import")
        );
    }

    #[tokio::test]
    async fn test_set_view_refuses_dashboard_without_wallet() {
        let mut store = SessionStore::new(MemoryKv::new());
        store.hydrate().await;

        store.set_view(View::Dashboard).await;

        assert_eq!(store.state().view, View::Welcome);
        assert_eq!(store.kv().get(keys::CURRENT_VIEW).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_install_wallet_unlocks_and_persists() {
        let mut store = SessionStore::new(MemoryKv::new());
        store.hydrate().await;

        let identity = WalletIdentity::from_json(IDENTITY_JSON).unwrap();
        store.set_wallet(Some(identity.clone())).await;

        let state = store.state();
        assert_eq!(state.wallet.as_ref(), Some(&identity));
        assert!(!state.locked);

        let persisted = store.kv().get(keys::WALLET_DATA).await.unwrap().unwrap();
        assert_eq!(WalletIdentity::from_json(&persisted).unwrap(), identity);
        assert_eq!(
            store.kv().get(keys::LOCKED).await.unwrap().as_deref(),
            Some("false")
        );
    }

    #[tokio::test]
    async fn test_clear_wallet_locks_and_removes_key() {
        let mut store = SessionStore::new(MemoryKv::new());
        store.hydrate().await;

        let identity = WalletIdentity::from_json(IDENTITY_JSON).unwrap();
        store.set_wallet(Some(identity)).await;
        store.set_wallet(None).await;

        let state = store.state();
        assert_eq!(state.wallet, None);
        assert!(state.locked);

        assert_eq!(store.kv().get(keys::WALLET_DATA).await.unwrap(), None);
        assert_eq!(
            store.kv().get(keys::LOCKED).await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_lock_identity_coupling_over_sequences() {
        let mut store = SessionStore::new(MemoryKv::new());
        store.hydrate().await;

        let identity = WalletIdentity::from_json(IDENTITY_JSON).unwrap();

        store.set_wallet(Some(identity.clone())).await;
        store.set_locked(true).await;
        store.set_wallet(None).await;
        assert!(store.state().locked);

        store.set_wallet(Some(identity)).await;
        assert!(!store.state().locked);

        store.set_wallet(None).await;
        assert!(store.state().locked);
    }

    #[tokio::test]
    async fn test_set_locked_persists_both_ways() {
        let mut store = SessionStore::new(MemoryKv::new());
        store.hydrate().await;

        store.set_locked(true).await;
        assert_eq!(
            store.kv().get(keys::LOCKED).await.unwrap().as_deref(),
            Some("true")
        );

        store.set_locked(false).await;
        assert_eq!(
            store.kv().get(keys::LOCKED).await.unwrap().as_deref(),
            Some("false")
        );
    }

    #[tokio::test]
    async fn test_password_digest_roundtrip() {
        let store = SessionStore::new(MemoryKv::new());

        assert_eq!(store.password_digest().await, None);

        store.set_password_digest("$argon2id$fake").await;
        assert_eq!(
            store.password_digest().await.as_deref(),
            Some("$argon2id$fake")
        );

        store.clear_password_digest().await;
        assert_eq!(store.password_digest().await, None);
    }

    #[tokio::test]
    async fn test_degraded_storage_hydrates_as_fresh_install() {
        let mut store = SessionStore::new(FailingKv);
        store.hydrate().await;

        let state = store.state();
        assert!(!state.hydrating);
        assert_eq!(state.view, View::Welcome);
        assert_eq!(state.wallet, None);
        assert!(!state.locked);
    }

    #[tokio::test]
    async fn test_degraded_storage_mutations_do_not_roll_back() {
        let mut store = SessionStore::new(FailingKv);
        store.hydrate().await;

        store.set_view(View::Create).await;
        assert_eq!(store.state().view, View::Create);

        store.set_locked(true).await;
        assert!(store.state().locked);
    }
}
