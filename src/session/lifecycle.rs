//! # Wallet Lifecycle
//!
//! Turns the result of a creation or import flow into a committed session.
//!
//! ## Creation / Import Flows
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        LIFECYCLE FLOWS                                  │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  CREATE                                                                 │
//! │  ──────                                                                 │
//! │  password ──► digest persisted ──► phrase generated ──► identity        │
//! │  derived ──► phrase shown ONCE ──► user confirms ──► commit             │
//! │                                                                         │
//! │  IMPORT                                                                 │
//! │  ──────                                                                 │
//! │  phrase validated ──► identity derived ──► digest persisted ──► commit  │
//! │                                                                         │
//! │  COMMIT (single integration point)                                      │
//! │  ──────                                                                 │
//! │  identity installed (session unlocks) ──► view = dashboard              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::crypto::PasswordVerifier;
use crate::error::Result;
use crate::identity::{derive_identity, SeedPhrase, WalletIdentity};
use crate::storage::KeyValueStore;

use super::{OnboardingDraft, SessionStore, View};

/// The outcome of a creation flow, pending user confirmation
///
/// The phrase must be shown to the user before [`commit_new_wallet`] is
/// called — it cannot be recovered afterwards.
pub struct NewWallet {
    /// The derived identity, ready to commit
    pub identity: WalletIdentity,
    /// The seed phrase backing the identity; shown once, never persisted
    pub seed_phrase: SeedPhrase,
}

/// Commit a created or imported wallet into the session
///
/// The single integration point between the key-generation flow and the
/// session: installs the identity (which unlocks the session) and moves to
/// the dashboard. Call exactly once per successful creation/import, with a
/// complete identity.
pub async fn commit_new_wallet<K: KeyValueStore>(
    store: &mut SessionStore<K>,
    identity: WalletIdentity,
) {
    store.set_wallet(Some(identity)).await;
    store.set_view(View::Dashboard).await;
    OnboardingDraft::clear(store.kv()).await;
    tracing::info!("wallet committed; session active");
}

/// Navigate back to the welcome screen
///
/// Leaving the dashboard always re-requires authentication: if an identity
/// exists the session re-locks before the view changes. With no identity
/// there is nothing to protect and only the view changes.
pub async fn return_to_welcome<K: KeyValueStore>(store: &mut SessionStore<K>) {
    if store.state().wallet.is_some() {
        store.set_locked(true).await;
    }
    store.set_view(View::Welcome).await;
}

/// Run the creation flow up to the seed-phrase reveal
///
/// Hashes and persists the password digest, generates a fresh seed phrase,
/// and derives the identity. The caller shows the phrase, then calls
/// [`commit_new_wallet`] once the user confirms they have recorded it.
pub async fn create_wallet<K, V>(
    store: &mut SessionStore<K>,
    verifier: &V,
    password: &str,
) -> Result<NewWallet>
where
    K: KeyValueStore,
    V: PasswordVerifier,
{
    let digest = verifier.hash(password)?;
    store.set_password_digest(&digest).await;

    let seed_phrase = SeedPhrase::generate()?;
    let identity = derive_identity(&seed_phrase)?;

    // Keep the reveal step resumable across popup reloads
    let draft = OnboardingDraft {
        step: 2,
        address: Some(identity.address.clone()),
    };
    draft.save(store.kv()).await;

    Ok(NewWallet {
        identity,
        seed_phrase,
    })
}

/// Run the import flow and commit the session
///
/// Validates the supplied phrase, derives the identity deterministically,
/// persists the password digest, and commits.
pub async fn import_wallet<K, V>(
    store: &mut SessionStore<K>,
    verifier: &V,
    phrase: &str,
    password: &str,
) -> Result<WalletIdentity>
where
    K: KeyValueStore,
    V: PasswordVerifier,
{
    let seed_phrase = SeedPhrase::from_phrase(phrase)?;
    let identity = derive_identity(&seed_phrase)?;

    let digest = verifier.hash(password)?;
    store.set_password_digest(&digest).await;

    commit_new_wallet(store, identity.clone()).await;
    Ok(identity)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::session::ScreenMode;
    use crate::storage::{keys, MemoryKv};

    const TEST_PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    struct PlainVerifier;

    impl PasswordVerifier for PlainVerifier {
        fn hash(&self, password: &str) -> Result<String> {
            Ok(format!("digest:{}", password))
        }

        fn verify(&self, password: &str, digest: &str) -> Result<bool> {
            Ok(digest == format!("digest:{}", password))
        }
    }

    async fn fresh_store() -> SessionStore<MemoryKv> {
        let mut store = SessionStore::new(MemoryKv::new());
        store.hydrate().await;
        store
    }

    fn identity() -> WalletIdentity {
        WalletIdentity::fresh("5GFakeImported".into())
    }

    #[tokio::test]
    async fn test_commit_from_welcome() {
        let mut store = fresh_store().await;
        assert_eq!(store.state().view, View::Welcome);

        commit_new_wallet(&mut store, identity()).await;

        let state = store.state();
        assert_eq!(state.view, View::Dashboard);
        assert!(!state.locked);
        assert_eq!(state.wallet.as_ref(), Some(&identity()));
        assert_eq!(ScreenMode::for_state(state), ScreenMode::Active);
    }

    #[tokio::test]
    async fn test_return_to_welcome_relocks_with_wallet() {
        let mut store = fresh_store().await;
        commit_new_wallet(&mut store, identity()).await;

        return_to_welcome(&mut store).await;

        let state = store.state();
        assert_eq!(state.view, View::Welcome);
        assert!(state.locked);
        assert!(state.wallet.is_some());
    }

    #[tokio::test]
    async fn test_return_to_welcome_without_wallet_does_not_lock() {
        let mut store = fresh_store().await;
        store.set_view(View::Create).await;

        return_to_welcome(&mut store).await;

        let state = store.state();
        assert_eq!(state.view, View::Welcome);
        assert!(!state.locked);
    }

    #[tokio::test]
    async fn test_create_wallet_prepares_but_does_not_commit() {
        let mut store = fresh_store().await;

        let new_wallet = create_wallet(&mut store, &PlainVerifier, "Str0ng!pass")
            .await
            .unwrap();

        assert_eq!(new_wallet.seed_phrase.words().len(), 12);
        assert_eq!(new_wallet.identity.balance, "0.00");

        // Digest and draft are persisted, but the session is not committed
        assert_eq!(
            store.password_digest().await.as_deref(),
            Some("digest:Str0ng!pass")
        );
        let draft = OnboardingDraft::load(store.kv()).await;
        assert_eq!(draft.step, 2);
        assert_eq!(draft.address.as_deref(), Some(new_wallet.identity.address.as_str()));
        assert_eq!(store.state().view, View::Welcome);
        assert_eq!(store.state().wallet, None);
    }

    #[tokio::test]
    async fn test_create_then_commit() {
        let mut store = fresh_store().await;

        let new_wallet = create_wallet(&mut store, &PlainVerifier, "Str0ng!pass")
            .await
            .unwrap();
        commit_new_wallet(&mut store, new_wallet.identity.clone()).await;

        let state = store.state();
        assert_eq!(state.view, View::Dashboard);
        assert!(!state.locked);

        // The draft is cleaned up on commit
        let draft = OnboardingDraft::load(store.kv()).await;
        assert_eq!(draft.step, 1);
        assert_eq!(draft.address, None);
    }

    #[tokio::test]
    async fn test_import_wallet_commits() {
        let mut store = fresh_store().await;

        let imported = import_wallet(&mut store, &PlainVerifier, TEST_PHRASE, "Str0ng!pass")
            .await
            .unwrap();

        let state = store.state();
        assert_eq!(state.view, View::Dashboard);
        assert!(!state.locked);
        assert_eq!(state.wallet.as_ref(), Some(&imported));
        assert!(store.password_digest().await.is_some());
    }

    #[tokio::test]
    async fn test_import_is_deterministic() {
        let mut store1 = fresh_store().await;
        let mut store2 = fresh_store().await;

        let first = import_wallet(&mut store1, &PlainVerifier, TEST_PHRASE, "pw1")
            .await
            .unwrap();
        let second = import_wallet(&mut store2, &PlainVerifier, TEST_PHRASE, "pw2")
            .await
            .unwrap();

        assert_eq!(first.address, second.address);
    }

    #[tokio::test]
    async fn test_import_rejects_invalid_phrase() {
        let mut store = fresh_store().await;

        let result =
            import_wallet(&mut store, &PlainVerifier, "twelve bogus words", "pw").await;

        assert!(matches!(result, Err(Error::InvalidSeedPhrase(_))));

        // Nothing was committed or persisted
        let state = store.state();
        assert_eq!(state.view, View::Welcome);
        assert_eq!(state.wallet, None);
        assert_eq!(store.password_digest().await, None);
        assert_eq!(store.kv().get(keys::WALLET_DATA).await.unwrap(), None);
    }
}
