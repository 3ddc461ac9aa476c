//! # Unlock Gate
//!
//! Decides which of the three rendering modes applies and performs password
//! verification.
//!
//! ## Mode Derivation
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SCREEN MODES                                     │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  hydrating?            ──► Loading       (wait; no interaction)         │
//! │  locked AND wallet?    ──► LockedPrompt  (password entry required)      │
//! │  everything else       ──► Active        (render the current view)      │
//! │                                                                         │
//! │  Note: locked with NO wallet is Active, not LockedPrompt — there is     │
//! │  nothing to unlock, so the onboarding flow renders instead.             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failed unlock attempts are retryable without throttling or lockout; the
//! digest never leaves local storage.

use crate::crypto::PasswordVerifier;
use crate::error::{Error, Result};
use crate::storage::KeyValueStore;

use super::{SessionState, SessionStore, View};

// ============================================================================
// SCREEN MODE
// ============================================================================

/// The rendering mode derived from the session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMode {
    /// Hydration in progress; render a spinner only
    Loading,
    /// A wallet exists and is locked; render the password prompt
    LockedPrompt,
    /// Render the current view
    Active,
}

impl ScreenMode {
    /// Derive the mode for a session state
    pub fn for_state(state: &SessionState) -> Self {
        if state.hydrating {
            ScreenMode::Loading
        } else if state.locked && state.wallet.is_some() {
            ScreenMode::LockedPrompt
        } else {
            ScreenMode::Active
        }
    }
}

// ============================================================================
// UNLOCK GATE
// ============================================================================

/// State machine governing the locked/unlocked transition
pub struct UnlockGate<V: PasswordVerifier> {
    verifier: V,
    last_error: Option<String>,
    verifying: bool,
}

impl<V: PasswordVerifier> UnlockGate<V> {
    /// Create a gate around a password verifier
    pub fn new(verifier: V) -> Self {
        Self {
            verifier,
            last_error: None,
            verifying: false,
        }
    }

    /// The user-facing message from the most recent failed attempt
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True while a verification is in flight
    ///
    /// The popup disables the unlock control while this is set, so two
    /// attempts never race on the same digest comparison.
    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    /// Attempt to unlock the session with a candidate password
    ///
    /// On success the session unlocks and any previous error is cleared. On
    /// failure the session stays locked and a user-facing message is
    /// retained in [`last_error`](Self::last_error). Attempts are freely
    /// retryable.
    pub async fn unlock<K: KeyValueStore>(
        &mut self,
        store: &mut SessionStore<K>,
        candidate: &str,
    ) -> Result<()> {
        if self.verifying {
            tracing::debug!("ignoring unlock attempt while verification is in flight");
            return Ok(());
        }

        // Absent digest means the stored wallet was corrupted or cleared
        // externally; fail fast instead of comparing against nothing.
        let digest = match store.password_digest().await {
            Some(digest) => digest,
            None => return Err(self.fail(Error::NoPasswordSet)),
        };

        self.verifying = true;
        let outcome = self.verifier.verify(candidate, &digest);
        self.verifying = false;

        match outcome {
            Ok(true) => {
                self.last_error = None;
                store.set_locked(false).await;
                tracing::info!("session unlocked");
                Ok(())
            }
            Ok(false) => Err(self.fail(Error::IncorrectPassword)),
            Err(e) => {
                tracing::warn!("password verification failed: {}", e);
                self.last_error = Some("Password verification failed. Please try again.".into());
                Err(e)
            }
        }
    }

    /// Lock the session
    ///
    /// The wallet identity and password digest are untouched — both remain
    /// for a subsequent unlock.
    pub async fn lock<K: KeyValueStore>(&mut self, store: &mut SessionStore<K>) {
        self.last_error = None;
        store.set_locked(true).await;
        tracing::info!("session locked");
    }

    /// Forget the wallet entirely
    ///
    /// Clears the identity, returns to the welcome screen, and removes the
    /// password digest. Destructive and irreversible: the seed phrase was
    /// never persisted, so the only way back is re-creation or re-import.
    pub async fn logout<K: KeyValueStore>(&mut self, store: &mut SessionStore<K>) {
        self.last_error = None;
        store.set_wallet(None).await;
        store.set_view(View::Welcome).await;
        store.clear_password_digest().await;
        tracing::info!("logged out; wallet identity and digest cleared");
    }

    fn fail(&mut self, error: Error) -> Error {
        self.last_error = Some(error.to_string());
        error
    }
}

// ============================================================================
// TESTS
// ============================================================================
