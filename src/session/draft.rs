//! # Onboarding Draft
//!
//! The creation flow spans multiple popup renders (password entry, then the
//! seed-phrase reveal), and the popup can be closed at any point. The draft
//! persists the non-secret progress — the current step and the derived
//! address — so reopening the popup resumes where the user left off.
//!
//! Secrets are never drafted: neither the seed phrase nor the password text
//! is written to storage, only the digest (by the lifecycle flow) and the
//! values below.

use crate::storage::{keys, KeyValueStore};

/// Persisted progress of the wallet creation flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingDraft {
    /// Current step of the creation flow (1 = password entry, 2 = reveal)
    pub step: u32,
    /// The derived address, once step 1 completes
    pub address: Option<String>,
}

impl Default for OnboardingDraft {
    fn default() -> Self {
        Self {
            step: 1,
            address: None,
        }
    }
}

impl OnboardingDraft {
    /// Load the draft, defaulting any absent or unreadable value
    pub async fn load<K: KeyValueStore>(kv: &K) -> Self {
        let step = match kv.get(keys::DRAFT_STEP).await {
            Ok(Some(raw)) => raw.parse().unwrap_or(1),
            Ok(None) => 1,
            Err(e) => {
                tracing::warn!("storage read failed for {}: {}", keys::DRAFT_STEP, e);
                1
            }
        };

        let address = match kv.get(keys::DRAFT_ADDRESS).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("storage read failed for {}: {}", keys::DRAFT_ADDRESS, e);
                None
            }
        };

        Self { step, address }
    }

    /// Persist the draft
    pub async fn save<K: KeyValueStore>(&self, kv: &K) {
        if let Err(e) = kv.set(keys::DRAFT_STEP, &self.step.to_string()).await {
            tracing::warn!("storage write failed for {}: {}", keys::DRAFT_STEP, e);
        }

        let result = match &self.address {
            Some(address) => kv.set(keys::DRAFT_ADDRESS, address).await,
            None => kv.remove(keys::DRAFT_ADDRESS).await,
        };
        if let Err(e) = result {
            tracing::warn!("storage write failed for {}: {}", keys::DRAFT_ADDRESS, e);
        }
    }

    /// Remove any persisted draft (on commit or abandon)
    pub async fn clear<K: KeyValueStore>(kv: &K) {
        for key in [keys::DRAFT_STEP, keys::DRAFT_ADDRESS] {
            if let Err(e) = kv.remove(key).await {
                tracing::warn!("storage remove failed for {}: {}", key, e);
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKv;

    #[tokio::test]
    async fn test_load_defaults_when_absent() {
        let kv = MemoryKv::new();
        let draft = OnboardingDraft::load(&kv).await;

        assert_eq!(draft, OnboardingDraft::default());
        assert_eq!(draft.step, 1);
    }

    #[tokio::test]
    async fn test_save_load_roundtrip() {
        let kv = MemoryKv::new();
        let draft = OnboardingDraft {
            step: 2,
            address: Some("5FakeAddr".into()),
        };

        draft.save(&kv).await;
        assert_eq!(OnboardingDraft::load(&kv).await, draft);
    }

    #[tokio::test]
    async fn test_garbage_step_defaults() {
        let kv = MemoryKv::new();
        kv.set(keys::DRAFT_STEP, "not a number").await.unwrap();

        let draft = OnboardingDraft::load(&kv).await;
        assert_eq!(draft.step, 1);
    }

    #[tokio::test]
    async fn test_clear_removes_both_keys() {
        let kv = MemoryKv::new();
        OnboardingDraft {
            step: 2,
            address: Some("5FakeAddr".into()),
        }
        .save(&kv)
        .await;

        OnboardingDraft::clear(&kv).await;

        assert_eq!(kv.get(keys::DRAFT_STEP).await.unwrap(), None);
        assert_eq!(kv.get(keys::DRAFT_ADDRESS).await.unwrap(), None);
        assert_eq!(OnboardingDraft::load(&kv).await, OnboardingDraft::default());
    }

    #[tokio::test]
    async fn test_save_with_no_address_clears_stale_value() {
        let kv = MemoryKv::new();
        kv.set(keys::DRAFT_ADDRESS, "5Stale").await.unwrap();

        OnboardingDraft::default().save(&kv).await;

        assert_eq!(kv.get(keys::DRAFT_ADDRESS).await.unwrap(), None);
    }
}
