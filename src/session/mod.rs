//! # Session Module
//!
//! The wallet session state machine — the single source of truth for "which
//! screen is shown" and "is the wallet usable right now".
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SESSION CORE                                    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌───────────────┐    mutate-then-persist     ┌───────────────────┐     │
//! │  │  SessionStore │ ─────────────────────────► │  KeyValueStore    │     │
//! │  │               │ ◄───────────────────────── │  (extension       │     │
//! │  │  view         │    one-time hydration      │   storage)        │     │
//! │  │  wallet       │                            └───────────────────┘     │
//! │  │  locked       │                                                      │
//! │  │  hydrating    │                                                      │
//! │  └──────┬────────┘                                                      │
//! │         │ snapshot                                                      │
//! │         ▼                                                               │
//! │  ┌───────────────┐   unlock / lock / logout   ┌───────────────────┐     │
//! │  │  UnlockGate   │ ◄───────────────────────── │  Popup UI         │     │
//! │  │  (ScreenMode) │ ─────────────────────────► │                   │     │
//! │  └───────────────┘   Loading / LockedPrompt   └───────────────────┘     │
//! │                      / Active                                           │
//! │                                                                         │
//! │  WalletLifecycle: creation/import results ──► SessionStore commit       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Screen State Machine
//!
//! ```text
//! Loading ──► LockedPrompt ◄──unlock/lock──► Active
//!    │                                          │
//!    └──────────► Active (no wallet yet)        └──logout──► welcome flow
//! ```

mod draft;
mod gate;
mod lifecycle;
mod store;

pub use draft::OnboardingDraft;
pub use gate::{ScreenMode, UnlockGate};
pub use lifecycle::{
    commit_new_wallet, create_wallet, import_wallet, return_to_welcome, NewWallet,
};
pub use store::SessionStore;

use crate::identity::WalletIdentity;

// ============================================================================
// VIEW
// ============================================================================

/// The active top-level screen
///
/// Transitions are user-driven; the current value is persisted so a popup
/// reload resumes the same screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Onboarding entry point with create/import choices
    Welcome,
    /// Wallet creation flow
    Create,
    /// Wallet import flow
    Import,
    /// The wallet dashboard (requires an identity)
    Dashboard,
}

impl View {
    /// The persisted string form of this view
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Welcome => "welcome",
            View::Create => "create",
            View::Import => "import",
            View::Dashboard => "dashboard",
        }
    }

    /// Parse a persisted view string; `None` for anything unrecognized
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "welcome" => Some(View::Welcome),
            "create" => Some(View::Create),
            "import" => Some(View::Import),
            "dashboard" => Some(View::Dashboard),
            _ => None,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SESSION STATE
// ============================================================================

/// The aggregate session state the popup renders from
///
/// Invariants upheld by [`SessionStore`]:
/// - `view == Dashboard` only while `wallet` is present
/// - `wallet == None` after any identity mutation implies `locked == true`
/// - while `hydrating` is true, no persisted write is issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// The active top-level screen
    pub view: View,

    /// The active wallet identity, if one exists
    pub wallet: Option<WalletIdentity>,

    /// Whether the session is locked behind the password prompt
    pub locked: bool,

    /// True from construction until the one-time hydration read completes
    pub hydrating: bool,
}

impl SessionState {
    /// The pre-hydration boot state
    pub(crate) fn boot() -> Self {
        Self {
            view: View::Welcome,
            wallet: None,
            locked: false,
            hydrating: true,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_string_roundtrip() {
        for view in [View::Welcome, View::Create, View::Import, View::Dashboard] {
            assert_eq!(View::parse(view.as_str()), Some(view));
        }
    }

    #[test]
    fn test_view_parse_rejects_unknown() {
        assert_eq!(View::parse("settings"), None);
        assert_eq!(View::parse("Welcome"), None);
        assert_eq!(View::parse(""), None);
    }

    #[test]
    fn test_boot_state() {
        let state = SessionState::boot();

        assert_eq!(state.view, View::Welcome);
        assert!(state.wallet.is_none());
        assert!(!state.locked);
        assert!(state.hydrating);
    }
}
