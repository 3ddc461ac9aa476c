//! # Configuration
//!
//! Tunable policy knobs for the wallet core. The popup shell constructs one
//! of these at startup and threads it through the flows that need it.

/// Configuration for the wallet core
#[derive(Debug, Clone)]
pub struct WalletConfig {
    /// Minimum accepted password length for wallet creation
    pub min_password_length: usize,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            min_password_length: 8,
        }
    }
}
