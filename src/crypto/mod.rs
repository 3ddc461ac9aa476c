//! # Cryptography Module
//!
//! Cryptographic primitives used by the wallet core.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CRYPTOGRAPHIC ARCHITECTURE                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    KEY HIERARCHY                                │   │
//! │  ├─────────────────────────────────────────────────────────────────┤   │
//! │  │                                                                 │   │
//! │  │  Seed Phrase (BIP39 - 12 words, 128 bits of entropy)            │   │
//! │  │                          │                                      │   │
//! │  │                          ▼                                      │   │
//! │  │  ┌─────────────────────────────────────────────────────────┐   │   │
//! │  │  │              Master Seed (256 bits)                     │   │   │
//! │  │  │         Derived via PBKDF2-SHA512 (2048 rounds)         │   │   │
//! │  │  └─────────────────────────────────────────────────────────┘   │   │
//! │  │                          │                                      │   │
//! │  │                          ▼                                      │   │
//! │  │  ┌─────────────────┐                                            │   │
//! │  │  │  Signing Key    │   HKDF-SHA256, domain-separated            │   │
//! │  │  │  (Ed25519)      │   → wallet address                         │   │
//! │  │  └─────────────────┘                                            │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 PASSWORD PROTECTION                             │   │
//! │  ├─────────────────────────────────────────────────────────────────┤   │
//! │  │                                                                 │   │
//! │  │  Password ──► Argon2id ──► PHC digest string                   │   │
//! │  │                                                                 │   │
//! │  │  The digest is the ONLY password-derived value ever persisted.  │   │
//! │  │  Verification is constant-time and happens entirely locally.    │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Algorithm Choices & Rationale
//!
//! | Algorithm | Purpose | Why Chosen |
//! |-----------|---------|------------|
//! | Argon2id | Password hashing | Memory-hard, GPU-resistant, RFC 9106 |
//! | Ed25519 | Wallet keypair | Fast, small keys, widely audited |
//! | HKDF-SHA256 | Key Derivation | Industry standard, well-analyzed |
//! | BIP39 | Seed phrase | User-friendly backup, standard |

mod kdf;
mod password;

pub use kdf::derive_signing_seed;
pub use password::{check_strength, Argon2Verifier, PasswordVerifier, StrengthReport};
