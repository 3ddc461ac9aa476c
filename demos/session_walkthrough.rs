//! Session walkthrough demo
//!
//! Drives the whole session state machine the way the popup shell does:
//! create a wallet, lock, unlock, and finally log out, printing the screen
//! mode after every step.
//!
//! Run with: cargo run --example session_walkthrough

use crucible_core::session::{commit_new_wallet, create_wallet, return_to_welcome};
use crucible_core::storage::MemoryKv;
use crucible_core::{Argon2Verifier, ScreenMode, SessionStore, UnlockGate};

#[tokio::main]
async fn main() {
    let password = "Correct-horse-9";

    // Fresh install: hydrate from an empty store
    let mut store = SessionStore::new(MemoryKv::new());
    let mut gate = UnlockGate::new(Argon2Verifier);

    store.hydrate().await;
    println!("after hydration:     {:?}", ScreenMode::for_state(store.state()));
    println!("  view = {}", store.state().view);

    // Create a wallet and show the phrase once
    let new_wallet = create_wallet(&mut store, &Argon2Verifier, password)
        .await
        .expect("wallet creation");
    println!("\nseed phrase (write it down!):");
    println!("  {}", new_wallet.seed_phrase.phrase());
    println!("  address: {}", new_wallet.identity.address);

    commit_new_wallet(&mut store, new_wallet.identity).await;
    println!("\nafter commit:        {:?}", ScreenMode::for_state(store.state()));
    println!("  view = {}", store.state().view);

    // Leaving the dashboard re-locks the session
    return_to_welcome(&mut store).await;
    println!("\nafter back:          {:?}", ScreenMode::for_state(store.state()));

    // A wrong password is rejected and retryable
    if gate.unlock(&mut store, "wrong password").await.is_err() {
        println!("\nwrong password:      {:?}", gate.last_error());
    }

    gate.unlock(&mut store, password).await.expect("unlock");
    println!("after unlock:        {:?}", ScreenMode::for_state(store.state()));

    // Logout forgets the wallet entirely
    gate.logout(&mut store).await;
    println!("\nafter logout:        {:?}", ScreenMode::for_state(store.state()));
    println!("  view = {}", store.state().view);
    println!("  wallet = {:?}", store.state().wallet);
}
