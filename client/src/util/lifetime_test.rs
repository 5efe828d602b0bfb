use leptos::prelude::Owner;

use super::*;

#[test]
fn new_token_is_alive() {
    assert!(LifetimeToken::new().is_alive());
}

#[test]
fn cancel_is_shared_by_clones() {
    let token = LifetimeToken::new();
    let held_by_task = token.clone();
    token.cancel();
    assert!(!held_by_task.is_alive());
}

#[test]
fn owner_cleanup_cancels_token() {
    let owner = Owner::new();
    let token = owner.with(LifetimeToken::for_current_owner);
    assert!(token.is_alive());
    owner.cleanup();
    assert!(!token.is_alive());
}
