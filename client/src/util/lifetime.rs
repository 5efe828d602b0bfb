//! Component liveness token.
//!
//! A page spawns futures that outlive its event handlers. Each future holds
//! a clone of the page's token and checks it before touching page state;
//! `on_cleanup` flips the token when the page unmounts.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct LifetimeToken {
    alive: Arc<AtomicBool>,
}

impl Default for LifetimeToken {
    fn default() -> Self {
        Self::new()
    }
}

impl LifetimeToken {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the owner as gone. Every clone observes it.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Create a token that is cancelled when the current reactive owner is
    /// cleaned up.
    pub fn for_current_owner() -> Self {
        let token = Self::new();
        let on_drop = token.clone();
        leptos::prelude::on_cleanup(move || on_drop.cancel());
        token
    }
}
