//! Async sleep that works in the browser and in native builds.
//!
//! The browser path rides on `setTimeout` through `gloo-timers`. Native
//! builds (SSR and tests) park a helper thread and resolve through a
//! oneshot channel, so no async runtime is required.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

/// Resolve after `duration` has elapsed.
#[cfg(feature = "hydrate")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Resolve after `duration` has elapsed.
#[cfg(not(feature = "hydrate"))]
pub async fn sleep(duration: Duration) {
    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    std::thread::spawn(move || {
        std::thread::sleep(duration);
        let _ = tx.send(());
    });
    // Err only if the timer thread panicked.
    let _ = rx.await;
}
