#![cfg(not(feature = "hydrate"))]

use std::time::{Duration, Instant};

use futures::executor::block_on;

use super::*;

#[test]
fn sleep_waits_at_least_the_requested_duration() {
    let started = Instant::now();
    block_on(sleep(Duration::from_millis(50)));
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[test]
fn zero_sleep_resolves() {
    block_on(sleep(Duration::ZERO));
}
