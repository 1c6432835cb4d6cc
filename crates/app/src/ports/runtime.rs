//! Runtime port: timers and task spawning of the hosting event loop.
//!
//! The browser dashboard backs this with `gloo-timers` and
//! `leptos::task::spawn_local`; tests back it with a paused tokio clock.

use std::future::Future;
use std::time::Duration;

/// Single-threaded executor services needed by the panel.
pub trait Runtime {
    /// Resolve after `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static;

    /// Run `task` in the background on the current thread.
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static;
}
