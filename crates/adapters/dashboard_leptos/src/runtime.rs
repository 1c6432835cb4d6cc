//! Browser event loop: `gloo-timers` for delays, `spawn_local` for tasks.

use std::future::Future;
use std::time::Duration;

use relaypanel_app::ports::Runtime;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static {
        gloo_timers::future::sleep(duration)
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        leptos::task::spawn_local(task);
    }
}
