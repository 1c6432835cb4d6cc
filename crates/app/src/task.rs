//! Cancellable background tasks.
//!
//! Timers and intervals of the panel are spawned through [`spawn_cancellable`]
//! so their lifetime is tied to a [`TaskHandle`] owned by whoever started them.

use std::future::Future;

use tokio::sync::oneshot;

use crate::ports::Runtime;

/// Owner of a background task spawned with [`spawn_cancellable`].
///
/// The task stops at its next suspension point when the handle is cancelled
/// or dropped.
#[derive(Debug)]
#[must_use = "dropping a TaskHandle cancels the task"]
pub struct TaskHandle {
    cancel: Option<oneshot::Sender<()>>,
}

impl TaskHandle {
    /// Stop the task.
    pub fn cancel(mut self) {
        self.stop();
    }

    /// Whether the task already ran to completion or was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cancel.as_ref().is_none_or(oneshot::Sender::is_closed)
    }

    fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            // The receiver is gone when the task already finished.
            let _ = cancel.send(());
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn `task` on `runtime`, returning a handle that cancels it.
pub fn spawn_cancellable<R, F>(runtime: &R, task: F) -> TaskHandle
where
    R: Runtime,
    F: Future<Output = ()> + 'static,
{
    let (cancel, cancelled) = oneshot::channel::<()>();
    runtime.spawn(async move {
        tokio::select! {
            biased;
            _ = cancelled => {}
            () = task => {}
        }
    });
    TaskHandle {
        cancel: Some(cancel),
    }
}
