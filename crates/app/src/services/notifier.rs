//! Notifier: shows a notification and hides it once its time is up.

use std::cell::RefCell;

use relaypanel_domain::notification::{NOTIFICATION_TTL, Notification};

use crate::ports::{Presenter, Runtime};
use crate::task::{TaskHandle, spawn_cancellable};

/// Displays one notification at a time.
///
/// A new notification replaces the visible one and cancels its pending
/// hide timer; nothing is queued.
pub struct Notifier<P, R> {
    presenter: P,
    runtime: R,
    pending_hide: RefCell<Option<TaskHandle>>,
}

impl<P, R> Notifier<P, R>
where
    P: Presenter + Clone + 'static,
    R: Runtime,
{
    pub fn new(presenter: P, runtime: R) -> Self {
        Self {
            presenter,
            runtime,
            pending_hide: RefCell::new(None),
        }
    }

    /// Show `notification` for [`NOTIFICATION_TTL`].
    pub fn notify(&self, notification: Notification) {
        if let Some(previous) = self.pending_hide.borrow_mut().take() {
            previous.cancel();
        }

        self.presenter.show_notification(&notification);

        let presenter = self.presenter.clone();
        let expired = self.runtime.sleep(NOTIFICATION_TTL);
        let hide = spawn_cancellable(&self.runtime, async move {
            expired.await;
            presenter.hide_notification();
        });
        *self.pending_hide.borrow_mut() = Some(hide);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::Duration;

    use relaypanel_domain::notification::Severity;

    use super::*;
    use crate::testing::{RecordingPresenter, TokioRuntime, run_local};

    fn make_notifier() -> (Notifier<Rc<RecordingPresenter>, TokioRuntime>, Rc<RecordingPresenter>) {
        let presenter = Rc::new(RecordingPresenter::default());
        (Notifier::new(Rc::clone(&presenter), TokioRuntime), presenter)
    }

    #[tokio::test(start_paused = true)]
    async fn should_show_notification_immediately() {
        run_local(async {
            let (notifier, presenter) = make_notifier();
            notifier.notify(Notification::success("Relay 1 turned ON"));

            let shown = presenter.visible_notification().unwrap();
            assert_eq!(shown.message, "Relay 1 turned ON");
            assert_eq!(shown.severity, Severity::Success);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_hide_after_exactly_three_seconds() {
        run_local(async {
            let (notifier, presenter) = make_notifier();
            notifier.notify(Notification::error("boom"));

            tokio::time::sleep(Duration::from_millis(2999)).await;
            assert!(presenter.visible_notification().is_some());

            tokio::time::sleep(Duration::from_millis(2)).await;
            assert!(presenter.visible_notification().is_none());
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_replace_visible_notification_and_restart_timer() {
        run_local(async {
            let (notifier, presenter) = make_notifier();
            notifier.notify(Notification::success("first"));

            tokio::time::sleep(Duration::from_millis(2000)).await;
            notifier.notify(Notification::error("second"));

            // The first timer would have fired at 3000 ms.
            tokio::time::sleep(Duration::from_millis(1500)).await;
            let shown = presenter.visible_notification().unwrap();
            assert_eq!(shown.message, "second");

            tokio::time::sleep(Duration::from_millis(1501)).await;
            assert!(presenter.visible_notification().is_none());
            assert_eq!(presenter.notifications.borrow().len(), 2);
        })
        .await;
    }
}
