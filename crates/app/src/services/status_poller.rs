//! Status poller: keeps the node status pill up to date.

use std::rc::Rc;
use std::time::Duration;

use relaypanel_domain::node::NodeStatus;

use crate::ports::{Presenter, RelayApi, Runtime};
use crate::task::{TaskHandle, spawn_cancellable};

/// Delay between two liveness checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Periodically pings the node and renders the result.
///
/// No backoff, no jitter: a check runs right away and then every
/// [`POLL_INTERVAL`] until the task is stopped. Each check runs as its own
/// task, so a slow or unanswered ping never delays the next one.
pub struct StatusPoller<A, P, R> {
    api: A,
    presenter: P,
    runtime: R,
    interval: Duration,
}

impl<A, P, R> StatusPoller<A, P, R>
where
    A: RelayApi + 'static,
    P: Presenter + 'static,
    R: Runtime + Clone + 'static,
{
    pub fn new(api: A, presenter: P, runtime: R) -> Self {
        Self {
            api,
            presenter,
            runtime,
            interval: POLL_INTERVAL,
        }
    }

    /// Override the delay between checks.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Ping the node once and render the outcome.
    ///
    /// Any failure (unreachable node, undecodable reply) counts as offline.
    pub async fn check_once(&self) -> NodeStatus {
        let status = match self.api.ping().await {
            Ok(reply) => NodeStatus::from_online(reply.online),
            Err(err) => {
                tracing::debug!(error = %err, "node ping failed");
                NodeStatus::Offline
            }
        };
        self.presenter.render_node_status(status);
        status
    }

    /// Start polling in the background.
    ///
    /// Stopping the returned handle also abandons the checks still waiting
    /// for an answer.
    pub fn start(self) -> TaskHandle {
        let runtime = self.runtime.clone();
        let poller = Rc::new(self);
        spawn_cancellable(&runtime, async move {
            let mut in_flight: Vec<TaskHandle> = Vec::new();
            loop {
                in_flight.retain(|check| !check.is_finished());
                let check = Rc::clone(&poller);
                in_flight.push(spawn_cancellable(&poller.runtime, async move {
                    check.check_once().await;
                }));
                poller.runtime.sleep(poller.interval).await;
            }
        })
    }
}
