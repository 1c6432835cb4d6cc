//! In-process test doubles for the panel-side ports.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;

use relaypanel_domain::error::TransportError;
use relaypanel_domain::node::NodeStatus;
use relaypanel_domain::notification::Notification;
use relaypanel_domain::relay::{RELAY_COUNT, RelayAction, RelayId};
use relaypanel_domain::wire::{BulkCommandReply, PingReply, RelayCommandReply};

use crate::ports::{Presenter, RelayApi, Runtime};

/// Runtime backed by the current tokio `LocalSet` and (paused) clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRuntime;

impl Runtime for TokioRuntime {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static {
        tokio::time::sleep(duration)
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        tokio::task::spawn_local(task);
    }
}

/// Drive `fut` inside a fresh `LocalSet` so `spawn_local` is available.
pub async fn run_local<F: Future>(fut: F) -> F::Output {
    tokio::task::LocalSet::new().run_until(fut).await
}

/// Presenter recording the latest rendered state.
#[derive(Debug)]
pub struct RecordingPresenter {
    pub relays: RefCell<[bool; RELAY_COUNT]>,
    pub busy: RefCell<[bool; RELAY_COUNT]>,
    pub master: RefCell<(String, bool)>,
    pub controls_enabled: RefCell<bool>,
    pub controls_toggles: RefCell<Vec<bool>>,
    pub node_status: RefCell<Option<NodeStatus>>,
    pub notification: RefCell<Option<Notification>>,
    pub notification_visible: RefCell<bool>,
    pub notifications: RefCell<Vec<Notification>>,
}

impl Default for RecordingPresenter {
    fn default() -> Self {
        Self {
            relays: RefCell::new([false; RELAY_COUNT]),
            busy: RefCell::new([false; RELAY_COUNT]),
            master: RefCell::new((String::new(), false)),
            controls_enabled: RefCell::new(true),
            controls_toggles: RefCell::new(Vec::new()),
            node_status: RefCell::new(None),
            notification: RefCell::new(None),
            notification_visible: RefCell::new(false),
            notifications: RefCell::new(Vec::new()),
        }
    }
}

impl RecordingPresenter {
    pub fn relay(&self, n: u8) -> bool {
        self.relays.borrow()[usize::from(n - 1)]
    }

    pub fn is_busy(&self, n: u8) -> bool {
        self.busy.borrow()[usize::from(n - 1)]
    }

    pub fn master_text(&self) -> String {
        self.master.borrow().0.clone()
    }

    /// The notification currently on screen, if any.
    pub fn visible_notification(&self) -> Option<Notification> {
        if *self.notification_visible.borrow() {
            self.notification.borrow().clone()
        } else {
            None
        }
    }

    pub fn last_notification(&self) -> Option<Notification> {
        self.notifications.borrow().last().cloned()
    }
}

impl Presenter for RecordingPresenter {
    fn render_relay(&self, id: RelayId, on: bool) {
        self.relays.borrow_mut()[usize::from(id.get() - 1)] = on;
    }

    fn set_relay_busy(&self, id: RelayId, busy: bool) {
        self.busy.borrow_mut()[usize::from(id.get() - 1)] = busy;
    }

    fn render_master(&self, text: &str, busy: bool) {
        *self.master.borrow_mut() = (text.to_string(), busy);
    }

    fn set_controls_enabled(&self, enabled: bool) {
        *self.controls_enabled.borrow_mut() = enabled;
        self.controls_toggles.borrow_mut().push(enabled);
    }

    fn render_node_status(&self, status: NodeStatus) {
        *self.node_status.borrow_mut() = Some(status);
    }

    fn show_notification(&self, notification: &Notification) {
        *self.notification.borrow_mut() = Some(notification.clone());
        *self.notification_visible.borrow_mut() = true;
        self.notifications.borrow_mut().push(notification.clone());
    }

    fn hide_notification(&self) {
        *self.notification_visible.borrow_mut() = false;
    }
}

/// Relay API answering from queues of scripted replies.
///
/// An empty queue answers with a transport error so unexpected calls fail
/// loudly in assertions. Relay and bulk replies can be held back until the
/// test releases them, to observe the panel while a command is in flight.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    pub relay_replies: RefCell<VecDeque<Result<RelayCommandReply, TransportError>>>,
    pub bulk_replies: RefCell<VecDeque<Result<BulkCommandReply, TransportError>>>,
    pub health_replies: RefCell<VecDeque<Result<bool, TransportError>>>,
    pub ping_replies: RefCell<VecDeque<Result<PingReply, TransportError>>>,
    pub calls: RefCell<Vec<String>>,
    relay_gate: RefCell<Option<oneshot::Receiver<()>>>,
    bulk_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl ScriptedApi {
    pub fn with_relay_reply(self, reply: Result<RelayCommandReply, TransportError>) -> Self {
        self.relay_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn with_bulk_reply(self, reply: Result<BulkCommandReply, TransportError>) -> Self {
        self.bulk_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn with_health_reply(self, reply: Result<bool, TransportError>) -> Self {
        self.health_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn with_ping_reply(self, reply: Result<PingReply, TransportError>) -> Self {
        self.ping_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn ping_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.as_str() == "GET /api/ping")
            .count()
    }

    /// Hold the next relay reply until the returned sender fires.
    pub fn hold_relay_reply(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *self.relay_gate.borrow_mut() = Some(gate);
        release
    }

    /// Hold the next bulk reply until the returned sender fires.
    pub fn hold_bulk_reply(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *self.bulk_gate.borrow_mut() = Some(gate);
        release
    }

    async fn wait_for(gate: &RefCell<Option<oneshot::Receiver<()>>>) {
        let pending = gate.borrow_mut().take();
        if let Some(pending) = pending {
            let _ = pending.await;
        }
    }

    fn next<T>(queue: &RefCell<VecDeque<Result<T, TransportError>>>) -> Result<T, TransportError> {
        queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted reply")))
    }
}

impl RelayApi for ScriptedApi {
    async fn switch_relay(
        &self,
        id: RelayId,
        action: RelayAction,
    ) -> Result<RelayCommandReply, TransportError> {
        self.calls
            .borrow_mut()
            .push(format!("POST /api/relay/{id}/{action}"));
        Self::wait_for(&self.relay_gate).await;
        Self::next(&self.relay_replies)
    }

    async fn switch_all(&self, action: RelayAction) -> Result<BulkCommandReply, TransportError> {
        self.calls
            .borrow_mut()
            .push(format!("POST /api/relay/all/{action}"));
        Self::wait_for(&self.bulk_gate).await;
        Self::next(&self.bulk_replies)
    }

    async fn health(&self) -> Result<bool, TransportError> {
        self.calls.borrow_mut().push("GET /api/health".to_string());
        Self::next(&self.health_replies)
    }

    async fn ping(&self) -> Result<PingReply, TransportError> {
        self.calls.borrow_mut().push("GET /api/ping".to_string());
        Self::next(&self.ping_replies)
    }
}

pub fn relay(n: u8) -> RelayId {
    RelayId::new(n).unwrap()
}
