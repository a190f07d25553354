//! Runtime bridge - connects sync TUI thread with async Tokio runtime
//!
//! The TUI thread owns all page state and never blocks on the network.
//! Commands go to a worker running on its own Tokio runtime; results come
//! back as events the UI loop drains once per tick.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

use crate::domain::dashboard::{DashboardStats, QuickActionRequest, QuickActionResponse};
use crate::infrastructure::api::DashboardApi;
use crate::infrastructure::runtime::worker::run_async_worker;

/// Commands sent from the TUI to the async worker
#[derive(Debug, Clone)]
pub enum RuntimeCommand {
    /// Fetch dashboard counters
    RefreshStats,
    /// Submit a validated quick action
    SubmitQuickAction { request: QuickActionRequest },
    /// Shutdown the worker
    Shutdown,
}

/// Events sent from the async worker to the TUI
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    /// Stats fetched and parsed
    StatsReady { stats: DashboardStats },
    /// Quick action answered with a well-formed body (success or not)
    QuickActionCompleted {
        request: QuickActionRequest,
        response: QuickActionResponse,
    },
    /// Quick action never completed or its body was malformed
    QuickActionFailed {
        request: QuickActionRequest,
        message: String,
    },
}

/// Bridge between sync TUI thread and async Tokio runtime
pub struct RuntimeBridge {
    cmd_tx: UnboundedSender<RuntimeCommand>,
    evt_rx: Receiver<RuntimeEvent>,
}

impl RuntimeBridge {
    /// Start the worker thread. `auto_refresh` enables periodic stats
    /// refreshes; the first one fires a full period after start.
    pub fn new(api: Arc<dyn DashboardApi>, auto_refresh: Option<Duration>) -> anyhow::Result<Self> {
        let (cmd_tx, cmd_rx) = unbounded_channel::<RuntimeCommand>();
        let (evt_tx, evt_rx) = mpsc::channel::<RuntimeEvent>();
        let auto_refresh = auto_refresh.filter(|period| !period.is_zero());

        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to create Tokio runtime")?;

        thread::Builder::new()
            .name("leaddash-runtime".to_string())
            .spawn(move || {
                rt.block_on(run_async_worker(api, cmd_rx, evt_tx, auto_refresh));
            })
            .context("Failed to spawn runtime thread")?;

        Ok(Self { cmd_tx, evt_rx })
    }

    /// Send a command to the async worker
    pub fn send(&self, cmd: RuntimeCommand) -> anyhow::Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow::anyhow!("Worker channel closed"))
    }

    /// Poll for events (non-blocking)
    pub fn poll_events(&self) -> Vec<RuntimeEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.evt_rx.try_recv() {
            events.push(evt);
        }
        events
    }
}

impl Drop for RuntimeBridge {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(RuntimeCommand::Shutdown);
    }
}
