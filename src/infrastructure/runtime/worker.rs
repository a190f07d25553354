//! Async worker - runs in Tokio runtime and performs the HTTP calls

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error};

use crate::domain::dashboard::QuickActionRequest;
use crate::infrastructure::api::DashboardApi;
use crate::infrastructure::runtime::bridge::{RuntimeCommand, RuntimeEvent};

/// Run the async worker loop until shutdown or until the bridge is dropped.
///
/// Every command runs as its own task: a stats refresh and any number of
/// quick actions may be in flight at once and complete in any order.
pub async fn run_async_worker(
    api: Arc<dyn DashboardApi>,
    mut cmd_rx: UnboundedReceiver<RuntimeCommand>,
    evt_tx: Sender<RuntimeEvent>,
    auto_refresh: Option<Duration>,
) {
    let mut ticker = auto_refresh.map(|period| {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    });

    loop {
        let cmd = match ticker.as_mut() {
            Some(ticker) => tokio::select! {
                cmd = cmd_rx.recv() => cmd,
                _ = ticker.tick() => {
                    debug!("periodic stats refresh");
                    Some(RuntimeCommand::RefreshStats)
                }
            },
            None => cmd_rx.recv().await,
        };

        let Some(cmd) = cmd else {
            debug!("command channel closed, worker exiting");
            return;
        };

        match cmd {
            RuntimeCommand::Shutdown => {
                debug!("worker shutdown requested");
                return;
            }
            RuntimeCommand::RefreshStats => {
                tokio::spawn(refresh_stats(api.clone(), evt_tx.clone()));
            }
            RuntimeCommand::SubmitQuickAction { request } => {
                tokio::spawn(submit_quick_action(api.clone(), evt_tx.clone(), request));
            }
        }
    }
}

async fn refresh_stats(api: Arc<dyn DashboardApi>, evt_tx: Sender<RuntimeEvent>) {
    match api.fetch_stats().await {
        Ok(stats) => {
            debug!(?stats, "dashboard stats received");
            let _ = evt_tx.send(RuntimeEvent::StatsReady { stats });
        }
        // Stats failures stay in the log; the counters keep their last values.
        Err(err) => error!(error = %err, "Error fetching dashboard stats"),
    }
}

async fn submit_quick_action(
    api: Arc<dyn DashboardApi>,
    evt_tx: Sender<RuntimeEvent>,
    request: QuickActionRequest,
) {
    debug!(action = %request.action, lead_id = %request.lead_id, "submitting quick action");
    let event = match api.submit_quick_action(&request).await {
        Ok(response) => RuntimeEvent::QuickActionCompleted { request, response },
        Err(err) => {
            error!(
                error = %err,
                action = %request.action,
                lead_id = %request.lead_id,
                "Error performing quick action"
            );
            RuntimeEvent::QuickActionFailed {
                request,
                message: err.to_string(),
            }
        }
    };
    let _ = evt_tx.send(event);
}
