//! Failure diagnostics
//!
//! Transport failures on either endpoint must leave an `ERROR` line in the
//! log, both from the runtime worker and from the one-shot commands.

mod common;

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use leaddash::domain::dashboard::{Locale, Messages, QuickActionRequest};
use leaddash::headless;
use leaddash::infrastructure::api::{ApiSettings, DashboardApi, HttpDashboardApi};
use leaddash::infrastructure::runtime::{run_async_worker, RuntimeCommand, RuntimeEvent};
use tokio::sync::mpsc::unbounded_channel;

use common::{closed_base_url, LogCapture};

const STATS_ERROR: &str = "Error fetching dashboard stats";
const ACTION_ERROR: &str = "Error performing quick action";

fn api(base_url: &str) -> Arc<dyn DashboardApi> {
    Arc::new(HttpDashboardApi::new(&ApiSettings::new(base_url)).expect("valid settings"))
}

// Current-thread runtime: spawned worker tasks log through the guard's
// thread-local subscriber.
#[tokio::test]
async fn test_worker_logs_transport_failures() {
    let logs = LogCapture::default();
    let _guard = logs.install();

    let (cmd_tx, cmd_rx) = unbounded_channel();
    let (evt_tx, evt_rx) = mpsc::channel();
    let worker = tokio::spawn(run_async_worker(
        api(&closed_base_url().await),
        cmd_rx,
        evt_tx,
        None,
    ));

    cmd_tx.send(RuntimeCommand::RefreshStats).unwrap();
    cmd_tx
        .send(RuntimeCommand::SubmitQuickAction {
            request: QuickActionRequest::from_form("em_contato", "1").unwrap(),
        })
        .unwrap();

    for _ in 0..200 {
        if logs.contains("ERROR", STATS_ERROR) && logs.contains("ERROR", ACTION_ERROR) {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(logs.contains("ERROR", STATS_ERROR), "logs: {:?}", logs.lines());
    assert!(logs.contains("ERROR", ACTION_ERROR), "logs: {:?}", logs.lines());

    // the stats failure stays silent, the quick action failure is reported
    let events: Vec<RuntimeEvent> = evt_rx.try_iter().collect();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], RuntimeEvent::QuickActionFailed { .. }));

    cmd_tx.send(RuntimeCommand::Shutdown).unwrap();
    worker.await.unwrap();
}

#[tokio::test]
async fn test_headless_logs_transport_failures() {
    let logs = LogCapture::default();
    let _guard = logs.install();
    let api = api(&closed_base_url().await);
    let messages = Messages::new(Locale::PtBr);

    assert!(headless::fetch_stats_page(api.as_ref(), &messages).await.is_err());
    assert!(logs.contains("ERROR", STATS_ERROR), "logs: {:?}", logs.lines());

    let notification = headless::run_quick_action(api.as_ref(), &messages, "perdido", "2").await;
    assert!(!notification.is_success());
    assert!(logs.contains("ERROR", ACTION_ERROR), "logs: {:?}", logs.lines());
}

#[tokio::test]
async fn test_validation_failure_logs_no_error() {
    let logs = LogCapture::default();
    let _guard = logs.install();
    let api = api(&closed_base_url().await);

    let notification =
        headless::run_quick_action(api.as_ref(), &Messages::new(Locale::PtBr), "", "2").await;
    assert!(!notification.is_success());
    assert!(!logs.contains("ERROR", ACTION_ERROR));
}
