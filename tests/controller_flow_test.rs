//! Dashboard controller end to end
//!
//! Drives `App` through `pump_background` and a live `RuntimeBridge`
//! against a stub CRM:
//! 1. Initial stats refresh lands in the counters
//! 2. Successful quick action alerts and resets the form
//! 3. Rejected quick action alerts with the server message
//! 4. Validation failure sends nothing
//! 5. Transport failure shows the generic alert

mod common;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use axum::http::StatusCode;
use leaddash::app::{pump_background, App};
use leaddash::config::Config;
use leaddash::domain::dashboard::{ElementId, Locale, Messages, NotificationLevel, Page};
use leaddash::headless;
use leaddash::infrastructure::api::{ApiSettings, DashboardApi, HttpDashboardApi};
use leaddash::infrastructure::runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
use serde_json::json;

use common::{closed_base_url, spawn_stub};

const STATS_BODY: &str =
    r#"{"total_leads": 1500, "leads_convertidos": 300, "leads_novos": 0, "taxa_conversao": 20.0}"#;
const OK_BODY: &str = r#"{"status": "sucesso", "mensagem": "ok"}"#;

fn api(base_url: &str) -> Arc<dyn DashboardApi> {
    Arc::new(HttpDashboardApi::new(&ApiSettings::new(base_url)).expect("valid settings"))
}

fn config(base_url: &str, refresh_on_start: bool) -> Config {
    Config {
        base_url: base_url.to_string(),
        refresh_on_start,
        ..Config::default()
    }
}

/// Pump until `done` holds or two seconds pass
fn pump_until(app: &mut App, runtime: &RuntimeBridge, done: impl Fn(&App) -> bool) -> bool {
    for _ in 0..200 {
        pump_background(app, runtime);
        if done(app) {
            return true;
        }
        thread::sleep(Duration::from_millis(10));
    }
    false
}

/// First event the worker emits within `timeout`
fn next_event(runtime: &RuntimeBridge, timeout: Duration) -> Option<RuntimeEvent> {
    let deadline = std::time::Instant::now() + timeout;
    while std::time::Instant::now() < deadline {
        if let Some(event) = runtime.poll_events().into_iter().next() {
            return Some(event);
        }
        thread::sleep(Duration::from_millis(10));
    }
    None
}

#[tokio::test(flavor = "multi_thread")]
async fn test_initial_refresh_fills_counters() {
    let stub = spawn_stub(STATS_BODY, StatusCode::OK, OK_BODY).await;
    let mut app = App::new(&config(&stub.base_url, true));
    let runtime = RuntimeBridge::new(api(&stub.base_url), None).unwrap();

    assert!(pump_until(&mut app, &runtime, |app| app.last_refresh.is_some()));
    assert_eq!(app.page.text(ElementId::TotalLeads), Some("1,500"));
    assert_eq!(app.page.text(ElementId::LeadsConvertidos), Some("300"));
    // zero is falsy, so the placeholder stays
    assert_eq!(app.page.text(ElementId::LeadsNovos), Some(Page::PLACEHOLDER));
    assert_eq!(app.page.text(ElementId::TaxaConversao), Some("20%"));
    assert_eq!(stub.stats_hits(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_successful_quick_action_resets_form() {
    let stub = spawn_stub("{}", StatusCode::OK, OK_BODY).await;
    let mut app = App::new(&config(&stub.base_url, false));
    let runtime = RuntimeBridge::new(api(&stub.base_url), None).unwrap();

    assert!(app.form.select_action("convertido"));
    app.form.set_lead_id("7");
    app.submit_quick_action();

    assert!(pump_until(&mut app, &runtime, |app| app.current_alert().is_some()));
    let alert = app.current_alert().unwrap();
    assert_eq!(alert.level, NotificationLevel::Success);
    assert_eq!(alert.text, "Ação realizada com sucesso!");
    assert_eq!(app.form.action_value(), "");
    assert_eq!(app.form.lead_id(), "");

    let received = stub.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].body, json!({"action": "convertido", "lead_id": "7"}));
    assert_eq!(stub.stats_hits(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_quick_action_keeps_form() {
    let stub = spawn_stub(
        "{}",
        StatusCode::BAD_REQUEST,
        r#"{"status": "erro", "mensagem": "Lead não encontrado"}"#,
    )
    .await;
    let mut app = App::new(&config(&stub.base_url, false));
    let runtime = RuntimeBridge::new(api(&stub.base_url), None).unwrap();

    app.form.select_action("perdido");
    app.form.set_lead_id("404");
    app.submit_quick_action();

    assert!(pump_until(&mut app, &runtime, |app| app.current_alert().is_some()));
    let alert = app.current_alert().unwrap();
    assert_eq!(alert.level, NotificationLevel::Error);
    assert_eq!(alert.text, "Erro: Lead não encontrado");
    assert_eq!(app.form.action_value(), "perdido");
    assert_eq!(app.form.lead_id(), "404");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_action_sends_nothing() {
    let stub = spawn_stub("{}", StatusCode::OK, OK_BODY).await;
    let mut app = App::new(&config(&stub.base_url, false));
    let runtime = RuntimeBridge::new(api(&stub.base_url), None).unwrap();

    app.form.set_lead_id("12");
    app.submit_quick_action();

    let alert = app.current_alert().expect("validation alert");
    assert_eq!(alert.text, "Por favor, selecione uma ação e um lead.");

    pump_background(&mut app, &runtime);
    thread::sleep(Duration::from_millis(200));
    pump_background(&mut app, &runtime);
    assert!(stub.received().is_empty());
    assert_eq!(app.alerts.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_double_submit_sends_two_requests() {
    let stub = spawn_stub("{}", StatusCode::OK, OK_BODY).await;
    let mut app = App::new(&config(&stub.base_url, false));
    let runtime = RuntimeBridge::new(api(&stub.base_url), None).unwrap();

    app.form.select_action("em_contato");
    app.form.set_lead_id("3");
    app.submit_quick_action();
    app.submit_quick_action();

    assert!(pump_until(&mut app, &runtime, |app| app.alerts.len() == 2));
    assert_eq!(stub.received().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_backend_shows_generic_alert() {
    let base_url = closed_base_url().await;
    let mut app = App::new(&config(&base_url, false));
    let runtime = RuntimeBridge::new(api(&base_url), None).unwrap();

    app.form.select_action("em_contato");
    app.form.set_lead_id("5");
    app.submit_quick_action();

    assert!(pump_until(&mut app, &runtime, |app| app.current_alert().is_some()));
    let alert = app.current_alert().unwrap();
    assert_eq!(alert.level, NotificationLevel::Error);
    assert_eq!(
        alert.text,
        "Ocorreu um erro ao executar a ação. Tente novamente."
    );
    assert_eq!(app.form.lead_id(), "5");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stats_failure_emits_no_event() {
    let base_url = closed_base_url().await;
    let runtime = RuntimeBridge::new(api(&base_url), None).unwrap();

    runtime.send(RuntimeCommand::RefreshStats).unwrap();
    assert!(next_event(&runtime, Duration::from_millis(500)).is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_auto_refresh_fires_without_commands() {
    let stub = spawn_stub(STATS_BODY, StatusCode::OK, OK_BODY).await;
    let runtime =
        RuntimeBridge::new(api(&stub.base_url), Some(Duration::from_millis(50))).unwrap();

    match next_event(&runtime, Duration::from_secs(2)) {
        Some(RuntimeEvent::StatsReady { stats }) => assert_eq!(stats.total_leads, Some(1500)),
        other => panic!("expected stats, got {other:?}"),
    }
}

#[tokio::test]
async fn test_headless_stats_lines() {
    let stub = spawn_stub(r#"{"total_leads": 2500000}"#, StatusCode::OK, OK_BODY).await;
    let messages = Messages::new(Locale::PtBr);
    let api = api(&stub.base_url);

    let page = headless::fetch_stats_page(api.as_ref(), &messages)
        .await
        .unwrap();
    let lines = headless::stats_lines(&page);
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with(": 2,500,000"), "got {}", lines[0]);
    assert!(lines[1..].iter().all(|line| line.ends_with(": --")));
}

#[tokio::test]
async fn test_headless_quick_action() {
    let stub = spawn_stub("{}", StatusCode::OK, OK_BODY).await;
    let messages = Messages::new(Locale::PtBr);
    let api = api(&stub.base_url);

    let invalid = headless::run_quick_action(api.as_ref(), &messages, "", "8").await;
    assert_eq!(invalid.level, NotificationLevel::Warn);
    assert!(stub.received().is_empty());

    let done = headless::run_quick_action(api.as_ref(), &messages, "convertido", "8").await;
    assert!(done.is_success());
    assert_eq!(stub.received().len(), 1);
}

#[tokio::test]
async fn test_headless_quick_action_with_loose_mensagem() {
    let messages = Messages::new(Locale::PtBr);

    let stub = spawn_stub("{}", StatusCode::OK, r#"{"status": "sucesso", "mensagem": null}"#).await;
    let done =
        headless::run_quick_action(api(&stub.base_url).as_ref(), &messages, "convertido", "8").await;
    assert!(done.is_success());
    assert_eq!(done.text, "Ação realizada com sucesso!");

    let stub = spawn_stub(
        "{}",
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"status": "erro", "mensagem": 17}"#,
    )
    .await;
    let rejected =
        headless::run_quick_action(api(&stub.base_url).as_ref(), &messages, "convertido", "8").await;
    assert_eq!(rejected.level, NotificationLevel::Error);
    assert_eq!(rejected.text, "Erro: 17");
}

#[tokio::test]
async fn test_headless_stats_with_one_bad_field() {
    let stub = spawn_stub(
        r#"{"total_leads": 1500, "taxa_conversao": "20.5%"}"#,
        StatusCode::OK,
        OK_BODY,
    )
    .await;
    let messages = Messages::new(Locale::PtBr);

    let page = headless::fetch_stats_page(api(&stub.base_url).as_ref(), &messages)
        .await
        .unwrap();
    assert_eq!(page.text(ElementId::TotalLeads), Some("1,500"));
    assert_eq!(page.text(ElementId::TaxaConversao), Some(Page::PLACEHOLDER));
}
