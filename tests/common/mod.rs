//! In-process stub of the CRM dashboard endpoints

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;

/// One request seen by the quick action route
#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub cookie: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct StubState {
    stats_body: Arc<String>,
    action_status: StatusCode,
    action_body: Arc<String>,
    stats_hits: Arc<Mutex<usize>>,
    received: Arc<Mutex<Vec<Received>>>,
}

pub struct StubCrm {
    pub base_url: String,
    stats_hits: Arc<Mutex<usize>>,
    received: Arc<Mutex<Vec<Received>>>,
}

impl StubCrm {
    pub fn stats_hits(&self) -> usize {
        *self.stats_hits.lock().unwrap()
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

/// Stub answering stats with `stats_body` and quick actions with
/// `action_status` + `action_body`
pub async fn spawn_stub(stats_body: &str, action_status: StatusCode, action_body: &str) -> StubCrm {
    let state = StubState {
        stats_body: Arc::new(stats_body.to_string()),
        action_status,
        action_body: Arc::new(action_body.to_string()),
        stats_hits: Arc::new(Mutex::new(0)),
        received: Arc::new(Mutex::new(Vec::new())),
    };
    let stub = StubCrm {
        base_url: String::new(),
        stats_hits: state.stats_hits.clone(),
        received: state.received.clone(),
    };

    let app = Router::new()
        .route("/api/dashboard/stats", get(stats))
        .route("/api/quick-action", post(quick_action))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubCrm {
        base_url: format!("http://{addr}"),
        ..stub
    }
}

/// Base URL of a port nothing listens on
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn stats(State(state): State<StubState>) -> impl IntoResponse {
    *state.stats_hits.lock().unwrap() += 1;
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        state.stats_body.to_string(),
    )
}

async fn quick_action(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let received = Received {
        content_type: header_text(header::CONTENT_TYPE),
        cookie: header_text(header::COOKIE),
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
    };
    state.received.lock().unwrap().push(received);
    (
        state.action_status,
        [(header::CONTENT_TYPE, "application/json")],
        state.action_body.to_string(),
    )
}

/// Formatted tracing output collected in memory
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CaptureWriter {
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    /// Route events on the current thread into this capture until the
    /// guard drops
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let buf = self.buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || CaptureWriter(buf.clone()))
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.buf.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// True when one line carries both `level` and `message`
    pub fn contains(&self, level: &str, message: &str) -> bool {
        self.lines()
            .iter()
            .any(|line| line.contains(level) && line.contains(message))
    }
}
