//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use callerboard::api::{RecentCallersSource, SyncError};
use callerboard::callers::RecentResponse;
use callerboard::config::{BuildInfo, Mode};
use callerboard::store::{Actions, State, Store};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::oneshot;

// -- Payload helpers ----------------------------------------------------------

/// A caller record as the service sends it.
pub fn caller_json(caller_id: &str, date: &str, results: &[&str]) -> Value {
    json!({
        "caller_id": caller_id,
        "contactId": format!("contact-{}", caller_id),
        "date": date,
        "input": "18005551234",
        "results": results,
    })
}

/// A `GET /dev/recent` body.
pub fn recent_body(callers: Vec<Value>) -> Value {
    json!({ "recent": callers })
}

// -- Store helpers ------------------------------------------------------------

pub fn new_store() -> Store {
    Store::new(State::from_build(&BuildInfo {
        mode: Mode::Development,
        version: "9.9.9".into(),
    }))
}

pub fn make_actions(source: Arc<GatedSource>) -> Actions {
    Actions::new(new_store(), source)
}

/// Create a temporary config file with the given content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Source fakes -------------------------------------------------------------

enum Reply {
    Body(Value),
    Status(u16, String),
}

struct Scripted {
    reply: Reply,
    gate: Option<oneshot::Receiver<()>>,
}

/// Recent-callers source that answers from a script.
///
/// Replies are handed out in call order. A gated reply is held until its
/// sender fires, which lets tests decide the order in which calls settle.
#[derive(Default)]
pub struct GatedSource {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
}

impl GatedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_ready(&self, body: Value) {
        self.script.lock().push_back(Scripted {
            reply: Reply::Body(body),
            gate: None,
        });
    }

    pub fn push_gated(&self, body: Value) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().push_back(Scripted {
            reply: Reply::Body(body),
            gate: Some(rx),
        });
        tx
    }

    pub fn push_status(&self, status: u16, body: &str) {
        self.script.lock().push_back(Scripted {
            reply: Reply::Status(status, body.to_string()),
            gate: None,
        });
    }

    /// Number of fetches that have started.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Yield until `n` fetches have started.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl RecentCallersSource for GatedSource {
    async fn fetch_recent(&self) -> Result<RecentResponse, SyncError> {
        let scripted = self
            .script
            .lock()
            .pop_front()
            .expect("GatedSource called more often than scripted");
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }

        match scripted.reply {
            Reply::Body(body) => Ok(serde_json::from_value(body)?),
            Reply::Status(status, body) => Err(SyncError::Status { status, body }),
        }
    }
}
