// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Line-delimited JSON-RPC 2.0 client used to reach the backend process.

use std::collections::HashMap;
use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command as ProcessCommand};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::bridge::CommandBridge;
use crate::command::Command;
use crate::config::BackendSettings;
use crate::error::{AccreditError, Result};

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    #[serde(default)]
    #[allow(dead_code)]
    code: i32,
    message: String,
}

#[derive(Default)]
struct Pending {
    closed: bool,
    waiters: HashMap<u64, oneshot::Sender<Result<Value>>>,
}

fn lock(pending: &Mutex<Pending>) -> MutexGuard<'_, Pending> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One JSON-RPC session over a byte stream pair. Calls may overlap; answers
/// are matched to callers by id.
pub struct RpcConnection {
    writer: tokio::sync::Mutex<Box<dyn AsyncWrite + Send + Unpin>>,
    pending: Arc<Mutex<Pending>>,
    next_id: AtomicU64,
    reader: JoinHandle<()>,
}

impl RpcConnection {
    /// Must be called from within a tokio runtime.
    pub fn new<R, W>(reader: R, writer: W) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        let pending = Arc::new(Mutex::new(Pending::default()));
        let reader = tokio::spawn(read_responses(reader, pending.clone()));
        Self {
            writer: tokio::sync::Mutex::new(Box::new(writer)),
            pending,
            next_id: AtomicU64::new(1),
            reader,
        }
    }

    pub fn is_closed(&self) -> bool {
        lock(&self.pending).closed
    }

    pub async fn call(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let rx = {
            let mut pending = lock(&self.pending);
            if pending.closed {
                return Err(AccreditError::Disconnected);
            }
            let (tx, rx) = oneshot::channel();
            pending.waiters.insert(id, tx);
            rx
        };

        if let Err(e) = self.send(id, method, params).await {
            lock(&self.pending).waiters.remove(&id);
            return Err(e);
        }

        rx.await.map_err(|_| AccreditError::Disconnected)?
    }

    async fn send(&self, id: u64, method: &str, params: Value) -> Result<()> {
        let mut line = serde_json::to_string(&RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        })?;
        line.push('\n');

        let mut writer = self.writer.lock().await;
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }
}

impl Drop for RpcConnection {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

async fn read_responses<R>(reader: R, pending: Arc<Mutex<Pending>>)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => {
                debug!("backend closed its output");
                break;
            }
            Ok(_) => match std::str::from_utf8(&buf) {
                Ok(line) => dispatch(&pending, line),
                Err(e) => warn!("ignoring backend output that is not UTF-8: {e}"),
            },
            Err(e) => {
                warn!("failed to read from backend: {e}");
                break;
            }
        }
    }

    let waiters = {
        let mut pending = lock(&pending);
        pending.closed = true;
        std::mem::take(&mut pending.waiters)
    };
    for (_, tx) in waiters {
        let _ = tx.send(Err(AccreditError::Disconnected));
    }
}

fn dispatch(pending: &Mutex<Pending>, line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }

    let response: RpcResponse = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!("ignoring backend output that is not a response: {e}");
            return;
        }
    };
    let Some(id) = response.id.as_ref().and_then(Value::as_u64) else {
        warn!("ignoring response without a numeric id");
        return;
    };
    let Some(tx) = lock(pending).waiters.remove(&id) else {
        warn!(id, "ignoring response for unknown request");
        return;
    };

    let outcome = match response.error {
        Some(err) => Err(AccreditError::Rejected(err.message)),
        None => Ok(response.result.unwrap_or(Value::Null)),
    };
    let _ = tx.send(outcome);
}

struct Running {
    _child: Child,
    connection: Arc<RpcConnection>,
}

/// Runs the backend as a child process and talks JSON-RPC over its stdio.
/// The process is started on first use and restarted after it goes away.
pub struct ProcessBridge {
    settings: BackendSettings,
    running: tokio::sync::Mutex<Option<Running>>,
}

impl ProcessBridge {
    pub fn new(settings: BackendSettings) -> Self {
        Self {
            settings,
            running: tokio::sync::Mutex::new(None),
        }
    }

    async fn connection(&self) -> Result<Arc<RpcConnection>> {
        let mut running = self.running.lock().await;
        if let Some(r) = running.as_ref() {
            if !r.connection.is_closed() {
                return Ok(r.connection.clone());
            }
            warn!("backend exited, restarting");
        }

        let started = self.spawn()?;
        let connection = started.connection.clone();
        *running = Some(started);
        Ok(connection)
    }

    fn spawn(&self) -> Result<Running> {
        let program = &self.settings.program;
        let mut child = ProcessCommand::new(program)
            .args(&self.settings.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| AccreditError::Spawn(format!("{}: {e}", program.display())))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| AccreditError::Spawn("backend stdin unavailable".into()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AccreditError::Spawn("backend stdout unavailable".into()))?;

        info!(program = %program.display(), pid = ?child.id(), "backend started");

        Ok(Running {
            _child: child,
            connection: Arc::new(RpcConnection::new(stdout, stdin)),
        })
    }
}

#[async_trait]
impl CommandBridge for ProcessBridge {
    async fn invoke(&self, command: Command) -> Result<Value> {
        let connection = self.connection().await?;
        debug!(command = command.name(), "invoking backend");
        connection.call(command.name(), command.params()).await
    }
}
