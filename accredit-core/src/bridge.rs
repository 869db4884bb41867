// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Seams to the collaborators this crate does not implement: the backend
//! process, the native save dialog and the system clipboard.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::command::Command;
use crate::error::Result;

/// Sends one named operation to the backend and awaits its single answer.
///
/// Implementations must not retry and must not impose a timeout.
#[async_trait]
pub trait CommandBridge: Send + Sync {
    async fn invoke(&self, command: Command) -> Result<Value>;
}

#[async_trait]
pub trait SaveDialog: Send + Sync {
    /// `Ok(None)` means the user cancelled.
    async fn choose_save_path(&self, default_file_name: &str) -> Result<Option<PathBuf>>;
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Best-effort copy. Failures are logged and otherwise ignored.
pub fn copy_to_clipboard(clipboard: &dyn Clipboard, text: &str) {
    if let Err(e) = clipboard.write_text(text) {
        warn!("clipboard write failed: {e}");
    }
}
