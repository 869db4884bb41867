// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! In-memory stand-ins for the backend, the save dialog and the clipboard.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::bridge::{Clipboard, CommandBridge, SaveDialog};
use crate::command::Command;
use crate::error::{AccreditError, Result};

/// Records every command and answers from a per-operation table.
/// Operations without an entry are rejected.
#[derive(Default)]
pub struct MockBridge {
    responses: HashMap<&'static str, std::result::Result<Value, String>>,
    calls: Mutex<Vec<Command>>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(
        mut self,
        operation: &'static str,
        response: std::result::Result<Value, String>,
    ) -> Self {
        self.responses.insert(operation, response);
        self
    }

    pub fn calls(&self) -> Vec<Command> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn calls_to(&self, operation: &str) -> Vec<Command> {
        self.calls()
            .into_iter()
            .filter(|c| c.name() == operation)
            .collect()
    }
}

#[async_trait]
impl CommandBridge for MockBridge {
    async fn invoke(&self, command: Command) -> Result<Value> {
        let name = command.name();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command);
        }
        match self.responses.get(name) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(AccreditError::Rejected(message.clone())),
            None => Err(AccreditError::Rejected(format!(
                "no response configured for {name}"
            ))),
        }
    }
}

enum DialogBehaviour {
    Choose(PathBuf),
    Cancel,
    Fail,
}

pub struct MockDialog {
    behaviour: DialogBehaviour,
    requests: Mutex<Vec<String>>,
}

impl MockDialog {
    fn with(behaviour: DialogBehaviour) -> Self {
        Self {
            behaviour,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn choosing(path: impl Into<PathBuf>) -> Self {
        Self::with(DialogBehaviour::Choose(path.into()))
    }

    pub fn cancelling() -> Self {
        Self::with(DialogBehaviour::Cancel)
    }

    pub fn failing() -> Self {
        Self::with(DialogBehaviour::Fail)
    }

    /// Default file names the dialog was opened with.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SaveDialog for MockDialog {
    async fn choose_save_path(&self, default_file_name: &str) -> Result<Option<PathBuf>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(default_file_name.to_owned());
        }
        match &self.behaviour {
            DialogBehaviour::Choose(path) => Ok(Some(path.clone())),
            DialogBehaviour::Cancel => Ok(None),
            DialogBehaviour::Fail => Err(AccreditError::Dialog("no display available".into())),
        }
    }
}

#[derive(Default)]
pub struct MockClipboard {
    fail: bool,
    written: Mutex<Vec<String>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn written(&self) -> Vec<String> {
        self.written.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl Clipboard for MockClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(AccreditError::Clipboard("clipboard unavailable".into()));
        }
        if let Ok(mut written) = self.written.lock() {
            written.push(text.to_owned());
        }
        Ok(())
    }
}
