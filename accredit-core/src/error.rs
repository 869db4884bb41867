// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

#![forbid(unsafe_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccreditError {
    /// The backend answered the call with an error. The message is shown as-is.
    #[error("{0}")]
    Rejected(String),

    #[error("Backend disconnected")]
    Disconnected,

    #[error("Failed to start backend: {0}")]
    Spawn(String),

    #[error("Unexpected result from {command}: {detail}")]
    UnexpectedResult {
        command: &'static str,
        detail: String,
    },

    #[error("Save dialog error: {0}")]
    Dialog(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Config directory not found")]
    ConfigDirNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AccreditError>;
