// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Client side of the Accredit signing console: the command contract spoken
//! with the external key backend, and the bridges to the save dialog and the
//! clipboard. No cryptography happens here.

#![forbid(unsafe_code)]

pub mod actions;
pub mod backend;
pub mod bridge;
pub mod command;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "testing"))]
pub mod mock;
pub mod model;
pub mod rpc;

pub use actions::DownloadOutcome;
pub use backend::Backend;
pub use bridge::{Clipboard, CommandBridge, SaveDialog};
pub use command::{Command, KeyKind, TranscodeDirection};
pub use config::Config;
pub use error::{AccreditError, Result};
pub use model::{AppInfo, SignatureRecord};
pub use rpc::ProcessBridge;
