// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Operations that chain more than one collaborator.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::backend::Backend;
use crate::bridge::{copy_to_clipboard, Clipboard, SaveDialog};
use crate::command::{KeyKind, TranscodeDirection};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    /// The user closed the dialog without choosing a path.
    Cancelled,
    /// The dialog itself failed; treated like a cancellation but reported.
    DialogFailed,
}

/// Asks for a destination, then has the backend write the key file there.
/// Nothing is sent to the backend unless a path was chosen.
pub async fn download_key(
    backend: &Backend,
    dialog: &dyn SaveDialog,
    app_name: &str,
    key: KeyKind,
) -> Result<DownloadOutcome> {
    let path = match dialog.choose_save_path(key.file_name()).await {
        Ok(Some(path)) => path,
        Ok(None) => {
            debug!(key = %key, "save dialog cancelled");
            return Ok(DownloadOutcome::Cancelled);
        }
        Err(e) => {
            warn!("failed to choose save path: {e}");
            return Ok(DownloadOutcome::DialogFailed);
        }
    };

    backend
        .download_secret_key(app_name, path.clone(), key)
        .await?;
    Ok(DownloadOutcome::Saved(path))
}

/// Runs the transcoding on the backend and puts the answer on the clipboard.
/// Empty input is the caller's no-op and never reaches this function.
pub async fn transcode_to_clipboard(
    backend: &Backend,
    clipboard: &dyn Clipboard,
    direction: TranscodeDirection,
    input: &str,
) -> Result<String> {
    let output = backend.transcode(direction, input).await?;
    copy_to_clipboard(clipboard, &output);
    Ok(output)
}
