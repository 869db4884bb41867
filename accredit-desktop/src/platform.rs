// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Native save dialog and system clipboard.

use std::path::PathBuf;
use std::sync::Mutex;

use accredit_core::error::{AccreditError, Result};
use accredit_core::{Clipboard, SaveDialog};
use async_trait::async_trait;

pub struct NativeSaveDialog;

#[async_trait]
impl SaveDialog for NativeSaveDialog {
    async fn choose_save_path(&self, default_file_name: &str) -> Result<Option<PathBuf>> {
        let handle = rfd::AsyncFileDialog::new()
            .set_title("Save key")
            .set_file_name(default_file_name)
            .add_filter("PEM", &["pem"])
            .save_file()
            .await;
        Ok(handle.map(|h| h.path().to_path_buf()))
    }
}

/// Holds one `arboard` handle for the life of the process; on X11 the copied
/// text is only served while the handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| AccreditError::Clipboard("clipboard lock poisoned".into()))?;
        if guard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| AccreditError::Clipboard(e.to_string()))?;
            *guard = Some(clipboard);
        }
        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|e| AccreditError::Clipboard(e.to_string())),
            None => Err(AccreditError::Clipboard("clipboard unavailable".into())),
        }
    }
}
