// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Typed access to the backend operations.

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::bridge::CommandBridge;
use crate::command::{Command, KeyKind, TranscodeDirection};
use crate::error::{AccreditError, Result};
use crate::model::{self, AppInfo};

#[derive(Clone)]
pub struct Backend {
    bridge: Arc<dyn CommandBridge>,
}

impl Backend {
    pub fn new(bridge: Arc<dyn CommandBridge>) -> Self {
        Self { bridge }
    }

    async fn invoke(&self, command: Command) -> Result<Value> {
        debug!(command = command.name(), app = command.app_name(), "invoke");
        self.bridge.invoke(command).await
    }

    async fn invoke_as<T: DeserializeOwned>(&self, command: Command) -> Result<T> {
        let name = command.name();
        let value = self.invoke(command).await?;
        serde_json::from_value(value).map_err(|e| AccreditError::UnexpectedResult {
            command: name,
            detail: e.to_string(),
        })
    }

    pub async fn app_ready(&self) -> Result<()> {
        self.invoke(Command::AppReady).await.map(|_| ())
    }

    pub async fn create_app_keys(&self, app_name: &str) -> Result<()> {
        self.invoke(Command::CreateAppKeys {
            app_name: app_name.to_owned(),
        })
        .await
        .map(|_| ())
    }

    pub async fn download_secret_key(
        &self,
        app_name: &str,
        new_path: PathBuf,
        key: KeyKind,
    ) -> Result<()> {
        self.invoke(Command::DownloadSecretKey {
            app_name: app_name.to_owned(),
            new_path,
            key,
        })
        .await
        .map(|_| ())
    }

    pub async fn app_names(&self) -> Result<Vec<String>> {
        self.invoke_as(Command::GetAppNames).await
    }

    pub async fn create_signature(&self, app_name: &str, data: Vec<u8>) -> Result<String> {
        self.invoke_as(Command::CreateSignature {
            app_name: app_name.to_owned(),
            data,
        })
        .await
    }

    /// `Ok(false)` is a negative verification, not a failure.
    pub async fn verify_signature(
        &self,
        app_name: &str,
        data: Vec<u8>,
        signature: Vec<u8>,
    ) -> Result<bool> {
        let value = self
            .invoke(Command::GetVerifySignature {
                app_name: app_name.to_owned(),
                data,
                signature,
            })
            .await?;
        Ok(model::is_truthy(&value))
    }

    pub async fn app_infos(&self) -> Result<Vec<AppInfo>> {
        let value = self.invoke(Command::GetAppInfoJson).await?;
        model::decode_app_infos(value)
    }

    pub async fn transcode(&self, direction: TranscodeDirection, string: &str) -> Result<String> {
        self.invoke_as(Command::Transcode {
            direction,
            string: string.to_owned(),
        })
        .await
    }
}
