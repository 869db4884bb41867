// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::error::{AccreditError, Result};

pub const CONFIG_ENV: &str = "ACCREDIT_CONFIG";
const DEFAULT_BACKEND: &str = "accredit-backend";
const DEFAULT_TOAST_SECS: u64 = 5;
const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(s)
    }
}

fn deserialize_program<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.trim().is_empty() {
        return Err(serde::de::Error::custom("backend program must not be empty"));
    }
    Ok(PathBuf::from(shellexpand::tilde(&raw).as_ref()))
}

fn deserialize_toast_secs<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = u64::deserialize(deserializer)?;
    if secs == 0 {
        return Err(serde::de::Error::custom("toast_secs must be greater than 0"));
    }
    Ok(secs)
}

fn default_program() -> PathBuf {
    PathBuf::from(DEFAULT_BACKEND)
}

fn default_toast_secs() -> u64 {
    DEFAULT_TOAST_SECS
}

fn default_start_path() -> String {
    "/".into()
}

/// How to launch the backend process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendSettings {
    #[serde(default = "default_program", deserialize_with = "deserialize_program")]
    pub program: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default = "default_start_path")]
    pub start_path: String,
    #[serde(default = "default_toast_secs", deserialize_with = "deserialize_toast_secs")]
    pub toast_secs: u64,
    #[serde(default)]
    pub backend: BackendSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            start_path: default_start_path(),
            toast_secs: DEFAULT_TOAST_SECS,
            backend: BackendSettings::default(),
        }
    }
}

impl Config {
    /// Reads the file named by `ACCREDIT_CONFIG`, else the default location.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            AccreditError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        if metadata.len() > MAX_CONFIG_SIZE {
            return Err(AccreditError::Config("config file too large".into()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            AccreditError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AccreditError::Config(e.to_string()))
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("accredit").join("config.toml"))
            .ok_or(AccreditError::ConfigDirNotFound)
    }
}
