// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use accredit_core::{AppInfo, DownloadOutcome, KeyKind, TranscodeDirection};

use crate::screen::accredit::{self, Form};
use crate::screen::{app_list, base64, Route};

/// Which screen started a key download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    CreateKey,
    AppList,
}

/// A backend answer on its way back to the screen that asked for it.
#[derive(Clone)]
pub enum Resolved {
    AppNames {
        form: Form,
        result: Result<Vec<String>, String>,
    },
    KeysCreated {
        app_name: String,
        result: Result<(), String>,
    },
    KeyDownloaded {
        origin: Origin,
        key: KeyKind,
        result: Result<DownloadOutcome, String>,
    },
    SignatureCreated(Result<String, String>),
    Verified(Result<bool, String>),
    AppsLoaded(Result<Vec<AppInfo>, String>),
    Transcoded {
        direction: TranscodeDirection,
        result: Result<String, String>,
    },
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    Accredit(accredit::Message),
    AppList(app_list::Message),
    Base64(base64::Message),
    /// `epoch` is the navigation generation the request was issued in.
    Resolved {
        epoch: u64,
        result: Resolved,
    },
    AppReady(Result<(), String>),
    Tick,
}

impl fmt::Debug for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AppNames { form, result } => f
                .debug_struct("AppNames")
                .field("form", form)
                .field("result", &result.as_ref().map(|v| v.len()))
                .finish(),
            Self::KeysCreated { app_name, result } => f
                .debug_struct("KeysCreated")
                .field("app_name", app_name)
                .field("result", result)
                .finish(),
            Self::KeyDownloaded {
                origin,
                key,
                result,
            } => f
                .debug_struct("KeyDownloaded")
                .field("origin", origin)
                .field("key", key)
                .field("result", result)
                .finish(),
            Self::SignatureCreated(r) => f
                .debug_tuple("SignatureCreated")
                .field(&r.as_ref().map(|_| "***"))
                .finish(),
            Self::Verified(r) => f.debug_tuple("Verified").field(r).finish(),
            Self::AppsLoaded(r) => f
                .debug_tuple("AppsLoaded")
                .field(&r.as_ref().map(|v| v.len()))
                .finish(),
            Self::Transcoded { direction, result } => f
                .debug_struct("Transcoded")
                .field("direction", direction)
                .field("result", &result.as_ref().map(|s| s.len()))
                .finish(),
        }
    }
}
