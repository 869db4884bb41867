// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The fixed set of operations the backend answers, with their parameter bags.

use std::fmt;
use std::path::PathBuf;

use serde_json::{json, Value};

/// Which half of an application's key pair to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Private,
    Public,
}

impl KeyKind {
    pub const ALL: [KeyKind; 2] = [KeyKind::Private, KeyKind::Public];

    /// The discriminator sent as `key`, also used as the default save name.
    pub fn file_name(self) -> &'static str {
        match self {
            KeyKind::Private => "private_key.pem",
            KeyKind::Public => "public_key.pem",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KeyKind::Private => "Private key",
            KeyKind::Public => "Public key",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscodeDirection {
    Encode,
    Decode,
}

impl TranscodeDirection {
    pub const ALL: [TranscodeDirection; 2] =
        [TranscodeDirection::Encode, TranscodeDirection::Decode];

    pub fn command_name(self) -> &'static str {
        match self {
            TranscodeDirection::Encode => "encode_str",
            TranscodeDirection::Decode => "decode_str",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TranscodeDirection::Encode => "Encode",
            TranscodeDirection::Decode => "Decode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AppReady,
    CreateAppKeys {
        app_name: String,
    },
    DownloadSecretKey {
        app_name: String,
        new_path: PathBuf,
        key: KeyKind,
    },
    GetAppNames,
    CreateSignature {
        app_name: String,
        data: Vec<u8>,
    },
    GetVerifySignature {
        app_name: String,
        data: Vec<u8>,
        signature: Vec<u8>,
    },
    GetAppInfoJson,
    Transcode {
        direction: TranscodeDirection,
        string: String,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AppReady => "app_ready",
            Command::CreateAppKeys { .. } => "create_app_keys",
            Command::DownloadSecretKey { .. } => "download_secret_key",
            Command::GetAppNames => "get_app_names",
            Command::CreateSignature { .. } => "create_signature",
            Command::GetVerifySignature { .. } => "get_verify_signature",
            Command::GetAppInfoJson => "get_app_info_json",
            Command::Transcode { direction, .. } => direction.command_name(),
        }
    }

    /// Parameter bag with the exact keys the backend expects. Byte payloads
    /// go out as arrays of integers.
    pub fn params(&self) -> Value {
        match self {
            Command::AppReady | Command::GetAppNames | Command::GetAppInfoJson => json!({}),
            Command::CreateAppKeys { app_name } => json!({ "appName": app_name }),
            Command::DownloadSecretKey {
                app_name,
                new_path,
                key,
            } => json!({
                "appName": app_name,
                "newPath": new_path.to_string_lossy(),
                "key": key.file_name(),
            }),
            Command::CreateSignature { app_name, data } => json!({
                "data": data,
                "appName": app_name,
            }),
            Command::GetVerifySignature {
                app_name,
                data,
                signature,
            } => json!({
                "appName": app_name,
                "data": data,
                "signature": signature,
            }),
            Command::Transcode { string, .. } => json!({ "string": string }),
        }
    }

    /// The identity this command acts on, if it needs one.
    pub fn app_name(&self) -> Option<&str> {
        match self {
            Command::CreateAppKeys { app_name }
            | Command::DownloadSecretKey { app_name, .. }
            | Command::CreateSignature { app_name, .. }
            | Command::GetVerifySignature { app_name, .. } => Some(app_name),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_params_use_camel_case_keys() {
        let cmd = Command::DownloadSecretKey {
            app_name: "demo".into(),
            new_path: PathBuf::from("/tmp/out.pem"),
            key: KeyKind::Public,
        };
        assert_eq!(cmd.name(), "download_secret_key");
        assert_eq!(
            cmd.params(),
            json!({ "appName": "demo", "newPath": "/tmp/out.pem", "key": "public_key.pem" })
        );
    }

    #[test]
    fn test_signature_payload_is_utf8_byte_array() {
        let cmd = Command::CreateSignature {
            app_name: "demo".into(),
            data: "hé".as_bytes().to_vec(),
        };
        assert_eq!(
            cmd.params(),
            json!({ "data": [104, 195, 169], "appName": "demo" })
        );
    }

    #[test]
    fn test_verify_params() {
        let cmd = Command::GetVerifySignature {
            app_name: "demo".into(),
            data: b"user".to_vec(),
            signature: b"c2ln".to_vec(),
        };
        let params = cmd.params();
        assert_eq!(params["appName"], "demo");
        assert_eq!(params["data"], json!([117, 115, 101, 114]));
        assert_eq!(params["signature"], json!([99, 50, 108, 110]));
    }

    #[test]
    fn test_transcode_name_follows_direction() {
        let encode = Command::Transcode {
            direction: TranscodeDirection::Encode,
            string: "hello".into(),
        };
        let decode = Command::Transcode {
            direction: TranscodeDirection::Decode,
            string: "aGVsbG8".into(),
        };
        assert_eq!(encode.name(), "encode_str");
        assert_eq!(decode.name(), "decode_str");
        assert_eq!(encode.params(), json!({ "string": "hello" }));
    }

    #[test]
    fn test_parameterless_commands_send_empty_object() {
        for cmd in [Command::AppReady, Command::GetAppNames, Command::GetAppInfoJson] {
            assert_eq!(cmd.params(), json!({}));
            assert!(cmd.app_name().is_none());
        }
    }
}
