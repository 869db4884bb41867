// SPDX-FileCopyrightText: © 2026 Accredit contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AccreditError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub use_info: String,
    pub base_code: String,
}

/// One application as listed by `get_app_info_json`. The path fields are
/// opaque and only displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub app_name: String,
    #[serde(default)]
    pub app_name_path: String,
    #[serde(default)]
    pub pri_key_path: String,
    #[serde(default, rename = "pub_key_puth", alias = "pub_key_path")]
    pub pub_key_path: String,
    #[serde(default, rename = "signature", alias = "signatures")]
    pub signatures: Vec<SignatureRecord>,
}

impl AppInfo {
    pub fn has_signatures(&self) -> bool {
        !self.signatures.is_empty()
    }
}

/// Decodes a listing that arrives either as the array itself, as a string
/// holding the JSON array, or as `null` when nothing is registered.
pub fn decode_app_infos(value: Value) -> Result<Vec<AppInfo>> {
    let value = match value {
        Value::Null => return Ok(Vec::new()),
        Value::String(raw) if raw.trim().is_empty() => return Ok(Vec::new()),
        Value::String(raw) => serde_json::from_str(&raw).map_err(|e| unexpected(e.to_string()))?,
        other => other,
    };
    serde_json::from_value(value).map_err(|e| unexpected(e.to_string()))
}

fn unexpected(detail: String) -> AccreditError {
    AccreditError::UnexpectedResult {
        command: "get_app_info_json",
        detail,
    }
}

/// Boolean reading of a verification answer: `false`, `null`, `0` and the
/// empty string are negative, everything else is positive.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_backend_listing() {
        let raw = json!([
            {
                "app_name": "billing",
                "app_name_path": "/data/billing",
                "pri_key_path": "/data/billing/private_key.pem",
                "pub_key_puth": "/data/billing/public_key.pem",
                "signature": [
                    { "use_info": "alice", "base_code": "QUJD" },
                    { "use_info": "bob", "base_code": "REVG" }
                ]
            },
            { "app_name": "empty", "signature": [] }
        ]);
        let apps = decode_app_infos(raw).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].app_name, "billing");
        assert_eq!(apps[0].pub_key_path, "/data/billing/public_key.pem");
        assert_eq!(apps[0].signatures[1].use_info, "bob");
        assert!(!apps[1].has_signatures());
        assert!(apps[1].pri_key_path.is_empty());
    }

    #[test]
    fn test_decode_listing_sent_as_string() {
        let raw = Value::String(r#"[{"app_name":"a","signatures":[]}]"#.into());
        let apps = decode_app_infos(raw).unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].app_name, "a");
    }

    #[test]
    fn test_decode_null_and_blank_are_empty() {
        assert!(decode_app_infos(Value::Null).unwrap().is_empty());
        assert!(decode_app_infos(Value::String("  ".into()))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let err = decode_app_infos(json!({ "app_name": "x" })).unwrap_err();
        assert!(matches!(
            err,
            AccreditError::UnexpectedResult {
                command: "get_app_info_json",
                ..
            }
        ));
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("ok")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }
}
