//! Reply shapes of the remote procedures.
//!
//! The remote side is loosely typed: numbers may arrive as strings, keys may
//! be camelCase and a failed handler answers `null`. Decoding here accepts all
//! of that and nothing else leaks past this module.

use fb_core::StatusReport;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const STATUS_ONLINE: &str = "online";
pub const STATUS_OFFLINE: &str = "offline";
pub const STATUS_ERROR: &str = "error";
pub const SAVE_SUCCESS: &str = "success";

/// Reply of the status query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_u16")]
    pub port: Option<u16>,
    #[serde(default, alias = "ipv4Address")]
    pub ipv4_address: Option<String>,
    #[serde(default, alias = "processId", deserialize_with = "lenient_u32")]
    pub pid: Option<u32>,
}

impl StatusReply {
    pub fn is_online(&self) -> bool {
        self.status.as_deref() == Some(STATUS_ONLINE)
    }

    pub fn into_report(self) -> StatusReport {
        StatusReport {
            online: self.is_online(),
            port: self.port,
            process_id: self.pid,
            ipv4_address: self.ipv4_address.filter(|address| !address.trim().is_empty()),
        }
    }
}

/// Reply of the start procedure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StartReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default, alias = "processId", deserialize_with = "lenient_u32")]
    pub pid: Option<u32>,
}

impl StartReply {
    /// Output text worth showing to the user, if the remote sent any.
    pub fn message(&self) -> Option<&str> {
        self.output
            .as_deref()
            .map(str::trim)
            .filter(|output| !output.is_empty())
    }
}

/// Reply of the stop procedure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StopReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
}

/// Whether a save-setting reply reports success.
///
/// The remote answers with the stored value on success and with `false` or an
/// error object when it could not write its settings file.
pub fn setting_saved(reply: &Value) -> bool {
    match reply {
        Value::Bool(saved) => *saved,
        Value::Object(map) => {
            map.get("status").and_then(Value::as_str) != Some(STATUS_ERROR)
                && !map.contains_key("error")
        }
        _ => true,
    }
}

/// Port echoed back by a successful save-setting reply.
pub fn stored_port(reply: &Value) -> Option<u16> {
    lenient_number(reply).and_then(|port| u16::try_from(port).ok())
}

/// Whether a save-credentials reply reports success.
pub fn credentials_saved(reply: &Value) -> bool {
    match reply {
        Value::String(status) => status == SAVE_SUCCESS,
        Value::Object(map) => map
            .get("output")
            .or_else(|| map.get("status"))
            .and_then(Value::as_str)
            == Some(SAVE_SUCCESS),
        _ => false,
    }
}

/// Numeric value of a number or a numeric string.
pub fn lenient_number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_u16<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u16>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(lenient_number)
        .and_then(|number| u16::try_from(number).ok()))
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(lenient_number)
        .and_then(|number| u32::try_from(number).ok()))
}
