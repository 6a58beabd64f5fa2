//! Wire protocol between the shell and the core.
//!
//! Both directions carry newline-delimited JSON objects shaped
//! `{"method": <string>, "params": <value>}`. The protocol is
//! notification-style: no ids, no request/response correlation.

use plume_common::TabId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------------

/// An outbound notification to the core.
///
/// The dispatcher accepts arbitrary method/params pairs; no closed
/// enumeration is enforced at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    pub params: Value,
}

impl Request {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// Serialize to one wire line (without the trailing newline).
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// ---------------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct UpdateParams {
    tab: TabId,
    update: Value,
}

#[derive(Debug, Deserialize)]
struct AlertParams {
    msg: String,
}

/// A decoded notification from the core.
///
/// Shape checking happens exactly once, here at the transport boundary; the
/// router matches on this exhaustively and never re-validates per branch.
/// Anything unparseable lands in [`Inbound::Malformed`] instead of an error:
/// a bad message from the core is a local diagnostic, never a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// A document changed. `update` is opaque to everything but the owning
    /// window controller.
    Update { tab: TabId, update: Value },
    /// The core wants a modal message shown to the user.
    Alert { msg: String },
    /// A method this shell does not understand. Ignored by policy.
    Unknown { method: String },
    /// Not a `{method, params}` object, or a known method with a bad
    /// param shape.
    Malformed { reason: String },
}

impl Inbound {
    /// Decode one wire line. Never fails.
    pub fn decode(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => Self::from_value(value),
            Err(e) => Self::Malformed {
                reason: format!("invalid json: {e}"),
            },
        }
    }

    /// Classify an already-parsed JSON value.
    pub fn from_value(value: Value) -> Self {
        let Some(method) = value.get("method").and_then(Value::as_str) else {
            return Self::Malformed {
                reason: "missing method".into(),
            };
        };
        let Some(params) = value.get("params") else {
            return Self::Malformed {
                reason: format!("{method}: missing params"),
            };
        };

        match method {
            "update" => match serde_json::from_value::<UpdateParams>(params.clone()) {
                Ok(p) if p.update.is_object() => Self::Update {
                    tab: p.tab,
                    update: p.update,
                },
                Ok(_) => Self::Malformed {
                    reason: "update: payload is not an object".into(),
                },
                Err(e) => Self::Malformed {
                    reason: format!("update: {e}"),
                },
            },
            "alert" => match serde_json::from_value::<AlertParams>(params.clone()) {
                Ok(p) => Self::Alert { msg: p.msg },
                Err(e) => Self::Malformed {
                    reason: format!("alert: {e}"),
                },
            },
            other => Self::Unknown {
                method: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_wire_shape() {
        let req = Request::new("open", json!({"filename": "/tmp/a.txt"}));
        let line = req.to_line();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["method"], "open");
        assert_eq!(value["params"]["filename"], "/tmp/a.txt");
    }

    #[test]
    fn decodes_update() {
        let msg =
            Inbound::decode(r#"{"method":"update","params":{"tab":"T1","update":{"rev":3}}}"#);
        assert_eq!(
            msg,
            Inbound::Update {
                tab: "T1".into(),
                update: json!({"rev": 3}),
            }
        );
    }

    #[test]
    fn decodes_alert() {
        let msg = Inbound::decode(r#"{"method":"alert","params":{"msg":"Disk full"}}"#);
        assert_eq!(
            msg,
            Inbound::Alert {
                msg: "Disk full".into(),
            }
        );
    }

    #[test]
    fn unknown_method_is_not_malformed() {
        let msg = Inbound::decode(r#"{"method":"frobnicate","params":{}}"#);
        assert_eq!(
            msg,
            Inbound::Unknown {
                method: "frobnicate".into(),
            }
        );
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            Inbound::decode("not json at all"),
            Inbound::Malformed { .. }
        ));
    }

    #[test]
    fn missing_method_is_malformed() {
        assert!(matches!(
            Inbound::decode(r#"{"params":{}}"#),
            Inbound::Malformed { .. }
        ));
        // Non-string method counts as missing.
        assert!(matches!(
            Inbound::decode(r#"{"method":7,"params":{}}"#),
            Inbound::Malformed { .. }
        ));
    }

    #[test]
    fn missing_params_is_malformed() {
        assert!(matches!(
            Inbound::decode(r#"{"method":"update"}"#),
            Inbound::Malformed { .. }
        ));
    }

    #[test]
    fn update_without_tab_is_malformed() {
        assert!(matches!(
            Inbound::decode(r#"{"method":"update","params":{"update":{}}}"#),
            Inbound::Malformed { .. }
        ));
    }

    #[test]
    fn update_without_payload_is_malformed() {
        assert!(matches!(
            Inbound::decode(r#"{"method":"update","params":{"tab":"T1"}}"#),
            Inbound::Malformed { .. }
        ));
    }

    #[test]
    fn update_with_non_object_payload_is_malformed() {
        assert!(matches!(
            Inbound::decode(r#"{"method":"update","params":{"tab":"T1","update":5}}"#),
            Inbound::Malformed { .. }
        ));
    }

    #[test]
    fn alert_without_msg_is_malformed() {
        assert!(matches!(
            Inbound::decode(r#"{"method":"alert","params":{}}"#),
            Inbound::Malformed { .. }
        ));
        assert!(matches!(
            Inbound::decode(r#"{"method":"alert","params":{"msg":12}}"#),
            Inbound::Malformed { .. }
        ));
    }
}
