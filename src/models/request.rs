use serde_json::Value;
use tracing::debug;

pub const DEFAULT_NOTIFICATION_TYPE: &str = "message";

/// Validated send request, after the wire body has been normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct SendRequest {
    pub sender_id: String,
    pub receiver_id: String,
    pub text: String,
    pub notification_type: String,
}

impl SendRequest {
    /// Pulls the required fields out of a normalized body. Returns `None` when
    /// `senderId`, `receiverId` or `text` is missing or empty, so the handler
    /// can echo the body back in a validation error.
    pub fn parse(body: &Value) -> Option<Self> {
        let sender_id = truthy_string(body.get("senderId"))?;
        let receiver_id = truthy_string(body.get("receiverId"))?;
        let text = truthy_string(body.get("text"))?;

        let notification_type = truthy_string(body.get("type"))
            .unwrap_or_else(|| DEFAULT_NOTIFICATION_TYPE.to_string());

        Some(Self {
            sender_id,
            receiver_id,
            text,
            notification_type,
        })
    }

    pub fn is_call(&self) -> bool {
        self.notification_type == "call"
    }
}

/// Normalizes whatever the transport delivered into a JSON body.
///
/// Some proxies hand the body over as a JSON string whose contents are JSON,
/// so a string result gets one more parse pass. Anything unparseable degrades
/// to an empty object; validation then reports the missing fields uniformly.
pub fn normalize_body(raw: &[u8]) -> Value {
    let text = match std::str::from_utf8(raw) {
        Ok(text) if !text.trim().is_empty() => text,
        _ => return Value::Object(Default::default()),
    };

    let mut body = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Body is not valid JSON, treating as empty");
            return Value::Object(Default::default());
        }
    };

    if let Value::String(inner) = &body {
        match serde_json::from_str::<Value>(inner) {
            Ok(value) => body = value,
            Err(e) => {
                debug!(error = %e, "String body is not valid JSON, treating as empty");
                return Value::Object(Default::default());
            }
        }
    }

    if body.is_object() {
        body
    } else {
        Value::Object(Default::default())
    }
}

/// String coercion with JS-style truthiness: empty strings, zero, `false` and
/// `null` all count as absent. Compound values (objects, arrays) are rejected
/// too; the contract types every field as a scalar.
fn truthy_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
