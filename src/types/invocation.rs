//! Boundary between the invocation framework and the handler.
//!
//! API Gateway is mapped to deliver the parsed body under `body-json`, the
//! escaped raw body under `body-raw` and request headers under
//! `params.header`. Anything else is treated as a bare, already parsed
//! payload.

use serde_json::Value;

pub const TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";
pub const SIGNATURE_HEADER: &str = "X-Slack-Signature";

#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// Gateway-wrapped request carrying the metadata needed to verify it.
    Signed {
        payload: Value,
        request: SignedRequest,
    },
    /// Payload with no signature metadata. Authentication cannot run.
    Unsigned(Value),
}

/// Transport metadata of a gateway-wrapped request.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedRequest {
    pub timestamp: String,
    pub signature: Option<String>,
    pub raw_body: String,
}

impl Invocation {
    pub fn from_value(value: Value) -> Self {
        let mut wrapper = match value {
            Value::Object(wrapper) => wrapper,
            other => return Invocation::Unsigned(other),
        };

        let Some(payload) = wrapper.remove("body-json") else {
            return Invocation::Unsigned(Value::Object(wrapper));
        };

        let raw_body = wrapper.get("body-raw").and_then(Value::as_str);
        let headers = wrapper
            .get("params")
            .and_then(|p| p.get("header"))
            .and_then(Value::as_object);

        let request = raw_body.zip(headers).and_then(|(raw_body, headers)| {
            let timestamp = headers.get(TIMESTAMP_HEADER).and_then(header_value)?;
            Some(SignedRequest {
                timestamp,
                signature: headers.get(SIGNATURE_HEADER).and_then(header_value),
                raw_body: raw_body.to_string(),
            })
        });

        match request {
            Some(request) => Invocation::Signed { payload, request },
            None => Invocation::Unsigned(payload),
        }
    }

    pub fn payload(&self) -> &Value {
        match self {
            Invocation::Signed { payload, .. } => payload,
            Invocation::Unsigned(payload) => payload,
        }
    }
}

fn header_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
