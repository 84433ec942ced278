use serde::Deserialize;
use serde_json::Value;

pub const MESSAGE_TYPE: &str = "message";
pub const MESSAGE_CHANGED_SUBTYPE: &str = "message_changed";

/// Events API callback body.
#[derive(Deserialize, Debug, Default)]
pub struct InboundEvent {
    /// Echoed back verbatim. Slack sends a string, but any JSON value is accepted.
    pub challenge: Option<Value>,
    pub event: Option<PlatformEvent>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PlatformEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: Option<String>,
    pub text: Option<String>,
    pub thread_ts: Option<String>,
    pub channel: Option<String>,
    /// Edited message body, present on `message_changed`.
    pub message: Option<ChangedMessage>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ChangedMessage {
    pub thread_ts: Option<String>,
    pub attachments: Option<Vec<Attachment>>,
}

/// Unfurled link preview.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Attachment {
    pub text: Option<String>,
}

impl PlatformEvent {
    pub fn is_message(&self) -> bool {
        self.kind == MESSAGE_TYPE
    }

    pub fn is_plain_message(&self) -> bool {
        self.is_message() && self.subtype.is_none()
    }

    pub fn is_message_changed(&self) -> bool {
        self.is_message() && self.subtype.as_deref() == Some(MESSAGE_CHANGED_SUBTYPE)
    }
}
