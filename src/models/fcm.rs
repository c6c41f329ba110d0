use serde::{Deserialize, Serialize};

use crate::models::request::SendRequest;

/// 28 days, the longest lifetime FCM will hold an undeliverable message.
pub const MESSAGE_TTL_SECONDS: u64 = 2_419_200;

/// Calls are deliver-now-or-never.
pub const CALL_TTL_SECONDS: u64 = 0;

#[derive(Debug, Clone, Serialize)]
pub struct FcmRequest {
    pub message: FcmMessage,
}

/// FCM HTTP v1 message. Data-only payload so the client app controls
/// presentation even when backgrounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FcmMessage {
    pub token: String,
    pub data: PushData,
    pub android: AndroidConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushData {
    pub title: String,
    pub body: String,

    #[serde(rename = "senderId")]
    pub sender_id: String,

    #[serde(rename = "type")]
    pub notification_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AndroidConfig {
    pub priority: String,
    pub ttl: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FcmSendResponse {
    /// Fully qualified message name, `projects/*/messages/{message_id}`.
    pub name: String,
}

impl FcmMessage {
    pub fn build(token: &str, sender_name: &str, request: &SendRequest) -> Self {
        let ttl_seconds = if request.is_call() {
            CALL_TTL_SECONDS
        } else {
            MESSAGE_TTL_SECONDS
        };

        Self {
            token: token.to_string(),
            data: PushData {
                title: sender_name.to_string(),
                body: request.text.clone(),
                sender_id: request.sender_id.clone(),
                notification_type: request.notification_type.clone(),
            },
            android: AndroidConfig {
                priority: "high".to_string(),
                ttl: format!("{}s", ttl_seconds),
            },
        }
    }
}
