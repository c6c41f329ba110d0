use serde::Serialize;
use serde_json::Value;

/// Result of one dispatch attempt. The no-op variants are expected
/// steady-state outcomes and map to 200 responses, never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    ReceiverNotFound,
    NoToken,
    SkippedOnline,
    Delivered { message_id: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeliveredResponse {
    pub success: bool,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub error: &'static str,
    pub received: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerErrorResponse {
    pub error: String,
}
