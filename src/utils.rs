use anyhow::{Error, Result};
use tracing::{debug, info};

use crate::{
    clients::{database::DatabaseClient, fcm::FcmClient},
    models::{fcm::FcmMessage, request::SendRequest, response::DispatchOutcome},
};

/// Title fallback when the sender has no stored display name.
pub const DEFAULT_SENDER_NAME: &str = "New Message";

/// Pure eligibility rule: calls always go through, everything else is
/// suppressed while the receiver is online.
pub fn should_deliver(notification_type: &str, receiver_status: Option<&str>) -> bool {
    if notification_type == "call" {
        return true;
    }

    receiver_status != Some("Online")
}

/// Runs the dispatch sequence for one validated request: resolve the
/// receiver's token, check eligibility, resolve the sender's name, send.
///
/// The lookups stay sequential; the sender lookup is skipped entirely when
/// delivery short-circuits. Only transport failures become errors, an
/// unreachable receiver is a normal outcome.
pub async fn process_notification(
    request: &SendRequest,
    database_client: &DatabaseClient,
    fcm_client: &FcmClient,
) -> Result<DispatchOutcome, Error> {
    let receiver = match database_client.fetch_user(&request.receiver_id).await? {
        Some(receiver) => receiver,
        None => {
            info!(receiver_id = %request.receiver_id, "Receiver not found, nothing to deliver");
            return Ok(DispatchOutcome::ReceiverNotFound);
        }
    };

    let Some(token) = receiver.delivery_token() else {
        info!(receiver_id = %request.receiver_id, "Receiver has no delivery token");
        return Ok(DispatchOutcome::NoToken);
    };

    if !should_deliver(&request.notification_type, receiver.status.as_deref()) {
        info!(receiver_id = %request.receiver_id, "Receiver is online, push skipped");
        return Ok(DispatchOutcome::SkippedOnline);
    }

    let sender_name = database_client
        .fetch_user(&request.sender_id)
        .await?
        .and_then(|sender| sender.name)
        .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string());

    debug!(
        sender_id = %request.sender_id,
        notification_type = %request.notification_type,
        "Building push message"
    );

    let message = FcmMessage::build(token, &sender_name, request);
    let message_id = fcm_client.send_notification(&message).await?;

    Ok(DispatchOutcome::Delivered { message_id })
}
