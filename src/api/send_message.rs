use crate::api::response::{decode_response, ApiResponse};
use crate::api::{exchange_text, Request};
use crate::config::ClientConfig;
use crate::core::{IndexationPayload, Message, Payload, MESSAGE_ID_HEX_LEN};
use crate::error::{ClientError, Result};
use crate::network::Transport;
use crate::utils::json::get_hex_string;
use log::debug;

/// Decodes the id the node assigned to a submitted message.
pub fn deserialize_send_message(body: &str) -> Result<ApiResponse<String>> {
    decode_response(body, |data| get_hex_string(data, "messageId", MESSAGE_ID_HEX_LEN))
}

/// `POST /api/v1/messages`
///
/// Empty network id, nonce or parents are sent as `null` and filled in by
/// the node.
pub fn send_message(
    transport: &mut dyn Transport,
    config: &ClientConfig,
    message: &Message,
) -> Result<ApiResponse<String>> {
    if matches!(message.payload, Payload::Unknown) {
        return Err(ClientError::InvalidArgument(
            "message has no payload to send".to_string(),
        ));
    }

    let body = serde_json::to_vec(&message.to_json())?;
    debug!("Submitting {} byte message", body.len());
    let text = exchange_text(transport, config, "/api/v1/messages", Request::Post(&body))?;
    deserialize_send_message(&text)
}

/// Sends an indexation message built from a text index and raw data.
pub fn send_indexation_message(
    transport: &mut dyn Transport,
    config: &ClientConfig,
    index: &str,
    data: &[u8],
) -> Result<ApiResponse<String>> {
    let payload = IndexationPayload::new(index, data)?;
    let message = Message::new(Payload::Indexation(payload));
    send_message(transport, config, &message)
}
