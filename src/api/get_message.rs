use crate::api::response::{decode_response, ApiResponse};
use crate::api::{check_hex_argument, exchange_text, Request};
use crate::config::ClientConfig;
use crate::core::{Message, MESSAGE_ID_HEX_LEN};
use crate::error::Result;
use crate::network::Transport;

pub fn deserialize_message(body: &str) -> Result<ApiResponse<Message>> {
    decode_response(body, Message::from_json)
}

/// `GET /api/v1/messages/<id>`
pub fn get_message_by_id(
    transport: &mut dyn Transport,
    config: &ClientConfig,
    message_id: &str,
) -> Result<ApiResponse<Message>> {
    check_hex_argument("message id", message_id, MESSAGE_ID_HEX_LEN)?;

    let path = format!("/api/v1/messages/{message_id}");
    let body = exchange_text(transport, config, &path, Request::Get)?;
    deserialize_message(&body)
}
