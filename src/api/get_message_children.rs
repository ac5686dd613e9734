use crate::api::response::{decode_response, ApiResponse};
use crate::api::{check_hex_argument, exchange_text, Request};
use crate::config::ClientConfig;
use crate::core::MESSAGE_ID_HEX_LEN;
use crate::error::Result;
use crate::network::Transport;
use crate::utils::json::{get_hex_string, get_hex_string_array, get_u32};
use serde::Serialize;

/// Messages that directly approve a given message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageChildren {
    pub message_id: String,
    pub max_results: u32,
    pub count: u32,
    pub children: Vec<String>,
}

impl MessageChildren {
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, index: usize) -> Option<&str> {
        self.children.get(index).map(String::as_str)
    }
}

pub fn deserialize_message_children(body: &str) -> Result<ApiResponse<MessageChildren>> {
    decode_response(body, |data| {
        Ok(MessageChildren {
            message_id: get_hex_string(data, "messageId", MESSAGE_ID_HEX_LEN)?,
            max_results: get_u32(data, "maxResults")?,
            count: get_u32(data, "count")?,
            children: get_hex_string_array(data, "childrenMessageIds", MESSAGE_ID_HEX_LEN)?,
        })
    })
}

/// `GET /api/v1/messages/<id>/children`
pub fn get_message_children(
    transport: &mut dyn Transport,
    config: &ClientConfig,
    message_id: &str,
) -> Result<ApiResponse<MessageChildren>> {
    check_hex_argument("message id", message_id, MESSAGE_ID_HEX_LEN)?;

    let path = format!("/api/v1/messages/{message_id}/children");
    let body = exchange_text(transport, config, &path, Request::Get)?;
    deserialize_message_children(&body)
}
