use crate::api::response::{decode_response, ApiResponse};
use crate::api::{exchange_text, Request};
use crate::config::ClientConfig;
use crate::core::MESSAGE_ID_HEX_LEN;
use crate::error::Result;
use crate::network::Transport;
use crate::utils::json::get_hex_string_array;
use serde::Serialize;

/// Messages a new message can attach to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tips {
    pub tip_message_ids: Vec<String>,
}

pub fn deserialize_tips(body: &str) -> Result<ApiResponse<Tips>> {
    decode_response(body, |data| {
        Ok(Tips {
            tip_message_ids: get_hex_string_array(data, "tipMessageIds", MESSAGE_ID_HEX_LEN)?,
        })
    })
}

/// `GET /api/v1/tips`
pub fn get_tips(transport: &mut dyn Transport, config: &ClientConfig) -> Result<ApiResponse<Tips>> {
    let body = exchange_text(transport, config, "/api/v1/tips", Request::Get)?;
    deserialize_tips(&body)
}
