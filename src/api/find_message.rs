use crate::api::response::{decode_response, ApiResponse};
use crate::api::{exchange_text, Request};
use crate::config::ClientConfig;
use crate::core::payload::INDEXATION_INDEX_MAX_BYTES;
use crate::core::MESSAGE_ID_HEX_LEN;
use crate::error::{ClientError, Result};
use crate::network::Transport;
use crate::utils::json::{get_hex_string_array, get_string, get_u32};
use crate::utils::string_to_hex;
use serde::Serialize;

/// Message ids stored under one indexation key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindMessages {
    /// Hex form of the key the node searched for
    pub index: String,
    pub max_results: u32,
    pub count: u32,
    pub message_ids: Vec<String>,
}

impl FindMessages {
    pub fn id_count(&self) -> usize {
        self.message_ids.len()
    }

    pub fn id(&self, index: usize) -> Option<&str> {
        self.message_ids.get(index).map(String::as_str)
    }
}

pub fn deserialize_find_message(body: &str) -> Result<ApiResponse<FindMessages>> {
    decode_response(body, |data| {
        Ok(FindMessages {
            index: get_string(data, "index", INDEXATION_INDEX_MAX_BYTES * 2)?,
            max_results: get_u32(data, "maxResults")?,
            count: get_u32(data, "count")?,
            message_ids: get_hex_string_array(data, "messageIds", MESSAGE_ID_HEX_LEN)?,
        })
    })
}

/// `GET /api/v1/messages?index=<hex>` for a free-text key.
pub fn find_message_by_index(
    transport: &mut dyn Transport,
    config: &ClientConfig,
    index: &str,
) -> Result<ApiResponse<FindMessages>> {
    if index.is_empty() || index.len() > INDEXATION_INDEX_MAX_BYTES {
        return Err(ClientError::InvalidArgument(format!(
            "index must be 1 to {INDEXATION_INDEX_MAX_BYTES} bytes, got {}",
            index.len()
        )));
    }

    let path = format!("/api/v1/messages?index={}", string_to_hex(index));
    let body = exchange_text(transport, config, &path, Request::Get)?;
    deserialize_find_message(&body)
}
