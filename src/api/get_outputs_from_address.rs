use crate::api::get_balance::{AddressKind, ADDRESS_TEXT_MAX_LEN};
use crate::api::response::{decode_response, ApiResponse};
use crate::api::{exchange_text, Request};
use crate::config::ClientConfig;
use crate::core::OUTPUT_ID_HEX_LEN;
use crate::error::Result;
use crate::network::Transport;
use crate::utils::json::{get_hex_string_array, get_string, get_u32, get_u64};
use serde::Serialize;

/// Unspent output ids owned by an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputIds {
    pub address: String,
    pub max_results: u32,
    pub count: u32,
    /// Transaction id followed by the little-endian output index, hex
    pub output_ids: Vec<String>,
    pub ledger_index: u64,
}

impl OutputIds {
    pub fn output_id_count(&self) -> usize {
        self.output_ids.len()
    }

    pub fn output_id(&self, index: usize) -> Option<&str> {
        self.output_ids.get(index).map(String::as_str)
    }
}

pub fn deserialize_outputs_from_address(body: &str) -> Result<ApiResponse<OutputIds>> {
    decode_response(body, |data| {
        Ok(OutputIds {
            address: get_string(data, "address", ADDRESS_TEXT_MAX_LEN)?,
            max_results: get_u32(data, "maxResults")?,
            count: get_u32(data, "count")?,
            output_ids: get_hex_string_array(data, "outputIds", OUTPUT_ID_HEX_LEN)?,
            ledger_index: get_u64(data, "ledgerIndex")?,
        })
    })
}

/// `GET /api/v1/addresses[/ed25519]/<addr>/outputs`
pub fn get_outputs_from_address(
    transport: &mut dyn Transport,
    config: &ClientConfig,
    kind: AddressKind,
    address: &str,
) -> Result<ApiResponse<OutputIds>> {
    kind.validate(address)?;

    let path = format!("{}/outputs", kind.path(address));
    let body = exchange_text(transport, config, &path, Request::Get)?;
    deserialize_outputs_from_address(&body)
}
