use crate::core::payload::PAYLOAD_TYPE_INDEXATION;
use crate::error::{ClientError, Result};
use crate::utils::json::get_str;
use crate::utils::{bytes_to_hex, string_to_hex};
use data_encoding::HEXLOWER_PERMISSIVE;
use serde::Serialize;
use serde_json::{json, Value};

/// Maximum index length in bytes before hex encoding
pub const INDEXATION_INDEX_MAX_BYTES: usize = 64;

/// Key/value payload. Both fields are kept as the text the node sent
/// (normally hex) so they stay printable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexationPayload {
    pub index: String,
    pub data: String,
}

impl IndexationPayload {
    /// Builds a payload from a text index and raw data, hex-encoding both.
    pub fn new(index: &str, data: &[u8]) -> Result<IndexationPayload> {
        if index.is_empty() || index.len() > INDEXATION_INDEX_MAX_BYTES {
            return Err(ClientError::InvalidArgument(format!(
                "index must be 1 to {INDEXATION_INDEX_MAX_BYTES} bytes, got {}",
                index.len()
            )));
        }
        Ok(IndexationPayload {
            index: string_to_hex(index),
            data: bytes_to_hex(data),
        })
    }

    pub fn from_json(obj: &Value) -> Result<IndexationPayload> {
        let index = get_str(obj, "index")?.to_string();
        let data = get_str(obj, "data")?.to_string();
        Ok(IndexationPayload { index, data })
    }

    pub fn to_json(&self) -> Value {
        json!({
            "type": PAYLOAD_TYPE_INDEXATION,
            "index": self.index,
            "data": self.data,
        })
    }

    /// Data decoded from hex, if it is hex.
    pub fn data_bytes(&self) -> Option<Vec<u8>> {
        HEXLOWER_PERMISSIVE.decode(self.data.as_bytes()).ok()
    }

    pub fn index_bytes(&self) -> Option<Vec<u8>> {
        HEXLOWER_PERMISSIVE.decode(self.index.as_bytes()).ok()
    }
}
