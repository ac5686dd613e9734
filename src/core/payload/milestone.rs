use crate::core::payload::PAYLOAD_TYPE_MILESTONE;
use crate::core::{MERKLE_PROOF_HEX_LEN, MESSAGE_ID_HEX_LEN, PUBLIC_KEY_HEX_LEN, SIGNATURE_HEX_LEN};
use crate::error::{ClientError, Result};
use crate::utils::json::{get_hex_string, get_hex_string_array, get_u32, get_u64};
use serde::Serialize;
use serde_json::{json, Value};

/// Consensus checkpoint. Public keys and signatures are parallel
/// sequences, as on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestonePayload {
    pub index: u32,
    /// seconds since the Unix epoch
    pub timestamp: u64,
    pub parent_message_ids: Vec<String>,
    pub inclusion_merkle_proof: String,
    pub public_keys: Vec<String>,
    pub signatures: Vec<String>,
}

impl MilestonePayload {
    pub fn from_json(obj: &Value) -> Result<MilestonePayload> {
        let index = get_u32(obj, "index")?;
        let timestamp = get_u64(obj, "timestamp")?;
        let parent_message_ids = get_hex_string_array(obj, "parentMessageIds", MESSAGE_ID_HEX_LEN)?;
        let inclusion_merkle_proof =
            get_hex_string(obj, "inclusionMerkleProof", MERKLE_PROOF_HEX_LEN)?;
        let public_keys = get_hex_string_array(obj, "publicKeys", PUBLIC_KEY_HEX_LEN)?;
        let signatures = get_hex_string_array(obj, "signatures", SIGNATURE_HEX_LEN)?;

        if public_keys.len() != signatures.len() {
            return Err(ClientError::invalid(
                "signatures",
                format!(
                    "{} public keys but {} signatures",
                    public_keys.len(),
                    signatures.len()
                ),
            ));
        }

        Ok(MilestonePayload {
            index,
            timestamp,
            parent_message_ids,
            inclusion_merkle_proof,
            public_keys,
            signatures,
        })
    }

    pub fn to_json(&self) -> Value {
        json!({
            "type": PAYLOAD_TYPE_MILESTONE,
            "index": self.index,
            "timestamp": self.timestamp,
            "parentMessageIds": self.parent_message_ids,
            "inclusionMerkleProof": self.inclusion_merkle_proof,
            "publicKeys": self.public_keys,
            "signatures": self.signatures,
        })
    }

    /// Number of (public key, signature) pairs.
    pub fn signature_count(&self) -> usize {
        self.public_keys.len().min(self.signatures.len())
    }

    pub fn signature(&self, index: usize) -> Option<&str> {
        if index >= self.signature_count() {
            return None;
        }
        self.signatures.get(index).map(String::as_str)
    }

    pub fn public_key(&self, index: usize) -> Option<&str> {
        if index >= self.signature_count() {
            return None;
        }
        self.public_keys.get(index).map(String::as_str)
    }
}
