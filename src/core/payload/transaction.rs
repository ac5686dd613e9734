// A transaction payload moves value: the essence lists the outputs it
// consumes (inputs) and the outputs it creates, and one unlock block per
// input proves the right to spend it.

use crate::core::address::{ADDRESS_VER_ED25519, IOTA_ADDRESS_BYTES, IOTA_ADDRESS_HEX_BYTES};
use crate::core::payload::{IndexationPayload, PAYLOAD_TYPE_INDEXATION, PAYLOAD_TYPE_TRANSACTION};
use crate::core::{PUBLIC_KEY_HEX_LEN, SIGNATURE_HEX_LEN, TRANSACTION_ID_HEX_LEN};
use crate::error::{ClientError, Result};
use crate::utils::hex_to_bytes;
use crate::utils::json::{
    get_array, get_hex_string, get_object, get_optional, get_u16, get_u32, get_u64, get_u8,
};
use serde::Serialize;
use serde_json::{json, Value};

const ESSENCE_TYPE_REGULAR: u8 = 0;
const INPUT_TYPE_UTXO: u8 = 0;
const SIGNATURE_TYPE_ED25519: u8 = 0;
const UNLOCK_BLOCK_TYPE_SIGNATURE: u8 = 0;
const UNLOCK_BLOCK_TYPE_REFERENCE: u8 = 1;

/// Reference to an output of an earlier transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtxoInput {
    pub transaction_id: String,
    pub output_index: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    SignatureLockedSingle,
    SignatureLockedDustAllowance,
}

impl OutputKind {
    fn from_tag(tag: u8) -> Result<OutputKind> {
        match tag {
            0 => Ok(OutputKind::SignatureLockedSingle),
            1 => Ok(OutputKind::SignatureLockedDustAllowance),
            other => Err(ClientError::unsupported("output", other as u64)),
        }
    }

    fn tag(self) -> u8 {
        match self {
            OutputKind::SignatureLockedSingle => 0,
            OutputKind::SignatureLockedDustAllowance => 1,
        }
    }
}

/// Value sent to an ed25519 address. `address` is the 64-char hex form
/// without the version byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
    pub kind: OutputKind,
    pub address: String,
    pub amount: u64,
}

impl Output {
    /// Version byte followed by the 32 address bytes
    pub fn address_bytes(&self) -> Result<[u8; IOTA_ADDRESS_BYTES]> {
        let hash: [u8; IOTA_ADDRESS_BYTES - 1] = hex_to_bytes(&self.address)?;
        let mut out = [0u8; IOTA_ADDRESS_BYTES];
        out[0] = ADDRESS_VER_ED25519;
        out[1..].copy_from_slice(&hash);
        Ok(out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnlockBlock {
    Signature { public_key: String, signature: String },
    /// Position of an earlier signature unlock block
    Reference { index: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionEssence {
    pub inputs: Vec<UtxoInput>,
    pub outputs: Vec<Output>,
    pub payload: Option<IndexationPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionPayload {
    pub essence: TransactionEssence,
    pub unlock_blocks: Vec<UnlockBlock>,
}

impl TransactionPayload {
    pub fn from_json(obj: &Value) -> Result<TransactionPayload> {
        let essence_obj = get_object(obj, "essence")?;
        let essence_type = get_u8(essence_obj, "type")?;
        if essence_type != ESSENCE_TYPE_REGULAR {
            return Err(ClientError::unsupported("essence", essence_type as u64));
        }

        let inputs = get_array(essence_obj, "inputs")?
            .iter()
            .map(decode_input)
            .collect::<Result<Vec<_>>>()?;
        let outputs = get_array(essence_obj, "outputs")?
            .iter()
            .map(decode_output)
            .collect::<Result<Vec<_>>>()?;
        let payload = match get_optional(essence_obj, "payload") {
            Some(nested) => Some(decode_nested_payload(nested)?),
            None => None,
        };

        let unlock_blocks = get_array(obj, "unlockBlocks")?
            .iter()
            .map(decode_unlock_block)
            .collect::<Result<Vec<_>>>()?;
        validate_unlock_blocks(&unlock_blocks, inputs.len())?;

        Ok(TransactionPayload {
            essence: TransactionEssence {
                inputs,
                outputs,
                payload,
            },
            unlock_blocks,
        })
    }

    pub fn to_json(&self) -> Value {
        let inputs: Vec<Value> = self
            .essence
            .inputs
            .iter()
            .map(|input| {
                json!({
                    "type": INPUT_TYPE_UTXO,
                    "transactionId": input.transaction_id,
                    "transactionOutputIndex": input.output_index,
                })
            })
            .collect();
        let outputs: Vec<Value> = self
            .essence
            .outputs
            .iter()
            .map(|output| {
                json!({
                    "type": output.kind.tag(),
                    "address": {"type": ADDRESS_VER_ED25519, "address": output.address},
                    "amount": output.amount,
                })
            })
            .collect();
        let unlock_blocks: Vec<Value> = self
            .unlock_blocks
            .iter()
            .map(|block| match block {
                UnlockBlock::Signature {
                    public_key,
                    signature,
                } => json!({
                    "type": UNLOCK_BLOCK_TYPE_SIGNATURE,
                    "signature": {
                        "type": SIGNATURE_TYPE_ED25519,
                        "publicKey": public_key,
                        "signature": signature,
                    },
                }),
                UnlockBlock::Reference { index } => json!({
                    "type": UNLOCK_BLOCK_TYPE_REFERENCE,
                    "reference": index,
                }),
            })
            .collect();
        let payload = match &self.essence.payload {
            Some(indexation) => indexation.to_json(),
            None => Value::Null,
        };

        json!({
            "type": PAYLOAD_TYPE_TRANSACTION,
            "essence": {
                "type": ESSENCE_TYPE_REGULAR,
                "inputs": inputs,
                "outputs": outputs,
                "payload": payload,
            },
            "unlockBlocks": unlock_blocks,
        })
    }

    pub fn inputs_count(&self) -> usize {
        self.essence.inputs.len()
    }

    pub fn inputs_tx_id(&self, index: usize) -> Option<&str> {
        self.essence
            .inputs
            .get(index)
            .map(|input| input.transaction_id.as_str())
    }

    pub fn inputs_tx_output_index(&self, index: usize) -> Option<u16> {
        self.essence.inputs.get(index).map(|input| input.output_index)
    }

    pub fn outputs_count(&self) -> usize {
        self.essence.outputs.len()
    }

    pub fn outputs_address(&self, index: usize) -> Option<&str> {
        self.essence
            .outputs
            .get(index)
            .map(|output| output.address.as_str())
    }

    pub fn outputs_amount(&self, index: usize) -> Option<u64> {
        self.essence.outputs.get(index).map(|output| output.amount)
    }

    pub fn blocks_count(&self) -> usize {
        self.unlock_blocks.len()
    }

    /// `None` for signature blocks and out-of-range positions.
    pub fn blocks_reference(&self, index: usize) -> Option<u16> {
        match self.unlock_blocks.get(index) {
            Some(UnlockBlock::Reference { index: target }) => Some(*target),
            _ => None,
        }
    }

    /// `None` for reference blocks and out-of-range positions.
    pub fn blocks_public_key(&self, index: usize) -> Option<&str> {
        match self.unlock_blocks.get(index) {
            Some(UnlockBlock::Signature { public_key, .. }) => Some(public_key.as_str()),
            _ => None,
        }
    }

    pub fn blocks_signature(&self, index: usize) -> Option<&str> {
        match self.unlock_blocks.get(index) {
            Some(UnlockBlock::Signature { signature, .. }) => Some(signature.as_str()),
            _ => None,
        }
    }
}

fn decode_input(obj: &Value) -> Result<UtxoInput> {
    let input_type = get_u8(obj, "type")?;
    if input_type != INPUT_TYPE_UTXO {
        return Err(ClientError::unsupported("input", input_type as u64));
    }
    Ok(UtxoInput {
        transaction_id: get_hex_string(obj, "transactionId", TRANSACTION_ID_HEX_LEN)?,
        output_index: get_u16(obj, "transactionOutputIndex")?,
    })
}

fn decode_output(obj: &Value) -> Result<Output> {
    let kind = OutputKind::from_tag(get_u8(obj, "type")?)?;
    let address_obj = get_object(obj, "address")?;
    let address_type = get_u8(address_obj, "type")?;
    if address_type != ADDRESS_VER_ED25519 {
        return Err(ClientError::unsupported("address", address_type as u64));
    }
    Ok(Output {
        kind,
        address: get_hex_string(address_obj, "address", IOTA_ADDRESS_HEX_BYTES)?,
        amount: get_u64(obj, "amount")?,
    })
}

fn decode_nested_payload(obj: &Value) -> Result<IndexationPayload> {
    let payload_type = get_u32(obj, "type")?;
    if payload_type != PAYLOAD_TYPE_INDEXATION {
        return Err(ClientError::unsupported("nested payload", payload_type as u64));
    }
    IndexationPayload::from_json(obj)
}

fn decode_unlock_block(obj: &Value) -> Result<UnlockBlock> {
    match get_u8(obj, "type")? {
        UNLOCK_BLOCK_TYPE_SIGNATURE => {
            let sig_obj = get_object(obj, "signature")?;
            let sig_type = get_u8(sig_obj, "type")?;
            if sig_type != SIGNATURE_TYPE_ED25519 {
                return Err(ClientError::unsupported("signature", sig_type as u64));
            }
            Ok(UnlockBlock::Signature {
                public_key: get_hex_string(sig_obj, "publicKey", PUBLIC_KEY_HEX_LEN)?,
                signature: get_hex_string(sig_obj, "signature", SIGNATURE_HEX_LEN)?,
            })
        }
        UNLOCK_BLOCK_TYPE_REFERENCE => Ok(UnlockBlock::Reference {
            index: get_u16(obj, "reference")?,
        }),
        other => Err(ClientError::unsupported("unlock block", other as u64)),
    }
}

// One block per input; references point strictly backwards at a signature block.
fn validate_unlock_blocks(blocks: &[UnlockBlock], inputs: usize) -> Result<()> {
    if blocks.len() != inputs {
        return Err(ClientError::invalid(
            "unlockBlocks",
            format!("{} unlock blocks for {inputs} inputs", blocks.len()),
        ));
    }
    for (position, block) in blocks.iter().enumerate() {
        if let UnlockBlock::Reference { index } = block {
            let target = *index as usize;
            if target >= position {
                return Err(ClientError::invalid(
                    "reference",
                    format!("block {position} references non-earlier block {target}"),
                ));
            }
            if !matches!(blocks[target], UnlockBlock::Signature { .. }) {
                return Err(ClientError::invalid(
                    "reference",
                    format!("block {position} references block {target} which is not a signature"),
                ));
            }
        }
    }
    Ok(())
}
