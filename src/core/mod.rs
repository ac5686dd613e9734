//! Ledger data model
//!
//! - `message`: the message envelope (network id, parents, payload, nonce)
//! - `payload/`: indexation, milestone and transaction payloads
//! - `address`: address derivation and bech32 conversion

pub mod address;
pub mod message;
pub mod payload;

pub use address::{
    address_bech32_to_hex, address_from_bech32, address_from_ed25519_pub, address_from_path,
    address_keypair_from_path, address_to_bech32, is_bech32_address, random_seed, Seed,
    ADDRESS_VER_ED25519, ED25519_ADDRESS_BYTES, IOTA_ADDRESS_BYTES, IOTA_ADDRESS_HEX_BYTES,
    IOTA_SEED_BYTES,
};
pub use message::{Message, PayloadType};
pub use payload::{
    IndexationPayload, MilestonePayload, Output, OutputKind, Payload, TransactionEssence,
    TransactionPayload, UnlockBlock, UtxoInput,
};

/// Hex length of a message id (32 bytes)
pub const MESSAGE_ID_HEX_LEN: usize = 64;
/// Hex length of a transaction id (32 bytes)
pub const TRANSACTION_ID_HEX_LEN: usize = 64;
/// Hex length of an output id (transaction id + u16 index)
pub const OUTPUT_ID_HEX_LEN: usize = 68;
pub const PUBLIC_KEY_HEX_LEN: usize = 64;
pub const SIGNATURE_HEX_LEN: usize = 128;
pub const MERKLE_PROOF_HEX_LEN: usize = 64;
