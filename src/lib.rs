//! # IOTA Node Client - My Client for the IOTA Node REST API
//!
//! This is my blocking client for talking to an IOTA (Chrysalis) node over
//! its `/api/v1` REST interface. When I come back to this code, here's what
//! I need to remember:
//!
//! ## What I Built
//! - **Message Decoding**: Indexation, milestone and transaction payloads, nested ones included
//! - **API Operations**: One function per endpoint, each a single blocking round trip
//! - **Response Envelope**: Node errors come back as data, never as a failed call
//! - **Addresses**: SLIP-10 derivation, BLAKE2b address hashing, bech32 conversion
//! - **Crypto Provider**: Sign, verify, hashes, HMAC and PBKDF2 behind one trait
//!
//! ## How I Organized My Code
//! - `core/`: Messages, payloads and addresses
//! - `api/`: Endpoint operations, the response envelope and `NodeClient`
//! - `network/`: The `Transport` trait and the reqwest-backed HTTP transport
//! - `crypto/`: The crypto provider and SLIP-10 key derivation
//! - `config/`: Node host/port/TLS settings from defaults, TOML and env
//! - `utils/`: JSON getters and hex helpers
//! - `cli/`: Command-line interface over every endpoint
//!
//! ## Key Design Decisions I Made
//! - Every id, key and signature stays as validated fixed-length hex text
//! - Decoding stops at the first bad field and reports which one it was
//! - Bounded strings fail when too long instead of being truncated
//! - Reference unlock blocks are checked when the transaction is decoded
//! - No retries or timeouts of my own: the transport owns that policy
//!
//! ## When I Need to Understand Something
//! 1. Start with `main.rs` to see the CLI commands
//! 2. Look at `api/mod.rs` for how a request goes out and comes back
//! 3. Check `core/message.rs` and `core/payload/` for the wire format
//! 4. Review `core/address.rs` for address derivation

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod crypto;
pub mod error;
pub mod network;
pub mod utils;

// Re-export commonly used types for convenience
pub use api::{
    find_message_by_index, get_balance, get_health, get_message_by_id, get_message_children,
    get_node_info, get_outputs_from_address, get_tips, send_indexation_message, send_message,
    AddressKind, ApiResponse, Balance, FindMessages, MessageChildren, NodeClient, NodeInfo,
    OutputIds, ResponseError, Tips,
};
pub use cli::{Command, Opt};
pub use config::{ClientConfig, DEFAULT_CONFIG};
pub use core::{
    address_bech32_to_hex, address_from_bech32, address_from_ed25519_pub, address_from_path,
    address_to_bech32, random_seed, IndexationPayload, Message, MilestonePayload, Payload,
    PayloadType, TransactionPayload, UnlockBlock,
};
pub use crypto::{default_provider, CryptoProvider, RingProvider};
pub use error::{ClientError, Result};
pub use network::{HttpTransport, Transport};
