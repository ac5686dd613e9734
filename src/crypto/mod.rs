//! Cryptographic capabilities
//!
//! The client only ever talks to a [`CryptoProvider`]. [`RingProvider`]
//! is the backend shipped with the crate; tests or embedded targets can
//! inject their own implementation.

pub mod provider;
pub mod slip10;

pub use provider::{
    default_provider, CryptoProvider, Ed25519Keypair, RingProvider, BLAKE2B_256_BYTES,
    ED_PUBLIC_KEY_BYTES, ED_SEED_BYTES, ED_SIGNATURE_BYTES, SHA256_BYTES, SHA512_BYTES,
};
pub use slip10::{derive_key, parse_path, Slip10Key, HARDENED_OFFSET};
