//! SLIP-10 hierarchical key derivation for ed25519.
//!
//! Only hardened derivation exists on this curve, so every path segment
//! must carry a `'` or `H` marker, e.g. `m/44'/4218'/0'/0'/0'`.

use crate::crypto::provider::{CryptoProvider, ED_SEED_BYTES};
use crate::error::{ClientError, Result};
use zeroize::ZeroizeOnDrop;

pub const HARDENED_OFFSET: u32 = 0x8000_0000;

const MASTER_KEY_CURVE: &[u8] = b"ed25519 seed";
const MIN_SEED_BYTES: usize = 16;
const MAX_SEED_BYTES: usize = 64;

#[derive(Clone, ZeroizeOnDrop)]
pub struct Slip10Key {
    key: [u8; ED_SEED_BYTES],
    chain_code: [u8; 32],
}

impl Slip10Key {
    /// The ed25519 private seed at this node
    pub fn key(&self) -> &[u8; ED_SEED_BYTES] {
        &self.key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    fn from_hmac(output: &[u8; 64]) -> Slip10Key {
        let mut key = [0u8; ED_SEED_BYTES];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);
        Slip10Key { key, chain_code }
    }

    fn child(&self, provider: &dyn CryptoProvider, index: u32) -> Slip10Key {
        let mut data = Vec::with_capacity(1 + 32 + 4);
        data.push(0u8);
        data.extend_from_slice(&self.key);
        data.extend_from_slice(&index.to_be_bytes());
        Self::from_hmac(&provider.hmac_sha512(&self.chain_code, &data))
    }
}

/// Parses `m/0'/1H/2'` into hardened indexes.
pub fn parse_path(path: &str) -> Result<Vec<u32>> {
    let mut segments = path.trim().split('/');
    if segments.next() != Some("m") {
        return Err(ClientError::InvalidArgument(format!(
            "derivation path must start with 'm': {path}"
        )));
    }

    let mut indexes = vec![];
    for segment in segments {
        let number = segment
            .strip_suffix('\'')
            .or_else(|| segment.strip_suffix('H'))
            .or_else(|| segment.strip_suffix('h'))
            .ok_or_else(|| {
                ClientError::InvalidArgument(format!(
                    "segment {segment} is not hardened, ed25519 supports hardened keys only"
                ))
            })?;
        let index = number
            .parse::<u32>()
            .map_err(|_| ClientError::InvalidArgument(format!("invalid path segment: {segment}")))?;
        if index >= HARDENED_OFFSET {
            return Err(ClientError::InvalidArgument(format!(
                "path segment out of range: {segment}"
            )));
        }
        indexes.push(index | HARDENED_OFFSET);
    }
    Ok(indexes)
}

/// Derives the key at `path` from a 16 to 64 byte seed.
pub fn derive_key(provider: &dyn CryptoProvider, seed: &[u8], path: &str) -> Result<Slip10Key> {
    if !(MIN_SEED_BYTES..=MAX_SEED_BYTES).contains(&seed.len()) {
        return Err(ClientError::InvalidArgument(format!(
            "seed must be {MIN_SEED_BYTES} to {MAX_SEED_BYTES} bytes, got {}",
            seed.len()
        )));
    }
    let indexes = parse_path(path)?;

    let mut node = Slip10Key::from_hmac(&provider.hmac_sha512(MASTER_KEY_CURVE, seed));
    for index in indexes {
        node = node.child(provider, index);
    }
    Ok(node)
}
