use crate::crypto::{derive_key, CryptoProvider, Ed25519Keypair, ED_PUBLIC_KEY_BYTES};
use crate::error::{ClientError, Result};
use crate::utils::bytes_to_hex;
use bech32::{FromBase32, ToBase32, Variant};
use zeroize::Zeroizing;

pub const ADDRESS_VER_ED25519: u8 = 0x00;
pub const ED25519_ADDRESS_BYTES: usize = ED_PUBLIC_KEY_BYTES;
// version + address data
pub const IOTA_ADDRESS_BYTES: usize = 1 + ED25519_ADDRESS_BYTES;
// the hex form used by the node API excludes the version byte
pub const IOTA_ADDRESS_HEX_BYTES: usize = ED25519_ADDRESS_BYTES * 2;
pub const IOTA_SEED_BYTES: usize = 32;

pub type Seed = Zeroizing<[u8; IOTA_SEED_BYTES]>;

pub fn random_seed(provider: &dyn CryptoProvider) -> Result<Seed> {
    let mut seed = Zeroizing::new([0u8; IOTA_SEED_BYTES]);
    provider.random_bytes(&mut seed[..])?;
    Ok(seed)
}

/// BLAKE2b-256 of the public key
pub fn address_from_ed25519_pub(
    provider: &dyn CryptoProvider,
    public_key: &[u8; ED_PUBLIC_KEY_BYTES],
) -> [u8; ED25519_ADDRESS_BYTES] {
    provider.blake2b_256(public_key)
}

pub fn address_keypair_from_path(
    provider: &dyn CryptoProvider,
    seed: &[u8],
    path: &str,
) -> Result<Ed25519Keypair> {
    let node = derive_key(provider, seed, path)?;
    provider.keypair_from_seed(node.key())
}

/// Version byte + ed25519 address for the key at `path`.
pub fn address_from_path(
    provider: &dyn CryptoProvider,
    seed: &[u8],
    path: &str,
) -> Result<[u8; IOTA_ADDRESS_BYTES]> {
    let keypair = address_keypair_from_path(provider, seed, path)?;
    let mut addr = [0u8; IOTA_ADDRESS_BYTES];
    addr[0] = ADDRESS_VER_ED25519;
    addr[1..].copy_from_slice(&address_from_ed25519_pub(provider, keypair.public_key()));
    Ok(addr)
}

pub fn address_to_bech32(addr: &[u8; IOTA_ADDRESS_BYTES], hrp: &str) -> Result<String> {
    if addr[0] != ADDRESS_VER_ED25519 {
        return Err(ClientError::InvalidAddress(format!(
            "unsupported address version {}",
            addr[0]
        )));
    }
    bech32::encode(hrp, addr.to_base32(), Variant::Bech32)
        .map_err(|e| ClientError::InvalidAddress(format!("bech32 encoding failed: {e}")))
}

/// Decodes a bech32 address, checking the checksum and that its prefix is `hrp`.
///
/// All-uppercase input is accepted and mixed case is rejected. The
/// canonical form is lowercase, so [`address_to_bech32`] reproduces an
/// uppercase input only up to case.
pub fn address_from_bech32(hrp: &str, bech32_str: &str) -> Result<[u8; IOTA_ADDRESS_BYTES]> {
    let (decoded_hrp, data, variant) = bech32::decode(bech32_str)
        .map_err(|e| ClientError::InvalidAddress(format!("{bech32_str}: {e}")))?;
    if decoded_hrp != hrp.to_lowercase() {
        return Err(ClientError::InvalidAddress(format!(
            "expected prefix {hrp}, got {decoded_hrp}"
        )));
    }
    if variant != Variant::Bech32 {
        return Err(ClientError::InvalidAddress(
            "bech32m addresses are not supported".to_string(),
        ));
    }
    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| ClientError::InvalidAddress(format!("invalid address data: {e}")))?;
    if bytes.len() != IOTA_ADDRESS_BYTES {
        return Err(ClientError::InvalidAddress(format!(
            "expected {IOTA_ADDRESS_BYTES} address bytes, got {}",
            bytes.len()
        )));
    }
    if bytes[0] != ADDRESS_VER_ED25519 {
        return Err(ClientError::InvalidAddress(format!(
            "unsupported address version {}",
            bytes[0]
        )));
    }
    let mut addr = [0u8; IOTA_ADDRESS_BYTES];
    addr.copy_from_slice(&bytes);
    Ok(addr)
}

/// 64-char hex form of a bech32 address, version byte excluded
pub fn address_bech32_to_hex(hrp: &str, bech32_str: &str) -> Result<String> {
    let addr = address_from_bech32(hrp, bech32_str)?;
    Ok(bytes_to_hex(&addr[1..]))
}

/// True when `value` decodes as a bech32 ed25519 address with any prefix.
pub fn is_bech32_address(value: &str) -> bool {
    match bech32::decode(value) {
        Ok((hrp, _, _)) => address_from_bech32(&hrp, value).is_ok(),
        Err(_) => false,
    }
}
