use crate::error::{ClientError, Result};
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use once_cell::sync::Lazy;
use ring::digest::{digest, SHA256, SHA512};
use ring::hmac;
use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use ring::signature::{Ed25519KeyPair, KeyPair, UnparsedPublicKey, ED25519};
use std::num::NonZeroU32;
use zeroize::ZeroizeOnDrop;

pub const ED_SEED_BYTES: usize = 32;
pub const ED_PUBLIC_KEY_BYTES: usize = 32;
pub const ED_SIGNATURE_BYTES: usize = 64;
pub const SHA256_BYTES: usize = 32;
pub const SHA512_BYTES: usize = 64;
pub const BLAKE2B_256_BYTES: usize = 32;

type Blake2b256 = Blake2b<U32>;

static RING_PROVIDER: Lazy<RingProvider> = Lazy::new(RingProvider::new);

/// The provider used when the caller does not inject one.
pub fn default_provider() -> &'static RingProvider {
    &RING_PROVIDER
}

/// Ed25519 key pair; the secret seed is wiped on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Ed25519Keypair {
    public: [u8; ED_PUBLIC_KEY_BYTES],
    seed: [u8; ED_SEED_BYTES],
}

impl Ed25519Keypair {
    pub fn public_key(&self) -> &[u8; ED_PUBLIC_KEY_BYTES] {
        &self.public
    }

    /// Secret seed bytes (use carefully)
    pub fn seed(&self) -> &[u8; ED_SEED_BYTES] {
        &self.seed
    }
}

impl std::fmt::Debug for Ed25519Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519Keypair")
            .field("public", &crate::utils::bytes_to_hex(&self.public))
            .finish()
    }
}

/// Capability set every cryptographic backend must offer. Algorithms and
/// output sizes are fixed by the trait, so backends are interchangeable.
pub trait CryptoProvider {
    fn name(&self) -> &'static str;

    fn random_bytes(&self, buf: &mut [u8]) -> Result<()>;

    fn keypair_from_seed(&self, seed: &[u8; ED_SEED_BYTES]) -> Result<Ed25519Keypair>;

    fn sign(&self, keypair: &Ed25519Keypair, message: &[u8]) -> Result<[u8; ED_SIGNATURE_BYTES]>;

    fn verify(
        &self,
        public_key: &[u8; ED_PUBLIC_KEY_BYTES],
        message: &[u8],
        signature: &[u8; ED_SIGNATURE_BYTES],
    ) -> bool;

    fn sha256(&self, message: &[u8]) -> [u8; SHA256_BYTES];

    fn sha512(&self, message: &[u8]) -> [u8; SHA512_BYTES];

    fn hmac_sha256(&self, key: &[u8], message: &[u8]) -> [u8; SHA256_BYTES];

    fn hmac_sha512(&self, key: &[u8], message: &[u8]) -> [u8; SHA512_BYTES];

    fn pbkdf2_hmac_sha512(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out: &mut [u8],
    ) -> Result<()>;

    fn blake2b_256(&self, message: &[u8]) -> [u8; BLAKE2B_256_BYTES];
}

/// Backend built on `ring`, with `blake2` for BLAKE2b.
pub struct RingProvider {
    rng: SystemRandom,
}

impl Default for RingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RingProvider {
    pub fn new() -> Self {
        RingProvider {
            rng: SystemRandom::new(),
        }
    }

    fn ring_keypair(seed: &[u8; ED_SEED_BYTES]) -> Result<Ed25519KeyPair> {
        Ed25519KeyPair::from_seed_unchecked(seed)
            .map_err(|e| ClientError::Crypto(format!("Failed to create ed25519 key pair: {e}")))
    }
}

fn copy_into<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}

impl CryptoProvider for RingProvider {
    fn name(&self) -> &'static str {
        "ring"
    }

    fn random_bytes(&self, buf: &mut [u8]) -> Result<()> {
        self.rng
            .fill(buf)
            .map_err(|e| ClientError::Crypto(format!("Random generator failed: {e}")))
    }

    fn keypair_from_seed(&self, seed: &[u8; ED_SEED_BYTES]) -> Result<Ed25519Keypair> {
        let key_pair = Self::ring_keypair(seed)?;
        Ok(Ed25519Keypair {
            public: copy_into(key_pair.public_key().as_ref()),
            seed: *seed,
        })
    }

    fn sign(&self, keypair: &Ed25519Keypair, message: &[u8]) -> Result<[u8; ED_SIGNATURE_BYTES]> {
        let key_pair = Self::ring_keypair(&keypair.seed)?;
        Ok(copy_into(key_pair.sign(message).as_ref()))
    }

    fn verify(
        &self,
        public_key: &[u8; ED_PUBLIC_KEY_BYTES],
        message: &[u8],
        signature: &[u8; ED_SIGNATURE_BYTES],
    ) -> bool {
        UnparsedPublicKey::new(&ED25519, public_key)
            .verify(message, signature)
            .is_ok()
    }

    fn sha256(&self, message: &[u8]) -> [u8; SHA256_BYTES] {
        copy_into(digest(&SHA256, message).as_ref())
    }

    fn sha512(&self, message: &[u8]) -> [u8; SHA512_BYTES] {
        copy_into(digest(&SHA512, message).as_ref())
    }

    fn hmac_sha256(&self, key: &[u8], message: &[u8]) -> [u8; SHA256_BYTES] {
        let key = hmac::Key::new(hmac::HMAC_SHA256, key);
        copy_into(hmac::sign(&key, message).as_ref())
    }

    fn hmac_sha512(&self, key: &[u8], message: &[u8]) -> [u8; SHA512_BYTES] {
        let key = hmac::Key::new(hmac::HMAC_SHA512, key);
        copy_into(hmac::sign(&key, message).as_ref())
    }

    fn pbkdf2_hmac_sha512(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out: &mut [u8],
    ) -> Result<()> {
        let iterations = NonZeroU32::new(iterations)
            .ok_or_else(|| ClientError::Crypto("PBKDF2 needs at least one iteration".into()))?;
        if out.is_empty() {
            return Err(ClientError::Crypto("PBKDF2 output buffer is empty".into()));
        }
        pbkdf2::derive(pbkdf2::PBKDF2_HMAC_SHA512, iterations, salt, password, out);
        Ok(())
    }

    fn blake2b_256(&self, message: &[u8]) -> [u8; BLAKE2B_256_BYTES] {
        let mut hasher = Blake2b256::new();
        hasher.update(message);
        hasher.finalize().into()
    }
}
