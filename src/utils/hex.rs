use crate::error::{ClientError, Result};
use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

pub fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Checks that `value` is exactly `hex_len` hex characters.
pub fn validate_hex(field: &str, value: &str, hex_len: usize) -> Result<()> {
    if value.len() != hex_len {
        return Err(ClientError::invalid(
            field,
            format!("expected {hex_len} hex characters, got {}", value.len()),
        ));
    }
    if !is_hex(value) {
        return Err(ClientError::invalid(field, "not a hex string"));
    }
    Ok(())
}

/// Hex-encodes the UTF-8 bytes of a text, e.g. `"Foo"` -> `"466f6f"`.
pub fn string_to_hex(text: &str) -> String {
    HEXLOWER.encode(text.as_bytes())
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    HEXLOWER.encode(bytes)
}

/// Decodes a hex string into a fixed-size buffer. Upper case is accepted.
pub fn hex_to_bytes<const N: usize>(value: &str) -> Result<[u8; N]> {
    if value.len() != N * 2 {
        return Err(ClientError::InvalidArgument(format!(
            "expected {} hex characters, got {}",
            N * 2,
            value.len()
        )));
    }
    let decoded = HEXLOWER_PERMISSIVE
        .decode(value.as_bytes())
        .map_err(|e| ClientError::InvalidArgument(format!("invalid hex: {e}")))?;
    let mut out = [0u8; N];
    out.copy_from_slice(&decoded);
    Ok(out)
}
