//! Utility functions and helpers
//!
//! Typed JSON field access and hex helpers shared by every decoder
//! and API operation.

pub mod hex;
pub mod json;

pub use self::hex::{bytes_to_hex, hex_to_bytes, is_hex, string_to_hex, validate_hex};
