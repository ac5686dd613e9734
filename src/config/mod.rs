//! Configuration management
//!
//! This module holds the node endpoint settings every API call needs:
//! host, port and whether to talk TLS.

pub mod settings;

pub use settings::{ClientConfig, DEFAULT_CONFIG, IOTA_ENDPOINT_MAX_LEN};
