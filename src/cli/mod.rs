//! Command-line interface
//!
//! Argument parsing for the node client binary.

pub mod commands;

pub use commands::{AddressKindArg, Command, Opt, DEFAULT_DERIVATION_PATH, DEFAULT_HRP};
