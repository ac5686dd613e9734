use crate::api::AddressKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/4218'/0'/0'/0'";
pub const DEFAULT_HRP: &str = "iota";

/// Address notation accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKindArg {
    Ed25519,
    Bech32,
}

impl FromStr for AddressKindArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ed25519" | "hex" => Ok(AddressKindArg::Ed25519),
            "bech32" => Ok(AddressKindArg::Bech32),
            _ => Err(format!(
                "Invalid address kind: {s}. Valid options: ed25519, bech32"
            )),
        }
    }
}

impl std::fmt::Display for AddressKindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressKindArg::Ed25519 => write!(f, "ed25519"),
            AddressKindArg::Bech32 => write!(f, "bech32"),
        }
    }
}

impl From<AddressKindArg> for AddressKind {
    fn from(arg: AddressKindArg) -> Self {
        match arg {
            AddressKindArg::Ed25519 => AddressKind::Ed25519,
            AddressKindArg::Bech32 => AddressKind::Bech32,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "iota-node-client")]
pub struct Opt {
    #[arg(
        long = "config",
        global = true,
        help = "TOML file with host, port and use_tls"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "info", about = "Print node information")]
    Info,
    #[command(name = "health", about = "Check whether the node reports itself healthy")]
    Health,
    #[command(name = "tips", about = "List tip message ids")]
    Tips,
    #[command(name = "find", about = "Find message ids stored under an index")]
    Find {
        #[arg(help = "Index text (at most 64 bytes)")]
        index: String,
    },
    #[command(name = "message", about = "Fetch and print a message")]
    Message {
        #[arg(help = "Message id (64 hex characters)")]
        id: String,
    },
    #[command(name = "children", about = "List the children of a message")]
    Children {
        #[arg(help = "Message id (64 hex characters)")]
        id: String,
    },
    #[command(name = "balance", about = "Get the balance of an address")]
    Balance {
        #[arg(help = "Address in bech32 or ed25519 hex form")]
        address: String,
        #[arg(long = "kind", default_value_t = AddressKindArg::Bech32, help = "Address notation (ed25519, bech32)")]
        kind: AddressKindArg,
    },
    #[command(name = "outputs", about = "List output ids owned by an address")]
    Outputs {
        #[arg(help = "Address in bech32 or ed25519 hex form")]
        address: String,
        #[arg(long = "kind", default_value_t = AddressKindArg::Bech32, help = "Address notation (ed25519, bech32)")]
        kind: AddressKindArg,
    },
    #[command(name = "send", about = "Send an indexation message")]
    Send {
        #[arg(help = "Index text (at most 64 bytes)")]
        index: String,
        #[arg(help = "Message data as text")]
        data: String,
    },
    #[command(name = "derive-address", about = "Derive an address from a seed and path")]
    DeriveAddress {
        #[arg(help = "Seed (64 hex characters)")]
        seed: String,
        #[arg(long = "path", default_value = DEFAULT_DERIVATION_PATH, help = "SLIP-10 path, hardened segments only")]
        path: String,
        #[arg(long = "hrp", default_value = DEFAULT_HRP, help = "Bech32 human-readable prefix")]
        hrp: String,
    },
    #[command(name = "bech32-to-hex", about = "Convert a bech32 address to ed25519 hex")]
    Bech32ToHex {
        #[arg(help = "Bech32 address")]
        address: String,
        #[arg(long = "hrp", default_value = DEFAULT_HRP, help = "Expected human-readable prefix")]
        hrp: String,
    },
    #[command(name = "new-seed", about = "Generate a random seed")]
    NewSeed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_kind_arg() {
        assert_eq!("ED25519".parse::<AddressKindArg>(), Ok(AddressKindArg::Ed25519));
        assert_eq!("bech32".parse::<AddressKindArg>(), Ok(AddressKindArg::Bech32));
        assert!("base58".parse::<AddressKindArg>().is_err());
        assert_eq!(AddressKind::from(AddressKindArg::Bech32), AddressKind::Bech32);
    }

    #[test]
    fn test_parse_balance_command() {
        let opt = Opt::try_parse_from([
            "iota-node-client",
            "--config",
            "node.toml",
            "balance",
            "abc",
            "--kind",
            "ed25519",
        ])
        .unwrap();
        assert_eq!(opt.config, Some(PathBuf::from("node.toml")));
        match opt.command {
            Command::Balance { address, kind } => {
                assert_eq!(address, "abc");
                assert_eq!(kind, AddressKindArg::Ed25519);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_derive_address_defaults() {
        let opt = Opt::try_parse_from(["iota-node-client", "derive-address", "00"]).unwrap();
        match opt.command {
            Command::DeriveAddress { path, hrp, .. } => {
                assert_eq!(path, DEFAULT_DERIVATION_PATH);
                assert_eq!(hrp, DEFAULT_HRP);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
