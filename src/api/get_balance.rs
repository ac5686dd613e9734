use crate::api::response::{decode_response, ApiResponse};
use crate::api::{check_hex_argument, exchange_text, Request};
use crate::config::ClientConfig;
use crate::core::{is_bech32_address, IOTA_ADDRESS_HEX_BYTES};
use crate::error::{ClientError, Result};
use crate::network::Transport;
use crate::utils::json::{get_bool, get_string, get_u64, get_u8};
use serde::Serialize;

/// Longest address text a node echoes back (bech32 upper bound)
pub const ADDRESS_TEXT_MAX_LEN: usize = 90;

/// How an address argument is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressKind {
    /// 64 hex characters of the Ed25519 address hash
    Ed25519,
    /// Human-readable bech32 string
    Bech32,
}

impl AddressKind {
    pub(crate) fn validate(self, address: &str) -> Result<()> {
        match self {
            AddressKind::Ed25519 => check_hex_argument("address", address, IOTA_ADDRESS_HEX_BYTES),
            AddressKind::Bech32 if is_bech32_address(address) => Ok(()),
            AddressKind::Bech32 => Err(ClientError::InvalidArgument(format!(
                "not a bech32 address: {address:?}"
            ))),
        }
    }

    pub(crate) fn path(self, address: &str) -> String {
        match self {
            AddressKind::Ed25519 => format!("/api/v1/addresses/ed25519/{address}"),
            AddressKind::Bech32 => format!("/api/v1/addresses/{address}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub address_type: u8,
    pub address: String,
    pub balance: u64,
    pub dust_allowed: bool,
    pub ledger_index: u64,
}

pub fn deserialize_balance(body: &str) -> Result<ApiResponse<Balance>> {
    decode_response(body, |data| {
        Ok(Balance {
            address_type: get_u8(data, "addressType")?,
            address: get_string(data, "address", ADDRESS_TEXT_MAX_LEN)?,
            balance: get_u64(data, "balance")?,
            dust_allowed: get_bool(data, "dustAllowed")?,
            ledger_index: get_u64(data, "ledgerIndex")?,
        })
    })
}

/// `GET /api/v1/addresses/ed25519/<hex>` or `GET /api/v1/addresses/<bech32>`
pub fn get_balance(
    transport: &mut dyn Transport,
    config: &ClientConfig,
    kind: AddressKind,
    address: &str,
) -> Result<ApiResponse<Balance>> {
    kind.validate(address)?;

    let body = exchange_text(transport, config, &kind.path(address), Request::Get)?;
    deserialize_balance(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;

    const ADDR_HEX: &str = "7ed3d67fc7b619e72e588f51fef2379e43e6e9a856635843b3f29aa3a3f1f006";
    const BALANCE: &str = r#"{"data":{"addressType":0,
        "address":"7ed3d67fc7b619e72e588f51fef2379e43e6e9a856635843b3f29aa3a3f1f006",
        "balance":2779530283277761,"dustAllowed":false,"ledgerIndex":860371}}"#;

    #[test]
    fn test_deserialize() {
        let res = deserialize_balance(BALANCE).unwrap();
        let balance = res.success().unwrap();
        assert_eq!(balance.address_type, 0);
        assert_eq!(balance.address, ADDR_HEX);
        assert_eq!(balance.balance, 2779530283277761);
        assert!(!balance.dust_allowed);
        assert_eq!(balance.ledger_index, 860371);
    }

    #[test]
    fn test_missing_address_fails() {
        let body = r#"{"data":{"addressType":0,"balance":1,"dustAllowed":false,"ledgerIndex":1}}"#;
        assert_eq!(
            deserialize_balance(body).unwrap_err(),
            ClientError::missing("address")
        );
    }

    #[test]
    fn test_address_capacity() {
        let body = format!(
            r#"{{"data":{{"addressType":0,"address":"{}","balance":1,"dustAllowed":false,"ledgerIndex":1}}}}"#,
            "a".repeat(ADDRESS_TEXT_MAX_LEN + 1)
        );
        assert!(matches!(
            deserialize_balance(&body).unwrap_err(),
            ClientError::CapacityExceeded { .. }
        ));
    }

    #[test]
    fn test_ed25519_path() {
        let mut transport = MockTransport::replying(BALANCE);
        get_balance(&mut transport, &ClientConfig::default(), AddressKind::Ed25519, ADDR_HEX).unwrap();
        assert_eq!(
            transport.last_path().unwrap(),
            format!("/api/v1/addresses/ed25519/{ADDR_HEX}")
        );
    }

    #[test]
    fn test_address_validated_by_kind() {
        let mut transport = MockTransport::replying(BALANCE);
        let config = ClientConfig::default();
        assert!(get_balance(&mut transport, &config, AddressKind::Ed25519, "atoi1qq").is_err());
        assert!(get_balance(&mut transport, &config, AddressKind::Bech32, ADDR_HEX).is_err());
        assert!(transport.opened.is_empty());
    }
}
