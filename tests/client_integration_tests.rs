//! Client integration tests
//!
//! Runs the public API end to end through an in-memory transport, plus the
//! address helpers and config loading that sit around it. No network.

use iota_node_client::core::{address_from_path, IOTA_ADDRESS_BYTES};
use iota_node_client::crypto::{CryptoProvider, RingProvider};
use iota_node_client::network::{HttpContext, HttpResponse, Transport};
use iota_node_client::{
    address_bech32_to_hex, address_from_bech32, address_to_bech32, AddressKind, ClientConfig,
    ClientError, NodeClient, Result,
};
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

/// Serves canned bodies keyed by request path.
#[derive(Default)]
struct RoutedTransport {
    routes: HashMap<String, (u16, String)>,
    current: Option<String>,
    requests: Vec<String>,
    close_fails: bool,
}

impl RoutedTransport {
    fn route(mut self, path: &str, body: &str) -> Self {
        self.routes
            .insert(path.to_string(), (200, body.to_string()));
        self
    }
}

impl Transport for RoutedTransport {
    fn open(&mut self, ctx: &HttpContext) -> Result<()> {
        self.current = Some(ctx.path.clone());
        self.requests.push(ctx.url());
        Ok(())
    }

    fn read(&mut self, _content_type: &str) -> Result<HttpResponse> {
        let path = self.current.clone().unwrap_or_default();
        match self.routes.get(&path) {
            Some((status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.as_bytes().to_vec(),
            }),
            None => Ok(HttpResponse {
                status: 404,
                body: br#"{"error":{"code":"404","message":"route not found"}}"#.to_vec(),
            }),
        }
    }

    fn post(&mut self, content_type: &str, _body: &[u8]) -> Result<HttpResponse> {
        self.read(content_type)
    }

    fn close(&mut self) -> Result<()> {
        self.current = None;
        if self.close_fails {
            return Err(ClientError::Transport("connection reset".to_string()));
        }
        Ok(())
    }
}

const MSG_ID: &str = "0f70e47835aaa63a87fd52c1dd556dd6f588e7f428413e8196c586eb05cfadaf";

fn indexation_message_body() -> String {
    format!(
        r#"{{"data":{{"networkId":"9466822412763346725","parentMessageIds":["{MSG_ID}"],
            "payload":{{"type":2,"index":"Foo","data":"426172"}},"nonce":"567803"}}}}"#
    )
}

fn sample_address(account: u32) -> [u8; IOTA_ADDRESS_BYTES] {
    let provider = RingProvider::new();
    let path = format!("m/44'/4218'/{account}'/0'/0'");
    address_from_path(&provider, &[7u8; 32], &path).unwrap()
}

#[test]
fn test_client_message_flow() {
    let transport = RoutedTransport::default()
        .route(&format!("/api/v1/messages/{MSG_ID}"), &indexation_message_body());
    let config = ClientConfig::new("node.example", 443, true).unwrap();
    let mut client = NodeClient::with_transport(config, transport).unwrap();

    let msg = client.message(MSG_ID).unwrap().into_success().unwrap();
    assert_eq!(msg.as_indexation().unwrap().index, "Foo");
    assert_eq!(
        client.transport().requests,
        vec![format!("https://node.example:443/api/v1/messages/{MSG_ID}")]
    );
}

#[test]
fn test_node_error_is_not_a_failure() {
    let mut client =
        NodeClient::with_transport(ClientConfig::default(), RoutedTransport::default()).unwrap();
    let res = client.message_children(MSG_ID).unwrap();
    assert!(res.is_error());
    assert_eq!(res.error().unwrap().message, "route not found");
}

#[test]
fn test_close_failure_fails_the_call() {
    let transport = RoutedTransport {
        close_fails: true,
        ..RoutedTransport::default()
    }
    .route("/api/v1/info", "{}");
    let mut client = NodeClient::with_transport(ClientConfig::default(), transport).unwrap();
    assert_eq!(
        client.node_info().unwrap_err(),
        ClientError::Transport("connection reset".to_string())
    );
}

#[test]
fn test_balance_by_bech32_address() {
    let bech32 = address_to_bech32(&sample_address(0), "atoi").unwrap();
    let body = format!(
        r#"{{"data":{{"addressType":0,"address":"{bech32}","balance":1000000,"dustAllowed":true,"ledgerIndex":42}}}}"#
    );
    let transport = RoutedTransport::default().route(&format!("/api/v1/addresses/{bech32}"), &body);
    let mut client = NodeClient::with_transport(ClientConfig::default(), transport).unwrap();

    let balance = client
        .balance(AddressKind::Bech32, &bech32)
        .unwrap()
        .into_success()
        .unwrap();
    assert_eq!(balance.balance, 1000000);
    assert!(balance.dust_allowed);
    assert_eq!(balance.address, bech32);
}

#[test]
fn test_outputs_by_hex_address() {
    let hex = address_bech32_to_hex("iota", &address_to_bech32(&sample_address(1), "iota").unwrap())
        .unwrap();
    let output_id = format!("{}0000", "ab".repeat(32));
    let body = format!(
        r#"{{"data":{{"address":"{hex}","maxResults":1000,"count":1,"outputIds":["{output_id}"],"ledgerIndex":7}}}}"#
    );
    let transport = RoutedTransport::default()
        .route(&format!("/api/v1/addresses/ed25519/{hex}/outputs"), &body);
    let mut client = NodeClient::with_transport(ClientConfig::default(), transport).unwrap();

    let outputs = client
        .outputs(AddressKind::Ed25519, &hex)
        .unwrap()
        .into_success()
        .unwrap();
    assert_eq!(outputs.output_id(0), Some(output_id.as_str()));
    assert_eq!(outputs.output_id(1), None);
}

#[test]
fn test_bech32_round_trip() {
    for account in 0..5 {
        let addr = sample_address(account);
        for hrp in ["iota", "atoi"] {
            let bech32 = address_to_bech32(&addr, hrp).unwrap();
            let decoded = address_from_bech32(hrp, &bech32).unwrap();
            assert_eq!(decoded, addr);
            assert_eq!(address_to_bech32(&decoded, hrp).unwrap(), bech32);
        }
    }
}

#[test]
fn test_corrupted_checksum_rejected() {
    let bech32 = address_to_bech32(&sample_address(0), "iota").unwrap();
    let mut chars: Vec<char> = bech32.chars().collect();
    let last = chars.len() - 1;
    chars[last] = if chars[last] == 'q' { 'p' } else { 'q' };
    let corrupted: String = chars.into_iter().collect();

    assert!(matches!(
        address_from_bech32("iota", &corrupted),
        Err(ClientError::InvalidAddress(_))
    ));
}

#[test]
fn test_provider_sign_verify() {
    let provider = RingProvider::new();
    let keypair = provider.keypair_from_seed(&[9u8; 32]).unwrap();
    let signature = provider.sign(&keypair, b"essence hash").unwrap();
    assert!(provider.verify(keypair.public_key(), b"essence hash", &signature));
    assert!(!provider.verify(keypair.public_key(), b"other", &signature));
}

#[test]
fn test_config_file_drives_client() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "host = \"chrysalis-nodes.iota.org\"\nport = 443\nuse_tls = true").unwrap();

    let config = ClientConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(config.host, "chrysalis-nodes.iota.org");
    assert_eq!(config.port, 443);
    assert!(config.use_tls);
    let client = NodeClient::with_transport(config, RoutedTransport::default()).unwrap();
    assert_eq!(client.config().base_url(), "https://chrysalis-nodes.iota.org:443");
}
