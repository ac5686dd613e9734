//! Node API operations
//!
//! One file per endpoint. Each operation validates its arguments, builds the
//! request path, runs a single exchange over a [`Transport`] and decodes the
//! body into an [`ApiResponse`]. [`NodeClient`] bundles a configuration and a
//! transport behind one method per endpoint.

pub mod client;
pub mod find_message;
pub mod get_balance;
pub mod get_health;
pub mod get_message;
pub mod get_message_children;
pub mod get_node_info;
pub mod get_outputs_from_address;
pub mod get_tips;
pub mod response;
pub mod send_message;

pub use client::NodeClient;
pub use find_message::{deserialize_find_message, find_message_by_index, FindMessages};
pub use get_balance::{deserialize_balance, get_balance, AddressKind, Balance};
pub use get_health::get_health;
pub use get_message::{deserialize_message, get_message_by_id};
pub use get_message_children::{deserialize_message_children, get_message_children, MessageChildren};
pub use get_node_info::{deserialize_node_info, get_node_info, NodeInfo};
pub use get_outputs_from_address::{
    deserialize_outputs_from_address, get_outputs_from_address, OutputIds,
};
pub use get_tips::{deserialize_tips, get_tips, Tips};
pub use response::{decode_response, ApiResponse, ResponseError};
pub use send_message::{deserialize_send_message, send_indexation_message, send_message};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::network::{HttpContext, HttpResponse, Transport, CONTENT_TYPE_JSON};
use log::{debug, error, warn};

pub(crate) enum Request<'a> {
    Get,
    Post(&'a [u8]),
}

/// Runs one request against the node.
///
/// The connection is closed whatever the outcome of the request. A failed
/// close turns the whole exchange into a failure even if the body was read.
pub(crate) fn exchange(
    transport: &mut dyn Transport,
    config: &ClientConfig,
    path: &str,
    request: Request<'_>,
) -> Result<HttpResponse> {
    config.validate()?;
    let ctx = HttpContext::new(config, path);
    debug!("{} {}", request_verb(&request), ctx.url());

    if let Err(e) = transport.open(&ctx) {
        error!("Can not open HTTP connection to {}: {e}", ctx.url());
        return Err(e);
    }

    let result = match request {
        Request::Get => transport.read(CONTENT_TYPE_JSON),
        Request::Post(body) => transport.post(CONTENT_TYPE_JSON, body),
    };
    if let Err(e) = &result {
        error!("HTTP read problem on {path}: {e}");
    }

    if let Err(e) = transport.close() {
        warn!("Can not close HTTP connection: {e}");
        return Err(match result {
            Err(read_err) => read_err,
            Ok(_) => e,
        });
    }

    result
}

/// Runs a request and returns the body as text.
pub(crate) fn exchange_text(
    transport: &mut dyn Transport,
    config: &ClientConfig,
    path: &str,
    request: Request<'_>,
) -> Result<String> {
    let response = exchange(transport, config, path, request)?;
    let text = response.body_text()?;
    Ok(text.to_string())
}

fn request_verb(request: &Request<'_>) -> &'static str {
    match request {
        Request::Get => "GET",
        Request::Post(_) => "POST",
    }
}

/// Fails fast on an identifier that is not exactly `hex_len` hex characters.
pub(crate) fn check_hex_argument(what: &str, value: &str, hex_len: usize) -> Result<()> {
    if value.len() != hex_len || !crate::utils::is_hex(value) {
        return Err(ClientError::InvalidArgument(format!(
            "{what} must be {hex_len} hex characters, got {:?}",
            value
        )));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod mock {
    use crate::error::{ClientError, Result};
    use crate::network::{HttpContext, HttpResponse, Transport};

    /// Canned transport that records what it was asked for.
    #[derive(Default)]
    pub struct MockTransport {
        pub status: u16,
        pub body: String,
        pub fail_open: bool,
        pub fail_read: bool,
        pub fail_close: bool,
        pub opened: Vec<String>,
        pub posted: Vec<Vec<u8>>,
        pub closed: usize,
    }

    impl MockTransport {
        pub fn replying(body: &str) -> MockTransport {
            MockTransport {
                status: 200,
                body: body.to_string(),
                ..Default::default()
            }
        }

        pub fn last_path(&self) -> Option<&str> {
            self.opened.last().map(String::as_str)
        }

        fn respond(&self) -> Result<HttpResponse> {
            if self.fail_read {
                return Err(ClientError::Transport("read failed".to_string()));
            }
            Ok(HttpResponse {
                status: self.status,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    impl Transport for MockTransport {
        fn open(&mut self, ctx: &HttpContext) -> Result<()> {
            if self.fail_open {
                return Err(ClientError::Transport("open failed".to_string()));
            }
            self.opened.push(ctx.path.clone());
            Ok(())
        }

        fn read(&mut self, _content_type: &str) -> Result<HttpResponse> {
            self.respond()
        }

        fn post(&mut self, _content_type: &str, body: &[u8]) -> Result<HttpResponse> {
            self.posted.push(body.to_vec());
            self.respond()
        }

        fn close(&mut self) -> Result<()> {
            self.closed += 1;
            if self.fail_close {
                return Err(ClientError::Transport("close failed".to_string()));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;

    #[test]
    fn test_exchange_closes_after_read() {
        let mut transport = MockTransport::replying("{}");
        let res = exchange(&mut transport, &ClientConfig::default(), "/x", Request::Get).unwrap();
        assert_eq!(res.body, b"{}");
        assert_eq!(transport.closed, 1);
        assert_eq!(transport.last_path(), Some("/x"));
    }

    #[test]
    fn test_close_failure_overrides_success() {
        let mut transport = MockTransport::replying("{}");
        transport.fail_close = true;
        let err = exchange(&mut transport, &ClientConfig::default(), "/x", Request::Get).unwrap_err();
        assert_eq!(err, ClientError::Transport("close failed".to_string()));
    }

    #[test]
    fn test_read_failure_still_closes() {
        let mut transport = MockTransport::replying("{}");
        transport.fail_read = true;
        transport.fail_close = true;
        let err = exchange(&mut transport, &ClientConfig::default(), "/x", Request::Get).unwrap_err();
        assert_eq!(err, ClientError::Transport("read failed".to_string()));
        assert_eq!(transport.closed, 1);
    }

    #[test]
    fn test_open_failure_skips_close() {
        let mut transport = MockTransport::replying("{}");
        transport.fail_open = true;
        assert!(exchange(&mut transport, &ClientConfig::default(), "/x", Request::Get).is_err());
        assert_eq!(transport.closed, 0);
    }

    #[test]
    fn test_invalid_config_rejected_before_io() {
        let mut transport = MockTransport::replying("{}");
        let config = ClientConfig {
            host: String::new(),
            ..ClientConfig::default()
        };
        assert!(exchange(&mut transport, &config, "/x", Request::Get).is_err());
        assert!(transport.opened.is_empty());
    }

    #[test]
    fn test_post_sends_body() {
        let mut transport = MockTransport::replying("{}");
        exchange(
            &mut transport,
            &ClientConfig::default(),
            "/api/v1/messages",
            Request::Post(b"{\"a\":1}"),
        )
        .unwrap();
        assert_eq!(transport.posted, vec![b"{\"a\":1}".to_vec()]);
    }

    #[test]
    fn test_check_hex_argument() {
        assert!(check_hex_argument("id", &"a".repeat(64), 64).is_ok());
        assert!(check_hex_argument("id", &"a".repeat(63), 64).is_err());
        assert!(check_hex_argument("id", &"z".repeat(64), 64).is_err());
    }
}
