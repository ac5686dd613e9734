use crate::api::{exchange, Request};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::network::Transport;
use log::debug;

/// `GET /health`. The node answers 200 when healthy and 503 otherwise; the
/// body carries nothing.
pub fn get_health(transport: &mut dyn Transport, config: &ClientConfig) -> Result<bool> {
    let response = exchange(transport, config, "/health", Request::Get)?;
    debug!("health status {}", response.status);
    Ok(response.status == 200)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;

    #[test]
    fn test_health_by_status() {
        let config = ClientConfig::default();
        let mut transport = MockTransport::replying("");
        assert!(get_health(&mut transport, &config).unwrap());
        assert_eq!(transport.last_path(), Some("/health"));

        transport.status = 503;
        assert!(!get_health(&mut transport, &config).unwrap());
    }

    #[test]
    fn test_health_transport_failure() {
        let mut transport = MockTransport::replying("");
        transport.fail_read = true;
        assert!(get_health(&mut transport, &ClientConfig::default()).is_err());
    }
}
