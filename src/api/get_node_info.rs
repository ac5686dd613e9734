use crate::api::response::{decode_response, ApiResponse};
use crate::api::{exchange_text, Request};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::network::Transport;
use crate::utils::json::{get_bool, get_f32, get_string, get_string_array, get_u64};
use serde::Serialize;

pub const NODE_NAME_MAX_LEN: usize = 32;
pub const NODE_VERSION_MAX_LEN: usize = 32;
pub const NODE_NETWORK_ID_MAX_LEN: usize = 32;
pub const NODE_BECH32_HRP_MAX_LEN: usize = 16;

/// Health, version and milestone counters of a node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeInfo {
    pub name: String,
    pub version: String,
    pub is_healthy: bool,
    pub network_id: String,
    pub bech32_hrp: String,
    pub min_pow_score: u64,
    pub latest_milestone_index: u64,
    pub confirmed_milestone_index: u64,
    pub pruning_index: u64,
    pub messages_per_second: f32,
    pub referenced_messages_per_second: f32,
    pub referenced_rate: f32,
    pub latest_milestone_timestamp: u64,
    pub features: Vec<String>,
}

impl NodeInfo {
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn feature_at(&self, index: usize) -> Option<&str> {
        self.features.get(index).map(String::as_str)
    }
}

pub fn deserialize_node_info(body: &str) -> Result<ApiResponse<NodeInfo>> {
    decode_response(body, |data| {
        Ok(NodeInfo {
            name: get_string(data, "name", NODE_NAME_MAX_LEN)?,
            version: get_string(data, "version", NODE_VERSION_MAX_LEN)?,
            is_healthy: get_bool(data, "isHealthy")?,
            network_id: get_string(data, "networkId", NODE_NETWORK_ID_MAX_LEN)?,
            bech32_hrp: get_string(data, "bech32HRP", NODE_BECH32_HRP_MAX_LEN)?,
            min_pow_score: get_u64(data, "minPoWScore")?,
            latest_milestone_index: get_u64(data, "latestMilestoneIndex")?,
            confirmed_milestone_index: get_u64(data, "confirmedMilestoneIndex")?,
            pruning_index: get_u64(data, "pruningIndex")?,
            messages_per_second: get_f32(data, "messagesPerSecond")?,
            referenced_messages_per_second: get_f32(data, "referencedMessagesPerSecond")?,
            referenced_rate: get_f32(data, "referencedRate")?,
            latest_milestone_timestamp: get_u64(data, "latestMilestoneTimestamp")?,
            features: get_string_array(data, "features")?,
        })
    })
}

/// `GET /api/v1/info`
pub fn get_node_info(
    transport: &mut dyn Transport,
    config: &ClientConfig,
) -> Result<ApiResponse<NodeInfo>> {
    let body = exchange_text(transport, config, "/api/v1/info", Request::Get)?;
    deserialize_node_info(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::error::ClientError;

    const INFO: &str = r#"{"data":{"name":"HORNET","version":"1.0.5","isHealthy":true,
        "networkId":"chrysalis-mainnet","bech32HRP":"iota","minPoWScore":4000,
        "messagesPerSecond":8.4,"referencedMessagesPerSecond":8.2,"referencedRate":97.6,
        "latestMilestoneTimestamp":1631002580,"latestMilestoneIndex":1081036,
        "confirmedMilestoneIndex":1081036,"pruningIndex":1053591,
        "features":["PoW"]}}"#;

    #[test]
    fn test_deserialize() {
        let res = deserialize_node_info(INFO).unwrap();
        let info = res.success().unwrap();
        assert_eq!(info.name, "HORNET");
        assert_eq!(info.version, "1.0.5");
        assert!(info.is_healthy);
        assert_eq!(info.network_id, "chrysalis-mainnet");
        assert_eq!(info.bech32_hrp, "iota");
        assert_eq!(info.min_pow_score, 4000);
        assert_eq!(info.latest_milestone_index, 1081036);
        assert_eq!(info.confirmed_milestone_index, 1081036);
        assert_eq!(info.pruning_index, 1053591);
        assert!((info.messages_per_second - 8.4).abs() < 1e-4);
        assert!((info.referenced_rate - 97.6).abs() < 1e-4);
        assert_eq!(info.latest_milestone_timestamp, 1631002580);
        assert_eq!(info.feature_count(), 1);
        assert_eq!(info.feature_at(0), Some("PoW"));
        assert_eq!(info.feature_at(1), None);
    }

    #[test]
    fn test_first_bad_field_aborts() {
        let body = INFO.replace("\"isHealthy\":true", "\"isHealthy\":\"yes\"");
        assert_eq!(
            deserialize_node_info(&body).unwrap_err(),
            ClientError::invalid("isHealthy", "expected a boolean")
        );
    }

    #[test]
    fn test_request_path() {
        let mut transport = MockTransport::replying(INFO);
        let res = get_node_info(&mut transport, &ClientConfig::default()).unwrap();
        assert!(!res.is_error());
        assert_eq!(transport.last_path(), Some("/api/v1/info"));
        assert_eq!(transport.closed, 1);
    }
}
