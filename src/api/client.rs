use crate::api::*;
use crate::config::ClientConfig;
use crate::core::Message;
use crate::error::Result;
use crate::network::{HttpTransport, Transport};

/// A node endpoint plus the transport used to reach it.
///
/// Calls are serialized through `&mut self`, matching a transport that
/// handles one request at a time.
pub struct NodeClient<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl NodeClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_transport(config, HttpTransport::new()?)
    }
}

impl<T: Transport> NodeClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(NodeClient { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn node_info(&mut self) -> Result<ApiResponse<NodeInfo>> {
        get_node_info(&mut self.transport, &self.config)
    }

    pub fn health(&mut self) -> Result<bool> {
        get_health(&mut self.transport, &self.config)
    }

    pub fn tips(&mut self) -> Result<ApiResponse<Tips>> {
        get_tips(&mut self.transport, &self.config)
    }

    pub fn find_message_by_index(&mut self, index: &str) -> Result<ApiResponse<FindMessages>> {
        find_message_by_index(&mut self.transport, &self.config, index)
    }

    pub fn message(&mut self, message_id: &str) -> Result<ApiResponse<Message>> {
        get_message_by_id(&mut self.transport, &self.config, message_id)
    }

    pub fn message_children(&mut self, message_id: &str) -> Result<ApiResponse<MessageChildren>> {
        get_message_children(&mut self.transport, &self.config, message_id)
    }

    pub fn balance(&mut self, kind: AddressKind, address: &str) -> Result<ApiResponse<Balance>> {
        get_balance(&mut self.transport, &self.config, kind, address)
    }

    pub fn outputs(&mut self, kind: AddressKind, address: &str) -> Result<ApiResponse<OutputIds>> {
        get_outputs_from_address(&mut self.transport, &self.config, kind, address)
    }

    pub fn send_message(&mut self, message: &Message) -> Result<ApiResponse<String>> {
        send_message(&mut self.transport, &self.config, message)
    }

    pub fn send_indexation(&mut self, index: &str, data: &[u8]) -> Result<ApiResponse<String>> {
        send_indexation_message(&mut self.transport, &self.config, index, data)
    }
}
