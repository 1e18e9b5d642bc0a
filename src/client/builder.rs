use crate::client::core::ChatClient;
use crate::protocol::JoinResponseTable;
use crate::transport::{Connector, GrpcConfig, GrpcConnector};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct ChatClientBuilder {
    connector: Option<Arc<dyn Connector>>,
    grpc_config: Option<GrpcConfig>,
    connect_timeout: Option<Duration>,
    request_timeout: Option<Duration>,
    reuse_channel: Option<bool>,
}

impl ChatClientBuilder {
    pub fn new() -> Self {
        Self {
            connector: None,
            grpc_config: None,
            connect_timeout: None,
            request_timeout: None,
            reuse_channel: None,
        }
    }

    /// Use a custom connector instead of gRPC.
    ///
    /// Channel settings on this builder are ignored when a connector is set.
    pub fn connector(mut self, connector: Arc<dyn Connector>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Start from an explicit channel configuration instead of the environment.
    pub fn grpc_config(mut self, config: GrpcConfig) -> Self {
        self.grpc_config = Some(config);
        self
    }

    /// Bound the time spent establishing a channel.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Per-request deadline enforced by the channel.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Share one channel per server address instead of dialing per call.
    pub fn reuse_channel(mut self, enable: bool) -> Self {
        self.reuse_channel = Some(enable);
        self
    }

    /// Channel configuration `build` would use: the explicit config (or the
    /// environment) with this builder's overrides applied.
    pub fn effective_grpc_config(&self) -> Result<GrpcConfig> {
        let mut config = match &self.grpc_config {
            Some(config) => config.clone(),
            None => GrpcConfig::from_env()?,
        };
        if let Some(timeout) = self.connect_timeout {
            config.connect_timeout = Some(timeout);
        }
        if let Some(timeout) = self.request_timeout {
            config.request_timeout = Some(timeout);
        }
        if let Some(enable) = self.reuse_channel {
            config.reuse_channel = enable;
        }
        Ok(config)
    }

    /// Build the client.
    ///
    /// Resolves the `JoinResponse` names against the contract first, so a
    /// mismatched contract fails here rather than on the first join.
    pub fn build(self) -> Result<ChatClient> {
        let join_responses = JoinResponseTable::global()?;

        let connector = match &self.connector {
            Some(connector) => Arc::clone(connector),
            None => Arc::new(GrpcConnector::new(self.effective_grpc_config()?)) as Arc<dyn Connector>,
        };

        Ok(ChatClient {
            connector,
            join_responses,
        })
    }
}

impl Default for ChatClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
