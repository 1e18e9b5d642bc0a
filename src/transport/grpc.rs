use super::{ChatLogStream, ChatTransport, Connector, TransportError};
use crate::error::ErrorContext;
use crate::protocol::{After, ChatMessage, ChatServiceClient, CommitResult, JoinResult, Member, NewChatMessage};
use crate::types::ChatLogEvent;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tonic::codec::Streaming;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, trace};

/// Channel settings for [`GrpcConnector`].
///
/// Environment overrides (read by [`GrpcConfig::from_env`]):
/// - `CHAT_CONNECT_TIMEOUT_MS` (default 10000, `0` disables)
/// - `CHAT_REQUEST_TIMEOUT_MS` (default unset)
/// - `CHAT_HTTP2_KEEPALIVE_SECS` (default unset)
/// - `CHAT_REUSE_CHANNEL` (`1`/`true` to share one channel per server)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrpcConfig {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub http2_keepalive_interval: Option<Duration>,
    pub tcp_nodelay: bool,
    pub reuse_channel: bool,
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Some(Duration::from_secs(10)),
            request_timeout: None,
            http2_keepalive_interval: None,
            tcp_nodelay: true,
            reuse_channel: false,
        }
    }
}

impl GrpcConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(ms) = env_u64("CHAT_CONNECT_TIMEOUT_MS")? {
            config.connect_timeout = (ms > 0).then(|| Duration::from_millis(ms));
        }
        if let Some(ms) = env_u64("CHAT_REQUEST_TIMEOUT_MS")? {
            config.request_timeout = (ms > 0).then(|| Duration::from_millis(ms));
        }
        if let Some(secs) = env_u64("CHAT_HTTP2_KEEPALIVE_SECS")? {
            config.http2_keepalive_interval = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Ok(raw) = env::var("CHAT_REUSE_CHANNEL") {
            config.reuse_channel = parse_flag("CHAT_REUSE_CHANNEL", &raw)?;
        }
        Ok(config)
    }

    fn endpoint(&self, server: &str) -> std::result::Result<Endpoint, TransportError> {
        let address = normalize_address(server)?;
        let mut endpoint = Endpoint::from_shared(address.clone()).map_err(|e| {
            TransportError::InvalidAddress {
                address,
                reason: e.to_string(),
            }
        })?;

        endpoint = endpoint.tcp_nodelay(self.tcp_nodelay);
        if let Some(timeout) = self.connect_timeout {
            endpoint = endpoint.connect_timeout(timeout);
        }
        if let Some(timeout) = self.request_timeout {
            endpoint = endpoint.timeout(timeout);
        }
        if let Some(interval) = self.http2_keepalive_interval {
            endpoint = endpoint.http2_keep_alive_interval(interval);
        }
        Ok(endpoint)
    }
}

fn env_u64(name: &str) -> Result<Option<u64>> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<u64>().map(Some).map_err(|e| {
            Error::configuration_with_context(
                "expected a non-negative integer",
                ErrorContext::new()
                    .with_field_path(name)
                    .with_details(format!("'{}': {}", raw, e))
                    .with_source("env"),
            )
        }),
        Err(_) => Ok(None),
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::configuration_with_context(
            "expected a boolean flag",
            ErrorContext::new()
                .with_field_path(name)
                .with_details(other.to_string())
                .with_source("env"),
        )),
    }
}

/// Accept both `host:port` and full URIs; bare addresses are plain-text HTTP/2.
fn normalize_address(server: &str) -> std::result::Result<String, TransportError> {
    let server = server.trim();
    if server.is_empty() {
        return Err(TransportError::InvalidAddress {
            address: String::new(),
            reason: "server address is empty".to_string(),
        });
    }
    if server.contains("://") {
        Ok(server.to_string())
    } else {
        Ok(format!("http://{}", server))
    }
}

/// [`Connector`] over tonic channels.
///
/// By default every call dials a fresh channel. With
/// [`GrpcConfig::reuse_channel`] one channel per address is kept and cloned;
/// tonic channels multiplex concurrent calls, so sharing carries no per-call state.
pub struct GrpcConnector {
    config: GrpcConfig,
    channels: Mutex<HashMap<String, Channel>>,
}

impl GrpcConnector {
    pub fn new(config: GrpcConfig) -> Self {
        Self {
            config,
            channels: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &GrpcConfig {
        &self.config
    }

    async fn channel(&self, server: &str) -> std::result::Result<Channel, TransportError> {
        if !self.config.reuse_channel {
            return self.dial(server).await;
        }

        // Held across the dial so concurrent first calls share one channel.
        let mut channels = self.channels.lock().await;
        if let Some(channel) = channels.get(server) {
            trace!(server, "reusing channel");
            return Ok(channel.clone());
        }
        let channel = self.dial(server).await?;
        channels.insert(server.to_string(), channel.clone());
        Ok(channel)
    }

    async fn dial(&self, server: &str) -> std::result::Result<Channel, TransportError> {
        let endpoint = self.config.endpoint(server)?;
        debug!(server, uri = %endpoint.uri(), "connecting");
        Ok(endpoint.connect().await?)
    }
}

impl Default for GrpcConnector {
    fn default() -> Self {
        Self::new(GrpcConfig::default())
    }
}

#[async_trait]
impl Connector for GrpcConnector {
    async fn connect(&self, server: &str) -> std::result::Result<Arc<dyn ChatTransport>, TransportError> {
        let channel = self.channel(server).await?;
        Ok(Arc::new(GrpcTransport::new(channel)))
    }
}

/// [`ChatTransport`] over one tonic channel.
#[derive(Debug, Clone)]
pub struct GrpcTransport {
    client: ChatServiceClient<Channel>,
}

impl GrpcTransport {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: ChatServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl ChatTransport for GrpcTransport {
    async fn join(&self, member: Member) -> std::result::Result<JoinResult, TransportError> {
        let mut client = self.client.clone();
        Ok(client.join(member).await?.into_inner())
    }

    async fn commit(&self, message: NewChatMessage) -> std::result::Result<CommitResult, TransportError> {
        let mut client = self.client.clone();
        Ok(client.commit(message).await?.into_inner())
    }

    async fn chat_log(&self, query: After) -> std::result::Result<ChatLogStream, TransportError> {
        let mut client = self.client.clone();
        let response = client.chat_log(query).await?;
        let trailers_only = response.metadata().contains_key("grpc-status");
        Ok(Box::pin(chat_log_events(response.into_inner(), trailers_only)))
    }
}

/// Translate tonic's pull API into history events.
///
/// tonic reports `Ok(None)` both for a clean end and for a body that hit EOF
/// without trailers. Only trailers (or a status already sent in the response
/// headers) count as an end of stream; a bare EOF is a close.
/// Nothing is polled after a terminal event.
fn chat_log_events(
    streaming: Streaming<ChatMessage>,
    trailers_only: bool,
) -> impl futures::Stream<Item = ChatLogEvent<ChatMessage>> + Send + 'static {
    futures::stream::unfold(Some(streaming), move |state| async move {
        let mut streaming = state?;
        let event = match streaming.message().await {
            Ok(Some(record)) => return Some((ChatLogEvent::Data(record), Some(streaming))),
            Ok(None) if trailers_only => ChatLogEvent::End,
            Ok(None) => match streaming.trailers().await {
                Ok(Some(_)) => ChatLogEvent::End,
                Ok(None) => {
                    debug!("chat log body ended without trailers");
                    ChatLogEvent::Close
                }
                Err(status) => ChatLogEvent::Error(status.into()),
            },
            Err(status) => ChatLogEvent::Error(status.into()),
        };
        Some((event, None))
    })
}
