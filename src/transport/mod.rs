//! 传输层：远程调用通道的抽象与 gRPC 实现。
//!
//! # Transport Layer
//!
//! [`ChatTransport`] is the seam between the adapter and the remote-call
//! channel: one method per `chat.Chat` operation, each returning the raw wire
//! reply or a [`TransportError`]. [`Connector`] produces a transport for a
//! server address, so the client can stay stateless between calls.
//!
//! The shipped implementation is [`grpc::GrpcConnector`]. Tests and embedders
//! may supply their own connector through
//! [`ChatClientBuilder::connector`](crate::ChatClientBuilder::connector).

pub mod grpc;

pub use grpc::{GrpcConfig, GrpcConnector, GrpcTransport};

use crate::protocol::{After, CommitResult, JoinResult, Member, NewChatMessage};
use crate::types::{ChatLogEvent, MessageRecord};
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;
use std::sync::Arc;

/// Event stream produced by a `ChatLog` call.
pub type ChatLogStream = Pin<Box<dyn Stream<Item = ChatLogEvent<MessageRecord>> + Send + 'static>>;

/// Failure reported by the channel layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Invalid server address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Connection failed: {0}")]
    Connect(#[from] tonic::transport::Error),

    #[error("{0}")]
    Status(#[from] tonic::Status),
}

/// One remote-call channel to a chat server.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Unary `Join`.
    async fn join(&self, member: Member) -> Result<JoinResult, TransportError>;

    /// Unary `Commit`.
    async fn commit(&self, message: NewChatMessage) -> Result<CommitResult, TransportError>;

    /// Server-streaming `ChatLog`. An `Err` here means the call could not be
    /// opened; failures after that arrive as [`ChatLogEvent::Error`].
    async fn chat_log(&self, query: After) -> Result<ChatLogStream, TransportError>;
}

/// Opens a [`ChatTransport`] for a server address.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, server: &str) -> Result<Arc<dyn ChatTransport>, TransportError>;
}
