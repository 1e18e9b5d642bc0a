//! # chat-rpc
//!
//! 这是 `chat.Chat` gRPC 服务的异步客户端适配器：加入、发送、拉取历史消息。
//!
//! Async client adapter for the `chat.Chat` gRPC service.
//!
//! ## Overview
//!
//! The service exposes two unary calls (`Join`, `Commit`) and one
//! server-streaming call (`ChatLog`). This crate hides that difference: every
//! operation on [`ChatClient`] is a plain `async fn` that settles with exactly
//! one success value or exactly one error.
//!
//! ## Key Features
//!
//! - **Uniform calls**: [`ChatClient::join`], [`ChatClient::send`] and
//!   [`ChatClient::fetch_messages`] all return a single [`Result`]
//! - **Stream reduction**: history is collected by an explicit state machine
//!   ([`pipeline::HistoryAccumulator`]) that honours exactly one terminal event
//! - **Distinct failures**: [`Error::AccessDenied`] and [`Error::StreamClosed`]
//!   are separate from transport failures, which pass through unchanged
//! - **Symbolic enums**: join replies are interpreted by enum name, never by a
//!   hardcoded ordinal ([`protocol::JoinResponseTable`])
//! - **Pluggable transport**: gRPC by default, any [`transport::Connector`] for tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chat_rpc::{ChatClient, FetchRequest, JoinRequest, SendRequest, DEFAULT_SERVER};
//!
//! #[tokio::main]
//! async fn main() -> chat_rpc::Result<()> {
//!     let client = ChatClient::new()?;
//!
//!     let joined = client
//!         .join(JoinRequest::new(DEFAULT_SERVER, "alice", "secret"))
//!         .await?;
//!
//!     client
//!         .send(SendRequest::new(DEFAULT_SERVER, "hello", joined.token))
//!         .await?;
//!
//!     for record in client
//!         .fetch_messages(FetchRequest::new(DEFAULT_SERVER, joined.token))
//!         .await?
//!     {
//!         println!("{}: {}", record.username, record.value);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`ChatClient`], its builder and request types |
//! | [`pipeline`] | Reduction of the history stream to one result |
//! | [`protocol`] | Wire messages, tonic stub, enum resolution |
//! | [`transport`] | Transport seam and the gRPC implementation |
//! | [`types`] | Tokens, cursors, outcomes, stream events |

pub mod client;
pub mod pipeline;
pub mod protocol;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ChatClient, ChatClientBuilder, FetchRequest, JoinRequest, SendRequest};
pub use types::{Acknowledgement, Cursor, JoinOutcome, JoinResult, MessageRecord, Token};

/// Address used when none is configured.
pub const DEFAULT_SERVER: &str = "http://[::1]:10000";

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
