//! 协议契约层：`chat.Chat` 服务的线上消息类型与枚举解析。
//!
//! # Wire Contract Layer
//!
//! Rust mirror of `proto/chat.proto`. The message structs are prost messages
//! laid out exactly as `prost-build` would emit them, so the bytes on the wire
//! match any other client of the `chat.Chat` service.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Low-level tonic stub for the three `chat.Chat` methods |
//! | [`enums`] | Symbolic resolution of the `JoinResponse` enumeration |
//! | [`error`] | Contract mismatch errors |
//!
//! ## Service
//!
//! | Method | Request | Response | Kind |
//! |--------|---------|----------|------|
//! | `Join` | [`Member`] | [`JoinResult`] | unary |
//! | `Commit` | [`NewChatMessage`] | [`CommitResult`] | unary |
//! | `ChatLog` | [`After`] | stream of [`ChatMessage`] | server-streaming |

pub mod client;
pub mod enums;
pub mod error;

pub use client::ChatServiceClient;
pub use enums::{JoinResponseTable, JoinVerdict};
pub use error::ProtocolError;

use serde::{Deserialize, Serialize};

/// Fully qualified gRPC service name.
pub const SERVICE_NAME: &str = "chat.Chat";

/// Credentials presented to `Join`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Member {
    #[prost(string, tag = "1")]
    pub username: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub password: ::prost::alloc::string::String,
}

/// Reply to `Join`. `token` is only meaningful when `response` is `Accepted`.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct JoinResult {
    #[prost(enumeration = "JoinResponse", tag = "1")]
    pub response: i32,
    #[prost(uint64, tag = "2")]
    pub token: u64,
}

/// Message submitted through `Commit`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NewChatMessage {
    #[prost(uint64, tag = "1")]
    pub token: u64,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
}

/// Acknowledgement returned by `Commit`.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ::prost::Message)]
pub struct CommitResult {
    #[prost(uint64, tag = "1")]
    pub time: u64,
}

/// History query for `ChatLog`: everything after `value`.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct After {
    #[prost(uint64, tag = "1")]
    pub token: u64,
    #[prost(uint64, tag = "2")]
    pub value: u64,
}

/// One record of the chat history as streamed by `ChatLog`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ::prost::Message)]
pub struct ChatMessage {
    #[prost(uint64, tag = "1")]
    pub time: u64,
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub value: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum JoinResponse {
    Denied = 0,
    Accepted = 1,
}

impl JoinResponse {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Denied => "Denied",
            Self::Accepted => "Accepted",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "Denied" => Some(Self::Denied),
            "Accepted" => Some(Self::Accepted),
            _ => None,
        }
    }
}
