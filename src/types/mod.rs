//! 类型系统模块：定义聊天客户端对调用方暴露的核心数据类型。
//!
//! # Types Module
//!
//! Caller-facing types. Wire structs live in [`crate::protocol`]; this module
//! wraps the pieces callers handle directly (credentials, cursors, outcomes)
//! in types that cannot be mixed up with plain integers.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Token`] | Opaque credential issued by a successful join |
//! | [`Cursor`] | "After which point" marker for history queries |
//! | [`JoinResult`] | Successful join carrying the issued token |
//! | [`JoinOutcome`] | Accepted-or-denied view of a join reply |
//! | [`MessageRecord`] | One history record, as streamed by the server |
//! | [`Acknowledgement`] | Server acknowledgement of a sent message |
//! | [`ChatLogEvent`] | One event of a history stream |
//!
//! ## Example
//!
//! ```rust
//! use chat_rpc::types::{Cursor, Token};
//!
//! let token: Token = "42".parse().unwrap();
//! assert_eq!(token.to_string(), "42");
//! assert_eq!(Cursor::START.get(), 0);
//! ```

pub mod events;
pub mod outcome;
pub mod token;

pub use events::ChatLogEvent;
pub use outcome::{JoinOutcome, JoinResult};
pub use token::{Cursor, Token};

/// History record streamed by `ChatLog`.
pub type MessageRecord = crate::protocol::ChatMessage;

/// Acknowledgement returned by `Commit`.
pub type Acknowledgement = crate::protocol::CommitResult;
