//! 流水线处理模块：把服务端推送的历史消息流归约为单个结果。
//!
//! # History Pipeline
//!
//! `ChatLog` is server-streaming: the server pushes records one by one and
//! finishes with an end signal, an error, or an abrupt close. Callers want one
//! ordered collection or one failure. This module owns that reduction.
//!
//! ```text
//!              data                      end
//!            ┌──────┐            ┌──────────────────▶ Ended   → Ok(records)
//!            ▼      │            │        close
//!          Open ────┴────────────┼──────────────────▶ Closed  → Err(StreamClosed)
//!                                │        error
//!                                └──────────────────▶ Errored → Err(Transport)
//! ```
//!
//! No transition leaves a terminal state.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`HistoryAccumulator`] | Explicit state machine over [`ChatLogEvent`](crate::types::ChatLogEvent)s |
//! | [`HistoryState`] | `Open`, `Ended`, `Closed`, `Errored` |
//! | [`collect_history`] | Drives a stream through the accumulator |
//!
//! ## Example
//!
//! ```rust
//! use chat_rpc::pipeline::collect_history;
//! use chat_rpc::types::ChatLogEvent;
//!
//! # tokio_test::block_on(async {
//! let events = futures::stream::iter(vec![
//!     ChatLogEvent::Data("hello"),
//!     ChatLogEvent::Data("world"),
//!     ChatLogEvent::End,
//! ]);
//! let records = collect_history(events).await?;
//! assert_eq!(records, vec!["hello", "world"]);
//! # Ok::<(), chat_rpc::Error>(())
//! # }).unwrap();
//! ```

pub mod accumulate;


pub use accumulate::{collect_history, HistoryAccumulator, HistoryState};
