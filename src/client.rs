//! Chat client for the `chat.Chat` service.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod chat;
pub mod core;

pub use builder::ChatClientBuilder;
pub use chat::{FetchRequest, JoinRequest, SendRequest};
pub use self::core::ChatClient;
