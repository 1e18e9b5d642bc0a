use crate::types::{Cursor, Token};
use std::fmt;

/// Parameters of [`ChatClient::join`](super::ChatClient::join).
#[derive(Clone, PartialEq, Eq)]
pub struct JoinRequest {
    pub server: String,
    pub username: String,
    pub password: String,
}

impl JoinRequest {
    pub fn new(
        server: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs.
impl fmt::Debug for JoinRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinRequest")
            .field("server", &self.server)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Parameters of [`ChatClient::send`](super::ChatClient::send).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub server: String,
    pub message: String,
    pub token: Token,
}

impl SendRequest {
    pub fn new(server: impl Into<String>, message: impl Into<String>, token: Token) -> Self {
        Self {
            server: server.into(),
            message: message.into(),
            token,
        }
    }
}

/// Parameters of [`ChatClient::fetch_messages`](super::ChatClient::fetch_messages).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub server: String,
    pub after: Cursor,
    pub token: Token,
}

impl FetchRequest {
    /// Fetch the whole history.
    pub fn new(server: impl Into<String>, token: Token) -> Self {
        Self {
            server: server.into(),
            after: Cursor::START,
            token,
        }
    }

    pub fn after(mut self, cursor: impl Into<Cursor>) -> Self {
        self.after = cursor.into();
        self
    }
}
