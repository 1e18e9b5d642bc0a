//! Scripted in-process chat server for integration tests

use chat_rpc::protocol::{After, ChatMessage, CommitResult, JoinResponse, JoinResult, Member, NewChatMessage};
use chat_rpc::transport::{ChatLogStream, ChatTransport, Connector, TransportError};
use chat_rpc::types::ChatLogEvent;
use chat_rpc::ChatClient;
use std::sync::{Arc, Mutex};

type JoinHandler = Box<dyn Fn(&Member) -> Result<JoinResult, TransportError> + Send + Sync>;
type CommitHandler = Box<dyn Fn(&NewChatMessage) -> Result<CommitResult, TransportError> + Send + Sync>;
type ChatLogHandler =
    Box<dyn Fn(&After) -> Result<Vec<ChatLogEvent<ChatMessage>>, TransportError> + Send + Sync>;
type ConnectHandler = Box<dyn Fn(&str) -> Option<TransportError> + Send + Sync>;

/// Call observed by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Connect(String),
    Join(Member),
    Commit(NewChatMessage),
    ChatLog(After),
}

#[derive(Default)]
struct Handlers {
    connect: Option<ConnectHandler>,
    join: Option<JoinHandler>,
    commit: Option<CommitHandler>,
    chat_log: Option<ChatLogHandler>,
}

/// Test fixture that acts as both connector and transport.
#[derive(Clone, Default)]
pub struct MockChatServer {
    handlers: Arc<Handlers>,
    calls: Arc<Mutex<Vec<Recorded>>>,
}

pub struct MockChatServerBuilder {
    handlers: Handlers,
}

impl MockChatServer {
    pub fn builder() -> MockChatServerBuilder {
        MockChatServerBuilder {
            handlers: Handlers::default(),
        }
    }

    /// Client wired to this mock.
    pub fn client(&self) -> ChatClient {
        ChatClient::builder()
            .connector(Arc::new(self.clone()))
            .build()
            .expect("client should build against the compiled-in contract")
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Recorded) {
        self.calls.lock().unwrap().push(call);
    }
}

impl MockChatServerBuilder {
    pub fn on_connect(
        mut self,
        f: impl Fn(&str) -> Option<TransportError> + Send + Sync + 'static,
    ) -> Self {
        self.handlers.connect = Some(Box::new(f));
        self
    }

    pub fn on_join(
        mut self,
        f: impl Fn(&Member) -> Result<JoinResult, TransportError> + Send + Sync + 'static,
    ) -> Self {
        self.handlers.join = Some(Box::new(f));
        self
    }

    pub fn on_commit(
        mut self,
        f: impl Fn(&NewChatMessage) -> Result<CommitResult, TransportError> + Send + Sync + 'static,
    ) -> Self {
        self.handlers.commit = Some(Box::new(f));
        self
    }

    pub fn on_chat_log(
        mut self,
        f: impl Fn(&After) -> Result<Vec<ChatLogEvent<ChatMessage>>, TransportError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.handlers.chat_log = Some(Box::new(f));
        self
    }

    /// Accept every join with `token`.
    pub fn accepting(self, token: u64) -> Self {
        self.on_join(move |_| {
            Ok(JoinResult {
                response: JoinResponse::Accepted as i32,
                token,
            })
        })
    }

    /// Deny every join.
    pub fn denying(self) -> Self {
        self.on_join(|_| {
            Ok(JoinResult {
                response: JoinResponse::Denied as i32,
                token: 0,
            })
        })
    }

    pub fn build(self) -> MockChatServer {
        MockChatServer {
            handlers: Arc::new(self.handlers),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

fn unimplemented(method: &str) -> TransportError {
    TransportError::Status(tonic::Status::unimplemented(format!(
        "mock has no handler for {}",
        method
    )))
}

pub fn record(time: u64, username: &str, value: &str) -> ChatMessage {
    ChatMessage {
        time,
        username: username.to_string(),
        value: value.to_string(),
    }
}

pub fn status(code: tonic::Code, message: &str) -> TransportError {
    TransportError::Status(tonic::Status::new(code, message))
}

#[async_trait::async_trait]
impl Connector for MockChatServer {
    async fn connect(&self, server: &str) -> Result<Arc<dyn ChatTransport>, TransportError> {
        self.record(Recorded::Connect(server.to_string()));
        if let Some(err) = self.handlers.connect.as_ref().and_then(|f| f(server)) {
            return Err(err);
        }
        Ok(Arc::new(self.clone()))
    }
}

#[async_trait::async_trait]
impl ChatTransport for MockChatServer {
    async fn join(&self, member: Member) -> Result<JoinResult, TransportError> {
        self.record(Recorded::Join(member.clone()));
        match &self.handlers.join {
            Some(f) => f(&member),
            None => Err(unimplemented("Join")),
        }
    }

    async fn commit(&self, message: NewChatMessage) -> Result<CommitResult, TransportError> {
        self.record(Recorded::Commit(message.clone()));
        match &self.handlers.commit {
            Some(f) => f(&message),
            None => Err(unimplemented("Commit")),
        }
    }

    async fn chat_log(&self, query: After) -> Result<ChatLogStream, TransportError> {
        self.record(Recorded::ChatLog(query));
        let events = match &self.handlers.chat_log {
            Some(f) => f(&query)?,
            None => return Err(unimplemented("ChatLog")),
        };
        Ok(Box::pin(futures::stream::iter(events)))
    }
}
