use crate::client::chat::{FetchRequest, JoinRequest, SendRequest};
use crate::pipeline::collect_history;
use crate::protocol::{After, JoinResponseTable, Member, NewChatMessage};
use crate::transport::Connector;
use crate::types::{Acknowledgement, JoinOutcome, JoinResult, MessageRecord};
use crate::Result;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Stateless adapter over the `chat.Chat` service.
///
/// Each call connects to the server named in its request, issues exactly one
/// remote call and settles with exactly one outcome. Nothing survives between
/// calls, so a single client can be cloned and shared across tasks freely.
#[derive(Clone)]
pub struct ChatClient {
    pub(crate) connector: Arc<dyn Connector>,
    pub(crate) join_responses: &'static JoinResponseTable,
}

impl ChatClient {
    /// Client over gRPC with configuration taken from the environment.
    pub fn new() -> Result<Self> {
        crate::client::builder::ChatClientBuilder::new().build()
    }

    pub fn builder() -> crate::client::builder::ChatClientBuilder {
        crate::client::builder::ChatClientBuilder::new()
    }

    /// Join a chat server and obtain a token.
    ///
    /// Fails with [`Error::AccessDenied`](crate::Error::AccessDenied) when the
    /// server refuses the credentials, and with the transport error unchanged
    /// when the call itself fails.
    pub async fn join(&self, request: JoinRequest) -> Result<JoinResult> {
        self.join_outcome(request).await?.into_result()
    }

    /// Like [`join`](Self::join), but reports denial as a value.
    pub async fn join_outcome(&self, request: JoinRequest) -> Result<JoinOutcome> {
        let request_id = Uuid::new_v4().to_string();
        let JoinRequest {
            server,
            username,
            password,
        } = request;
        debug!(%server, %request_id, "joining chat");

        let transport = self.connector.connect(&server).await?;
        let reply = transport.join(Member { username, password }).await?;

        let outcome = JoinOutcome::from_wire(&reply, self.join_responses);
        match &outcome {
            Ok(JoinOutcome::Accepted(_)) => debug!(%request_id, "join accepted"),
            Ok(JoinOutcome::Denied) => debug!(%request_id, "join denied"),
            Err(e) => warn!(%request_id, error = %e, "unrecognized join reply"),
        }
        outcome
    }

    /// Send a message; the server's acknowledgement is returned as-is.
    pub async fn send(&self, request: SendRequest) -> Result<Acknowledgement> {
        let request_id = Uuid::new_v4().to_string();
        let SendRequest {
            server,
            message,
            token,
        } = request;
        debug!(%server, %request_id, len = message.len(), "sending message");

        let transport = self.connector.connect(&server).await?;
        let ack = transport
            .commit(NewChatMessage {
                token: token.get(),
                value: message,
            })
            .await?;

        debug!(%request_id, time = ack.time, "message acknowledged");
        Ok(ack)
    }

    /// Read the history after `request.after`, in server delivery order.
    ///
    /// Resolves only on an explicit end of stream. A stream that closes early
    /// fails with [`Error::StreamClosed`](crate::Error::StreamClosed); a stream
    /// error fails with that error. Partial records are never returned.
    pub async fn fetch_messages(&self, request: FetchRequest) -> Result<Vec<MessageRecord>> {
        let request_id = Uuid::new_v4().to_string();
        let FetchRequest {
            server,
            after,
            token,
        } = request;
        debug!(%server, %request_id, %after, "fetching messages");

        let transport = self.connector.connect(&server).await?;
        let events = transport
            .chat_log(After {
                token: token.get(),
                value: after.get(),
            })
            .await?;

        let records = collect_history(events).await?;
        debug!(%request_id, records = records.len(), "messages fetched");
        Ok(records)
    }
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("join_responses", self.join_responses)
            .finish_non_exhaustive()
    }
}
