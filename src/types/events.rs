//! History stream events

use crate::transport::TransportError;

/// One event of a server-streaming `ChatLog` call.
///
/// `End`, `Close` and `Error` are terminal: a well-behaved source emits at most
/// one of them, but consumers must not rely on that.
#[derive(Debug)]
pub enum ChatLogEvent<T> {
    /// A record, in delivery order.
    Data(T),
    /// Server signalled a clean end of stream.
    End,
    /// The stream went away without an end-of-stream signal.
    Close,
    /// The server or the channel reported a failure.
    Error(TransportError),
}

impl<T> ChatLogEvent<T> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ChatLogEvent::Data(_))
    }
}
