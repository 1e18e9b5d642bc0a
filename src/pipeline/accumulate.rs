use crate::types::ChatLogEvent;
use crate::{Error, Result};
use futures::{Stream, StreamExt};
use tracing::{debug, trace};

/// Lifecycle of one history read.
///
/// `Open` is the only state that accepts events; the other three are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    Open,
    Ended,
    Closed,
    Errored,
}

impl HistoryState {
    pub fn is_terminal(self) -> bool {
        self != HistoryState::Open
    }
}

/// Reduces a push-based history stream to a single ordered collection.
///
/// Records are buffered in arrival order while the read is `Open`. The first
/// terminal event decides the outcome; anything after it is dropped without
/// touching the buffer.
#[derive(Debug)]
pub struct HistoryAccumulator<T> {
    state: HistoryState,
    buffer: Vec<T>,
    error: Option<Error>,
    ignored: usize,
}

impl<T> HistoryAccumulator<T> {
    pub fn new() -> Self {
        Self {
            state: HistoryState::Open,
            buffer: Vec::new(),
            error: None,
            ignored: 0,
        }
    }

    pub fn state(&self) -> HistoryState {
        self.state
    }

    /// Records buffered so far (empty once the read failed).
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Events that arrived after the terminal decision.
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    /// Apply one event and return the resulting state.
    pub fn push(&mut self, event: ChatLogEvent<T>) -> HistoryState {
        if self.state.is_terminal() {
            self.ignored += 1;
            trace!(state = ?self.state, "ignoring history event after terminal state");
            return self.state;
        }

        match event {
            ChatLogEvent::Data(record) => {
                self.buffer.push(record);
            }
            ChatLogEvent::End => {
                self.state = HistoryState::Ended;
            }
            ChatLogEvent::Close => {
                self.buffer.clear();
                self.state = HistoryState::Closed;
            }
            ChatLogEvent::Error(e) => {
                self.buffer.clear();
                self.error = Some(Error::Transport(e));
                self.state = HistoryState::Errored;
            }
        }
        self.state
    }

    /// Settle the read.
    ///
    /// A read that is still `Open` lost its source without an end signal and
    /// settles as [`Error::StreamClosed`].
    pub fn finish(self) -> Result<Vec<T>> {
        match self.state {
            HistoryState::Ended => Ok(self.buffer),
            HistoryState::Errored => Err(self.error.unwrap_or(Error::StreamClosed)),
            HistoryState::Closed | HistoryState::Open => Err(Error::StreamClosed),
        }
    }
}

impl<T> Default for HistoryAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive `events` until the first terminal event and settle the read.
///
/// The stream is dropped as soon as the outcome is decided, so a source that
/// keeps emitting after end, close or error is never polled again.
pub async fn collect_history<T, S>(events: S) -> Result<Vec<T>>
where
    S: Stream<Item = ChatLogEvent<T>>,
{
    futures::pin_mut!(events);
    let mut acc = HistoryAccumulator::new();
    while let Some(event) = events.next().await {
        if acc.push(event).is_terminal() {
            break;
        }
    }
    debug!(state = ?acc.state(), records = acc.len(), "history read settled");
    acc.finish()
}
