use crate::protocol::ProtocolError;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Setting that caused the error (e.g., "CHAT_CONNECT_TIMEOUT_MS", "server")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected value)
    pub details: Option<String>,
    /// Source of the error (e.g., "env", "builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Unified error type for chat calls.
///
/// Every call settles with exactly one of these (or its success value).
#[derive(Debug, Error)]
pub enum Error {
    /// Failure surfaced by the channel, passed through unchanged.
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// The server explicitly refused the join credentials.
    #[error("Access denied")]
    AccessDenied,

    /// The history stream terminated without an end-of-stream signal.
    #[error("Message read stream closed")]
    StreamClosed,

    #[error("Protocol contract error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl From<tonic::Status> for Error {
    fn from(status: tonic::Status) -> Self {
        Error::Transport(TransportError::Status(status))
    }
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// gRPC status behind a transport failure, if there is one.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            Error::Transport(TransportError::Status(status)) => Some(status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(self, Error::AccessDenied)
    }

    pub fn is_stream_closed(&self) -> bool {
        matches!(self, Error::StreamClosed)
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
