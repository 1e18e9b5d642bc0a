//! Protocol error types

/// Mismatch between what the client expects of the `chat.Chat` contract and
/// what the contract (or a peer speaking it) actually provides.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("Enumeration {enum_name} does not declare a value named '{value_name}'{}", .hint.as_ref().map(|h| format!("\n Hint: {}", h)).unwrap_or_default())]
    MissingEnumValue {
        enum_name: &'static str,
        value_name: &'static str,
        hint: Option<String>,
    },

    #[error("Enumeration {enum_name} declares '{first}' and '{second}' with the same number {number}")]
    AmbiguousEnumValue {
        enum_name: &'static str,
        first: &'static str,
        second: &'static str,
        number: i32,
    },

    #[error("Unrecognized {enum_name} value {number} received from server")]
    UnknownEnumValue { enum_name: &'static str, number: i32 },
}

impl ProtocolError {
    /// Attach an actionable hint to the error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        let hint_val = Some(hint.into());
        if let ProtocolError::MissingEnumValue { ref mut hint, .. } = self {
            *hint = hint_val;
        }
        self
    }
}
