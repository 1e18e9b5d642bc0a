//! Join outcomes

use super::Token;
use crate::protocol::{JoinResponseTable, JoinVerdict};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Successful join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinResult {
    pub token: Token,
}

/// Accepted-or-denied view of a `Join` reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "response", content = "token")]
pub enum JoinOutcome {
    Accepted(Token),
    Denied,
}

impl JoinOutcome {
    /// Interpret a wire reply through the resolved `JoinResponse` table.
    ///
    /// A denied reply never carries a token, whatever the server put in the field.
    pub fn from_wire(reply: &crate::protocol::JoinResult, table: &JoinResponseTable) -> Result<Self> {
        match table.classify(reply.response)? {
            JoinVerdict::Accepted => Ok(JoinOutcome::Accepted(Token::new(reply.token))),
            JoinVerdict::Denied => Ok(JoinOutcome::Denied),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, JoinOutcome::Accepted(_))
    }

    pub fn token(&self) -> Option<Token> {
        match self {
            JoinOutcome::Accepted(token) => Some(*token),
            JoinOutcome::Denied => None,
        }
    }

    /// Collapse into the join contract: denial becomes [`Error::AccessDenied`].
    pub fn into_result(self) -> Result<JoinResult> {
        match self {
            JoinOutcome::Accepted(token) => Ok(JoinResult { token }),
            JoinOutcome::Denied => Err(Error::AccessDenied),
        }
    }
}
