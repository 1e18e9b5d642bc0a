//! Symbolic resolution of the `JoinResponse` enumeration.
//!
//! The numbers behind `Denied` and `Accepted` are looked up by name in the
//! contract once per process and cached. Callers never compare against raw
//! ordinals, so a reordered contract fails loudly at initialization instead
//! of silently inverting the meaning of a join reply.

use super::{JoinResponse, ProtocolError};
use once_cell::sync::Lazy;

const ENUM_NAME: &str = "JoinResponse";
const DENIED: &str = "Denied";
const ACCEPTED: &str = "Accepted";

static JOIN_RESPONSE_TABLE: Lazy<Result<JoinResponseTable, ProtocolError>> =
    Lazy::new(JoinResponseTable::from_contract);

/// Meaning of a `JoinResult.response` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinVerdict {
    Denied,
    Accepted,
}

/// Wire numbers of the two `JoinResponse` values, resolved by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinResponseTable {
    denied: i32,
    accepted: i32,
}

impl JoinResponseTable {
    /// Resolve both names through `lookup`, which maps a declared value name
    /// to its wire number.
    pub fn resolve<F>(lookup: F) -> Result<Self, ProtocolError>
    where
        F: Fn(&str) -> Option<i32>,
    {
        let find = |value_name: &'static str| {
            lookup(value_name).ok_or_else(|| {
                ProtocolError::MissingEnumValue {
                    enum_name: ENUM_NAME,
                    value_name,
                    hint: None,
                }
                .with_hint("proto/chat.proto and the server must declare both Denied and Accepted")
            })
        };

        let denied = find(DENIED)?;
        let accepted = find(ACCEPTED)?;
        if denied == accepted {
            return Err(ProtocolError::AmbiguousEnumValue {
                enum_name: ENUM_NAME,
                first: DENIED,
                second: ACCEPTED,
                number: denied,
            });
        }

        Ok(Self { denied, accepted })
    }

    /// Resolve against the compiled-in contract.
    pub fn from_contract() -> Result<Self, ProtocolError> {
        Self::resolve(|name| JoinResponse::from_str_name(name).map(|v| v as i32))
    }

    /// Process-wide table, resolved on first use and immutable afterwards.
    pub fn global() -> Result<&'static Self, ProtocolError> {
        JOIN_RESPONSE_TABLE.as_ref().map_err(Clone::clone)
    }

    pub fn denied(&self) -> i32 {
        self.denied
    }

    pub fn accepted(&self) -> i32 {
        self.accepted
    }

    /// Interpret a raw `response` field.
    pub fn classify(&self, number: i32) -> Result<JoinVerdict, ProtocolError> {
        if number == self.accepted {
            Ok(JoinVerdict::Accepted)
        } else if number == self.denied {
            Ok(JoinVerdict::Denied)
        } else {
            Err(ProtocolError::UnknownEnumValue {
                enum_name: ENUM_NAME,
                number,
            })
        }
    }
}
