//! Counter actions
//!
//! Actions are a closed enum. The JSON form is the plain object shape
//! `{ "type": "INCREMENT", "incrementBy": 5 }`; anything that does not fit the
//! typed fields is normalized at this boundary instead of inside the reducer.

use crate::error::ActionParseError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use state_container::Action;

pub const INCREMENT: &str = "INCREMENT";
pub const DECREMENT: &str = "DECREMENT";
pub const RESET: &str = "RESET";

/// Actions understood by the counter reducer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAction", into = "RawAction")]
pub enum CounterAction {
    /// Add `increment_by` to the count (1 when absent)
    Increment { increment_by: Option<i64> },
    /// Subtract one from the count
    Decrement,
    /// Set the count back to zero
    Reset,
    /// Any other action type; leaves the state unchanged
    ///
    /// Prefer [`CounterAction::from_kind`], which rejects an empty type.
    Other(String),
}

impl CounterAction {
    /// Parse an action from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ActionParseError> {
        let raw: RawAction = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Parse an action from an already decoded JSON value
    pub fn from_value(value: Value) -> Result<Self, ActionParseError> {
        let raw: RawAction = serde_json::from_value(value)?;
        Self::try_from(raw)
    }

    /// Build an action from its type alone
    ///
    /// Known types map to their variants (`INCREMENT` without a payload), anything
    /// else becomes [`CounterAction::Other`]. An empty type is rejected.
    pub fn from_kind(kind: impl Into<String>) -> Result<Self, ActionParseError> {
        let kind = kind.into();
        let action = match kind.as_str() {
            "" => return Err(ActionParseError::EmptyType),
            INCREMENT => CounterAction::Increment { increment_by: None },
            DECREMENT => CounterAction::Decrement,
            RESET => CounterAction::Reset,
            _ => CounterAction::Other(kind),
        };
        Ok(action)
    }
}

impl Action for CounterAction {
    fn kind(&self) -> &str {
        match self {
            CounterAction::Increment { .. } => INCREMENT,
            CounterAction::Decrement => DECREMENT,
            CounterAction::Reset => RESET,
            CounterAction::Other(kind) => kind,
        }
    }
}

/// Loosely typed wire shape of an action
#[derive(Debug, Serialize, Deserialize)]
struct RawAction {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<Value>,
    #[serde(
        rename = "incrementBy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    increment_by: Option<Value>,
}

impl TryFrom<RawAction> for CounterAction {
    type Error = ActionParseError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let kind = match raw.kind {
            Some(Value::String(kind)) => kind,
            _ => return Err(ActionParseError::MissingType),
        };

        match Self::from_kind(kind)? {
            CounterAction::Increment { .. } => Ok(CounterAction::Increment {
                increment_by: lenient_integer(raw.increment_by.as_ref()),
            }),
            action => Ok(action),
        }
    }
}

impl From<CounterAction> for RawAction {
    fn from(action: CounterAction) -> Self {
        let increment_by = match &action {
            CounterAction::Increment { increment_by } => increment_by.map(Value::from),
            _ => None,
        };
        Self {
            kind: Some(Value::String(action.kind().to_string())),
            increment_by,
        }
    }
}

/// Read an optional integer, treating anything that is not an integer as absent
pub(crate) fn lenient_integer(value: Option<&Value>) -> Option<i64> {
    match value {
        None | Some(Value::Null) => None,
        Some(value) => {
            if let Some(integer) = value.as_i64() {
                return Some(integer);
            }
            if value.as_u64().is_some() {
                log::warn!("incrementBy {} exceeds the i64 range, saturating", value);
                return Some(i64::MAX);
            }
            log::warn!("Ignoring non-integer incrementBy: {}", value);
            None
        }
    }
}
