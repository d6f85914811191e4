//! Action generators
//!
//! Small helpers that build well-formed actions with defaults applied.

use crate::actions::{lenient_integer, CounterAction};
use crate::reducer::DEFAULT_INCREMENT;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Optional payload accepted by [`increment_count`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct IncrementPayload {
    /// Amount to add; non-integer JSON values are treated as absent
    #[serde(
        rename = "incrementBy",
        default,
        deserialize_with = "deserialize_lenient_integer"
    )]
    pub increment_by: Option<i64>,
}

impl IncrementPayload {
    pub fn by(amount: i64) -> Self {
        Self {
            increment_by: Some(amount),
        }
    }
}

fn deserialize_lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(lenient_integer(value.as_ref()))
}

/// Build an INCREMENT action; `increment_by` defaults to 1
pub fn increment_count(payload: Option<IncrementPayload>) -> CounterAction {
    let increment_by = payload
        .and_then(|payload| payload.increment_by)
        .unwrap_or(DEFAULT_INCREMENT);
    CounterAction::Increment {
        increment_by: Some(increment_by),
    }
}

pub fn decrement_count() -> CounterAction {
    CounterAction::Decrement
}

pub fn reset_count() -> CounterAction {
    CounterAction::Reset
}
