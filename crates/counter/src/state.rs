use serde::{Deserialize, Serialize};

/// Counter state
///
/// `Default` is the documented zero value `{ count: 0 }` used as the initial state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}
