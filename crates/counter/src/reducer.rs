use crate::actions::CounterAction;
use crate::state::CounterState;

/// Increment applied when an INCREMENT action carries no usable amount
pub const DEFAULT_INCREMENT: i64 = 1;

/// Reducer - pure function that produces new state from current state + action
///
/// Arithmetic saturates at the `i64` bounds. Unknown action types return the
/// state unchanged.
pub fn counter_reducer(state: &CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increment { increment_by } => {
            let amount = increment_by.unwrap_or(DEFAULT_INCREMENT);
            CounterState::new(state.count.saturating_add(amount))
        }
        CounterAction::Decrement => CounterState::new(state.count.saturating_sub(1)),
        CounterAction::Reset => CounterState::new(0),
        CounterAction::Other(kind) => {
            log::trace!("Counter ignores action type {}", kind);
            *state
        }
    }
}
