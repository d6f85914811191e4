//! Counter example for the state container
//!
//! This crate provides:
//! - [`CounterState`]: `{ count }` with a zero default
//! - [`CounterAction`]: INCREMENT / DECREMENT / RESET plus unknown types
//! - [`counter_reducer`]: the transition function
//! - Action generators ([`increment_count`], [`decrement_count`], [`reset_count`])
//! - Lenient JSON parsing of actions at the boundary
//!
//! ```rust
//! use counter::{counter_store, increment_count, IncrementPayload};
//!
//! let store = counter_store();
//! store.dispatch(increment_count(Some(IncrementPayload::by(5))));
//! assert_eq!(store.state().count, 5);
//! ```

pub mod actions;
pub mod error;
pub mod generators;
pub mod reducer;
pub mod state;

pub use actions::CounterAction;
pub use error::ActionParseError;
pub use generators::{decrement_count, increment_count, reset_count, IncrementPayload};
pub use reducer::{counter_reducer, DEFAULT_INCREMENT};
pub use state::CounterState;

use state_container::Store;

pub type CounterStore = Store<CounterState, CounterAction>;

/// Counter store starting at `{ count: 0 }`
pub fn counter_store() -> CounterStore {
    Store::new(counter_reducer)
}

/// Counter store starting at an explicit state
pub fn counter_store_with(initial_state: CounterState) -> CounterStore {
    Store::with_state(initial_state, counter_reducer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use state_container::Reducer;
    use std::sync::{Arc, Mutex};

    fn increment() -> CounterAction {
        CounterAction::Increment { increment_by: None }
    }

    #[test]
    fn test_initial_state() {
        let store = counter_store();
        assert_eq!(*store.state(), CounterState::default());
        assert_eq!(store.state().count, 0);
    }

    #[test]
    fn test_study_scenario() {
        let store = counter_store();

        store.dispatch(increment());
        assert_eq!(store.state().count, 1);

        store.dispatch(increment_count(Some(IncrementPayload::by(5))));
        assert_eq!(store.state().count, 6);

        store.dispatch(reset_count());
        assert_eq!(store.state().count, 0);

        store.dispatch(decrement_count());
        assert_eq!(store.state().count, -1);
    }

    #[test]
    fn test_increment_with_invalid_json_payload() {
        let store = counter_store_with(CounterState::new(10));
        let action = CounterAction::from_json(r#"{"type": "INCREMENT", "incrementBy": "x"}"#);

        store.dispatch(action.unwrap());

        assert_eq!(store.state().count, 11);
    }

    #[test]
    fn test_unknown_action_notifies_without_change() {
        let store = counter_store_with(CounterState::new(4));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let observer = store.downgrade();
        let sink = Arc::clone(&seen);
        store.subscribe(move || sink.lock().unwrap().push(observer.state().unwrap().count));

        store.dispatch(CounterAction::from_json(r#"{"type": "SOMETHING_ELSE"}"#).unwrap());

        assert_eq!(*seen.lock().unwrap(), vec![4]);
    }

    #[test]
    fn test_unsubscribed_watcher_misses_later_changes() {
        let store = counter_store();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let observer = store.downgrade();
        let sink = Arc::clone(&seen);
        let subscription =
            store.subscribe(move || sink.lock().unwrap().push(observer.state().unwrap().count));

        store.dispatch(increment());
        store.dispatch(increment());
        subscription.unsubscribe();
        store.dispatch(reset_count());
        store.dispatch(decrement_count());

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
        assert_eq!(store.state().count, -1);
    }

    #[test]
    fn test_state_is_fold_of_actions() {
        let actions = vec![
            increment(),
            increment_count(Some(IncrementPayload::by(7))),
            decrement_count(),
            CounterAction::Other("PING".to_string()),
            decrement_count(),
            reset_count(),
            increment_count(Some(IncrementPayload::by(-3))),
        ];
        let store = counter_store();

        for action in actions.iter().cloned() {
            store.dispatch(action);
        }

        let expected = counter_reducer.fold(CounterState::default(), &actions);
        assert_eq!(*store.state(), expected);
        assert_eq!(expected.count, -3);
    }
}
