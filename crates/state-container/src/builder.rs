use crate::action::Action;
use crate::error::StoreError;
use crate::reducer::Reducer;
use crate::store::Store;
use std::fmt::Debug;

/// Log prefix for stores that were not given a name
pub(crate) const DEFAULT_NAME: &str = "store";

/// Step-by-step store construction
///
/// ```rust
/// use state_container::{Action, Store};
///
/// #[derive(Debug)]
/// struct Tick;
///
/// impl Action for Tick {
///     fn kind(&self) -> &str {
///         "TICK"
///     }
/// }
///
/// let store: Store<u32, Tick> = Store::builder()
///     .name("ticks")
///     .initial_state(10u32)
///     .reducer(|ticks: &u32, _action: &Tick| ticks + 1)
///     .log_actions(false)
///     .build()
///     .unwrap();
///
/// store.dispatch(Tick);
/// assert_eq!(*store.state(), 11);
/// ```
pub struct StoreBuilder<S, A> {
    name: String,
    initial_state: Option<S>,
    reducer: Option<Box<dyn Reducer<S, A>>>,
    log_actions: bool,
}

impl<S, A> StoreBuilder<S, A>
where
    S: Debug + Send + Sync + 'static,
    A: Action + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            initial_state: None,
            reducer: None,
            log_actions: true,
        }
    }

    /// Name used to prefix log lines
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn initial_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Use `S::default()` as the initial state
    pub fn default_state(self) -> Self
    where
        S: Default,
    {
        self.initial_state(S::default())
    }

    pub fn reducer<R>(mut self, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        self.reducer = Some(Box::new(reducer));
        self
    }

    /// Log every dispatched action at debug level (default: on)
    pub fn log_actions(mut self, enabled: bool) -> Self {
        self.log_actions = enabled;
        self
    }

    pub fn build(self) -> Result<Store<S, A>, StoreError> {
        let Some(reducer) = self.reducer else {
            return Err(StoreError::MissingReducer(self.name));
        };
        let Some(initial_state) = self.initial_state else {
            return Err(StoreError::MissingInitialState(self.name));
        };

        Ok(Store::from_parts(
            self.name,
            self.log_actions,
            initial_state,
            reducer,
        ))
    }
}

impl<S, A> Default for StoreBuilder<S, A>
where
    S: Debug + Send + Sync + 'static,
    A: Action + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct Bump;

    impl Action for Bump {
        fn kind(&self) -> &str {
            "BUMP"
        }
    }

    fn bump(state: &i32, _action: &Bump) -> i32 {
        state + 1
    }

    #[test]
    fn test_build_without_reducer_fails() {
        let result = StoreBuilder::<i32, Bump>::new().name("empty").default_state().build();

        assert_eq!(
            result.err(),
            Some(StoreError::MissingReducer("empty".to_string()))
        );
    }

    #[test]
    fn test_build_without_initial_state_fails() {
        let result = StoreBuilder::<i32, Bump>::new().reducer(bump).build();

        assert_eq!(
            result.err(),
            Some(StoreError::MissingInitialState(DEFAULT_NAME.to_string()))
        );
    }

    #[test]
    fn test_build_applies_options() {
        let store = StoreBuilder::new()
            .name("bumps")
            .initial_state(41)
            .reducer(bump)
            .log_actions(false)
            .build()
            .unwrap();

        assert_eq!(store.name(), "bumps");
        assert_eq!(*store.state(), 41);

        store.dispatch(Bump);
        assert_eq!(*store.state(), 42);
    }

    #[test]
    fn test_error_message_names_store() {
        let err = StoreError::MissingReducer("counter".to_string());
        assert_eq!(err.to_string(), "store `counter` was built without a reducer");
    }
}
