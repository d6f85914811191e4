//! Transition functions
//!
//! A reducer only ever sees a shared borrow of the previous state, so the only way
//! to produce the next state is to build a new value.

/// Reducer - pure function that produces new state from current state + action
///
/// Given the same inputs a reducer must always return an equal output and must not
/// read or write anything besides its two parameters.
///
/// Plain functions and closures with the signature `Fn(&S, &A) -> S` are reducers:
///
/// ```rust
/// use state_container::Reducer;
///
/// fn add(state: &i64, action: &i64) -> i64 {
///     state + action
/// }
///
/// assert_eq!(add.reduce(&1, &2), 3);
/// assert_eq!(add.fold(0, &[1, 2, 3]), 6);
/// ```
pub trait Reducer<S, A>: Send + Sync {
    /// Compute the next state
    fn reduce(&self, state: &S, action: &A) -> S;

    /// Left-fold a sequence of actions starting from `initial`
    fn fold<'a, I>(&self, initial: S, actions: I) -> S
    where
        I: IntoIterator<Item = &'a A>,
        A: 'a,
        Self: Sized,
    {
        actions
            .into_iter()
            .fold(initial, |state, action| self.reduce(&state, action))
    }
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(&S, &A) -> S + Send + Sync,
{
    fn reduce(&self, state: &S, action: &A) -> S {
        self(state, action)
    }
}
