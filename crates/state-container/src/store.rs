use crate::action::Action;
use crate::builder::{StoreBuilder, DEFAULT_NAME};
use crate::reducer::Reducer;
use crate::subscription::{SubscriberList, Subscription};
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, Weak};
use std::thread::{self, ThreadId};

/// Store - holds the current state and runs the Redux loop
///
/// The Store follows the Redux pattern:
/// - Single source of truth for one state value
/// - Actions are dispatched to request changes
/// - A pure reducer computes the next state
/// - State is immutable (replaced on each action)
/// - Subscribers are notified after every transition
///
/// `Store` is a cheap handle around shared internals. Clone it to hand the same
/// store to other threads. Subscribers should capture a [`WeakStore`] from
/// [`Store::downgrade`] instead: the store owns its subscribers, so a callback
/// holding a strong handle keeps the store alive forever.
///
/// ```rust
/// use state_container::{Action, Store};
///
/// #[derive(Debug)]
/// struct Add(i64);
///
/// impl Action for Add {
///     fn kind(&self) -> &str {
///         "ADD"
///     }
/// }
///
/// let store: Store<i64, Add> = Store::new(|total: &i64, action: &Add| total + action.0);
///
/// let observer = store.downgrade();
/// let subscription = store.subscribe(move || {
///     if let Some(total) = observer.state() {
///         println!("total = {}", total);
///     }
/// });
///
/// store.dispatch(Add(2));
/// subscription.unsubscribe();
/// store.dispatch(Add(3));
///
/// assert_eq!(*store.state(), 5);
/// ```
pub struct Store<S, A> {
    inner: Arc<Inner<S, A>>,
}

struct Inner<S, A> {
    name: String,
    log_actions: bool,
    reducer: Box<dyn Reducer<S, A>>,
    state: RwLock<Arc<S>>,
    subscribers: Arc<Mutex<SubscriberList>>,
    /// Serializes read/replace/notify across threads
    dispatch_lock: Mutex<()>,
    /// Thread currently running a dispatch pass, if any
    dispatching: Mutex<Option<ThreadId>>,
}

/// Non-owning handle to a [`Store`]
///
/// Safe to capture inside subscribers. Every accessor returns `None` (or `false`)
/// once all [`Store`] handles are gone.
pub struct WeakStore<S, A> {
    inner: Weak<Inner<S, A>>,
}

impl<S, A> Clone for WeakStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> Store<S, A>
where
    S: Debug + Send + Sync + 'static,
    A: Action + Send + 'static,
{
    /// Create a store whose initial state is `S::default()`
    pub fn new<R>(reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
        S: Default,
    {
        Self::with_state(S::default(), reducer)
    }

    /// Create a store with an explicit initial state
    pub fn with_state<R>(initial_state: S, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self::from_parts(
            DEFAULT_NAME.to_string(),
            true,
            initial_state,
            Box::new(reducer),
        )
    }

    /// Start configuring a store
    pub fn builder() -> StoreBuilder<S, A> {
        StoreBuilder::new()
    }

    pub(crate) fn from_parts(
        name: String,
        log_actions: bool,
        initial_state: S,
        reducer: Box<dyn Reducer<S, A>>,
    ) -> Self {
        log::debug!("[{}] Store created with state {:?}", name, initial_state);
        Self {
            inner: Arc::new(Inner {
                name,
                log_actions,
                reducer,
                state: RwLock::new(Arc::new(initial_state)),
                subscribers: Arc::new(Mutex::new(SubscriberList::default())),
                dispatch_lock: Mutex::new(()),
                dispatching: Mutex::new(None),
            }),
        }
    }

    /// Name used to prefix this store's log lines
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Get the current state
    pub fn state(&self) -> Arc<S> {
        let state = self
            .inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*state)
    }

    /// Dispatch an action: reduce, replace the state, then notify subscribers
    ///
    /// The state is replaced even when the reducer returns an equal value, and
    /// subscribers are notified either way.
    ///
    /// A subscriber may dispatch while a notification pass is running on the same
    /// thread. That action is reduced and fully notified before the nested call
    /// returns, then the outer pass resumes with the remaining subscribers.
    pub fn dispatch(&self, action: A) {
        let current = thread::current().id();
        if *lock(&self.inner.dispatching) == Some(current) {
            log::trace!(
                "[{}] Nested {} dispatched during notification",
                self.inner.name,
                action.kind()
            );
            self.apply(action);
            return;
        }

        let _serialized = lock(&self.inner.dispatch_lock);
        let _pass = DispatchPass::enter(&self.inner, current);
        self.apply(action);
    }

    fn apply(&self, action: A) {
        if self.inner.log_actions {
            log::debug!("[{}] Action: {:?}", self.inner.name, action);
        }

        let previous = self.state();
        let next = self.inner.reducer.reduce(&previous, &action);
        *self
            .inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(next);

        self.notify();
    }

    fn notify(&self) {
        let subscribers = lock(&self.inner.subscribers).snapshot();
        for (id, callback) in subscribers {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| callback())) {
                log::error!(
                    "[{}] Subscriber {} panicked: {}",
                    self.inner.name,
                    id,
                    panic_message(payload.as_ref())
                );
            }
        }
    }

    /// Register a callback invoked after every completed transition
    ///
    /// Each call creates a separate registration, even for the same callback.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = lock(&self.inner.subscribers).add(Arc::new(callback));
        log::debug!("[{}] Subscriber {} registered", self.inner.name, id);
        Subscription::new(id, &self.inner.subscribers)
    }

    /// Number of active registrations
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner.subscribers).len()
    }

    /// Non-owning handle for use inside subscribers
    pub fn downgrade(&self) -> WeakStore<S, A> {
        WeakStore {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl<S, A> WeakStore<S, A>
where
    S: Debug + Send + Sync + 'static,
    A: Action + Send + 'static,
{
    /// Strong handle, if the store is still alive
    pub fn upgrade(&self) -> Option<Store<S, A>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }

    /// Current state, if the store is still alive
    pub fn state(&self) -> Option<Arc<S>> {
        self.upgrade().map(|store| store.state())
    }

    /// Dispatch to the store if it is still alive
    ///
    /// Returns `false` when the store has been dropped and the action was ignored.
    pub fn dispatch(&self, action: A) -> bool {
        match self.upgrade() {
            Some(store) => {
                store.dispatch(action);
                true
            }
            None => {
                log::debug!("Dropped {}: store no longer exists", action.kind());
                false
            }
        }
    }
}

/// Marks the current thread as dispatching until dropped
struct DispatchPass<'a, S, A> {
    inner: &'a Inner<S, A>,
}

impl<'a, S, A> DispatchPass<'a, S, A> {
    fn enter(inner: &'a Inner<S, A>, thread: ThreadId) -> Self {
        *lock(&inner.dispatching) = Some(thread);
        Self { inner }
    }
}

impl<S, A> Drop for DispatchPass<'_, S, A> {
    fn drop(&mut self) {
        *lock(&self.inner.dispatching) = None;
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
