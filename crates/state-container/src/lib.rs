//! Redux-style state container
//!
//! This crate provides:
//! - [`Store`]: owns a single immutable state value and the subscriber list
//! - [`Reducer`]: pure transition function `(state, action) -> next state`
//! - [`Action`]: exposes the discriminant of a typed action for logging
//! - [`Subscription`]: handle returned by [`Store::subscribe`] to stop notifications
//! - [`WeakStore`]: non-owning handle for subscribers that read or dispatch
//!
//! ## Design
//!
//! ```text
//! dispatch(action) → Reducer → replace state → notify subscribers (in order)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use state_container::{Action, Store};
//!
//! #[derive(Debug)]
//! enum Toggle {
//!     Flip,
//! }
//!
//! impl Action for Toggle {
//!     fn kind(&self) -> &str {
//!         "FLIP"
//!     }
//! }
//!
//! let store: Store<bool, Toggle> = Store::new(|on: &bool, _action: &Toggle| !*on);
//! store.dispatch(Toggle::Flip);
//! assert!(*store.state());
//! ```

mod action;
mod builder;
mod error;
mod reducer;
mod store;
mod subscription;

pub use action::Action;
pub use builder::StoreBuilder;
pub use error::StoreError;
pub use reducer::Reducer;
pub use store::{Store, WeakStore};
pub use subscription::Subscription;
