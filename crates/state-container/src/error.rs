use thiserror::Error;

/// Errors that can occur while constructing a store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store `{0}` was built without a reducer")]
    MissingReducer(String),

    #[error("store `{0}` was built without an initial state")]
    MissingInitialState(String),
}
