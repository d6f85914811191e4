use thiserror::Error;

/// Errors that can occur when reading an action from JSON
///
/// Unknown action types and malformed `incrementBy` values are not errors; they
/// become an identity transition and the default increment respectively.
#[derive(Error, Debug)]
pub enum ActionParseError {
    #[error("action has no string `type` field")]
    MissingType,

    #[error("action `type` is empty")]
    EmptyType,

    #[error("invalid action JSON: {0}")]
    Json(#[from] serde_json::Error),
}
