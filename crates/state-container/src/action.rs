use std::fmt::Debug;

/// Actions describe an intended change, not the change itself.
///
/// Every action exposes a discriminant (e.g. `"INCREMENT"`) which the store uses
/// when logging dispatches. The store does not validate it; parsers at the edge
/// of an application should reject empty types.
pub trait Action: Debug {
    /// The action discriminant
    fn kind(&self) -> &str;
}
