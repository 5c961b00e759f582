use thiserror::Error;

/// Errors that can occur while rendering a query tree to GraphQL text.
///
/// Rendering is all-or-nothing: the first error found anywhere in the tree is
/// returned unchanged to the caller and no partial text is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// An object field, fragment definition or operation has neither fields
    /// nor fragment spreads to select.
    #[error("`{name}` must select at least one field or fragment")]
    EmptySelection {
        /// Name of the node with the empty selection set.
        name: String,
    },
    /// A field, alias, directive or variable was given an empty name.
    #[error("{kind} name must not be empty")]
    EmptyName {
        /// What kind of node carries the empty name.
        kind: &'static str,
    },
    /// The value has no GraphQL type it could be declared as.
    #[error("{0} has no GraphQL type representation")]
    UnrepresentableType(String),
    /// A variable definition was given a default that is not a constant.
    #[error("default value of `${variable}` must be a constant, not a variable")]
    InvalidDefault {
        /// Name of the variable carrying the default.
        variable: String,
    },
    /// GraphQL has no literal for NaN or infinite floats.
    #[error("{0} is not a valid GraphQL float literal")]
    NonFiniteFloat(f64),
    /// Two different fragment definitions share a name within one document.
    #[error("fragment `{name}` is defined more than once")]
    DuplicateFragment {
        /// Name shared by the conflicting definitions.
        name: String,
    },
}

/// Result type returned by every rendering operation.
pub type Result<T, E = RenderError> = std::result::Result<T, E>;

/// Check that a name is non-empty, returning it unchanged.
pub(crate) fn non_empty_name<'n>(kind: &'static str, name: &'n str) -> Result<&'n str> {
    if name.is_empty() {
        return Err(RenderError::EmptyName { kind });
    }
    Ok(name)
}

/// Returned when parsing an [`OperationType`](crate::OperationType) from an
/// unknown keyword.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation type `{0}`, expected query, mutation or subscription")]
pub struct UnknownOperationType(pub String);
