//! Domain errors

use thiserror::Error;

/// Common result type for todo item operations
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// A string that is not one of the closed enumeration values
    #[error("Invalid {kind} value: {value:?}")]
    InvalidEnumValue { kind: &'static str, value: String },

    /// An edit-only operation was requested while viewing
    #[error("Cannot {operation} while not editing")]
    NotEditing { operation: &'static str },
}

impl TodoError {
    pub(crate) fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        TodoError::InvalidEnumValue { kind, value: value.into() }
    }
}
