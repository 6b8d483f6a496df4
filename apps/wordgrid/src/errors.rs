use thiserror::Error;

/// Errors returned by grid construction.
///
/// Unplaceable words are not errors; they are dropped from the grid and
/// listed in `BuildReport::dropped`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl GridError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GridError::InvalidArgument(msg.into())
    }
}
