//! Error types for the ordered multiselect
//!
//! - `MultiselectError` for widget handlers fed input they cannot resolve
//! - `AppError` for the terminal host

use thiserror::Error;

use crate::multiselect::EntryId;

/// Errors raised while resolving a click on the widget.
///
/// None of these reach the caller of the public handlers: they are logged
/// through the widget's diagnostic sink and the operation is aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultiselectError {
    #[error("Button text is invalid (strip modified or label format mismatch): {0:?}")]
    MalformedLabel(String),

    #[error("Swap identifier is invalid: {0:?}")]
    MalformedSwapId(String),

    #[error("No entry with id {0}")]
    UnknownEntry(EntryId),

    #[error("Entry {0} is not a separator between two items")]
    NotASeparator(EntryId),
}

/// Top-level error type for the terminal host
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

/// Result type alias for MultiselectError
pub type MultiselectResult<T> = std::result::Result<T, MultiselectError>;

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

