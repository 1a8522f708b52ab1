//! Link parsing and building errors.

use thiserror::Error;

use foldernav_core::error::{AppError, ErrorKind};

/// Errors raised while reading or writing navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The folder id parameter is not a number.
    #[error("folder id '{value}' is not a number")]
    InvalidFolderId {
        /// The raw parameter value.
        value: String,
    },
    /// A parameter is not valid percent-encoding.
    #[error("parameter '{name}' is not valid percent-encoding")]
    InvalidEncoding {
        /// The parameter name.
        name: String,
    },
    /// The host page did not provide a project key.
    #[error("project key is missing from the host page")]
    MissingProjectKey,
    /// The host page did not provide its origin.
    #[error("host origin is missing from the host page")]
    MissingOrigin,
}

impl From<NavigationError> for AppError {
    fn from(err: NavigationError) -> Self {
        AppError::with_source(ErrorKind::Validation, err.to_string(), err)
    }
}
