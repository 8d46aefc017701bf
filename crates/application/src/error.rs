//! Setup flow error types

use thiserror::Error;

use crate::ports::ApiError;

/// Errors the setup flow can end with.
///
/// Authentication failure is the one case the binary handles specially
/// (message plus exit status 1); everything else propagates unrecovered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The token endpoint rejected the credentials (HTTP 401).
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Any other API failure, propagated as-is.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result type alias for the setup flow.
pub type SetupResult<T> = Result<T, SetupError>;
