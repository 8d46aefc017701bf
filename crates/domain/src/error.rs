//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A credential field is empty.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// A proxy host domain name is invalid or empty.
    #[error("invalid domain name: {0}")]
    InvalidDomain(String),

    /// A forward target host is invalid or empty.
    #[error("invalid forward host: {0}")]
    InvalidForwardHost(String),

    /// A forward target port is outside the usable range.
    #[error("invalid forward port: {0}")]
    InvalidForwardPort(u16),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
