//! Proxyboot Domain - Core setup types
//!
//! This crate defines the domain model for the proxyboot setup tool.
//! All types here are pure Rust with no I/O dependencies.

pub mod credentials;
pub mod error;
pub mod host;

pub use credentials::{Credentials, DEFAULT_ADMIN_IDENTITY, DEFAULT_ADMIN_SECRET};
pub use error::{DomainError, DomainResult};
pub use host::ProxyHostSpec;
