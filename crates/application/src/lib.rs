//! Proxyboot Application - Setup flow
//!
//! This crate drives the three-phase first-run setup sequence against the
//! proxy manager API: authenticate, rotate default admin credentials, and
//! register proxy hosts. All I/O goes through the [`NpmApi`] port so the
//! flow can be tested against a mock adapter.

pub mod error;
pub mod ports;
pub mod setup;

pub use error::{SetupError, SetupResult};
pub use ports::{ApiError, NpmApi, SessionToken};
pub use setup::{SetupFlow, SetupPlan, SetupReport};
