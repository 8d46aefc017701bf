//! Port definitions (interfaces)
//!
//! Ports define the boundary between the setup flow and the proxy manager's
//! HTTP API. The single port here is a trait implemented by the reqwest
//! adapter in the infrastructure layer, and by mocks in tests.

mod npm_api;

pub use npm_api::{ApiError, NpmApi, SessionToken};
