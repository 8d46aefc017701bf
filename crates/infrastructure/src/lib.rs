//! Proxyboot Infrastructure - API adapters
//!
//! This crate implements the application layer's `NpmApi` port against the
//! real proxy manager HTTP API using reqwest.

pub mod http;

pub use http::NpmHttpClient;
