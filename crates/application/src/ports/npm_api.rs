//! Proxy manager API port.

use async_trait::async_trait;
use proxyboot_domain::{Credentials, ProxyHostSpec};
use thiserror::Error;

/// Opaque bearer token issued by the token endpoint.
///
/// Valid for the remainder of the run; never refreshed or expired here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a raw token string.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// The raw token value, for the `Authorization` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Errors surfaced by the proxy manager API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API rejected the presented credentials or token (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,

    /// The API returned a non-success status other than 401.
    #[error("API request failed with status {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, as returned by the API.
        body: String,
    },

    /// The request never produced a response (connect, DNS, timeout, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The API base URL is malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// The three proxy manager endpoints the setup flow drives.
///
/// One method per endpoint; exactly one attempt per call site, no retry.
#[async_trait]
pub trait NpmApi: Send + Sync {
    /// Exchanges an identity/secret pair for a bearer token
    /// (`POST /tokens`).
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, ApiError>;

    /// Replaces the admin account's email and password
    /// (`PUT /users/1`).
    async fn update_admin_user(
        &self,
        token: &SessionToken,
        new_credentials: &Credentials,
    ) -> Result<(), ApiError>;

    /// Registers one proxy host mapping (`POST /proxy-hosts`).
    async fn create_proxy_host(
        &self,
        token: &SessionToken,
        host: &ProxyHostSpec,
    ) -> Result<(), ApiError>;
}
