//! Proxy manager HTTP client.
//!
//! Implements the `NpmApi` port over reqwest. Requests are issued one at a
//! time with no retry; the caller decides what a failure means.

pub mod wire;

use std::time::Duration;

use async_trait::async_trait;
use proxyboot_application::{ApiError, NpmApi, SessionToken};
use proxyboot_domain::{Credentials, ProxyHostSpec};
use reqwest::{Client, Response, StatusCode};
use url::Url;

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP adapter for the proxy manager API.
///
/// Wraps a `reqwest::Client` pointed at the API base URL
/// (for example `http://nginx-proxy-manager:81/api`).
pub struct NpmHttpClient {
    client: Client,
    base_url: String,
}

impl NpmHttpClient {
    /// Creates a client for the given API base URL.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidUrl`] if the base URL does not parse.
    /// - [`ApiError::Network`] if the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{e}: {base_url}")))?;

        let client = Client::builder()
            .user_agent(concat!("proxyboot/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Full URL for an endpoint path relative to the API base.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Maps transport-level reqwest failures to the port error.
    fn map_transport_error(error: &reqwest::Error) -> ApiError {
        if error.is_timeout() {
            return ApiError::Network(format!("request timed out: {error}"));
        }
        if error.is_connect() {
            return ApiError::Network(format!("connection failed: {error}"));
        }
        ApiError::Network(error.to_string())
    }

    /// Splits responses into success, 401, and everything else.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl NpmApi for NpmHttpClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        let response = self
            .client
            .post(self.endpoint("tokens"))
            .json(&wire::TokenRequest::new(credentials))
            .send()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        let response = Self::check_status(response).await?;
        let body: wire::TokenResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("token response: {e}")))?;

        tracing::debug!(identity = %credentials.identity, "bearer token issued");
        Ok(SessionToken::new(body.token))
    }

    async fn update_admin_user(
        &self,
        token: &SessionToken,
        new_credentials: &Credentials,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.endpoint("users/1"))
            .bearer_auth(token.as_str())
            .json(&wire::UpdateUserRequest::new(new_credentials))
            .send()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        Self::check_status(response).await?;
        tracing::info!("admin credentials updated");
        Ok(())
    }

    async fn create_proxy_host(
        &self,
        token: &SessionToken,
        host: &ProxyHostSpec,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint("proxy-hosts"))
            .bearer_auth(token.as_str())
            .json(&wire::ProxyHostRequest::for_spec(host))
            .send()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        Self::check_status(response).await?;
        tracing::debug!(domain = %host.domain, "proxy host created");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_client_creation() {
        let client = NpmHttpClient::new("http://nginx-proxy-manager:81/api");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = NpmHttpClient::new("not a url");
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let client = NpmHttpClient::new("http://nginx-proxy-manager:81/api").unwrap();
        assert_eq!(
            client.endpoint("tokens"),
            "http://nginx-proxy-manager:81/api/tokens"
        );
        assert_eq!(
            client.endpoint("users/1"),
            "http://nginx-proxy-manager:81/api/users/1"
        );
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client = NpmHttpClient::new("http://nginx-proxy-manager:81/api/").unwrap();
        assert_eq!(
            client.endpoint("proxy-hosts"),
            "http://nginx-proxy-manager:81/api/proxy-hosts"
        );
    }
}
