//! Wire-format bodies for the proxy manager API.
//!
//! One type per endpoint payload. Field names follow the API exactly, so
//! every struct serializes straight into the JSON the API expects.

use proxyboot_domain::{Credentials, ProxyHostSpec};
use serde::{Deserialize, Serialize};

/// Body for `POST /tokens`.
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    identity: &'a str,
    secret: &'a str,
}

impl<'a> TokenRequest<'a> {
    /// Builds the token request for a credential pair.
    #[must_use]
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            identity: credentials.identity.as_str(),
            secret: credentials.secret.as_str(),
        }
    }
}

/// Successful response from `POST /tokens`.
///
/// The API returns more fields (expiry, scope); only the token is used.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// The issued bearer token.
    pub token: String,
}

/// Body for `PUT /users/1`.
#[derive(Debug, Serialize)]
pub struct UpdateUserRequest<'a> {
    email: &'a str,
    password: &'a str,
    password_repeat: &'a str,
}

impl<'a> UpdateUserRequest<'a> {
    /// Builds the admin update body; the password confirmation field
    /// repeats the new secret.
    #[must_use]
    pub fn new(new_credentials: &'a Credentials) -> Self {
        Self {
            email: new_credentials.identity.as_str(),
            password: new_credentials.secret.as_str(),
            password_repeat: new_credentials.secret.as_str(),
        }
    }
}

/// Body for `POST /proxy-hosts`.
///
/// Everything beyond the forward target is fixed: plain-HTTP forwarding
/// with every optional feature (SSL forcing, caching, exploit blocking,
/// websockets, HTTP/2, certificate, access list) disabled.
#[derive(Debug, Serialize)]
pub struct ProxyHostRequest<'a> {
    domain_names: [&'a str; 1],
    forward_host: &'a str,
    forward_port: u16,
    forward_scheme: &'static str,
    access_list_id: u32,
    certificate_id: u32,
    ssl_forced: bool,
    caching_enabled: bool,
    block_exploits: bool,
    allow_websocket_upgrade: bool,
    http2_support: bool,
    advanced_config: &'static str,
    meta: ProxyHostMeta,
}

#[derive(Debug, Serialize)]
struct ProxyHostMeta {
    letsencrypt_agree: bool,
    dns_challenge: bool,
}

impl<'a> ProxyHostRequest<'a> {
    /// Builds the creation body for one host spec. The domain is always
    /// sent as a single-element list.
    #[must_use]
    pub fn for_spec(spec: &'a ProxyHostSpec) -> Self {
        Self {
            domain_names: [spec.domain.as_str()],
            forward_host: spec.forward_host.as_str(),
            forward_port: spec.forward_port,
            forward_scheme: "http",
            access_list_id: 0,
            certificate_id: 0,
            ssl_forced: false,
            caching_enabled: false,
            block_exploits: false,
            allow_websocket_upgrade: false,
            http2_support: false,
            advanced_config: "",
            meta: ProxyHostMeta {
                letsencrypt_agree: false,
                dns_challenge: false,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_token_request_body() {
        let creds = Credentials::new("admin@example.com", "changeme").unwrap();
        let body = serde_json::to_value(TokenRequest::new(&creds)).unwrap();

        assert_eq!(
            body,
            json!({
                "identity": "admin@example.com",
                "secret": "changeme",
            })
        );
    }

    #[test]
    fn test_token_response_ignores_extra_fields() {
        let response: TokenResponse = serde_json::from_str(
            r#"{"token": "eyJhbGciOi.abc.def", "expires": "2026-08-27T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(response.token, "eyJhbGciOi.abc.def");
    }

    #[test]
    fn test_update_user_repeats_password() {
        let creds = Credentials::new("admin@gmail.com", "adminbioskop").unwrap();
        let body = serde_json::to_value(UpdateUserRequest::new(&creds)).unwrap();

        assert_eq!(
            body,
            json!({
                "email": "admin@gmail.com",
                "password": "adminbioskop",
                "password_repeat": "adminbioskop",
            })
        );
    }

    #[test]
    fn test_proxy_host_body_shape() {
        let spec = ProxyHostSpec::new("api.lb-cinema.site", "movieapp_backend", 3000).unwrap();
        let body = serde_json::to_value(ProxyHostRequest::for_spec(&spec)).unwrap();

        assert_eq!(
            body,
            json!({
                "domain_names": ["api.lb-cinema.site"],
                "forward_host": "movieapp_backend",
                "forward_port": 3000,
                "forward_scheme": "http",
                "access_list_id": 0,
                "certificate_id": 0,
                "ssl_forced": false,
                "caching_enabled": false,
                "block_exploits": false,
                "allow_websocket_upgrade": false,
                "http2_support": false,
                "advanced_config": "",
                "meta": {
                    "letsencrypt_agree": false,
                    "dns_challenge": false,
                },
            })
        );
    }

    #[test]
    fn test_domain_is_single_element_list() {
        let spec = ProxyHostSpec::new("lb-cinema.site", "movieapp_frontend", 80).unwrap();
        let body = serde_json::to_value(ProxyHostRequest::for_spec(&spec)).unwrap();

        let domains = body["domain_names"].as_array().unwrap();
        assert_eq!(domains.len(), 1);
        assert_eq!(body["forward_scheme"], "http");
    }
}
