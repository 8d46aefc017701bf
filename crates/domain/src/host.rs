//! Proxy host mapping types

use crate::error::{DomainError, DomainResult};

/// A domain-to-backend routing rule to register with the proxy manager.
///
/// Specs are defined once at process start and iterated in listed order.
/// The fixed security/SSL flags that accompany every registration live in
/// the wire layer, not here; a spec only carries what varies per host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyHostSpec {
    /// Public domain name the proxy answers for.
    pub domain: String,
    /// Backend service host requests are forwarded to.
    pub forward_host: String,
    /// Backend service port.
    pub forward_port: u16,
}

impl ProxyHostSpec {
    /// Creates a proxy host spec, rejecting empty or unusable fields.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidDomain`] if the domain is empty or contains
    ///   whitespace.
    /// - [`DomainError::InvalidForwardHost`] if the forward host is empty.
    /// - [`DomainError::InvalidForwardPort`] if the port is zero.
    pub fn new(
        domain: impl Into<String>,
        forward_host: impl Into<String>,
        forward_port: u16,
    ) -> DomainResult<Self> {
        let domain = domain.into();
        let forward_host = forward_host.into();

        if domain.is_empty() || domain.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidDomain(domain));
        }
        if forward_host.trim().is_empty() {
            return Err(DomainError::InvalidForwardHost(forward_host));
        }
        if forward_port == 0 {
            return Err(DomainError::InvalidForwardPort(forward_port));
        }

        Ok(Self {
            domain,
            forward_host,
            forward_port,
        })
    }

    /// The forward target in `host:port` form, for log output.
    #[must_use]
    pub fn forward_target(&self) -> String {
        format!("{}:{}", self.forward_host, self.forward_port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_accepts_valid_spec() {
        let spec = ProxyHostSpec::new("api.lb-cinema.site", "movieapp_backend", 3000).unwrap();
        assert_eq!(spec.domain, "api.lb-cinema.site");
        assert_eq!(spec.forward_target(), "movieapp_backend:3000");
    }

    #[test]
    fn test_new_rejects_empty_domain() {
        let result = ProxyHostSpec::new("", "backend", 80);
        assert!(matches!(result, Err(DomainError::InvalidDomain(_))));
    }

    #[test]
    fn test_new_rejects_domain_with_whitespace() {
        let result = ProxyHostSpec::new("lb cinema.site", "backend", 80);
        assert!(matches!(result, Err(DomainError::InvalidDomain(_))));
    }

    #[test]
    fn test_new_rejects_empty_forward_host() {
        let result = ProxyHostSpec::new("lb-cinema.site", "", 80);
        assert!(matches!(result, Err(DomainError::InvalidForwardHost(_))));
    }

    #[test]
    fn test_new_rejects_port_zero() {
        let result = ProxyHostSpec::new("lb-cinema.site", "backend", 0);
        assert!(matches!(result, Err(DomainError::InvalidForwardPort(0))));
    }
}
