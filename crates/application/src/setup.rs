//! First-run setup flow.
//!
//! Drives the proxy manager through its initial configuration in one
//! strictly sequential pass: authenticate, rotate the factory admin
//! credentials if they are still in use, then register every proxy host
//! in listed order. The first failed call aborts the remainder.

use proxyboot_domain::{Credentials, ProxyHostSpec};

use crate::error::{SetupError, SetupResult};
use crate::ports::{ApiError, NpmApi, SessionToken};

/// Everything a setup run needs, assembled by the binary before the flow
/// starts and read-only from then on.
#[derive(Debug, Clone)]
pub struct SetupPlan {
    /// Credentials used for the initial login.
    pub admin_credentials: Credentials,
    /// Credentials the admin account is rotated to when the initial pair
    /// is the well-known default.
    pub replacement_credentials: Credentials,
    /// Proxy hosts to register, in order.
    pub hosts: Vec<ProxyHostSpec>,
}

/// Outcome of a completed setup run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupReport {
    /// Whether the default admin credentials were rotated.
    pub credentials_rotated: bool,
    /// Number of proxy hosts registered.
    pub hosts_created: usize,
}

/// Use case for running the full first-run setup sequence.
pub struct SetupFlow<A: NpmApi> {
    api: A,
}

impl<A: NpmApi> SetupFlow<A> {
    /// Creates a new `SetupFlow` over the given API adapter.
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Runs the setup sequence to completion.
    ///
    /// Call order with default credentials and all calls succeeding:
    /// one token call, one admin update, one re-auth token call, then one
    /// host creation per plan entry. With non-default credentials the
    /// rotation step is skipped entirely.
    ///
    /// # Errors
    ///
    /// - [`SetupError::AuthenticationFailed`] if either token call is
    ///   rejected with HTTP 401.
    /// - [`SetupError::Api`] for any other failed call. Remaining hosts
    ///   are not attempted after a failure.
    pub async fn execute(&self, plan: &SetupPlan) -> SetupResult<SetupReport> {
        let mut token = self.login(&plan.admin_credentials).await?;

        let credentials_rotated = plan.admin_credentials.is_well_known_default();
        if credentials_rotated {
            tracing::info!("default admin credentials detected, rotating");
            self.api
                .update_admin_user(&token, &plan.replacement_credentials)
                .await?;
            // The old pair is invalid from here on.
            token = self.login(&plan.replacement_credentials).await?;
        }

        let mut hosts_created = 0;
        for host in &plan.hosts {
            self.api.create_proxy_host(&token, host).await?;
            tracing::info!(
                domain = %host.domain,
                target = %host.forward_target(),
                "proxy host registered"
            );
            hosts_created += 1;
        }

        Ok(SetupReport {
            credentials_rotated,
            hosts_created,
        })
    }

    /// Exchanges credentials for a token, mapping 401 to the
    /// authentication failure the binary handles with exit status 1.
    async fn login(&self, credentials: &Credentials) -> SetupResult<SessionToken> {
        match self.api.authenticate(credentials).await {
            Ok(token) => Ok(token),
            Err(ApiError::Unauthorized) => Err(SetupError::AuthenticationFailed),
            Err(other) => Err(SetupError::Api(other)),
        }
    }
}
