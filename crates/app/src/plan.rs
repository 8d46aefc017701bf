//! The hardcoded setup plan.
//!
//! There are no CLI flags or config files: the target instance, the
//! replacement admin credentials, and the host list are constants, edited
//! here before a run.

use proxyboot_application::SetupPlan;
use proxyboot_domain::{Credentials, DomainResult, ProxyHostSpec};

/// Base URL of the proxy manager API.
pub const NPM_API_URL: &str = "http://nginx-proxy-manager:81/api";

/// Email the admin account is rotated to.
const NEW_ADMIN_EMAIL: &str = "admin@gmail.com";

/// Password the admin account is rotated to.
const NEW_ADMIN_PASSWORD: &str = "adminbioskop";

/// Domain-to-backend mappings to register, in order.
const PROXY_HOSTS: [(&str, &str, u16); 3] = [
    ("lb-cinema.site", "movieapp_frontend", 80),
    ("api.lb-cinema.site", "movieapp_backend", 3000),
    ("wp.lb-cinema.site", "movieapp_wordpress", 80),
];

/// Assembles the setup plan from the constants above.
///
/// The initial login always uses the well-known default admin pair; if the
/// instance was already rotated, that login fails with exit status 1.
///
/// # Errors
///
/// Returns a validation error if any constant is malformed.
pub fn setup_plan() -> DomainResult<SetupPlan> {
    let hosts = PROXY_HOSTS
        .iter()
        .map(|&(domain, forward_host, forward_port)| {
            ProxyHostSpec::new(domain, forward_host, forward_port)
        })
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(SetupPlan {
        admin_credentials: Credentials::well_known_default(),
        replacement_credentials: Credentials::new(NEW_ADMIN_EMAIL, NEW_ADMIN_PASSWORD)?,
        hosts,
    })
}
