//! Admin credential types

use crate::error::{DomainError, DomainResult};

/// Identity of the admin account every fresh proxy manager install ships with.
pub const DEFAULT_ADMIN_IDENTITY: &str = "admin@example.com";

/// Secret of the admin account every fresh proxy manager install ships with.
pub const DEFAULT_ADMIN_SECRET: &str = "changeme";

/// An identity/secret pair used to authenticate against the proxy manager API.
///
/// Two instances exist during a setup run: the default pair the installation
/// ships with and the replacement pair it is rotated to. Neither is persisted;
/// both live only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login identity (the admin account email).
    pub identity: String,
    /// Login secret (the admin account password).
    pub secret: String,
}

impl Credentials {
    /// Creates a credential pair, rejecting blank fields.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCredentials`] if either field is empty
    /// or whitespace-only.
    pub fn new(identity: impl Into<String>, secret: impl Into<String>) -> DomainResult<Self> {
        let identity = identity.into();
        let secret = secret.into();

        if identity.trim().is_empty() {
            return Err(DomainError::InvalidCredentials(
                "identity must not be empty".to_string(),
            ));
        }
        if secret.trim().is_empty() {
            return Err(DomainError::InvalidCredentials(
                "secret must not be empty".to_string(),
            ));
        }

        Ok(Self { identity, secret })
    }

    /// The default admin pair a fresh install ships with.
    #[must_use]
    pub fn well_known_default() -> Self {
        Self {
            identity: DEFAULT_ADMIN_IDENTITY.to_string(),
            secret: DEFAULT_ADMIN_SECRET.to_string(),
        }
    }

    /// Returns true if this pair exactly equals the well-known default pair.
    ///
    /// Credential rotation is gated on this check: only the factory defaults
    /// are ever rotated.
    #[must_use]
    pub fn is_well_known_default(&self) -> bool {
        self.identity == DEFAULT_ADMIN_IDENTITY && self.secret == DEFAULT_ADMIN_SECRET
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_accepts_non_empty_pair() {
        let creds = Credentials::new("admin@gmail.com", "s3cret").unwrap();
        assert_eq!(creds.identity, "admin@gmail.com");
        assert_eq!(creds.secret, "s3cret");
    }

    #[test]
    fn test_new_rejects_empty_identity() {
        let result = Credentials::new("  ", "s3cret");
        assert!(matches!(result, Err(DomainError::InvalidCredentials(_))));
    }

    #[test]
    fn test_new_rejects_empty_secret() {
        let result = Credentials::new("admin@gmail.com", "");
        assert!(matches!(result, Err(DomainError::InvalidCredentials(_))));
    }

    #[test]
    fn test_new_rejects_whitespace_only_secret() {
        let result = Credentials::new("admin@gmail.com", "   ");
        assert!(matches!(result, Err(DomainError::InvalidCredentials(_))));
    }

    #[test]
    fn test_well_known_default_is_detected() {
        assert!(Credentials::well_known_default().is_well_known_default());
    }

    #[test]
    fn test_partial_match_is_not_default() {
        let same_identity = Credentials::new(DEFAULT_ADMIN_IDENTITY, "rotated").unwrap();
        let same_secret = Credentials::new("other@example.com", DEFAULT_ADMIN_SECRET).unwrap();

        assert!(!same_identity.is_well_known_default());
        assert!(!same_secret.is_well_known_default());
    }
}
