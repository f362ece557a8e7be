//! Entra ID tenant authorities.

use crate::error::{Error, Result};
use url::Url;

/// Host for the worldwide Entra ID service.
pub const DEFAULT_HOST: &str = "https://login.microsoftonline.com";

/// Default scope for app-only Microsoft Graph access.
///
/// The `.default` scope resolves to the application permissions granted
/// to the app registration in the Entra portal.
pub const GRAPH_DEFAULT_SCOPE: &str = "https://graph.microsoft.com/.default";

/// Entra ID authority for a single tenant.
#[derive(Debug, Clone)]
pub struct Authority {
    /// Tenant identifier (GUID or verified domain name).
    pub tenant: String,
    /// Token endpoint URL (`{host}/{tenant}/oauth2/v2.0/token`).
    pub token_url: Url,
    /// Default scopes requested when the caller passes none.
    pub default_scopes: Vec<String>,
}

impl Authority {
    /// Creates an authority for a tenant on the worldwide Entra ID host.
    ///
    /// # Errors
    ///
    /// Returns an error if the tenant is empty or the token URL is invalid.
    pub fn new(tenant: impl Into<String>) -> Result<Self> {
        Self::with_host(DEFAULT_HOST, tenant)
    }

    /// Creates an authority on a custom host.
    ///
    /// Sovereign clouds use their own hosts, e.g.
    /// `https://login.microsoftonline.us` for US Government.
    ///
    /// # Errors
    ///
    /// Returns an error if the tenant is empty or the token URL is invalid.
    pub fn with_host(host: impl AsRef<str>, tenant: impl Into<String>) -> Result<Self> {
        let tenant = tenant.into();
        if tenant.trim().is_empty() {
            return Err(Error::InvalidConfig("tenant is empty".into()));
        }

        let token_url = Url::parse(&format!(
            "{}/{tenant}/oauth2/v2.0/token",
            host.as_ref().trim_end_matches('/')
        ))?;

        Ok(Self {
            tenant,
            token_url,
            default_scopes: vec![GRAPH_DEFAULT_SCOPE.to_string()],
        })
    }

    /// Sets the default scopes.
    #[must_use]
    pub fn with_default_scopes(mut self, scopes: Vec<String>) -> Self {
        self.default_scopes = scopes;
        self
    }

    /// Validates that the authority is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.tenant.trim().is_empty() {
            return Err(Error::InvalidConfig("tenant is empty".into()));
        }
        if self.token_url.as_str().is_empty() {
            return Err(Error::InvalidConfig("token_url is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_token_url() {
        let authority = Authority::new("contoso.onmicrosoft.com").unwrap();
        assert_eq!(
            authority.token_url.as_str(),
            "https://login.microsoftonline.com/contoso.onmicrosoft.com/oauth2/v2.0/token"
        );
        authority.validate().unwrap();
    }

    #[test]
    fn test_authority_default_scope() {
        let authority = Authority::new("11111111-2222-3333-4444-555555555555").unwrap();
        assert_eq!(authority.default_scopes.len(), 1);
        assert_eq!(authority.default_scopes[0], GRAPH_DEFAULT_SCOPE);
    }

    #[test]
    fn test_authority_custom_host() {
        let authority =
            Authority::with_host("https://login.microsoftonline.us/", "contoso.mil").unwrap();
        assert_eq!(
            authority.token_url.as_str(),
            "https://login.microsoftonline.us/contoso.mil/oauth2/v2.0/token"
        );
    }

    #[test]
    fn test_authority_empty_tenant() {
        assert!(Authority::new("").is_err());
        assert!(Authority::new("   ").is_err());
    }

    #[test]
    fn test_authority_custom_scopes() {
        let authority = Authority::new("contoso.onmicrosoft.com")
            .unwrap()
            .with_default_scopes(vec!["https://vault.azure.net/.default".to_string()]);
        assert_eq!(authority.default_scopes.len(), 1);
        assert!(authority.default_scopes[0].contains("vault"));
    }
}
