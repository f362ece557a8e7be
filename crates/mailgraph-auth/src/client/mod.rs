//! Confidential client application for the client credentials grant.

use crate::authority::Authority;
use crate::error::Result;
use crate::token::{ErrorResponse, Token, TokenResponse};
use reqwest::Client;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// Confidential client application holding a client secret.
///
/// App-only authentication for daemons and unattended jobs. Acquired tokens
/// are cached in memory and replaced once they reach the expiry buffer, so
/// callers can request a token per operation without hitting the authority
/// every time.
#[derive(Debug)]
pub struct ConfidentialClient {
    /// Application (client) ID from the app registration.
    pub client_id: String,
    /// Client secret value.
    client_secret: String,
    /// Tenant authority.
    pub authority: Authority,
    /// HTTP client.
    http_client: Client,
    /// Cached token, shared across calls.
    cache: Mutex<Option<Token>>,
}

impl ConfidentialClient {
    /// Creates a new confidential client.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        authority: Authority,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            authority,
            http_client: Client::new(),
            cache: Mutex::new(None),
        }
    }

    /// Requests a fresh token from the authority's token endpoint.
    ///
    /// Bypasses the cache; most callers want [`ConfidentialClient::access_token`].
    ///
    /// # Arguments
    ///
    /// * `scopes` - Optional scopes to request (uses authority defaults if None)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the authority rejects the
    /// credentials.
    pub async fn request_token(&self, scopes: Option<&[String]>) -> Result<Token> {
        let scope_str = scopes.map_or_else(
            || self.authority.default_scopes.join(" "),
            |s| s.join(" "),
        );

        let mut params = HashMap::new();
        params.insert("grant_type", "client_credentials");
        params.insert("client_id", self.client_id.as_str());
        params.insert("client_secret", self.client_secret.as_str());
        if !scope_str.is_empty() {
            params.insert("scope", &scope_str);
        }

        let response = self
            .http_client
            .post(self.authority.token_url.clone())
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let error: ErrorResponse = response.json().await?;
            return Err(error.into_error());
        }

        let token_response: TokenResponse = response.json().await?;
        let token = Token::from_response(token_response)?;
        debug!(tenant = %self.authority.tenant, "acquired client credentials token");
        Ok(token)
    }

    /// Returns a valid token, reusing the cached one when possible.
    ///
    /// The cache lock is held across the acquisition so concurrent callers
    /// trigger a single token request.
    ///
    /// # Errors
    ///
    /// Returns an error if no cached token is usable and acquisition fails.
    pub async fn access_token(&self) -> Result<Token> {
        let mut cache = self.cache.lock().await;

        if let Some(token) = cache.as_ref() {
            if token.is_valid() {
                debug!("reusing cached token");
                return Ok(token.clone());
            }
            debug!("cached token expired");
        }

        let token = self.request_token(None).await?;
        *cache = Some(token.clone());
        Ok(token)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;

    #[test]
    fn test_confidential_client_creation() {
        let authority = Authority::new("contoso.onmicrosoft.com").unwrap();
        let client = ConfidentialClient::new("client_id", "secret_value", authority);
        assert_eq!(client.client_id, "client_id");
        assert_eq!(client.authority.tenant, "contoso.onmicrosoft.com");
    }

    #[tokio::test]
    async fn test_cache_starts_empty() {
        let authority = Authority::new("contoso.onmicrosoft.com").unwrap();
        let client = ConfidentialClient::new("client_id", "secret_value", authority);
        assert!(client.cache.lock().await.is_none());
    }

    #[tokio::test]
    async fn test_cached_token_is_reused() {
        let authority = Authority::new("contoso.onmicrosoft.com").unwrap();
        let client = ConfidentialClient::new("client_id", "secret_value", authority);

        let token = Token::new("seeded", "Bearer")
            .with_expires_at(chrono::Utc::now() + chrono::Duration::hours(1));
        *client.cache.lock().await = Some(token);

        // No network call: the seeded token is still valid
        let reused = client.access_token().await.unwrap();
        assert_eq!(reused.access_token, "seeded");
    }
}
