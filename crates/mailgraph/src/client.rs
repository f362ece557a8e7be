//! Authenticated REST client for Microsoft Graph.

use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::mail::Address;
use mailgraph_auth::{Authority, ConfidentialClient};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Base URL for the Microsoft Graph v1.0 endpoint.
pub const GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// Microsoft Graph client for mail and directory operations.
///
/// Wraps a [`ConfidentialClient`] that acquires and caches app-only tokens,
/// and attaches them as bearer credentials to every request.
#[derive(Debug)]
pub struct GraphClient {
    /// HTTP client used for API requests.
    http_client: Client,
    /// Graph API base URL.
    base_url: String,
    /// Token source for the app registration.
    auth: ConfidentialClient,
    /// Default sender mailbox.
    sender: Address,
}

impl GraphClient {
    /// Creates a client from a credential bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the tenant id is empty or the sender address is
    /// not a valid email address.
    pub fn new(config: GraphConfig) -> Result<Self> {
        let authority = Authority::new(&config.tenant_id)?;
        let auth = ConfidentialClient::new(&config.client_id, &config.client_secret, authority);
        let sender = Address::new(&config.sender)?;
        Ok(Self {
            http_client: Client::new(),
            base_url: GRAPH_BASE_URL.to_string(),
            auth,
            sender,
        })
    }

    /// Overrides the Graph base URL.
    ///
    /// Useful for sovereign clouds, e.g. `https://graph.microsoft.us/v1.0`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the configured sender mailbox.
    #[must_use]
    pub fn sender(&self) -> &Address {
        &self.sender
    }

    /// Builds a full URL for an API path.
    fn url(&self, path: &str) -> String {
        if path.starts_with("https://") || path.starts_with("http://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Issues an authenticated GET request and decodes the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let token = self.auth.access_token().await?;
        let url = self.url(path);
        debug!(%url, "graph GET");

        let mut request = self
            .http_client
            .get(&url)
            .bearer_auth(&token.access_token);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = Self::check_status(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// Issues an authenticated POST request with a JSON body.
    ///
    /// Returns the response status; actions like `sendMail` reply with
    /// `202 Accepted` and an empty body.
    pub(crate) async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<StatusCode> {
        let token = self.auth.access_token().await?;
        let url = self.url(path);
        debug!(%url, "graph POST");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&token.access_token)
            .json(body)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.status())
    }

    /// Converts a non-success response into a typed Graph error.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(graph_error(status, &body))
    }
}

/// Graph error envelope, `{"error": {"code", "message", "innerError"}}`.
#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    error: GraphErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GraphErrorDetail {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
    #[serde(rename = "innerError")]
    inner_error: Option<GraphInnerError>,
}

#[derive(Debug, Deserialize)]
struct GraphInnerError {
    #[serde(rename = "request-id")]
    request_id: Option<String>,
}

/// Builds a typed error from a failed Graph response.
///
/// Falls back to the raw body when the envelope cannot be parsed, since
/// gateways occasionally answer with plain text.
fn graph_error(status: StatusCode, body: &str) -> Error {
    match serde_json::from_str::<GraphErrorBody>(body) {
        Ok(parsed) => Error::Graph {
            status: status.as_u16(),
            code: parsed.error.code,
            message: parsed.error.message,
            request_id: parsed.error.inner_error.and_then(|inner| inner.request_id),
        },
        Err(_) => Error::Graph {
            status: status.as_u16(),
            code: "UnknownError".to_string(),
            message: if body.is_empty() {
                status.to_string()
            } else {
                body.to_string()
            },
            request_id: None,
        },
    }
}
