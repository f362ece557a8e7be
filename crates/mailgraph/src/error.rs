//! Error types for Graph mail and directory operations.

use thiserror::Error;

/// Errors that can occur during Graph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Token acquisition failed.
    #[error("Authentication error: {0}")]
    Auth(#[from] mailgraph_auth::Error),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] mailgraph_template::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment file could not be loaded.
    #[error("Environment file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    /// Microsoft Graph rejected the request.
    #[error("Graph error {status} ({code}): {message}")]
    Graph {
        /// HTTP status code of the response.
        status: u16,
        /// Graph error code, e.g. `ErrorAccessDenied`.
        code: String,
        /// Human-readable message from the service.
        message: String,
        /// Request id for support correlation, when present.
        request_id: Option<String>,
    },

    /// A required environment variable is missing or empty.
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An email address failed validation.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// The message has no recipients.
    #[error("Message has no recipients")]
    NoRecipients,

    /// No directory user matched the query.
    #[error("No user found for '{0}'")]
    UserNotFound(String),

    /// More than one directory user matched a query that expects exactly one.
    #[error("Expected exactly one user for '{query}', found {candidates:?}")]
    AmbiguousUser {
        /// The employee id or name that was searched.
        query: String,
        /// Display labels of the matching users.
        candidates: Vec<String>,
    },

    /// The directory user exists but has no mail address.
    #[error("User '{0}' has no mail address")]
    MissingEmail(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
