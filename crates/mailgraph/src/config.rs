//! Credential bundle loaded from the environment or an env file.

use crate::error::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

/// Environment variable holding the Entra tenant id.
pub const TENANT_ID_VAR: &str = "TENANT_ID";
/// Environment variable holding the application (client) id.
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
/// Environment variable holding the client secret value.
pub const SECRET_VALUE_VAR: &str = "SECRET_VALUE";
/// Environment variable holding the sender mailbox address.
pub const FROM_EMAIL_VAR: &str = "FROM_EMAIL";

/// Credentials and sender identity for a [`GraphClient`](crate::GraphClient).
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Entra tenant id (GUID or verified domain name).
    pub tenant_id: String,
    /// Application (client) id of the app registration.
    pub client_id: String,
    /// Client secret value.
    pub client_secret: String,
    /// Mailbox that mail is sent from.
    pub sender: String,
}

impl GraphConfig {
    /// Creates a config from explicit values.
    #[must_use]
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            sender: sender.into(),
        }
    }

    /// Loads the config from process environment variables.
    ///
    /// Reads [`TENANT_ID_VAR`], [`CLIENT_ID_VAR`], [`SECRET_VALUE_VAR`], and
    /// [`FROM_EMAIL_VAR`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVar`] naming the first variable that is unset
    /// or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            tenant_id: required_var(TENANT_ID_VAR)?,
            client_id: required_var(CLIENT_ID_VAR)?,
            client_secret: required_var(SECRET_VALUE_VAR)?,
            sender: required_var(FROM_EMAIL_VAR)?,
        })
    }

    /// Loads a dotenv-style file into the process environment, then reads the
    /// config from it.
    ///
    /// File entries override variables already present in the environment, so
    /// the file is the single source of truth for the credentials it names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EnvFile`] if the file cannot be read or parsed, and
    /// [`Error::MissingVar`] if a required variable is absent afterwards.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dotenvy::from_path_override(path)?;
        debug!(path = %path.display(), "loaded environment file");
        Self::from_env()
    }
}

/// Reads an environment variable, treating empty values as missing.
fn required_var(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingVar(name)),
    }
}
