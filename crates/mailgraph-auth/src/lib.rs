//! # mailgraph-auth
//!
//! Microsoft Entra ID (Azure AD) authentication for Microsoft Graph.
//!
//! ## Features
//!
//! - **Client credentials flow**: App-only (daemon) authentication with a client secret
//! - **Token management**: In-memory caching, expiration checking with a refresh buffer
//! - **Tenant authorities**: Token endpoints for any Entra tenant, sovereign clouds included
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailgraph_auth::{Authority, ConfidentialClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let authority = Authority::new("your-tenant-id")?;
//!     let client = ConfidentialClient::new("client_id", "client_secret", authority);
//!
//!     // First call hits the token endpoint, later calls reuse the cached token
//!     let token = client.access_token().await?;
//!     println!("Bearer {}", token.access_token);
//!     Ok(())
//! }
//! ```
//!
//! ## Scopes
//!
//! The client credentials grant works with `.default` scopes, which resolve to
//! the application permissions consented for the app registration:
//!
//! - `https://graph.microsoft.com/.default` - Microsoft Graph (the crate default)
//!
//! Pass explicit scopes to [`ConfidentialClient::request_token`] or override
//! them with [`Authority::with_default_scopes`] for other resources.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod authority;
pub mod client;
mod error;
pub mod token;

pub use authority::{Authority, GRAPH_DEFAULT_SCOPE};
pub use client::ConfidentialClient;
pub use error::{Error, Result};
pub use token::Token;
